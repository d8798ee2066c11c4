//! Axum web server with WebSocket streaming of playback frames.
//!
//! Each WebSocket connection drives its own session, so two open tabs never
//! steer each other's playback. The REST routes act on one shared session
//! kept for scripting and health checks.

use std::net::SocketAddr;
use std::sync::Arc;

use algoscope_core::{listing, AlgorithmInfo, AlgorithmKind, CodeListing, Language};
use algoscope_structures::StructureOp;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        FromRef, Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;
use tower_http::{cors::CorsLayer, services::ServeDir};
use tracing::{debug, error, info, warn};

use crate::config::VisConfig;
use crate::controller::Controller;
use crate::error::{Error, Result};
use crate::playback::PlaybackStatus;
use crate::session::{Command, Frame, Session};

/// Router state: the shared REST session plus the config new sockets start from.
#[derive(Clone)]
struct AppState {
    shared: Controller,
    config: Arc<VisConfig>,
}

impl AppState {
    /// A fresh controller for one WebSocket connection.
    fn open_session(&self) -> Result<Controller> {
        Ok(Controller::new(Session::new(&self.config)?))
    }
}

impl FromRef<AppState> for Controller {
    fn from_ref(state: &AppState) -> Self {
        state.shared.clone()
    }
}

/// Visualization server.
pub struct VisServer {
    state: AppState,
}

impl VisServer {
    /// Create a server whose sessions all start from `config`.
    pub fn new(config: &VisConfig) -> Result<Self> {
        let shared = Controller::new(Session::new(config)?);
        Ok(Self {
            state: AppState {
                shared,
                config: Arc::new(config.clone()),
            },
        })
    }

    /// Build the router for the server.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index_handler))
            .nest_service("/static", ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")))
            // Read-only API
            .route("/api/status", get(status_handler))
            .route("/api/frame", get(frame_handler))
            .route("/api/catalog", get(catalog_handler))
            .route("/api/listing/{algorithm}", get(listing_handler))
            // Commands
            .route("/api/command", post(command_handler))
            .route("/api/algorithm", post(select_handler))
            .route("/api/input/size", post(input_size_handler))
            .route("/api/input/shuffle", post(shuffle_handler))
            .route("/api/playback/play", post(play_handler))
            .route("/api/playback/pause", post(pause_handler))
            .route("/api/playback/step", post(step_handler))
            .route("/api/playback/step_back", post(step_back_handler))
            .route("/api/playback/reset", post(reset_handler))
            .route("/api/playback/speed", post(speed_handler))
            .route("/api/graph", post(graph_handler))
            .route("/api/graph/start", post(start_node_handler))
            .route("/api/sudoku", post(sudoku_handler))
            .route("/api/hanoi/disks", post(disks_handler))
            .route("/api/queens/size", post(board_size_handler))
            .route("/api/structure", post(structure_handler))
            // WebSocket for real-time updates
            .route("/ws", get(ws_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Run the server on the given address.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("Visualization server running on http://{}", addr);
        axum::serve(listener, self.router()).await?;
        Ok(())
    }
}

/// JSON error body for rejected requests.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(e: Error) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            Error::Input(algoscope_core::Error::UnknownAlgorithm(_)) => StatusCode::NOT_FOUND,
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        warn!(%status, error = %self.0, "Request rejected");
        (status, Json(ErrorBody { error: self.0.to_string() })).into_response()
    }
}

type ApiResult<T> = std::result::Result<Json<T>, ApiError>;

async fn dispatch(controller: &Controller, command: Command) -> ApiResult<Frame> {
    Ok(Json(controller.dispatch(command).await?))
}

async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../static/index.html"))
}

/// Server status response.
#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    algorithm: AlgorithmKind,
    playback: PlaybackStatus,
}

async fn status_handler(State(controller): State<Controller>) -> Json<StatusResponse> {
    let frame = controller.frame().await;
    Json(StatusResponse {
        status: "ok",
        algorithm: frame.algorithm,
        playback: frame.status,
    })
}

async fn frame_handler(State(controller): State<Controller>) -> Json<Frame> {
    Json(controller.frame().await)
}

async fn catalog_handler() -> Json<Vec<AlgorithmInfo>> {
    Json(AlgorithmKind::catalog())
}

#[derive(Deserialize)]
struct ListingQuery {
    language: Option<Language>,
}

async fn listing_handler(Path(algorithm): Path<String>, Query(query): Query<ListingQuery>) -> ApiResult<CodeListing> {
    let kind: AlgorithmKind = algorithm.parse().map_err(Error::from)?;
    Ok(Json(listing(kind, query.language.unwrap_or(Language::JavaScript))))
}

async fn command_handler(State(controller): State<Controller>, Json(command): Json<Command>) -> ApiResult<Frame> {
    dispatch(&controller, command).await
}

#[derive(Deserialize)]
struct SelectRequest {
    algorithm: AlgorithmKind,
}

async fn select_handler(State(controller): State<Controller>, Json(req): Json<SelectRequest>) -> ApiResult<Frame> {
    dispatch(&controller, Command::SelectAlgorithm { algorithm: req.algorithm }).await
}

#[derive(Deserialize)]
struct SizeRequest {
    size: usize,
}

async fn input_size_handler(State(controller): State<Controller>, Json(req): Json<SizeRequest>) -> ApiResult<Frame> {
    dispatch(&controller, Command::SetInputSize { size: req.size }).await
}

async fn shuffle_handler(State(controller): State<Controller>) -> ApiResult<Frame> {
    dispatch(&controller, Command::Shuffle).await
}

async fn play_handler(State(controller): State<Controller>) -> ApiResult<Frame> {
    dispatch(&controller, Command::Play).await
}

async fn pause_handler(State(controller): State<Controller>) -> ApiResult<Frame> {
    dispatch(&controller, Command::Pause).await
}

async fn step_handler(State(controller): State<Controller>) -> ApiResult<Frame> {
    dispatch(&controller, Command::Step).await
}

async fn step_back_handler(State(controller): State<Controller>) -> ApiResult<Frame> {
    dispatch(&controller, Command::StepBack).await
}

async fn reset_handler(State(controller): State<Controller>) -> ApiResult<Frame> {
    dispatch(&controller, Command::Reset).await
}

#[derive(Deserialize)]
struct SpeedRequest {
    speed_ms: u64,
}

async fn speed_handler(State(controller): State<Controller>, Json(req): Json<SpeedRequest>) -> ApiResult<Frame> {
    dispatch(&controller, Command::SetSpeed { speed_ms: req.speed_ms }).await
}

#[derive(Deserialize)]
struct GraphRequest {
    text: String,
    #[serde(default)]
    directed: bool,
}

async fn graph_handler(State(controller): State<Controller>, Json(req): Json<GraphRequest>) -> ApiResult<Frame> {
    dispatch(
        &controller,
        Command::SetGraph {
            text: req.text,
            directed: req.directed,
        },
    )
    .await
}

#[derive(Deserialize)]
struct StartNodeRequest {
    node: String,
}

async fn start_node_handler(
    State(controller): State<Controller>,
    Json(req): Json<StartNodeRequest>,
) -> ApiResult<Frame> {
    dispatch(&controller, Command::SetStartNode { node: req.node }).await
}

#[derive(Deserialize)]
struct SudokuRequest {
    text: String,
}

async fn sudoku_handler(State(controller): State<Controller>, Json(req): Json<SudokuRequest>) -> ApiResult<Frame> {
    dispatch(&controller, Command::SetSudoku { text: req.text }).await
}

#[derive(Deserialize)]
struct DisksRequest {
    disks: u32,
}

async fn disks_handler(State(controller): State<Controller>, Json(req): Json<DisksRequest>) -> ApiResult<Frame> {
    dispatch(&controller, Command::SetDisks { disks: req.disks }).await
}

async fn board_size_handler(State(controller): State<Controller>, Json(req): Json<SizeRequest>) -> ApiResult<Frame> {
    dispatch(&controller, Command::SetBoardSize { size: req.size }).await
}

async fn structure_handler(State(controller): State<Controller>, Json(op): Json<StructureOp>) -> ApiResult<Frame> {
    dispatch(&controller, Command::Structure { op }).await
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> std::result::Result<Response, ApiError> {
    let controller = state.open_session()?;
    Ok(ws.on_upgrade(move |socket| handle_ws(socket, controller)))
}

/// Queries a socket may send besides commands.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsQuery {
    GetFrame,
    GetStatus,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WsResponse {
    Frame(Frame),
    Status(PlaybackStatus),
    Error { message: String },
}

async fn handle_ws(mut socket: WebSocket, controller: Controller) {
    info!("WebSocket client connected");
    let mut frames = controller.subscribe();

    let initial = WsResponse::Frame(controller.frame().await);
    if let Err(e) = send_event(&mut socket, &initial).await {
        warn!("Failed to send initial frame: {}", e);
        return;
    }

    loop {
        tokio::select! {
            msg = socket.recv() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        debug!("Received from client: {}", text.as_str());
                        if let Some(response) = handle_ws_message(&controller, &text).await {
                            if let Err(e) = send_event(&mut socket, &response).await {
                                warn!("Failed to send response: {}", e);
                                break;
                            }
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        info!("WebSocket client disconnected");
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        if let Err(e) = socket.send(Message::Pong(data)).await {
                            warn!("Failed to send pong: {}", e);
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        error!("WebSocket error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }
            frame = frames.recv() => {
                let frame = match frame {
                    Ok(frame) => frame,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "WebSocket client lagging, resending current frame");
                        controller.frame().await
                    }
                    Err(RecvError::Closed) => break,
                };
                if let Err(e) = send_event(&mut socket, &WsResponse::Frame(frame)).await {
                    warn!("Failed to send frame: {}", e);
                    break;
                }
            }
        }
    }

    // stop this connection's ticker
    if let Err(e) = controller.dispatch(Command::Pause).await {
        warn!("Failed to stop playback on disconnect: {}", e);
    }
}

/// Answer a query directly. Commands are dispatched and their frame reaches
/// this socket through the broadcast, so only failures are answered here.
async fn handle_ws_message(controller: &Controller, text: &str) -> Option<WsResponse> {
    if let Ok(query) = serde_json::from_str::<WsQuery>(text) {
        return Some(match query {
            WsQuery::GetFrame => WsResponse::Frame(controller.frame().await),
            WsQuery::GetStatus => WsResponse::Status(controller.status().await),
        });
    }
    let result = match serde_json::from_str::<Command>(text) {
        Ok(command) => controller.dispatch(command).await.map(|_| ()),
        Err(e) => Err(Error::from(e)),
    };
    result.err().map(|e| WsResponse::Error { message: e.to_string() })
}

async fn send_event(socket: &mut WebSocket, event: &WsResponse) -> std::result::Result<(), axum::Error> {
    let json = serde_json::to_string(event).map_err(axum::Error::new)?;
    socket.send(Message::Text(json.into())).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(Session::new(&VisConfig::default()).unwrap())
    }

    #[test]
    fn server_creation() {
        let _server = VisServer::new(&VisConfig::default()).unwrap();
    }

    #[test]
    fn router_builds() {
        let server = VisServer::new(&VisConfig::default()).unwrap();
        let _router = server.router();
    }

    #[tokio::test]
    async fn each_socket_gets_its_own_session() {
        let server = VisServer::new(&VisConfig::default()).unwrap();
        let first = server.state.open_session().unwrap();
        let second = server.state.open_session().unwrap();

        assert!(handle_ws_message(&first, r#"{"type":"step"}"#).await.is_none());
        assert!(handle_ws_message(&first, r#"{"type":"step"}"#).await.is_none());
        assert_eq!(first.status().await.cursor, 2);
        assert_eq!(second.status().await.cursor, 0);
        assert_eq!(Controller::from_ref(&server.state).status().await.cursor, 0);

        // both start from the same configured input
        first.dispatch(Command::Reset).await.unwrap();
        assert_eq!(first.frame().await, second.frame().await);
    }

    #[tokio::test]
    async fn ws_queries_are_answered() {
        let c = controller();
        let response = handle_ws_message(&c, r#"{"type":"get_status"}"#).await;
        assert!(matches!(response, Some(WsResponse::Status(s)) if s.cursor == 0));
        let response = handle_ws_message(&c, r#"{"type":"get_frame"}"#).await;
        assert!(matches!(response, Some(WsResponse::Frame(_))));
    }

    #[tokio::test]
    async fn ws_commands_answer_only_on_failure() {
        let c = controller();
        assert!(handle_ws_message(&c, r#"{"type":"step"}"#).await.is_none());
        assert_eq!(c.status().await.cursor, 1);

        let response = handle_ws_message(&c, r#"{"type":"set_start_node","node":"zz"}"#).await;
        assert!(matches!(response, Some(WsResponse::Error { .. })));
        let response = handle_ws_message(&c, "not json").await;
        assert!(matches!(response, Some(WsResponse::Error { .. })));
    }

    #[test]
    fn unknown_algorithm_is_not_found() {
        let err = ApiError(Error::from(algoscope_core::Error::UnknownAlgorithm("x".into())));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        let err = ApiError(Error::Config("bad".into()));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn frames_are_tagged_for_the_socket() {
        let frame = tokio_test::block_on(controller().frame());
        let json = serde_json::to_string(&WsResponse::Frame(frame)).unwrap();
        assert!(json.starts_with(r#"{"type":"frame""#));
    }
}
