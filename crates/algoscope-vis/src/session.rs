//! One visualization session: the selected algorithm, its inputs, and the
//! playback over the steps generated from them.
//!
//! Every input change regenerates the whole sequence and replaces the
//! playback, which bumps its generation. Nothing here is async; the
//! controller owns the timing.

use algoscope_core::limits::{clamp_array_size, clamp_disks, clamp_queens, DEFAULT_DISKS, DEFAULT_QUEENS};
use algoscope_core::{AlgorithmKind, Family, NodeId, Step, StepKind};
use algoscope_graph::{bfs, dfs, dijkstra, parse_edge_list, Graph};
use algoscope_puzzles::{hanoi_steps, queens_steps, sudoku_steps, SudokuBoard, SudokuOutcome};
use algoscope_sort::{random_array, SortKind};
use algoscope_structures::{Structure, StructureOp};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::VisConfig;
use crate::error::Result;
use crate::paint::{paint, Paint};
use crate::playback::{Playback, PlaybackStatus};

/// Graph loaded when a session starts.
pub const DEFAULT_GRAPH: &str = "1 2 5\n3 4 2\n3 2 1";

pub const DEFAULT_SUDOKU_SIZE: usize = 9;

/// Commands accepted from the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SelectAlgorithm { algorithm: AlgorithmKind },
    SetInputSize { size: usize },
    SetSpeed { speed_ms: u64 },
    Play,
    Pause,
    Step,
    StepBack,
    Reset,
    Shuffle,
    SetGraph {
        text: String,
        #[serde(default)]
        directed: bool,
    },
    SetStartNode { node: String },
    SetSudoku { text: String },
    SetDisks { disks: u32 },
    SetBoardSize { size: usize },
    /// Apply a data-structure operation to the selected structure.
    Structure { op: StructureOp },
}

/// Everything the UI needs to render the current step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub algorithm: AlgorithmKind,
    pub status: PlaybackStatus,
    pub kind: Option<StepKind>,
    pub description: String,
    pub code_line: Option<usize>,
    /// User-facing message such as "no solution".
    pub notice: Option<String>,
    pub paint: Option<Paint>,
}

/// A board solved away from the session, ready to be picked up by the
/// command that asked for it.
#[derive(Debug, Clone)]
pub struct SolvedSudoku {
    board: SudokuBoard,
    steps: Vec<Step>,
    outcome: SudokuOutcome,
}

impl SolvedSudoku {
    pub fn solve(board: SudokuBoard) -> Self {
        let (steps, outcome) = sudoku_steps(&board);
        Self { board, steps, outcome }
    }

    pub fn outcome(&self) -> SudokuOutcome {
        self.outcome
    }
}

/// Inputs and playback for one visualization.
#[derive(Debug)]
pub struct Session {
    algorithm: AlgorithmKind,
    array_size: usize,
    seed: u64,
    rng: StdRng,
    input: Vec<u32>,
    graph: Graph,
    start: Option<NodeId>,
    sudoku: SudokuBoard,
    disks: u32,
    board_size: usize,
    structure: Option<Structure>,
    playback: Playback,
    notice: Option<String>,
    presolved: Option<SolvedSudoku>,
}

impl Session {
    /// Create a session from config and generate its first sequence.
    pub fn new(config: &VisConfig) -> Result<Self> {
        let graph = parse_edge_list(DEFAULT_GRAPH, false)?;
        let start = graph.nodes().first().map(|n| n.id.clone());
        let array_size = clamp_array_size(config.array_size);

        let mut session = Self {
            algorithm: config.algorithm,
            array_size,
            seed: config.seed,
            rng: StdRng::seed_from_u64(config.seed),
            input: random_array(array_size, config.seed),
            graph,
            start,
            sudoku: SudokuBoard::new(DEFAULT_SUDOKU_SIZE)?,
            disks: DEFAULT_DISKS,
            board_size: DEFAULT_QUEENS,
            structure: Structure::for_algorithm(config.algorithm),
            playback: Playback::new(Vec::new(), config.speed_ms),
            notice: None,
            presolved: None,
        };
        session.regenerate()?;
        Ok(session)
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// Sort input currently in use.
    pub fn input(&self) -> &[u32] {
        &self.input
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn start_node(&self) -> Option<&NodeId> {
        self.start.as_ref()
    }

    pub fn sudoku(&self) -> &SudokuBoard {
        &self.sudoku
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// The board `command` would make the session solve, if any.
    ///
    /// Lets a caller run the search outside whatever lock guards the session
    /// and hand the result back through [`Session::apply_solved`].
    pub fn pending_solve(&self, command: &Command) -> Result<Option<SudokuBoard>> {
        let board = match command {
            Command::SetSudoku { text } => SudokuBoard::parse(text)?,
            Command::SelectAlgorithm { algorithm } => {
                return Ok((*algorithm == AlgorithmKind::Sudoku).then(|| self.sudoku.clone()));
            }
            Command::SetSpeed { .. }
            | Command::Play
            | Command::Pause
            | Command::Step
            | Command::StepBack
            | Command::Structure { .. } => return Ok(None),
            _ => self.sudoku.clone(),
        };
        Ok((self.algorithm == AlgorithmKind::Sudoku).then_some(board))
    }

    /// Apply a command. A rejected command leaves the session untouched.
    pub fn apply(&mut self, command: Command) -> Result<()> {
        self.apply_solved(command, None)
    }

    /// Apply a command, reusing `solved` if it was computed for the board
    /// the command ends up solving.
    pub fn apply_solved(&mut self, command: Command, solved: Option<SolvedSudoku>) -> Result<()> {
        debug!(?command, "Applying command");
        self.presolved = solved;
        let applied = self.apply_command(command);
        self.presolved = None;
        applied
    }

    fn apply_command(&mut self, command: Command) -> Result<()> {
        match command {
            Command::SelectAlgorithm { algorithm } => {
                self.algorithm = algorithm;
                self.structure = match (self.structure.take(), Structure::for_algorithm(algorithm)) {
                    (Some(kept), Some(fresh)) if kept.layout() == fresh.layout() => Some(kept),
                    (_, fresh) => fresh,
                };
                self.regenerate()?;
            }
            Command::SetInputSize { size } => {
                self.array_size = clamp_array_size(size);
                self.input = random_array(self.array_size, self.seed);
                self.regenerate()?;
            }
            Command::SetSpeed { speed_ms } => self.playback.set_speed(speed_ms),
            Command::Play => {
                if !self.playback.play() {
                    debug!("Nothing left to play");
                }
            }
            Command::Pause => self.playback.pause(),
            Command::Step => {
                self.playback.step_forward();
            }
            Command::StepBack => {
                self.playback.step_backward();
            }
            Command::Reset => self.regenerate()?,
            Command::Shuffle => {
                self.seed = self.rng.gen();
                self.input = random_array(self.array_size, self.seed);
                self.regenerate()?;
            }
            Command::SetGraph { text, directed } => {
                let graph = parse_edge_list(&text, directed)?;
                self.start = match self.start.take() {
                    Some(id) if graph.contains(id.as_str()) => Some(id),
                    _ => graph.nodes().first().map(|n| n.id.clone()),
                };
                self.graph = graph;
                self.regenerate()?;
            }
            Command::SetStartNode { node } => {
                let Some(found) = self.graph.node(node.trim()) else {
                    return Err(algoscope_core::Error::InvalidInput(format!("unknown node {node}")).into());
                };
                self.start = Some(found.id.clone());
                self.regenerate()?;
            }
            Command::SetSudoku { text } => {
                self.sudoku = SudokuBoard::parse(&text)?;
                self.regenerate()?;
            }
            Command::SetDisks { disks } => {
                self.disks = clamp_disks(disks);
                self.regenerate()?;
            }
            Command::SetBoardSize { size } => {
                self.board_size = clamp_queens(size);
                self.regenerate()?;
            }
            Command::Structure { op } => {
                let structure = self.structure.as_mut().ok_or_else(|| {
                    algoscope_core::Error::InvalidInput("no data structure is selected".to_string())
                })?;
                let steps = structure.apply(&op)?;
                self.notice = None;
                self.playback.replace(steps);
            }
        }
        Ok(())
    }

    /// Forward a ticker advance to the playback.
    pub fn tick(&mut self, generation: u64) -> bool {
        self.playback.tick(generation)
    }

    /// Snapshot of the current step for the UI.
    pub fn frame(&self) -> Frame {
        let step = self.playback.current();
        let graph = (self.algorithm.family() == Family::GraphTraversal).then_some(&self.graph);
        Frame {
            algorithm: self.algorithm,
            status: PlaybackStatus::from(&self.playback),
            kind: step.map(|s| s.kind),
            description: step.map(|s| s.description.clone()).unwrap_or_default(),
            code_line: step.and_then(|s| s.code_line),
            notice: self.notice.clone(),
            paint: step.map(|s| paint(s, graph)),
        }
    }

    fn regenerate(&mut self) -> Result<()> {
        self.notice = None;
        let steps = self.generate()?;
        info!(
            algorithm = self.algorithm.id(),
            steps = steps.len(),
            "Regenerated step sequence"
        );
        self.playback.replace(steps);
        Ok(())
    }

    fn generate(&mut self) -> Result<Vec<Step>> {
        let steps = match self.algorithm.family() {
            Family::ComparisonSort | Family::DivideAndConquerSort | Family::DistributionSort => {
                algoscope_sort::generate(SortKind::try_from(self.algorithm)?, &self.input)
            }
            Family::GraphTraversal => {
                if self.start.is_none() {
                    self.notice = Some("Select a start node first".to_string());
                }
                let start = self.start.as_ref().map_or("", NodeId::as_str);
                match self.algorithm {
                    AlgorithmKind::Bfs => bfs(&self.graph, start),
                    AlgorithmKind::Dfs => dfs(&self.graph, start),
                    _ => dijkstra(&self.graph, start),
                }
            }
            Family::Backtracking => match self.algorithm {
                AlgorithmKind::Hanoi => hanoi_steps(self.disks),
                AlgorithmKind::NQueens => queens_steps(self.board_size),
                _ => self.solve_sudoku()?,
            },
            Family::DataStructure => match &self.structure {
                Some(structure) => structure.idle_steps(),
                None => {
                    return Err(algoscope_core::Error::InvalidInput(format!(
                        "{} has no data structure",
                        self.algorithm.name()
                    ))
                    .into())
                }
            },
        };
        Ok(steps)
    }

    fn solve_sudoku(&mut self) -> Result<Vec<Step>> {
        let solved = match self.presolved.take() {
            Some(solved) if solved.board == self.sudoku => solved,
            _ => SolvedSudoku::solve(self.sudoku.clone()),
        };
        let SolvedSudoku { steps, outcome, .. } = solved;
        match outcome {
            SudokuOutcome::Unsolvable => {
                warn!(size = self.sudoku.size(), "Sudoku has no solution, clearing the board");
                self.notice = Some("No solution exists for this board. Please check your input.".to_string());
                self.sudoku = SudokuBoard::new(self.sudoku.size())?;
            }
            SudokuOutcome::AlreadySolved => {
                self.notice = Some("The board is already solved".to_string());
            }
            SudokuOutcome::Solved | SudokuOutcome::NothingToSolve => {}
        }
        Ok(steps)
    }
}
