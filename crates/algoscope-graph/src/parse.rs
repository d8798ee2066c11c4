//! Plain-text edge-list input.
//!
//! ```text
//! # comment
//! A B 4     edge A -> B with weight 4
//! B C       weight defaults to 1
//! D         isolated node
//! ```

use crate::error::{ParseError, Result};
use crate::graph::Graph;

/// Weight used when a line names only its two endpoints.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Build a graph from an edge list. Every edge gets the same `directed` flag.
/// Node ids are the tokens themselves, so re-parsing edited text keeps node
/// identity. Nodes are laid out on a circle in order of first appearance.
pub fn parse_edge_list(text: &str, directed: bool) -> Result<Graph> {
    let mut graph = Graph::new();

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [id] => {
                graph.add_node(id);
            }
            [from, to] => {
                graph.add_edge(from, to, DEFAULT_WEIGHT, directed);
            }
            [from, to, weight] => {
                let weight = weight.parse::<u32>().map_err(|_| ParseError::InvalidWeight {
                    line: i + 1,
                    token: weight.to_string(),
                })?;
                graph.add_edge(from, to, weight, directed);
            }
            _ => {
                return Err(ParseError::TooManyTokens {
                    line: i + 1,
                    count: tokens.len(),
                })
            }
        }
    }

    graph.arrange_circle();
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edges_weights_and_isolated_nodes() {
        let g = parse_edge_list("1 2 5\n3 4 2\n3 2 1\n9\n", false).unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.edge("1-2").map(|e| e.weight), Some(5));
        assert!(g.contains("9"));
        assert!(g.neighbors("9").is_empty());
    }

    #[test]
    fn weight_defaults_to_one() {
        let g = parse_edge_list("a b", true).unwrap();
        let edge = g.edge("a-b").unwrap();
        assert_eq!(edge.weight, DEFAULT_WEIGHT);
        assert!(edge.directed);
    }

    #[test]
    fn tolerates_blank_lines_comments_and_spacing() {
        let text = "\n  # a comment\n   a\t\t b   3  \n\n\nb    c\n";
        let g = parse_edge_list(text, false).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn empty_text_is_an_empty_graph() {
        let g = parse_edge_list("   \n\n", false).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn rejects_bad_weight_with_line_number() {
        let err = parse_edge_list("a b 1\nb c x", false).unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidWeight {
                line: 2,
                token: "x".into()
            }
        );
    }

    #[test]
    fn rejects_negative_weight() {
        assert!(matches!(
            parse_edge_list("a b -3", false),
            Err(ParseError::InvalidWeight { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_extra_tokens() {
        let err = parse_edge_list("a b 1 extra", false).unwrap_err();
        assert_eq!(err, ParseError::TooManyTokens { line: 1, count: 4 });
        assert_eq!(err.to_string(), "line 1: expected at most 3 tokens, found 4");
    }

    #[test]
    fn reparse_keeps_node_identity() {
        let first = parse_edge_list("a b\nb c", false).unwrap();
        let second = parse_edge_list("a b\nb c\nc d", false).unwrap();
        for node in first.nodes() {
            assert!(second.contains(node.id.as_str()));
        }
    }

    #[test]
    fn nodes_are_laid_out() {
        let g = parse_edge_list("a b\nb c\nc a", false).unwrap();
        let distinct = g
            .nodes()
            .iter()
            .map(|n| n.position)
            .collect::<Vec<_>>();
        assert_ne!(distinct[0], distinct[1]);
        assert_ne!(distinct[1], distinct[2]);
    }
}
