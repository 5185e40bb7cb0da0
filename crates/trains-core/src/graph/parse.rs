//! Edge-list and route text formats
//!
//! Edge lists look like `AB5, BC4, CD8`: a source label, a target label and
//! a decimal weight per comma-separated entry. Routes look like `A-B-C`.
//! Both formats ignore whitespace and are case-insensitive.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, TrainsError};
use crate::graph::model::{Graph, GraphBuilder};
use crate::graph::types::{join_labels, Label, ROUTE_SEPARATOR};

/// Entry grammar: two non-digit labels followed by the weight
const ENTRY_PATTERN: &str = r"^([^\d\-])([^\d\-])(\d+)$";

fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Parse an edge list into a graph
pub fn parse_edge_list(text: &str) -> Result<Graph> {
    let entry_re = Regex::new(ENTRY_PATTERN)
        .map_err(|e| TrainsError::Other(format!("failed to compile edge pattern: {}", e)))?;

    let normalized = normalize(text);
    let mut builder = GraphBuilder::new();
    let mut entries = 0usize;

    for entry in normalized.split(',').filter(|entry| !entry.is_empty()) {
        let malformed = || TrainsError::MalformedEntry {
            entry: entry.to_string(),
        };
        let caps = entry_re.captures(entry).ok_or_else(malformed)?;

        let from = caps[1].chars().next().ok_or_else(malformed)?;
        let to = caps[2].chars().next().ok_or_else(malformed)?;
        let weight = caps[3].parse::<u32>().map_err(|_| malformed())?;

        builder.add_edge(from, to, weight)?;
        entries += 1;
    }

    if entries == 0 {
        return Err(TrainsError::MalformedEntry {
            entry: text.trim().to_string(),
        });
    }

    let graph = builder.build();
    debug!(
        entries,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parse_edge_list"
    );
    Ok(graph)
}

/// Read and parse an edge-list file
pub fn load_edge_list(path: &Path) -> Result<Graph> {
    let text =
        std::fs::read_to_string(path).map_err(|e| TrainsError::read_failed(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "load_edge_list");
    parse_edge_list(&text)
}

/// An explicit label sequence such as `A-B-C`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route(Vec<Label>);

impl Route {
    pub fn labels(&self) -> &[Label] {
        &self.0
    }
}

impl FromStr for Route {
    type Err = TrainsError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        if normalized.is_empty() {
            return Ok(Route(Vec::new()));
        }
        let labels = normalized
            .split(ROUTE_SEPARATOR)
            .map(|segment| {
                let mut chars = segment.chars();
                match (chars.next(), chars.next()) {
                    (Some(label), None) => Ok(label),
                    _ => Err(TrainsError::invalid_value("route", s)),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Route(labels))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_labels(&self.0))
    }
}
