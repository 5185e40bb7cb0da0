//! `trains graph` command

use serde_json::json;

use crate::cli::Cli;
use crate::commands::format::{output_by_format_result, print_json, records_header};
use trains_core::error::Result;
use trains_core::graph::Node;
use trains_core::Graph;

/// Execute the graph command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    output_by_format_result!(cli.format,
        json => print_json(&to_json(graph)),
        human => { print!("{}", render_human(graph)); },
        records => { print!("{}", render_records(graph)); }
    )
}

fn to_json(graph: &Graph) -> serde_json::Value {
    let stations: Vec<_> = graph
        .nodes()
        .map(|node| {
            let edges: Vec<_> = node
                .edges()
                .iter()
                .map(|edge| json!({ "to": edge.target, "weight": edge.weight }))
                .collect();
            json!({ "label": node.label(), "edges": edges })
        })
        .collect();

    json!({
        "nodes": graph.node_count(),
        "edges": graph.edge_count(),
        "stations": stations,
    })
}

fn describe_edges(node: &Node) -> String {
    if node.edges().is_empty() {
        return "-".to_string();
    }
    node.edges()
        .iter()
        .map(|edge| format!("{} ({})", edge.target, edge.weight))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_human(graph: &Graph) -> String {
    let mut out = format!(
        "{} stations, {} connections\n",
        graph.node_count(),
        graph.edge_count()
    );
    for node in graph.nodes() {
        out.push_str(&format!("  {} -> {}\n", node.label(), describe_edges(node)));
    }
    out
}

fn render_records(graph: &Graph) -> String {
    let mut out = records_header(
        "graph",
        &[
            ("nodes", graph.node_count().to_string()),
            ("edges", graph.edge_count().to_string()),
        ],
    );
    out.push('\n');
    for node in graph.nodes() {
        for edge in node.edges() {
            out.push_str(&format!("E {} {} {}\n", node.label(), edge.target, edge.weight));
        }
    }
    out
}
