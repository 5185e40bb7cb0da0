//! `trains shortest` command

use serde::Serialize;

use crate::cli::Cli;
use crate::commands::format::{
    output_by_format_result, print_json, records_header, NO_SUCH_ROUTE,
};
use trains_core::error::Result;
use trains_core::{Label, RouteResult, RouteService};

/// JSON shape of a shortest-route answer
#[derive(Debug, Serialize)]
struct ShortestOutput {
    from: Label,
    to: Label,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<u32>,
}

impl ShortestOutput {
    fn new(from: Label, to: Label, result: Option<&RouteResult>) -> Self {
        Self {
            from,
            to,
            found: result.is_some(),
            path: result.map(RouteResult::path_string),
            distance: result.map(|r| r.value),
        }
    }
}

/// Execute the shortest command
pub fn execute(cli: &Cli, service: &RouteService, from: Label, to: Label) -> Result<()> {
    let result = service.shortest_path(from, to);
    let output = ShortestOutput::new(from, to, result.as_ref());

    output_by_format_result!(cli.format,
        json => print_json(&output),
        human => { println!("{}", render_human(&output)); },
        records => { print!("{}", render_records(&output)); }
    )
}

fn render_human(output: &ShortestOutput) -> String {
    match (&output.path, output.distance) {
        (Some(path), Some(distance)) => format!("{} ({})", distance, path),
        _ => NO_SUCH_ROUTE.to_string(),
    }
}

fn render_records(output: &ShortestOutput) -> String {
    let mut out = records_header(
        "shortest",
        &[
            ("from", output.from.to_string()),
            ("to", output.to.to_string()),
            ("found", output.found.to_string()),
        ],
    );
    out.push('\n');
    if let (Some(path), Some(distance)) = (&output.path, output.distance) {
        out.push_str(&format!("R {} distance={}\n", path, distance));
    }
    out
}
