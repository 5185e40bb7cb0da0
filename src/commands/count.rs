//! `trains count` command

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{output_by_format_result, print_json, records_header};
use crate::commands::routes::truncation_note;
use trains_core::error::Result;
use trains_core::graph::{RouteMode, RouteSet};
use trains_core::{Label, RouteService};

/// JSON shape of a route count; the routes themselves are left out
#[derive(Debug, Serialize)]
struct CountOutput {
    from: Label,
    to: Label,
    max_distance: u32,
    count: usize,
    truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    truncation_reason: Option<String>,
}

impl From<RouteSet> for CountOutput {
    fn from(set: RouteSet) -> Self {
        Self {
            from: set.from,
            to: set.to,
            max_distance: set.limit,
            count: set.count,
            truncated: set.truncated,
            truncation_reason: set.truncation_reason,
        }
    }
}

/// Execute the count command
pub fn execute(
    cli: &Cli,
    service: &RouteService,
    from: Label,
    to: Label,
    max_distance: u32,
) -> Result<()> {
    let set = service.enumerate_routes(from, to, RouteMode::MaxDistance, max_distance)?;

    if set.truncated && !cli.quiet && cli.format != OutputFormat::Json {
        eprintln!("{}", truncation_note(&set));
    }

    let output = CountOutput::from(set);
    output_by_format_result!(cli.format,
        json => print_json(&output),
        human => { println!("{}", output.count); },
        records => { println!("{}", render_records(&output)); }
    )
}

fn render_records(output: &CountOutput) -> String {
    let mut fields = vec![
        ("from", output.from.to_string()),
        ("to", output.to.to_string()),
        ("max_distance", output.max_distance.to_string()),
        ("count", output.count.to_string()),
        ("truncated", output.truncated.to_string()),
    ];
    if let Some(reason) = &output.truncation_reason {
        fields.push(("reason", reason.clone()));
    }
    records_header("count", &fields)
}
