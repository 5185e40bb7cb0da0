//! `trains distance` command

use crate::cli::Cli;
use crate::commands::format::{
    output_by_format_result, print_json, records_header, NO_SUCH_ROUTE,
};
use trains_core::error::Result;
use trains_core::graph::{PathResult, Route};
use trains_core::RouteService;

/// Execute the distance command
pub fn execute(cli: &Cli, service: &RouteService, route: &Route) -> Result<()> {
    let result = match service.route_distance(route.labels()) {
        Some(distance) => PathResult::found(route.to_string(), route.labels(), distance),
        None => PathResult::not_found(route.to_string()),
    };

    output_by_format_result!(cli.format,
        json => print_json(&result),
        human => { println!("{}", render_human(&result)); },
        records => { print!("{}", render_records(&result)); }
    )
}

fn render_human(result: &PathResult) -> String {
    match result.distance {
        Some(distance) => distance.to_string(),
        None => NO_SUCH_ROUTE.to_string(),
    }
}

fn render_records(result: &PathResult) -> String {
    let mut out = records_header(
        "distance",
        &[
            ("route", result.route.clone()),
            ("found", result.found.to_string()),
        ],
    );
    out.push('\n');
    if let (Some(path), Some(distance)) = (&result.path, result.distance) {
        out.push_str(&format!("R {} distance={}\n", path, distance));
    }
    out
}
