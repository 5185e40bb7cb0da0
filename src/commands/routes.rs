//! `trains routes` command

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{
    output_by_format_result, print_json, records_header, NO_SUCH_ROUTE,
};
use trains_core::error::Result;
use trains_core::graph::{RouteBound, RouteSet};
use trains_core::{Label, RouteService};

/// Execute the routes command
pub fn execute(
    cli: &Cli,
    service: &RouteService,
    from: Label,
    to: Label,
    bound: RouteBound,
) -> Result<()> {
    let set = service.enumerate_routes(from, to, bound.mode, bound.limit)?;

    if set.truncated && !cli.quiet && cli.format != OutputFormat::Json {
        eprintln!("{}", truncation_note(&set));
    }

    output_by_format_result!(cli.format,
        json => print_json(&set),
        human => { print!("{}", render_human(&set)); },
        records => { print!("{}", render_records(&set)); }
    )
}

/// Stderr note for a search stopped by a limit
pub fn truncation_note(set: &RouteSet) -> String {
    format!(
        "note: search stopped early ({}); results are incomplete",
        set.truncation_reason.as_deref().unwrap_or("limit")
    )
}

fn render_human(set: &RouteSet) -> String {
    if set.routes.is_empty() {
        return format!("{}\n", NO_SUCH_ROUTE);
    }
    set.routes
        .iter()
        .map(|route| format!("{} ({} stops)\n", route, route.value))
        .collect()
}

fn render_records(set: &RouteSet) -> String {
    let mut fields = vec![
        ("from", set.from.to_string()),
        ("to", set.to.to_string()),
        ("bound", set.mode.to_string()),
        ("limit", set.limit.to_string()),
        ("count", set.count.to_string()),
        ("truncated", set.truncated.to_string()),
    ];
    if let Some(reason) = &set.truncation_reason {
        fields.push(("reason", reason.clone()));
    }

    let mut out = records_header("routes", &fields);
    out.push('\n');
    for route in &set.routes {
        out.push_str(&format!("R {} stops={}\n", route, route.value));
    }
    out
}
