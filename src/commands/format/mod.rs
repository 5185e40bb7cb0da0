//! Shared output formatting helpers for commands
//!
//! Records output is line-oriented: one `H` header line carrying the query
//! parameters, then `R` lines for routes and `E` lines for edges.

pub use crate::output_by_format_result;

use serde::Serialize;
use trains_core::error::Result;

/// Build a Records format header
///
/// ```ignore
/// records_header("shortest", &[("from", "A".into()), ("to", "C".into())]);
/// // "H trains=1 records=1 mode=shortest from=A to=C"
/// ```
pub fn records_header(mode: &str, extra_fields: &[(&str, String)]) -> String {
    let mut parts = vec!["H trains=1 records=1".to_string(), format!("mode={}", mode)];

    for (key, value) in extra_fields {
        parts.push(format!("{}={}", key, value));
    }

    parts.join(" ")
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Human-readable text for a query that found nothing
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";
