//! Map clap parse failures onto trains errors for the JSON envelope

use clap::error::{ContextKind, ErrorKind};
use trains_core::error::TrainsError;

/// Whether argv asks for `--format json`. Checked before clap runs so
/// parse failures can still be reported as JSON.
pub fn argv_requests_json<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--format" => {
                if args.next().is_some_and(|v| v.as_ref() == "json") {
                    return true;
                }
            }
            "--format=json" => return true,
            _ => {}
        }
    }
    false
}

/// The trains error for a clap failure, or `None` when clap should print
/// help or version text itself
pub fn parse_failure(err: &clap::Error) -> Option<TrainsError> {
    let failure = match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
            let arg = context(err, ContextKind::InvalidArg).unwrap_or_default();
            let value = context(err, ContextKind::InvalidValue).unwrap_or_default();
            if arg.starts_with("--format") {
                TrainsError::UnknownFormat(value)
            } else {
                TrainsError::invalid_value(&value_context(&arg), value)
            }
        }
        ErrorKind::MissingRequiredArgument | ErrorKind::ArgumentConflict
            if mentions_stop_bound(err) =>
        {
            TrainsError::UsageError(
                "routes needs exactly one of --max-stops or --exact-stops".to_string(),
            )
        }
        ErrorKind::MissingRequiredArgument => TrainsError::UsageError(format!(
            "missing required argument: {}",
            context(err, ContextKind::InvalidArg).unwrap_or_else(|| summary(err))
        )),
        ErrorKind::ArgumentConflict
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::TooManyValues
        | ErrorKind::WrongNumberOfValues => TrainsError::UsageError(summary(err)),
        _ => TrainsError::Other(summary(err)),
    };
    Some(failure)
}

fn context(err: &clap::Error, kind: ContextKind) -> Option<String> {
    err.get(kind).map(ToString::to_string)
}

/// Station arguments read as "station", numeric flags by their name
fn value_context(arg: &str) -> String {
    match arg {
        "<FROM>" | "<TO>" => "station".to_string(),
        other => other
            .split_whitespace()
            .next()
            .unwrap_or(other)
            .trim_start_matches("--")
            .replace('-', " "),
    }
}

fn mentions_stop_bound(err: &clap::Error) -> bool {
    [ContextKind::InvalidArg, ContextKind::PriorArg]
        .into_iter()
        .filter_map(|kind| context(err, kind))
        .any(|args| args.contains("--max-stops") || args.contains("--exact-stops"))
}

/// First line of clap's message without the `error: ` prefix
fn summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
