use trains_core::graph::ROUTE_SEPARATOR;
use trains_core::Label;

/// Parse a station label: one character, upper-cased
pub fn parse_label(s: &str) -> std::result::Result<Label, String> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_ascii_digit() && c != ROUTE_SEPARATOR => {
            Ok(c.to_ascii_uppercase())
        }
        _ => Err(format!(
            "'{}' is not a station label (expected a single letter)",
            s
        )),
    }
}
