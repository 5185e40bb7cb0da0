//! Helpers shared by the search algorithms

/// Mark a search as truncated, overwriting any earlier reason
pub fn set_truncation(truncated: &mut bool, truncation_reason: &mut Option<String>, reason: &str) {
    *truncated = true;
    *truncation_reason = Some(reason.to_string());
}

/// Mark a search as truncated unless a reason was already recorded
pub fn set_truncation_if_unset(
    truncated: &mut bool,
    truncation_reason: &mut Option<String>,
    reason: &str,
) {
    if truncation_reason.is_none() {
        set_truncation(truncated, truncation_reason, reason);
    }
}
