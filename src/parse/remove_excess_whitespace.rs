use std::borrow::Cow;

use crate::static_regex;

/// Collapses every run of whitespace (including the newlines between table
/// cells) into a single space and trims both ends.
pub fn remove_excess_whitespace(s: &str) -> Cow<'_, str> {
    static_regex!(RUNS <- r"\s\s+|[\t\n\r]");
    let trimmed = s.trim();
    RUNS.replace_all(trimmed, " ")
}
