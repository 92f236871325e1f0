use regex::Regex;
use std::sync::LazyLock;

/// Matches a maximal run of ASCII decimal digits.
pub static DIGIT_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());
