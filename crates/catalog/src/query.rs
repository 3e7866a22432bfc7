//! Constraints on free-text query parameters.
//!
//! These mirror the body-level checks in [`crate::item`] but operate on
//! single strings, so route handlers can validate query parameters before
//! touching any store.

use std::sync::OnceLock;

use regex::Regex;

use bazaar_core::ValidationReport;

pub const QUERY_MIN_LEN: usize = 3;
pub const QUERY_MAX_LEN: usize = 50;

fn query_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Anchored at the start only: a valid prefix is enough.
    RE.get_or_init(|| Regex::new("^[a-zA-Z0-9 ]+").expect("static pattern"))
}

/// Length bounds shared by every search-style query parameter.
pub fn check_query_len(field: &str, value: &str) -> ValidationReport {
    let mut report = ValidationReport::new();
    let len = value.chars().count();
    if len < QUERY_MIN_LEN {
        report.reject(field, format!("must be at least {QUERY_MIN_LEN} characters"));
    } else if len > QUERY_MAX_LEN {
        report.reject(field, format!("must be at most {QUERY_MAX_LEN} characters"));
    }
    report
}

/// Length bounds plus the alphanumeric-and-spaces shape.
pub fn check_query_text(field: &str, value: &str) -> ValidationReport {
    let mut report = check_query_len(field, value);
    if report.is_empty() && !query_shape().is_match(value) {
        report.reject(field, "must start with letters, digits or spaces");
    }
    report
}

/// Bound for short auxiliary parameters.
pub fn check_max_len(field: &str, value: &str, max: usize) -> ValidationReport {
    let mut report = ValidationReport::new();
    if value.chars().count() > max {
        report.reject(field, format!("must be at most {max} characters"));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(!check_query_len("q", "ab").is_empty());
        assert!(check_query_len("q", "abc").is_empty());
        assert!(check_query_len("q", &"x".repeat(50)).is_empty());
        assert!(!check_query_len("q", &"x".repeat(51)).is_empty());
    }

    #[test]
    fn shape_is_anchored_at_the_start() {
        assert!(check_query_text("q", "abc 123").is_empty());
        // Valid prefix, junk suffix: still accepted.
        assert!(check_query_text("q", "abc$%").is_empty());
        // No valid prefix at all: rejected.
        assert!(!check_query_text("q", "$abc").is_empty());
    }

    #[test]
    fn max_len_guard() {
        assert!(check_max_len("optional_query", "abc", 3).is_empty());
        assert!(!check_max_len("optional_query", "abcd", 3).is_empty());
    }
}
