//! Field-level validation reporting.
//!
//! Validation walks a whole record and reports every offending field in one
//! pass, so a client sees the complete list instead of the first failure.

use serde::Serialize;

use crate::error::{DomainError, DomainResult};

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Dotted path of the offending field (e.g. `items[0].price`).
    pub field: String,
    pub message: String,
}

/// Accumulator for field-level failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    issues: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn reject(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Fold a nested record's report into this one, prefixing its fields
    /// (e.g. `items[2]` + `price` -> `items[2].price`).
    pub fn nest(&mut self, prefix: &str, nested: ValidationReport) {
        for issue in nested.issues {
            self.issues.push(FieldIssue {
                field: format!("{prefix}.{}", issue.field),
                message: issue.message,
            });
        }
    }

    /// Fold another report into this one, field paths unchanged.
    pub fn merge(&mut self, other: ValidationReport) {
        self.issues.extend(other.issues);
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    /// Ok when nothing was rejected, otherwise the full report as an error.
    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(self))
        }
    }
}

impl core::fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for issue in &self.issues {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", issue.field, issue.message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_ok() {
        assert!(ValidationReport::new().into_result().is_ok());
    }

    #[test]
    fn report_collects_every_rejection() {
        let mut report = ValidationReport::new();
        report.reject("price", "must be greater than 100");
        report.reject("name", "must not be empty");

        let err = report.into_result().unwrap_err();
        match err {
            DomainError::Validation(r) => {
                assert_eq!(r.issues().len(), 2);
                assert_eq!(r.issues()[0].field, "price");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn nest_prefixes_field_paths() {
        let mut inner = ValidationReport::new();
        inner.reject("url", "must be an absolute http(s) URL");

        let mut outer = ValidationReport::new();
        outer.nest("images[0]", inner);

        assert_eq!(outer.issues()[0].field, "images[0].url");
    }
}
