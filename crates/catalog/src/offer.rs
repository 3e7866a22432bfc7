use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use bazaar_core::{DomainResult, OfferId, ValidationReport};

use crate::item::Item;

/// A bundle of items sold together for a window of time.
///
/// The identifier is generated server-side when the client omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub id: OfferId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub items: Vec<Item>,
    #[serde(default)]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_at: Option<DateTime<Utc>>,
    /// Daily repetition time, independent of the start/end window.
    #[serde(default)]
    pub repeat_at: Option<NaiveTime>,
}

impl Offer {
    pub fn check(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        if self.name.trim().is_empty() {
            report.reject("name", "must not be empty");
        }
        if self.price <= 0.0 {
            report.reject("price", "must be greater than zero");
        }
        if self.items.is_empty() {
            report.reject("items", "must contain at least one item");
        }
        for (i, item) in self.items.iter().enumerate() {
            report.nest(&format!("items[{i}]"), item.check());
        }
        if let (Some(start), Some(end)) = (self.start_at, self.end_at) {
            if end < start {
                report.reject("end_at", "must not precede start_at");
            }
        }
        report
    }

    pub fn validate(&self) -> DomainResult<()> {
        self.check().into_result()
    }

    /// Length of the offer window; `None` unless both endpoints are set.
    pub fn duration(&self) -> Option<Duration> {
        match (self.start_at, self.end_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Window length in seconds, the shape the HTTP layer reports.
    pub fn duration_seconds(&self) -> Option<f64> {
        self.duration().map(|d| d.num_milliseconds() as f64 / 1000.0)
    }
}
