use super::event_type::EventType;
use serde::{Deserialize, Serialize};

/// Per-bucket counters produced by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub date: String,
    pub enters: u64,
    pub leaves: u64,
    pub comments: u64,
    pub highfives: u64,
}

impl SummaryRow {
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            enters: 0,
            leaves: 0,
            comments: 0,
            highfives: 0,
        }
    }

    pub fn record(&mut self, kind: EventType) {
        match kind {
            EventType::Enter => self.enters += 1,
            EventType::Leave => self.leaves += 1,
            EventType::Comment => self.comments += 1,
            EventType::Highfive => self.highfives += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.enters + self.leaves + self.comments + self.highfives
    }
}

/// Order in which summary rows are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SummaryOrder {
    /// Ascending by bucket instant.
    #[default]
    Chronological,
    /// Order in which each bucket was first met while folding (legacy).
    FirstSeen,
}
