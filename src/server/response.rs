//! Response envelopes: `{"status": ...}` for mutations and failures,
//! `{"events": [...]}` for reads.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }

    pub fn error() -> Self {
        Self { status: "error" }
    }
}

/// `{ "events": T[] }` envelope, used for both raw events and summary rows.
#[derive(Debug, Serialize)]
pub struct EventsResponse<T: Serialize> {
    pub events: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
