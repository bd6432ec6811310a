//! Handlers for the `/events` resource.

use crate::core::query::EventQuery;
use crate::errors::{AppError, AppResult};
use crate::models::event::{Event, NewEvent};
use crate::models::granularity::Granularity;
use crate::models::summary_row::SummaryRow;
use crate::server::response::{EventsResponse, HealthResponse, StatusResponse};
use crate::server::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::Value;

/// Query parameters for `GET /events`.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Query parameters for `GET /events/summary`.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub by: Option<String>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// POST /events
///
/// Body is one event object or an array of them. The whole batch is
/// rejected if any element is invalid.
pub async fn create_events(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<StatusResponse>> {
    let payloads = parse_payloads(&body)?;
    state
        .with_store(move |store| EventQuery::insert_events(store, payloads))
        .await?;
    Ok(Json(StatusResponse::ok()))
}

/// POST /events/clear
pub async fn clear_events(State(state): State<AppState>) -> AppResult<Json<StatusResponse>> {
    state
        .with_store(|store| EventQuery::clear_events(store))
        .await?;
    Ok(Json(StatusResponse::ok()))
}

/// GET /events?from=&to=
pub async fn list_events(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> AppResult<Json<EventsResponse<Event>>> {
    let Query(params) = query.map_err(|e| AppError::InvalidDate(e.body_text()))?;

    let events = state
        .with_store(move |store| {
            EventQuery::list_events(&*store, params.from.as_deref(), params.to.as_deref())
        })
        .await?;

    Ok(Json(EventsResponse { events }))
}

/// GET /events/summary?from=&to=&by=
pub async fn summary_events(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> AppResult<Json<EventsResponse<SummaryRow>>> {
    let Query(params) = query.map_err(|e| AppError::InvalidDate(e.body_text()))?;
    let granularity = Granularity::from_param(params.by.as_deref());
    let order = state.config.summary_order;

    let rows = state
        .with_store(move |store| {
            EventQuery::summary_events(
                &*store,
                params.from.as_deref(),
                params.to.as_deref(),
                granularity,
                order,
            )
        })
        .await?;

    Ok(Json(EventsResponse { events: rows }))
}

/// Accept a single object or an array of objects.
fn parse_payloads(body: &[u8]) -> AppResult<Vec<NewEvent>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::InvalidEvent("empty request body".into()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::InvalidEvent(format!("malformed JSON: {e}")))?;

    let items = match value {
        Value::Array(items) => items,
        obj @ Value::Object(_) => vec![obj],
        _ => {
            return Err(AppError::InvalidEvent(
                "expected an event object or an array of events".into(),
            ));
        }
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<NewEvent>(item)
                .map_err(|e| AppError::InvalidEvent(e.to_string()))
        })
        .collect()
}
