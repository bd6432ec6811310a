use super::event_type::EventType;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A recorded chat-room activity.
///
/// `date` keeps the exact RFC 3339 text the event was recorded with; the
/// offset designator is trusted as-is and never normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: i64, // ⇔ events.id (assigned by the store, 0 before insert)
    #[serde(rename = "type")]
    pub kind: EventType, // ⇔ events.type
    pub user: String, // ⇔ events.user
    #[serde(rename = "otherUser")]
    pub other_user: Option<String>, // ⇔ events.other_user
    pub message: Option<String>, // ⇔ events.message
    pub date: String, // ⇔ events.date (TEXT, RFC 3339)
    #[serde(skip_serializing)]
    pub created_at: String, // ⇔ events.created_at (TEXT, RFC 3339)
}

impl Event {
    /// Build a not-yet-stored event. `created_at` is stamped with the
    /// current UTC time.
    pub fn new(
        kind: EventType,
        user: impl Into<String>,
        other_user: Option<String>,
        message: Option<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            kind,
            user: user.into(),
            other_user,
            message,
            date: date.into(),
            created_at: date::now_iso(),
        }
    }

    /// Parsed instant of the event, keeping its original offset.
    pub fn timestamp(&self) -> AppResult<DateTime<FixedOffset>> {
        date::parse_timestamp(&self.date).ok_or_else(|| AppError::InvalidDate(self.date.clone()))
    }
}

/// Raw insert payload, as received from HTTP or assembled by the CLI.
///
/// Every field is optional here; [`NewEvent::validate`] decides what is
/// actually required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewEvent {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub user: Option<String>,
    #[serde(alias = "otherUser", alias = "other_user")]
    pub otheruser: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
}

impl NewEvent {
    /// Check required fields and turn the payload into an [`Event`].
    ///
    /// A missing `date` defaults to the current UTC time.
    pub fn validate(self) -> AppResult<Event> {
        let raw_kind = self
            .kind
            .ok_or_else(|| AppError::InvalidEvent("missing field 'type'".into()))?;
        let kind = EventType::et_from_str(&raw_kind)
            .ok_or_else(|| AppError::InvalidEvent(format!("unknown event type '{raw_kind}'")))?;

        let user = match self.user {
            Some(u) if !u.trim().is_empty() => u,
            _ => return Err(AppError::InvalidEvent("missing field 'user'".into())),
        };

        let when = match self.date {
            Some(d) => {
                if date::parse_timestamp(&d).is_none() {
                    return Err(AppError::InvalidEvent(format!("invalid date '{d}'")));
                }
                d.trim().to_string()
            }
            None => date::now_iso(),
        };

        Ok(Event::new(kind, user, self.otheruser, self.message, when))
    }
}
