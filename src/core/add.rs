use crate::core::query::EventQuery;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::NewEvent;
use crate::ui::messages::success;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Record one event through the same validation path as `POST /events`.
    pub fn apply(
        pool: &mut DbPool,
        kind: &str,
        user: &str,
        other_user: Option<String>,
        message: Option<String>,
        date: Option<String>,
    ) -> AppResult<()> {
        let payload = NewEvent {
            kind: Some(kind.to_string()),
            user: Some(user.to_string()),
            otheruser: other_user,
            message,
            date,
        };

        EventQuery::insert_events(pool, vec![payload])?;

        success(format!("Recorded '{}' event for {}", kind.trim().to_lowercase(), user));
        Ok(())
    }
}
