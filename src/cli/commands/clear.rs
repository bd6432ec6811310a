use crate::config::Config;
use crate::core::query::EventQuery;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::open(&cfg.database)?;
    let removed = EventQuery::clear_events(&mut pool)?;

    success(format!("Removed {} event(s)", removed));
    Ok(())
}
