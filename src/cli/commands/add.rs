use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Record one event from the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        kind,
        user,
        other,
        message,
        date,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;

        AddLogic::apply(
            &mut pool,
            kind,
            user,
            other.clone(),
            message.clone(),
            date.clone(),
        )?;
    }

    Ok(())
}
