use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::server::{self, state::AppState};
use crate::ui::messages::info;
use std::net::{IpAddr, SocketAddr};

/// Start the HTTP server and block until it shuts down.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { host, port } = cmd {
        let host = host.clone().unwrap_or_else(|| cfg.host.clone());
        let port = port.unwrap_or(cfg.port);

        let ip: IpAddr = host
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid listen address: {}", host)))?;
        let addr = SocketAddr::new(ip, port);

        let pool = DbPool::open(&cfg.database)?;
        ttlog_quiet(
            &pool.conn,
            "serve",
            &addr.to_string(),
            &format!("HTTP server starting (db: {})", cfg.database),
        );

        let state = AppState::new(pool, cfg.clone());
        info(format!("Serving {} on http://{}", cfg.database, addr));

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(server::serve(state, addr))?;
    }
    Ok(())
}
