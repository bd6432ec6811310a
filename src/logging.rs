//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise `level` applies to this crate and to
//! `tower_http`, and everything else logs warnings only.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,chatlog={level},tower_http={level}")));

    // try_init: a second call (tests, embedded use) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
