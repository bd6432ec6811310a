use clap::{Parser, Subcommand};

/// Command-line interface definition for chatlog
#[derive(Parser)]
#[command(
    name = "chatlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record chat-room activity events in SQLite and query time-bucketed summaries",
    long_about = None
)]
pub struct Cli {
    /// Use this SQLite file instead of the configured one
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Leave the configuration file untouched (used by the test suite)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file and the event database
    Init,

    /// Print, check or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Report keys missing from the configuration file")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Editor command to launch instead of $EDITOR / $VISUAL"
        )]
        editor: Option<String>,
    },

    /// Database maintenance
    Db {
        #[arg(long = "migrate", help = "Apply pending schema migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Run PRAGMA integrity_check")]
        check: bool,

        #[arg(long = "vacuum", help = "Compact the database file with VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show file size, event counts and covered days")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print the audit trail (inserts, clears, migrations)")]
        print: bool,
    },

    /// Record one event
    Add {
        /// Event type: enter, leave, comment or highfive
        #[arg(value_name = "TYPE")]
        kind: String,

        /// User the event belongs to
        user: String,

        #[arg(long = "other", help = "Other user involved (e.g. highfive target)")]
        other: Option<String>,

        #[arg(long = "message", short = 'm', help = "Comment text")]
        message: Option<String>,

        #[arg(
            long = "date",
            help = "RFC 3339 timestamp with offset (default: now, UTC)"
        )]
        date: Option<String>,
    },

    /// List events, oldest first
    List {
        #[arg(long, help = "Start of range (RFC 3339, day-granular, inclusive)")]
        from: Option<String>,

        #[arg(long, help = "End of range (RFC 3339, day-granular, inclusive)")]
        to: Option<String>,

        #[arg(long = "json", help = "Print the HTTP-style JSON envelope")]
        json: bool,
    },

    /// Count events per time bucket
    Summary {
        #[arg(long, help = "Start of range (RFC 3339, required)")]
        from: Option<String>,

        #[arg(long, help = "End of range (RFC 3339, required)")]
        to: Option<String>,

        #[arg(long, help = "Bucket size: minute, hour or day (default: minute)")]
        by: Option<String>,

        #[arg(long = "json", help = "Print the HTTP-style JSON envelope")]
        json: bool,
    },

    /// Delete every recorded event
    Clear,

    /// Start the HTTP server
    Serve {
        #[arg(long, help = "Listen address (overrides config)")]
        host: Option<String>,

        #[arg(long, help = "Listen port (overrides config)")]
        port: Option<u16>,
    },
}
