//! # CaféSmart Counter
//!
//! Terminal front-end for taking café orders on top of `cafe-core`.
//!
//! ## Module Organization
//! ```text
//! cafe_counter/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── clap arguments
//! ├── config.rs       ◄─── counter.toml + environment overrides
//! ├── session.rs      ◄─── catalog + the active order
//! ├── commands.rs     ◄─── operator commands and the input loop
//! └── error.rs        ◄─── CounterError and operator messages
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Initialize Logging ─── tracing-subscriber to stderr, RUST_LOG      │
//! │                                                                         │
//! │  2. Load Configuration ─── defaults → counter.toml → CAFE_* env        │
//! │                                                                         │
//! │  3. Build Session ──────── seed menu through ItemFactory               │
//! │                                                                         │
//! │  4. Dispatch ───────────── `menu`: print and exit                      │
//! │                            `run`:  read commands from stdin            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::CounterConfig;
use error::CounterResult;
use session::CounterSession;

/// Runs the counter with parsed command-line arguments.
pub fn run(cli: Cli) -> CounterResult<()> {
    init_tracing();

    // An explicit --config must load; the platform default may be absent or broken.
    let config = match cli.config {
        Some(path) => CounterConfig::load(Some(path))?,
        None => CounterConfig::load_or_default(None),
    };

    let mut session = CounterSession::from_config(&config)?;
    info!(
        store = %config.store.name,
        items = session.catalog().len(),
        tax_bps = config.tax.rate_bps,
        "Counter ready"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or_default() {
        Command::Menu => commands::print_menu(&session, &mut out),
        Command::Run => commands::run_loop(&mut session, io::stdin().lock(), &mut out, cli.json),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command and order change
/// - `RUST_LOG=warn` - Quiet counter, rejected commands only
///
/// Logs go to stderr so receipts on stdout stay clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cafe=debug"));

    // try_init: a subscriber may already be installed (tests, embedding)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
