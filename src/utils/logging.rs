//! Logging utilities

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter directives: `RUST_LOG`, then `KANBAN_TUI_LOGLEVEL`, then `kanban_tui=info`
fn filter_directives(rust_log: Option<String>, app_log: Option<String>) -> String {
    rust_log
        .or(app_log)
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(|| format!("{}=info", env!("CARGO_CRATE_NAME")))
}

/// Send `log` and `tracing` output to `kanban-tui.log` in the data directory
pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE.as_str()))?;

    let directives = filter_directives(
        std::env::var("RUST_LOG").ok(),
        std::env::var(LOG_ENV.as_str()).ok(),
    );
    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(directives));
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Similar to the `std::dbg!` macro, but generates `tracing` events rather
/// than printing to stdout.
///
/// By default, the verbosity level for the generated events is `DEBUG`, but
/// this can be customized.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}
