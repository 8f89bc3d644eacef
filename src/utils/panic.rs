use std::panic;
use std::process;

use color_eyre::config::HookBuilder;
use color_eyre::eyre::Result;
use tracing::error;

use crate::infrastructure::tui::real::RealTui;

/// Install color-eyre hooks and a panic hook that puts the terminal back,
/// logs the report and exits with a failure status.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = hook_builder().into_hooks();
    eyre_hook.install()?;
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();

        let report = panic_hook.panic_report(panic_info).to_string();
        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(authors_line(env!("CARGO_PKG_AUTHORS")))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));

            let file_path = handle_dump(&meta, panic_info);
            if let Err(e) = print_msg(file_path, &meta) {
                eprintln!("human-panic: printing error message to console failed: {e}");
            }
            eprintln!("{report}");
        }
        log::error!("Error: {}", plain_report(&report));

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

fn hook_builder() -> HookBuilder {
    HookBuilder::default()
        .panic_section(bug_report_hint(env!("CARGO_PKG_REPOSITORY")))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
}

/// Leave the alternate screen and raw mode before anything is printed.
fn restore_terminal() {
    if let Err(r) = RealTui::restore() {
        error!("Unable to restore terminal: {r:?}");
    }
}

fn bug_report_hint(repository: &str) -> String {
    if repository.is_empty() {
        "This is a bug.".to_string()
    } else {
        format!("This is a bug. Consider reporting it at {repository}")
    }
}

/// Cargo joins package authors with `:`.
#[cfg_attr(debug_assertions, allow(dead_code))]
fn authors_line(authors: &str) -> String {
    authors
        .split(':')
        .map(str::trim)
        .filter(|author| !author.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The report without colors, for the log file.
fn plain_report(report: &str) -> String {
    strip_ansi_escapes::strip_str(report).trim_end().to_string()
}
