use crossterm::{execute, terminal::{disable_raw_mode, LeaveAlternateScreen}};
use flexi_logger::{detailed_format, Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use std::path::Path;

pub const LOG_FILE_BASENAME: &str = "dayboard";
pub const LOG_FILE_SUFFIX: &str = "log";
pub const LOG_ROTATE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
pub const LOG_ROTATE_KEEP_FILES: usize = 3;

/// Resolve the log filter: `DAYBOARD_LOG`, then `RUST_LOG`, then `info`
pub fn log_filter() -> String {
    ["DAYBOARD_LOG", "RUST_LOG"]
        .iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "info".to_string())
}

/// Start file logging in the data directory.
///
/// The TUI owns the terminal, so nothing is duplicated to stdout/stderr.
/// The returned handle must be kept alive for the lifetime of the app.
pub fn init_logging(data_dir: &Path) -> Result<LoggerHandle, flexi_logger::FlexiLoggerError> {
    let handle = Logger::try_with_str(log_filter())?
        .log_to_file(
            FileSpec::default()
                .directory(data_dir)
                .basename(LOG_FILE_BASENAME)
                .suffix(LOG_FILE_SUFFIX),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(detailed_format)
        .rotate(
            Criterion::Size(LOG_ROTATE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_ROTATE_KEEP_FILES),
        )
        .start()?;

    install_panic_hook();

    log::info!("logger initialized dir={}", data_dir.display());
    Ok(handle)
}

/// Log panics and give the terminal back before the default hook prints
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| info.payload().downcast_ref::<String>().map(|s| s.as_str()))
            .unwrap_or("<non-string panic payload>");
        let location = info
            .location()
            .map(|loc| loc.to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        log::error!("panic: payload={payload} location={location}");

        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
