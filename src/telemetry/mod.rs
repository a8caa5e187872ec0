//! Logging configuration using env_logger.
//!
//! Log lines go to stderr so that stdout stays reserved for command output
//! (plain summaries or JSON reports). The filter defaults to `info` and can
//! be overridden with `RUST_LOG`.

use anyhow::Result;
use log::{Level, debug, error, info, trace, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Log message with key-value context
pub struct LogMessage {
    /// The message to log
    pub message: String,

    /// The module where the log originated, used as the log target
    pub module: &'static str,

    /// Optional key-value pairs of additional context
    pub context: Option<Vec<(&'static str, String)>>,
}

impl LogMessage {
    pub fn new(module: &'static str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            module,
            context: None,
        }
    }

    /// Append a context pair
    pub fn with(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context
            .get_or_insert_with(Vec::new)
            .push((key, value.to_string()));
        self
    }
}

/// Initialize env_logger-based logging with stderr output.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init() -> Result<()> {
    let mut result = Ok(());

    INIT.call_once(|| {
        if let Err(e) = setup_logger() {
            // Cannot use logging yet since it failed to initialize
            eprintln!("Failed to initialize logging: {}", e);
            result = Err(e);
        } else {
            debug!("Logging initialized with stderr output");
        }
    });

    result
}

/// Log a message with the given level and context
///
/// # Example
///
/// ```
/// use hexbin::telemetry::{log_with_context, LogMessage};
/// use log::Level;
///
/// log_with_context(
///     Level::Info,
///     LogMessage::new("convert", "Conversion finished")
///         .with("output", "pointer.wasm")
///         .with("bytes", 8),
/// );
/// ```
pub fn log_with_context(level: Level, msg: LogMessage) {
    let line = format_context(&msg);
    match level {
        Level::Error => error!(target: msg.module, "{}", line),
        Level::Warn => warn!(target: msg.module, "{}", line),
        Level::Info => info!(target: msg.module, "{}", line),
        Level::Debug => debug!(target: msg.module, "{}", line),
        Level::Trace => trace!(target: msg.module, "{}", line),
    }
}

/// Render `message [k=v, ...]`
pub(crate) fn format_context(msg: &LogMessage) -> String {
    match &msg.context {
        Some(context) if !context.is_empty() => {
            let context_str = context
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} [{}]", msg.message, context_str)
        }
        _ => msg.message.clone(),
    }
}

fn setup_logger() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(true)
        .format_module_path(false)
        .try_init()?;

    Ok(())
}
