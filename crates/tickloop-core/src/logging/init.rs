use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one.
///
/// Dependencies stay at `warn`; the loop crates log lifecycle changes at `debug`
/// and frames at `trace`, so `info` keeps them quiet unless asked.
pub const DEFAULT_FILTER: &str = "warn,tickloop_core=info,tickloop_winit=info";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tickloop_core=trace").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Per-frame tracing for the loop crates.
    pub fn trace_frames() -> Self {
        Self::default().filter("warn,tickloop_core=trace,tickloop_winit=trace")
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. See [`resolve_filter`] for where the filter
/// comes from.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.env_filter, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // The embedding application may already have installed a logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with filter {filter:?}");
    });
}

/// Picks the filter: explicit config first, then `RUST_LOG`, then
/// [`DEFAULT_FILTER`]. Blank values count as unset.
pub fn resolve_filter(explicit: Option<String>, env: Option<String>) -> String {
    explicit
        .into_iter()
        .chain(env)
        .map(|f| f.trim().to_string())
        .find(|f| !f.is_empty())
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}
