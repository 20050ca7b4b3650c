/// Display format tag used when none is configured
pub const DEFAULT_DISPLAY_FORMAT: &str = "YYYY-MM-DD";

/// Zone used when neither the settings nor the host name one
pub const DEFAULT_TIME_ZONE: &str = "UTC";

/// Default `tracing` filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Prefix of the environment variables read by [`crate::config::Settings::load`]
pub const ENV_PREFIX: &str = "KUNAI";

/// Separator between nested keys in environment variable names
pub const ENV_SEPARATOR: &str = "__";
