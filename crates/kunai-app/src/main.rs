use kunai_core::config::load_config;
use kunai_time::{CalendarConfig, resolve_default_time_zone};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let explicit_filter = EnvFilter::try_from_default_env().ok();
    let has_explicit_filter = explicit_filter.is_some();
    let (filter_layer, filter_handle) =
        reload::Layer::new(explicit_filter.unwrap_or_else(|| EnvFilter::new("info")));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();

    let config = load_config()?;

    tracing::debug!(config = ?config, "Configuration loaded");

    if has_explicit_filter {
        tracing::debug!("RUST_LOG is set, ignoring logging.level");
    } else if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping info");
    }

    let host_zone = resolve_default_time_zone();
    let calendar = CalendarConfig::from_settings(&config.calendar, &host_zone)?;

    tracing::info!(
        display_format = %calendar.display_format(),
        time_zone = %calendar.time_zone(),
        "Calendar ready"
    );

    println!("{}", calendar.get_current_date_time());
    println!("{}", calendar.format(&calendar.today()));

    Ok(())
}
