const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Install the global `tracing` subscriber, which also receives the `log`
/// records emitted by the `megaera` library.
pub(crate) fn setup_logger(verbose: bool) {
    let env_val = std::env::var(LOG_LEVEL_ENV_VAR).ok();
    let (log_level, warning) = select_log_level(verbose, env_val.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// `--verbose` wins over `LOG_LEVEL`. An unrecognized `LOG_LEVEL` falls back
/// to INFO along with a warning to log once logging is set up.
pub(crate) fn select_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    match env_val.map(|val| val.trim()) {
        Some("DEBUG" | "debug" | "VERBOSE" | "verbose") => (tracing::Level::DEBUG, None),
        Some("INFO" | "info") => (tracing::Level::INFO, None),
        Some("TRACE" | "trace") => (tracing::Level::TRACE, None),
        Some(other) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `{LOG_LEVEL_ENV_VAR}` environment variable value: `{other}`")),
        ),
        None => (DEFAULT_LOG_LEVEL, None),
    }
}
