use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `LEXGEN_LOG=lexgen_compiler=debug`.
pub const LOG_ENV: &str = "LEXGEN_LOG";

/// Initializes stderr logging. `LEXGEN_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
