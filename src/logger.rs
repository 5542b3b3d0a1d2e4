use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV: &str = "PREWARM_DECK_LOG";

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the outline printed on stdout. With `interactive` set the terminal UI owns
/// the screen, so the default filter drops everything below `error`.
pub fn init_logging(verbose: bool, no_color: bool, interactive: bool) {
    let filter = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if interactive {
                    EnvFilter::new("error")
                } else if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::new("info")
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        );

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(verbose)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
