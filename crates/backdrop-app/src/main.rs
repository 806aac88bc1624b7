mod cli;
mod clipboard;
mod commands;
mod sources;

use backdrop_config::BackdropConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. The `--log-level` directive wins over the
/// config file's level. Logs go to stderr so stdout carries only output.
fn init_logging(flag: Option<&str>, config_level: &str) {
    let directive = flag
        .map(str::to_string)
        .unwrap_or_else(|| format!("backdrop={config_level}"));
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| Directive::from(LevelFilter::INFO));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

#[tokio::main]
async fn main() {
    let args = cli::parse();

    // Config comes first so its logging level can seed the subscriber.
    let loaded = backdrop_config::load_config(args.config.as_deref());
    let config_level = loaded
        .as_ref()
        .map(|c| c.logging.level.to_ascii_lowercase())
        .unwrap_or_else(|_| "info".into());
    init_logging(args.log_level.as_deref(), &config_level);

    tracing::debug!("backdrop v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        BackdropConfig::default()
    });
    if let Err(e) = backdrop_config::validation::validate(&config) {
        tracing::warn!("config validation warning: {e}");
    }

    if let Err(e) = commands::run(&args, &config).await {
        tracing::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
