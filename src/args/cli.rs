use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::playback::Speed;

use super::parsers::{parse_duration_arg, parse_speed};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Terminal slide deck on two-phase processor pre-warming, with step-playback diagrams for Kubernetes, Knative, and VRM hardware."
)]
pub struct DeckArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (TOML or JSON). Defaults to ./prewarm-deck.toml or ./prewarm-deck.json
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color", env = "NO_COLOR", global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Present the deck in the terminal
    Present(PresentArgs),
    /// Serve the built web deck as static files
    Serve(ServeArgs),
    /// Validate every step catalog and print a summary
    Check(CheckArgs),
    /// Print the steps of one catalog
    Catalog(CatalogArgs),
}

#[derive(Debug, Args, Clone, Default)]
pub struct PresentArgs {
    /// Passcode required before the deck is shown
    #[arg(long = "passcode", env = "PREWARM_DECK_PASSCODE", hide_env_values = true)]
    pub passcode: Option<String>,

    /// Initial playback speed (0.5, 1, or 2)
    #[arg(long = "speed", value_parser = parse_speed)]
    pub speed: Option<Speed>,

    /// Autoplay interval at 1x speed (ms/s/m/h, fractions allowed; bare number is ms)
    #[arg(long = "base-interval", value_parser = parse_duration_arg)]
    pub base_interval: Option<Duration>,

    /// Directory of extra step catalogs (*.toml)
    #[arg(long = "catalog-dir")]
    pub catalog_dir: Option<PathBuf>,

    /// Zero-based slide to open on
    #[arg(long = "start-slide")]
    pub start_slide: Option<usize>,

    /// Print a plain-text outline instead of the interactive UI
    #[arg(long = "no-ui")]
    pub no_ui: bool,
}

#[derive(Debug, Args, Clone, Default)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long = "listen")]
    pub listen: Option<SocketAddr>,

    /// Port to listen on all interfaces when --listen is not given
    #[arg(long = "port", env = "PORT")]
    pub port: Option<u16>,

    /// Directory holding the built assets
    #[arg(long = "root")]
    pub root: Option<PathBuf>,

    /// File served for `/` and for unknown paths, relative to the root
    #[arg(long = "fallback")]
    pub fallback: Option<String>,
}

#[derive(Debug, Args, Clone, Default)]
pub struct CheckArgs {
    /// Directory of extra step catalogs (*.toml)
    #[arg(long = "catalog-dir")]
    pub catalog_dir: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct CatalogArgs {
    /// Catalog id, e.g. kubernetes, knative, vrm
    pub id: String,

    /// Directory of extra step catalogs (*.toml)
    #[arg(long = "catalog-dir")]
    pub catalog_dir: Option<PathBuf>,
}
