use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::args::{PresentArgs, ServeArgs};
use crate::error::{AppError, AppResult, ConfigError};
use crate::playback::{DEFAULT_BASE_INTERVAL, Speed};
use crate::serve::{DEFAULT_FALLBACK, DEFAULT_PORT, ServeOptions};

use super::types::{PresentConfig, ServeConfig};

const DEFAULT_ROOT: &str = "dist";

/// `present` options after CLI flags, config file, and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentSettings {
    pub passcode: Option<String>,
    pub speed: Speed,
    pub base_interval: Duration,
    pub catalog_dir: Option<PathBuf>,
    pub start_slide: usize,
    pub no_ui: bool,
}

/// Merges `present` flags over the `[present]` config section.
///
/// # Errors
///
/// Returns an error when a config value is invalid.
pub fn resolve_present(
    args: &PresentArgs,
    config: Option<&PresentConfig>,
) -> AppResult<PresentSettings> {
    let speed = match (args.speed, config.and_then(|section| section.speed.as_ref())) {
        (Some(speed), _) => speed,
        (None, Some(value)) => {
            let text = value.as_text();
            Speed::parse(&text)
                .ok_or_else(|| AppError::config(ConfigError::InvalidSpeed { value: text }))?
        }
        (None, None) => Speed::default(),
    };

    let base_interval = match (
        args.base_interval,
        config.and_then(|section| section.base_interval.as_ref()),
    ) {
        (Some(interval), _) => interval,
        (None, Some(value)) => value
            .to_duration()
            .map_err(|message| AppError::config(ConfigError::InvalidBaseInterval { message }))?,
        (None, None) => DEFAULT_BASE_INTERVAL,
    };

    let passcode = args
        .passcode
        .clone()
        .or_else(|| config.and_then(|section| section.passcode.clone()))
        .filter(|passcode| !passcode.is_empty());

    Ok(PresentSettings {
        passcode,
        speed,
        base_interval,
        catalog_dir: args
            .catalog_dir
            .clone()
            .or_else(|| config.and_then(|section| section.catalog_dir.clone())),
        start_slide: args
            .start_slide
            .or_else(|| config.and_then(|section| section.start_slide))
            .unwrap_or(0),
        no_ui: args.no_ui || config.and_then(|section| section.no_ui).unwrap_or(false),
    })
}

/// Merges `serve` flags over the `[serve]` config section. The listen
/// address comes from `--listen`, then `--port`/`PORT`, then the config.
#[must_use]
pub fn resolve_serve(args: &ServeArgs, config: Option<&ServeConfig>) -> ServeOptions {
    let listen = args
        .listen
        .or_else(|| args.port.map(|port| SocketAddr::from(([0, 0, 0, 0], port))))
        .or_else(|| config.and_then(|section| section.listen))
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

    ServeOptions {
        listen,
        root: args
            .root
            .clone()
            .or_else(|| config.and_then(|section| section.root.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
        fallback: args
            .fallback
            .clone()
            .or_else(|| config.and_then(|section| section.fallback.clone()))
            .unwrap_or_else(|| DEFAULT_FALLBACK.to_owned()),
    }
}
