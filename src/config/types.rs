use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::args::parse_duration_arg;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub present: Option<PresentConfig>,
    pub serve: Option<ServeConfig>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentConfig {
    pub passcode: Option<String>,
    pub speed: Option<SpeedValue>,
    pub base_interval: Option<DurationValue>,
    pub catalog_dir: Option<PathBuf>,
    pub start_slide: Option<usize>,
    pub no_ui: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServeConfig {
    pub listen: Option<SocketAddr>,
    pub root: Option<PathBuf>,
    pub fallback: Option<String>,
}

/// A bare number is milliseconds, as is unsuffixed text; otherwise text
/// takes a unit suffix and may be fractional (`"1.5s"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Millis(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, String> {
        match self {
            DurationValue::Millis(millis) => {
                if *millis == 0 {
                    Err("Duration must be > 0.".to_owned())
                } else {
                    Ok(Duration::from_millis(*millis))
                }
            }
            DurationValue::Text(text) => parse_duration_arg(text).map_err(|err| err.to_string()),
        }
    }
}

/// Written either as a number (`speed = 0.5`) or as text (`speed = "2x"`).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SpeedValue {
    Number(f64),
    Text(String),
}

impl SpeedValue {
    pub(crate) fn as_text(&self) -> String {
        match self {
            SpeedValue::Number(number) => number.to_string(),
            SpeedValue::Text(text) => text.clone(),
        }
    }
}
