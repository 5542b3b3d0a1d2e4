use std::fmt;
use std::time::Duration;

/// Autoplay speed multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
}

impl Speed {
    pub const ALL: [Self; 3] = [Self::Half, Self::Normal, Self::Double];

    /// Accepts `0.5`, `1`, `2`, with or without a trailing `x`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim().to_ascii_lowercase();
        let number = trimmed.strip_suffix('x').unwrap_or(&trimmed);
        match number {
            "0.5" | ".5" | "half" => Some(Self::Half),
            "1" | "1.0" | "normal" => Some(Self::Normal),
            "2" | "2.0" | "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// Tick interval for this speed given the 1x interval.
    #[must_use]
    pub fn interval(self, base: Duration) -> Duration {
        match self {
            Self::Half => base.checked_mul(2).unwrap_or(Duration::MAX),
            Self::Normal => base,
            Self::Double => base.checked_div(2).unwrap_or(base),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Half => "0.5x",
            Self::Normal => "1x",
            Self::Double => "2x",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
