use std::time::Duration;

use crate::error::{AppError, AppResult, ValidationError};
use crate::playback::Speed;

/// Parses `0.5`, `1`, `2` (optionally suffixed with `x`) or `half`,
/// `normal`, `double`.
///
/// # Errors
///
/// Returns an error for any other value.
pub fn parse_speed(s: &str) -> Result<Speed, ValidationError> {
    Speed::parse(s).ok_or_else(|| ValidationError::InvalidSpeed {
        value: s.to_owned(),
    })
}

/// Longest fractional part honored; finer digits are below a nanosecond
/// for every supported unit.
const MAX_FRACTION_DIGITS: usize = 9;

/// Parses a positive duration such as `1500ms`, `1.5s`, `2m`. A bare number
/// is read as milliseconds, matching a bare number in the config file.
///
/// # Errors
///
/// Returns an error for empty, malformed, overflowing, or zero durations.
pub fn parse_duration_arg(s: &str) -> AppResult<Duration> {
    let value = s.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let number_len = value
        .chars()
        .take_while(|ch| ch.is_ascii_digit() || *ch == '.')
        .count();
    let (num_part, unit_part) = value.split_at(number_len);
    let (whole_part, fraction_part) = num_part.split_once('.').unwrap_or((num_part, ""));
    if whole_part.is_empty() || fraction_part.contains('.') || num_part.ends_with('.') {
        return Err(AppError::validation(
            ValidationError::InvalidDurationFormat {
                value: value.to_owned(),
            },
        ));
    }
    let parse_digits = |digits: &str| {
        digits.parse::<u64>().map_err(|err| {
            AppError::validation(ValidationError::InvalidDurationNumber {
                value: value.to_owned(),
                source: err,
            })
        })
    };
    let whole = parse_digits(whole_part)?;

    let unit = if unit_part.is_empty() { "ms" } else { unit_part };
    let unit_nanos: u64 = match unit {
        "ms" => 1_000_000,
        "s" => 1_000_000_000,
        "m" => 60_000_000_000,
        "h" => 3_600_000_000_000,
        _ => {
            return Err(AppError::validation(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            }));
        }
    };

    let whole_nanos = whole
        .checked_mul(unit_nanos)
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
    let fraction_nanos = if fraction_part.is_empty() {
        0
    } else {
        let digits = fraction_part
            .get(..MAX_FRACTION_DIGITS)
            .unwrap_or(fraction_part);
        let scale = u32::try_from(digits.len())
            .ok()
            .and_then(|len| 10_u128.checked_pow(len))
            .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
        u128::from(parse_digits(digits)?)
            .checked_mul(u128::from(unit_nanos))
            .and_then(|scaled| scaled.checked_div(scale))
            .and_then(|nanos| u64::try_from(nanos).ok())
            .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?
    };
    let total_nanos = whole_nanos
        .checked_add(fraction_nanos)
        .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;

    let duration = Duration::from_nanos(total_nanos);
    if duration.is_zero() {
        return Err(AppError::validation(ValidationError::DurationZero));
    }

    Ok(duration)
}
