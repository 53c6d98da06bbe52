use std::time::Duration;

use crate::errors::{NotifeedError, NotifeedResult};

/// Parse a duration string like `"30m"`, `"90s"` or `"1h30m"`.
///
/// Accepts a sequence of decimal numbers, each with an optional fraction and a
/// mandatory unit suffix: `ns`, `us`, `ms`, `s`, `m`, `h`.
pub fn parse_duration(input: &str) -> NotifeedResult<Duration> {
    let s = input.trim();
    if s.is_empty() {
        return Err(NotifeedError::InvalidDuration(input.to_string()));
    }

    let mut total_secs = 0f64;
    let mut rest = s;
    let mut segments = 0;

    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_len);
        let value: f64 = number
            .parse()
            .map_err(|_| NotifeedError::InvalidDuration(input.to_string()))?;

        let unit_len = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_len);
        let multiplier = match unit {
            "ns" => 1e-9,
            "us" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return Err(NotifeedError::InvalidDuration(input.to_string())),
        };

        total_secs += value * multiplier;
        segments += 1;
        rest = tail;
    }

    if segments == 0 || !total_secs.is_finite() || total_secs <= 0.0 {
        return Err(NotifeedError::InvalidDuration(input.to_string()));
    }

    // try_from: seconds can overflow Duration even when finite and positive
    Duration::try_from_secs_f64(total_secs)
        .map_err(|_| NotifeedError::InvalidDuration(input.to_string()))
}
