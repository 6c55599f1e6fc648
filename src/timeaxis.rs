//! Decoding CF-style time coordinates ("days since 2016-01-01") and
//! selecting the indices that fall inside a calendar year.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{DiagError, Result};

/// Convert raw time-coordinate values to datetimes using a CF units string
/// of the form `"<unit> since <origin>"`.
///
/// Supported units are seconds, minutes, hours and days on the standard
/// calendar; anything else (e.g. a 360-day model calendar) is a
/// configuration error rather than a silent misread.
pub fn decode_times(values: &[f64], units: &str) -> Result<Vec<NaiveDateTime>> {
    let mut parts = units.splitn(2, " since ");
    let unit = parts.next().unwrap_or("").trim().to_lowercase();
    let origin = parts
        .next()
        .ok_or_else(|| {
            DiagError::configuration(format!("time units '{}' lack an origin ('since')", units))
        })?
        .trim();

    let seconds_per_step = match unit.as_str() {
        "seconds" | "second" | "s" => 1.0,
        "minutes" | "minute" | "min" => 60.0,
        "hours" | "hour" | "h" => 3600.0,
        "days" | "day" | "d" => 86400.0,
        other => {
            return Err(DiagError::configuration(format!(
                "unsupported time unit '{}'",
                other
            )))
        }
    };

    let base = parse_origin(origin)?;
    Ok(values
        .iter()
        .map(|&v| base + Duration::milliseconds((v * seconds_per_step * 1000.0).round() as i64))
        .collect())
}

fn parse_origin(origin: &str) -> Result<NaiveDateTime> {
    let origin = origin.trim_end_matches(" UTC").trim_end_matches('Z');

    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(origin, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(origin, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    Err(DiagError::configuration(format!(
        "cannot parse time origin '{}'",
        origin
    )))
}

/// Indices of the time steps that fall within `year`.
pub fn year_indices(times: &[NaiveDateTime], year: i32) -> Vec<usize> {
    times
        .iter()
        .enumerate()
        .filter(|(_, t)| t.year() == year)
        .map(|(i, _)| i)
        .collect()
}
