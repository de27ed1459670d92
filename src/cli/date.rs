//! Run date parsing for the `--date` option.

use chrono::{Duration, NaiveDate};

/// Resolves a run date relative to `today`.
///
/// Accepts:
/// - `today`, `yesterday`
/// - Relative: "3d" (days ago)
/// - Absolute: "2019-12-25" (YYYY-MM-DD format)
pub fn parse_run_date(s: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let s = s.trim();

    match s {
        "today" => return Ok(today),
        "yesterday" => return Ok(today - Duration::days(1)),
        _ => {}
    }

    if let Some(days_str) = s.strip_suffix('d') {
        let days: i64 = days_str
            .parse()
            .map_err(|_| format!("invalid relative date: {}", s))?;
        if days < 0 {
            return Err(format!("days must be non-negative: {}", s));
        }
        return today
            .checked_sub_signed(Duration::days(days))
            .ok_or_else(|| format!("date out of range: {}", s));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date format (expected YYYY-MM-DD or Nd): {}", s))
}
