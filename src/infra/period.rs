//! Year/month directory layout of the notes root.
//!
//! ```text
//! notes/
//!   2019/
//!     dec/
//!       tasks.note     monthly task list
//!       dec24.note     daily notes
//!       dec25.note
//! ```

use chrono::{Datelike, NaiveDate};
use std::path::{Path, PathBuf};

/// Default name of a month's running task list.
pub const DEFAULT_TASKS_FILE: &str = "tasks.note";

/// Returns the lowercase three-letter abbreviation of the month, e.g. `dec`.
pub fn month_prefix(date: NaiveDate) -> String {
    date.format("%b").to_string().to_lowercase()
}

/// Returns `<root>/<year>/<mon>` for the month containing `date`.
pub fn month_dir(root: &Path, date: NaiveDate) -> PathBuf {
    root.join(date.year().to_string()).join(month_prefix(date))
}

/// Returns the last day of the month before the one containing `date`.
///
/// The month before January is December of the previous year.
pub fn previous_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1).and_then(|first| first.pred_opt())
}

/// Returns the daily note file name for `date`, e.g. `dec25.note` or `jan5.note`.
pub fn daily_file_name(date: NaiveDate) -> String {
    format!("{}{}.note", month_prefix(date), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_prefix_is_three_lowercase_letters() {
        assert_eq!(month_prefix(date(2020, 1, 1)), "jan");
        assert_eq!(month_prefix(date(2020, 9, 30)), "sep");
        assert_eq!(month_prefix(date(2019, 12, 25)), "dec");
    }

    #[test]
    fn month_dir_joins_year_and_month() {
        let root = Path::new("notes");
        assert_eq!(
            month_dir(root, date(2019, 12, 25)),
            PathBuf::from("notes/2019/dec")
        );
    }

    #[test]
    fn previous_month_within_year() {
        assert_eq!(previous_month(date(2020, 3, 31)), Some(date(2020, 2, 29)));
    }

    #[test]
    fn previous_month_of_january_is_last_december() {
        let prev = previous_month(date(2020, 1, 1)).unwrap();
        assert_eq!(prev, date(2019, 12, 31));
        assert_eq!(
            month_dir(Path::new("notes"), prev),
            PathBuf::from("notes/2019/dec")
        );
    }

    #[test]
    fn daily_file_name_uses_unpadded_day() {
        assert_eq!(daily_file_name(date(2019, 12, 25)), "dec25.note");
        assert_eq!(daily_file_name(date(2020, 1, 5)), "jan5.note");
    }
}
