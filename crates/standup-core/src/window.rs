//! The activity window: how far back "yesterday's work" reaches.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};

/// First day of the work week. A report on this day also covers the
/// preceding weekend and Friday.
const WEEK_START: Weekday = Weekday::Mon;

/// Lower-bound date against which recent work is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityWindow {
    start: NaiveDate,
}

impl ActivityWindow {
    /// Window for a report produced on `today`: three days back on the first
    /// weekday, one day back otherwise.
    #[must_use]
    pub fn for_date(today: NaiveDate) -> Self {
        let days_back = if today.weekday() == WEEK_START { 3 } else { 1 };
        Self {
            start: today - Days::new(days_back),
        }
    }

    /// Window for a report produced now, using the local calendar date.
    #[must_use]
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Whether an activity dated `date` counts as recent.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    // 2024-03-18 is a Monday
    #[case(date(2024, 3, 18), date(2024, 3, 15))]
    #[case(date(2024, 3, 19), date(2024, 3, 18))]
    #[case(date(2024, 3, 20), date(2024, 3, 19))]
    #[case(date(2024, 3, 22), date(2024, 3, 21))]
    #[case(date(2024, 3, 24), date(2024, 3, 23))]
    // month boundary on a Monday
    #[case(date(2024, 4, 1), date(2024, 3, 29))]
    fn window_start_depends_on_weekday(#[case] today: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(ActivityWindow::for_date(today).start(), expected);
    }

    #[test]
    fn start_date_is_inclusive() {
        let window = ActivityWindow::for_date(date(2024, 3, 20));
        assert!(window.contains(date(2024, 3, 19)));
        assert!(window.contains(date(2024, 3, 20)));
        assert!(!window.contains(date(2024, 3, 18)));
    }

    #[test]
    fn monday_window_covers_friday() {
        let window = ActivityWindow::for_date(date(2024, 3, 18));
        assert!(window.contains(date(2024, 3, 15)));
        assert!(!window.contains(date(2024, 3, 14)));
    }
}
