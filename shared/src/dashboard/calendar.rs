//! Calendar arithmetic and the day-selection policy.
//!
//! The policy composes the availability-driven disabled days with the fixed
//! weekend rule. It is kept apart from the disabled-days calculator so the
//! calculator never needs to know about weekdays.

use std::collections::HashSet;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

/// Saturdays and Sundays are never bookable
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the calendar must render `date` as unselectable
pub fn is_day_disabled(date: NaiveDate, disabled_days: &HashSet<NaiveDate>) -> bool {
    is_weekend(date) || disabled_days.contains(&date)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from `month`
pub fn shift_month(month: NaiveDate, delta: i32) -> NaiveDate {
    let start = first_of_month(month);
    let shifted = if delta >= 0 {
        start.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        start.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(start)
}

/// Number of days in the month containing `date`
pub fn days_in_month(date: NaiveDate) -> u32 {
    let start = first_of_month(date);
    let next = shift_month(start, 1);
    next.signed_duration_since(start).num_days() as u32
}

/// Cells of a Sunday-first month grid; `None` pads the first week
pub fn month_grid(month: NaiveDate) -> Vec<Option<NaiveDate>> {
    let start = first_of_month(month);
    let padding = start.weekday().num_days_from_sunday() as usize;

    let mut cells = vec![None; padding];
    for offset in 0..days_in_month(start) {
        cells.push(start.checked_add_days(Days::new(u64::from(offset))));
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_is_always_disabled() {
        let none = HashSet::new();

        assert!(is_day_disabled(date(2021, 3, 6), &none)); // Saturday
        assert!(is_day_disabled(date(2021, 3, 7), &none)); // Sunday
        assert!(!is_day_disabled(date(2021, 3, 8), &none)); // Monday
    }

    #[test]
    fn test_policy_unions_unavailable_days() {
        let disabled: HashSet<_> = [date(2021, 3, 5)].into_iter().collect();

        assert!(is_day_disabled(date(2021, 3, 5), &disabled));
        assert!(!is_day_disabled(date(2021, 3, 4), &disabled));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2021, 1, 15)), 31);
        assert_eq!(days_in_month(date(2021, 4, 1)), 30);
        assert_eq!(days_in_month(date(2021, 2, 1)), 28);
        assert_eq!(days_in_month(date(2024, 2, 1)), 29);
    }

    #[test]
    fn test_shift_month_crosses_years() {
        assert_eq!(shift_month(date(2021, 12, 20), 1), date(2022, 1, 1));
        assert_eq!(shift_month(date(2021, 1, 31), -1), date(2020, 12, 1));
    }

    #[test]
    fn test_month_grid_pads_to_sunday() {
        // March 2021 starts on a Monday
        let grid = month_grid(date(2021, 3, 10));

        assert_eq!(grid.len(), 1 + 31);
        assert_eq!(grid[0], None);
        assert_eq!(grid[1], Some(date(2021, 3, 1)));
        assert_eq!(grid.last().copied().flatten(), Some(date(2021, 3, 31)));
    }
}
