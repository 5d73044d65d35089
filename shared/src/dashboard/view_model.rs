//! Pure derivations over the dashboard state.
//!
//! Nothing here reads a clock or mutates anything: "now" is an argument, so
//! a next appointment stays what it was until the caller recomputes.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Weekday};
use tracing::debug;

use super::locale;
use crate::{Appointment, MonthAvailabilityDay};

/// Last hour that still counts as morning (inclusive)
pub const LAST_MORNING_HOUR: u32 = 12;

/// Everything the dashboard presenter renders, derived in one pass
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub selected_date: NaiveDate,
    pub current_month: NaiveDate,
    pub loading: bool,
    /// The selected day is the day `now` falls on
    pub is_today: bool,
    pub disabled_days: HashSet<NaiveDate>,
    pub morning: Vec<Appointment>,
    pub afternoon: Vec<Appointment>,
    pub next_appointment: Option<Appointment>,
    pub selected_date_as_text: String,
    pub selected_week_day_as_text: String,
}

/// Dates of `current_month` that have no open slots.
///
/// Only unavailable entries contribute; days that do not exist in the month
/// are ignored.
pub fn disabled_days(
    current_month: NaiveDate,
    availability: &[MonthAvailabilityDay],
) -> HashSet<NaiveDate> {
    let year = current_month.year();
    let month = current_month.month();

    availability
        .iter()
        .filter(|entry| !entry.available)
        .filter_map(|entry| {
            let date = NaiveDate::from_ymd_opt(year, month, entry.day);
            if date.is_none() {
                debug!(
                    year,
                    month,
                    day = entry.day,
                    "skipping availability entry outside the month"
                );
            }
            date
        })
        .collect()
}

/// Appointments starting at or before 12:59, in input order
pub fn morning_appointments(appointments: &[Appointment]) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| appointment.hour() <= LAST_MORNING_HOUR)
        .cloned()
        .collect()
}

/// Appointments starting from 13:00 on, in input order
pub fn afternoon_appointments(appointments: &[Appointment]) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|appointment| appointment.hour() > LAST_MORNING_HOUR)
        .cloned()
        .collect()
}

/// First appointment, in list order, strictly after `now`
pub fn next_appointment<'a>(
    appointments: &'a [Appointment],
    now: &DateTime<FixedOffset>,
) -> Option<&'a Appointment> {
    appointments.iter().find(|appointment| appointment.date > *now)
}

/// Long label for the selected day, e.g. "Dia 05 de março"
pub fn selected_date_as_text(date: NaiveDate) -> String {
    format!("Dia {:02} de {}", date.day(), locale::month_name(date.month()))
}

/// Weekday label: "Terça-feira" on weekdays, bare "Sábado"/"Domingo" on weekends
pub fn selected_week_day_as_text(date: NaiveDate) -> String {
    let weekday = date.weekday();
    let name = locale::capitalize(locale::weekday_name(weekday));

    match weekday {
        Weekday::Sat | Weekday::Sun => name,
        _ => format!("{}-feira", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppointmentUser;
    use chrono::TimeZone;

    fn offset() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn at(hour: u32, minute: u32) -> Appointment {
        let date = offset().with_ymd_and_hms(2021, 3, 5, hour, minute, 0).unwrap();
        Appointment {
            id: format!("{:02}{:02}", hour, minute),
            hour_formatted: date.format("%H:%M").to_string(),
            date,
            provider_user: AppointmentUser {
                name: "Cliente".to_string(),
                avatar_url: None,
            },
        }
    }

    fn ids(appointments: &[Appointment]) -> Vec<&str> {
        appointments.iter().map(|a| a.id.as_str()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_disabled_days_only_unavailable() {
        let availability = [
            MonthAvailabilityDay { day: 5, available: false },
            MonthAvailabilityDay { day: 12, available: true },
        ];

        let disabled = disabled_days(date(2021, 3, 1), &availability);

        assert_eq!(disabled, [date(2021, 3, 5)].into_iter().collect());
    }

    #[test]
    fn test_disabled_days_skips_days_outside_month() {
        let availability = [
            MonthAvailabilityDay { day: 30, available: false },
            MonthAvailabilityDay { day: 28, available: false },
        ];

        let disabled = disabled_days(date(2021, 2, 1), &availability);

        assert_eq!(disabled, [date(2021, 2, 28)].into_iter().collect());
    }

    #[test]
    fn test_noon_belongs_to_morning() {
        let appointments = vec![at(12, 0), at(12, 45), at(13, 0)];

        assert_eq!(ids(&morning_appointments(&appointments)), vec!["1200", "1245"]);
        assert_eq!(ids(&afternoon_appointments(&appointments)), vec!["1300"]);
    }

    #[test]
    fn test_buckets_partition_and_preserve_order() {
        // deliberately unsorted to show the buckets do not sort
        let appointments = vec![at(15, 0), at(8, 0), at(17, 30), at(11, 0), at(12, 0)];

        let morning = morning_appointments(&appointments);
        let afternoon = afternoon_appointments(&appointments);

        assert_eq!(ids(&morning), vec!["0800", "1100", "1200"]);
        assert_eq!(ids(&afternoon), vec!["1500", "1730"]);
        assert_eq!(morning.len() + afternoon.len(), appointments.len());
        assert!(morning.iter().all(|m| !afternoon.contains(m)));
    }

    #[test]
    fn test_empty_buckets_are_empty_vectors() {
        assert!(morning_appointments(&[]).is_empty());
        assert!(afternoon_appointments(&[at(9, 0)]).is_empty());
    }

    #[test]
    fn test_next_appointment_none_for_empty_list() {
        let now = offset().with_ymd_and_hms(2021, 3, 5, 10, 0, 0).unwrap();
        assert!(next_appointment(&[], &now).is_none());
    }

    #[test]
    fn test_next_appointment_ignores_position() {
        let now = offset().with_ymd_and_hms(2021, 3, 5, 10, 0, 0).unwrap();

        let future_first = vec![at(14, 0), at(9, 0)];
        let future_last = vec![at(9, 0), at(14, 0)];

        assert_eq!(next_appointment(&future_first, &now).map(|a| a.id.as_str()), Some("1400"));
        assert_eq!(next_appointment(&future_last, &now).map(|a| a.id.as_str()), Some("1400"));
    }

    #[test]
    fn test_next_appointment_is_strictly_after_now() {
        let now = offset().with_ymd_and_hms(2021, 3, 5, 14, 0, 0).unwrap();
        assert!(next_appointment(&[at(14, 0)], &now).is_none());
    }

    #[test]
    fn test_selected_date_as_text() {
        assert_eq!(selected_date_as_text(date(2021, 3, 5)), "Dia 05 de março");
        assert_eq!(selected_date_as_text(date(2021, 12, 24)), "Dia 24 de dezembro");
    }

    #[test]
    fn test_week_day_suffix_only_on_weekdays() {
        assert_eq!(selected_week_day_as_text(date(2021, 3, 2)), "Terça-feira");
        assert_eq!(selected_week_day_as_text(date(2021, 3, 1)), "Segunda-feira");
        assert_eq!(selected_week_day_as_text(date(2021, 3, 5)), "Sexta-feira");
        assert_eq!(selected_week_day_as_text(date(2021, 3, 6)), "Sábado");
        assert_eq!(selected_week_day_as_text(date(2021, 3, 7)), "Domingo");
    }
}
