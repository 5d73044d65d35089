//! End-to-end dashboard flow: wire JSON in, derived view out.

use async_trait::async_trait;
use chrono::{FixedOffset, NaiveDate, TimeZone};
use shared::dashboard::{DashboardController, LoadOutcome};
use shared::fetcher::AppointmentFetcher;
use shared::{parse_appointments, Appointment, ApiError, AppointmentResponse, MonthAvailabilityDay};
use std::cell::Cell;

const DAY_PAYLOAD: &str = r#"[
    {"id": "1", "date": "2021-03-04T12:00:00.000Z", "user": {"name": "Bruno", "avatar_url": null}},
    {"id": "2", "date": "2021-03-04T15:00:00Z", "user": {"name": "Carla", "avatar_url": "c.png"}},
    {"id": "3", "date": "2021-03-04T17:30:00.000Z", "user": {"name": "Davi"}}
]"#;

const PROVIDER: &str = "provider-1";

const MONTH_PAYLOAD: &str = r#"[
    {"day": 5, "available": false},
    {"day": 12, "available": true}
]"#;

fn brasilia() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).unwrap()
}

/// Serves the fixed payloads above; fails every call after `fail_after` calls
struct JsonFetcher {
    calls: Cell<usize>,
    fail_after: usize,
}

impl JsonFetcher {
    fn new(fail_after: usize) -> Self {
        Self { calls: Cell::new(0), fail_after }
    }

    fn tick(&self) -> Result<(), ApiError> {
        let calls = self.calls.get() + 1;
        self.calls.set(calls);
        if calls > self.fail_after {
            return Err(ApiError::Network("backend unreachable".to_string()));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl AppointmentFetcher for JsonFetcher {
    async fn load_month_availability(
        &self,
        _provider_id: &str,
        _year: i32,
        _month: u32,
    ) -> Result<Vec<MonthAvailabilityDay>, ApiError> {
        self.tick()?;
        serde_json::from_str(MONTH_PAYLOAD).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn load_day_appointments(
        &self,
        _year: i32,
        _month: u32,
        _day: u32,
    ) -> Result<Vec<Appointment>, ApiError> {
        self.tick()?;
        let responses: Vec<AppointmentResponse> =
            serde_json::from_str(DAY_PAYLOAD).map_err(|e| ApiError::Decode(e.to_string()))?;
        parse_appointments(responses, &brasilia())
    }
}

fn thursday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 3, 4).unwrap()
}

#[tokio::test]
async fn test_day_view_between_noon_and_afternoon_slot() {
    let controller = DashboardController::new(JsonFetcher::new(usize::MAX), PROVIDER, thursday());
    controller.mount().await;

    let now = brasilia().with_ymd_and_hms(2021, 3, 4, 13, 15, 0).unwrap();
    let view = controller.view(&now);

    let hours = |list: &[Appointment]| {
        list.iter()
            .map(|a| a.hour_formatted.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(hours(&view.morning), vec!["09:00", "12:00"]);
    assert_eq!(hours(&view.afternoon), vec!["14:30"]);
    let next_hour = view.next_appointment.as_ref().map(|a| a.hour_formatted.as_str());
    assert_eq!(next_hour, Some("14:30"));
    assert!(view.is_today);
    let friday = NaiveDate::from_ymd_opt(2021, 3, 5).unwrap();
    assert_eq!(view.disabled_days, [friday].into_iter().collect());
}

#[tokio::test]
async fn test_next_appointment_is_not_reevaluated_until_recomputed() {
    let controller = DashboardController::new(JsonFetcher::new(usize::MAX), PROVIDER, thursday());
    controller.mount().await;

    let before = brasilia().with_ymd_and_hms(2021, 3, 4, 13, 0, 0).unwrap();
    let view = controller.view(&before);

    // the derived value is a snapshot; time passing does not touch it
    let next = view.next_appointment.clone();
    assert_eq!(next.map(|a| a.id), Some("3".to_string()));

    let after = brasilia().with_ymd_and_hms(2021, 3, 4, 15, 0, 0).unwrap();
    assert!(controller.view(&after).next_appointment.is_none());
}

#[tokio::test]
async fn test_failing_second_fetch_keeps_first_result() {
    // mount makes two successful calls; everything after fails
    let controller = DashboardController::new(JsonFetcher::new(2), PROVIDER, thursday());
    controller.mount().await;

    let month = controller.change_month_and_load(thursday()).await;
    let day = controller.select_date_and_load(thursday()).await;

    assert_eq!(month, LoadOutcome::Failed);
    assert_eq!(day, Some(LoadOutcome::Failed));

    let store = controller.store();
    assert!(!store.is_loading());
    assert_eq!(store.appointments().len(), 3);
    assert_eq!(store.month_availability().len(), 2);
}
