//! # Dashboard Store
//!
//! Owns the two fetched slices of the dashboard (month availability and the
//! selected day's appointments) together with the user's selection.
//!
//! ## Request lifecycle
//! Every change of input (`select_date`, `change_month`) bumps the
//! generation of the affected slice and hands back a request carrying that
//! generation. When the response arrives it is applied only if its
//! generation is still the latest one; older responses are dropped so a slow
//! reply for a previous day can never overwrite the current day.
//!
//! A successful response replaces the slice wholesale. A failed response
//! leaves the slice as it was. Either way the slice stops being pending, so
//! the page never gets stuck on its loading indicator.
//!
//! Availability only describes the month it was fetched for. After the
//! calendar moves to another month the kept list no longer disables any day
//! until that month's own response arrives.

use std::collections::HashSet;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use tracing::{debug, warn};

use super::calendar;
use super::view_model::{self, DashboardView};
use crate::{Appointment, ApiError, MonthAvailabilityDay};

/// Month availability request issued by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRequest {
    pub generation: u64,
    pub provider_id: String,
    pub year: i32,
    /// 1-indexed
    pub month: u32,
}

/// Daily appointments request issued by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRequest {
    pub generation: u64,
    pub date: NaiveDate,
}

impl DayRequest {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// What happened to a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The slice was replaced with the response
    Applied,
    /// The request failed; the previous slice was kept
    Failed,
    /// A newer request superseded this one; the response was dropped
    Stale,
}

/// A fetched list plus the bookkeeping that decides which response wins
#[derive(Debug, Clone, PartialEq)]
struct LoadSlice<T> {
    items: Vec<T>,
    generation: u64,
    pending: bool,
}

impl<T> LoadSlice<T> {
    fn new() -> Self {
        Self {
            items: Vec::new(),
            generation: 0,
            pending: false,
        }
    }

    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.pending = true;
        self.generation
    }

    fn complete(&mut self, generation: u64, result: Result<Vec<T>, ApiError>) -> LoadOutcome {
        if generation != self.generation {
            return LoadOutcome::Stale;
        }

        self.pending = false;
        match result {
            Ok(items) => {
                self.items = items;
                LoadOutcome::Applied
            }
            Err(e) => {
                warn!(error = %e, generation, "dashboard load failed, keeping previous data");
                LoadOutcome::Failed
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStore {
    provider_id: String,
    selected_date: NaiveDate,
    current_month: NaiveDate,
    month_availability: LoadSlice<MonthAvailabilityDay>,
    /// Month the availability list was fetched for
    availability_month: Option<NaiveDate>,
    appointments: LoadSlice<Appointment>,
}

impl DashboardStore {
    /// Fresh state for a page showing `today`; both initial loads are pending.
    pub fn new(provider_id: impl Into<String>, today: NaiveDate) -> Self {
        let mut store = Self {
            provider_id: provider_id.into(),
            selected_date: today,
            current_month: calendar::first_of_month(today),
            month_availability: LoadSlice::new(),
            availability_month: None,
            appointments: LoadSlice::new(),
        };
        store.month_availability.begin();
        store.appointments.begin();
        store
    }

    pub fn provider_id(&self) -> &str {
        &self.provider_id
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// First day of the month shown by the calendar
    pub fn current_month(&self) -> NaiveDate {
        self.current_month
    }

    pub fn month_availability(&self) -> &[MonthAvailabilityDay] {
        &self.month_availability.items
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments.items
    }

    /// True while either slice waits for its latest request
    pub fn is_loading(&self) -> bool {
        self.month_availability.pending || self.appointments.pending
    }

    /// The month request still awaiting a response, if any
    pub fn pending_month_request(&self) -> Option<MonthRequest> {
        self.month_availability.pending.then(|| self.month_request())
    }

    /// The day request still awaiting a response, if any
    pub fn pending_day_request(&self) -> Option<DayRequest> {
        self.appointments.pending.then(|| self.day_request())
    }

    /// Select a day in the calendar.
    ///
    /// Weekends and unavailable days are ignored and produce no request.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<DayRequest> {
        if calendar::is_day_disabled(date, &self.disabled_days()) {
            debug!(%date, "ignoring selection of a disabled day");
            return None;
        }

        self.selected_date = date;
        self.appointments.begin();
        Some(self.day_request())
    }

    /// Show another month in the calendar; any day of that month may be passed.
    pub fn change_month(&mut self, month: NaiveDate) -> MonthRequest {
        self.current_month = calendar::first_of_month(month);
        self.month_availability.begin();
        self.month_request()
    }

    pub fn complete_month_load(
        &mut self,
        generation: u64,
        result: Result<Vec<MonthAvailabilityDay>, ApiError>,
    ) -> LoadOutcome {
        let outcome = self.month_availability.complete(generation, result);
        if outcome == LoadOutcome::Applied {
            self.availability_month = Some(self.current_month);
        }
        debug!(generation, ?outcome, "month availability load completed");
        outcome
    }

    pub fn complete_day_load(
        &mut self,
        generation: u64,
        result: Result<Vec<Appointment>, ApiError>,
    ) -> LoadOutcome {
        let outcome = self.appointments.complete(generation, result);
        debug!(generation, ?outcome, "day appointments load completed");
        outcome
    }

    /// Unavailable days of the displayed month; empty until its availability is known
    pub fn disabled_days(&self) -> HashSet<NaiveDate> {
        if self.availability_month != Some(self.current_month) {
            return HashSet::new();
        }
        view_model::disabled_days(self.current_month, self.month_availability())
    }

    /// Derive everything the presenter needs, evaluated against `now`
    pub fn view(&self, now: &DateTime<FixedOffset>) -> DashboardView {
        let appointments = self.appointments();

        DashboardView {
            selected_date: self.selected_date,
            current_month: self.current_month,
            loading: self.is_loading(),
            is_today: self.selected_date == now.date_naive(),
            disabled_days: self.disabled_days(),
            morning: view_model::morning_appointments(appointments),
            afternoon: view_model::afternoon_appointments(appointments),
            next_appointment: view_model::next_appointment(appointments, now).cloned(),
            selected_date_as_text: view_model::selected_date_as_text(self.selected_date),
            selected_week_day_as_text: view_model::selected_week_day_as_text(self.selected_date),
        }
    }

    fn month_request(&self) -> MonthRequest {
        MonthRequest {
            generation: self.month_availability.generation,
            provider_id: self.provider_id.clone(),
            year: self.current_month.year(),
            month: self.current_month.month(),
        }
    }

    fn day_request(&self) -> DayRequest {
        DayRequest {
            generation: self.appointments.generation,
            date: self.selected_date,
        }
    }
}
