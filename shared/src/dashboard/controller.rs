use std::cell::{Ref, RefCell};

use chrono::{DateTime, FixedOffset, NaiveDate};
use futures::join;
use tracing::info;

use super::store::{DashboardStore, DayRequest, LoadOutcome, MonthRequest};
use super::view_model::DashboardView;
use crate::fetcher::AppointmentFetcher;

/// Drives a [`DashboardStore`] against an [`AppointmentFetcher`].
///
/// Input changes are synchronous so the caller can re-render right away;
/// the matching load is a separate future. The store is never borrowed
/// across an await, so several loads may be in flight at once.
pub struct DashboardController<F> {
    fetcher: F,
    store: RefCell<DashboardStore>,
}

impl<F: AppointmentFetcher> DashboardController<F> {
    /// Dashboard of `provider_id` opened on `today`
    pub fn new(fetcher: F, provider_id: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            fetcher,
            store: RefCell::new(DashboardStore::new(provider_id, today)),
        }
    }

    pub fn store(&self) -> Ref<'_, DashboardStore> {
        self.store.borrow()
    }

    pub fn view(&self, now: &DateTime<FixedOffset>) -> DashboardView {
        self.store.borrow().view(now)
    }

    /// Issue the loads the page starts with; both are in flight together
    pub async fn mount(&self) {
        let (month, day) = {
            let store = self.store.borrow();
            (store.pending_month_request(), store.pending_day_request())
        };

        let month_load = async {
            if let Some(request) = month {
                self.load_month(request).await;
            }
        };
        let day_load = async {
            if let Some(request) = day {
                self.load_day(request).await;
            }
        };
        join!(month_load, day_load);
    }

    pub fn select_date(&self, date: NaiveDate) -> Option<DayRequest> {
        self.store.borrow_mut().select_date(date)
    }

    pub fn change_month(&self, month: NaiveDate) -> MonthRequest {
        self.store.borrow_mut().change_month(month)
    }

    pub async fn load_month(&self, request: MonthRequest) -> LoadOutcome {
        info!(
            provider_id = %request.provider_id,
            year = request.year,
            month = request.month,
            "loading month availability"
        );
        let result = self
            .fetcher
            .load_month_availability(&request.provider_id, request.year, request.month)
            .await;

        self.store.borrow_mut().complete_month_load(request.generation, result)
    }

    pub async fn load_day(&self, request: DayRequest) -> LoadOutcome {
        info!(date = %request.date, "loading appointments");
        let result = self
            .fetcher
            .load_day_appointments(request.year(), request.month(), request.day())
            .await;

        self.store.borrow_mut().complete_day_load(request.generation, result)
    }

    /// Select a day and load its appointments; `None` when the day is disabled
    pub async fn select_date_and_load(&self, date: NaiveDate) -> Option<LoadOutcome> {
        let request = self.select_date(date)?;
        Some(self.load_day(request).await)
    }

    /// Switch the calendar month and load its availability
    pub async fn change_month_and_load(&self, month: NaiveDate) -> LoadOutcome {
        let request = self.change_month(month);
        self.load_month(request).await
    }
}
