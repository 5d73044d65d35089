//! Dashboard page logic.
//!
//! Everything the dashboard shows is derived from a small amount of fetched
//! state: the selected day's appointments and the visible month's
//! availability. The view model functions are pure; the store owns the
//! fetched slices and decides which completions are still current.

pub mod calendar;
pub mod controller;
pub mod locale;
pub mod store;
pub mod view_model;

pub use controller::DashboardController;
pub use store::{DashboardStore, DayRequest, LoadOutcome, MonthRequest};
pub use view_model::DashboardView;
