//! # Backend seams
//!
//! Traits the page logic is written against. The browser implements them
//! over HTTP; tests implement them in memory.

use async_trait::async_trait;

use crate::{Appointment, ApiError, MonthAvailabilityDay, UpdateProfileRequest, User};

/// Read queries backing the dashboard
#[async_trait(?Send)]
pub trait AppointmentFetcher {
    /// Availability of every day of `month` (1-indexed) for a provider
    async fn load_month_availability(
        &self,
        provider_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<MonthAvailabilityDay>, ApiError>;

    /// Appointments of the authenticated user on one day, ordered by date
    async fn load_day_appointments(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Vec<Appointment>, ApiError>;
}

/// Write side of the profile page
#[async_trait(?Send)]
pub trait ProfileClient {
    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, ApiError>;
}
