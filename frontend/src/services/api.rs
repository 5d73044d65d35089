use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::fetcher::{AppointmentFetcher, ProfileClient};
use shared::{
    parse_appointments, Appointment, ApiError, AppointmentResponse, ClientConfig,
    MonthAvailabilityDay, Session,
    UpdateProfileRequest, User,
};
use tracing::debug;
use web_sys::{File, FormData};

/// API client for the GoBarber backend, authenticated as one session
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    config: ClientConfig,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ClientConfig, session: Session) -> Self {
        Self { config, session }
    }

    /// Upload a new avatar (multipart field `avatar`) and return the updated user
    pub async fn update_avatar(&self, file: File) -> Result<User, ApiError> {
        let form = FormData::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
        form.append_with_blob("avatar", &file)
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let response = Request::patch(&self.config.endpoint("/users/avatar"))
            .header("Authorization", &self.session.authorization_header())
            .body(form)
            .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let response = Request::get(&self.config.endpoint(path))
            .header("Authorization", &self.session.authorization_header())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }
}

#[async_trait(?Send)]
impl AppointmentFetcher for ApiClient {
    async fn load_month_availability(
        &self,
        provider_id: &str,
        year: i32,
        month: u32,
    ) -> Result<Vec<MonthAvailabilityDay>, ApiError> {
        self.get(&month_availability_path(provider_id, year, month)).await
    }

    async fn load_day_appointments(
        &self,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Vec<Appointment>, ApiError> {
        let path = day_appointments_path(year, month, day);
        let responses: Vec<AppointmentResponse> = self.get(&path).await?;
        parse_appointments(responses, &self.config.display_offset)
    }
}

#[async_trait(?Send)]
impl ProfileClient for ApiClient {
    async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<User, ApiError> {
        let response = Request::put(&self.config.endpoint("/profile"))
            .header("Authorization", &self.session.authorization_header())
            .json(request)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response).await
    }
}

pub fn month_availability_path(provider_id: &str, year: i32, month: u32) -> String {
    format!("/providers/{}/month-availability?year={}&month={}", provider_id, year, month)
}

pub fn day_appointments_path(year: i32, month: u32, day: u32) -> String {
    format!("/appointments/me?year={}&month={}&day={}", year, month, day)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::from_status(status, error_text));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_availability_path() {
        assert_eq!(
            month_availability_path("p-1", 2021, 3),
            "/providers/p-1/month-availability?year=2021&month=3"
        );
    }

    #[test]
    fn test_day_appointments_path() {
        assert_eq!(day_appointments_path(2021, 12, 5), "/appointments/me?year=2021&month=12&day=5");
    }
}
