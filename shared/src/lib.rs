use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetcher;
pub mod profile;
pub mod session;

pub use config::ClientConfig;
pub use error::ApiError;
pub use session::Session;

/// Authenticated user as returned by the sessions and profile endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Public URL of the uploaded avatar, if any
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// User attached to an appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentUser {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Appointment exactly as `GET /appointments/me` serializes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub id: String,
    /// ISO 8601 timestamp, normally with an offset (e.g. "2021-03-05T12:00:00.000Z")
    pub date: String,
    pub user: AppointmentUser,
}

/// Appointment with its date parsed and the display hour computed once at load time
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
    /// Start of the appointment, in the viewer's display offset
    pub date: DateTime<FixedOffset>,
    /// "HH:mm" rendering of `date`
    pub hour_formatted: String,
    pub provider_user: AppointmentUser,
}

impl Appointment {
    /// Parse a wire appointment and normalize its date to `display_offset`.
    ///
    /// Timestamps without an offset are read as wall-clock time in `display_offset`.
    pub fn from_response(
        response: AppointmentResponse,
        display_offset: &FixedOffset,
    ) -> Result<Self, ApiError> {
        let date = parse_timestamp(&response.date, display_offset)?;

        Ok(Self {
            id: response.id,
            hour_formatted: date.format("%H:%M").to_string(),
            date,
            provider_user: response.user,
        })
    }

    /// Hour of day (0-23) in the display offset
    pub fn hour(&self) -> u32 {
        self.date.hour()
    }
}

/// Convert a whole day's payload; a single bad date rejects the batch.
pub fn parse_appointments(
    responses: Vec<AppointmentResponse>,
    display_offset: &FixedOffset,
) -> Result<Vec<Appointment>, ApiError> {
    responses
        .into_iter()
        .map(|response| Appointment::from_response(response, display_offset))
        .collect()
}

fn parse_timestamp(
    value: &str,
    display_offset: &FixedOffset,
) -> Result<DateTime<FixedOffset>, ApiError> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Ok(date.with_timezone(display_offset));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .and_then(|naive| display_offset.from_local_datetime(&naive).single())
        .ok_or_else(|| ApiError::InvalidDate {
            value: value.to_string(),
        })
}

/// One entry of `GET /providers/:id/month-availability`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilityDay {
    /// Day of month (1-31)
    pub day: u32,
    pub available: bool,
}

/// Body of `PUT /profile`
///
/// Password fields are only sent when the user typed their current password.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "confirmPassword", skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brasilia() -> FixedOffset {
        FixedOffset::west_opt(3 * 3600).unwrap()
    }

    fn response(date: &str) -> AppointmentResponse {
        AppointmentResponse {
            id: "a1".to_string(),
            date: date.to_string(),
            user: AppointmentUser {
                name: "Diego".to_string(),
                avatar_url: None,
            },
        }
    }

    #[test]
    fn test_from_response_converts_to_display_offset() {
        let appointment =
            Appointment::from_response(response("2021-03-05T12:00:00.000Z"), &brasilia()).unwrap();

        assert_eq!(appointment.hour(), 9);
        assert_eq!(appointment.hour_formatted, "09:00");
        assert_eq!(appointment.date.offset(), &brasilia());
    }

    #[test]
    fn test_from_response_reads_naive_timestamp_as_local() {
        let appointment =
            Appointment::from_response(response("2021-03-05T14:30:00"), &brasilia()).unwrap();

        assert_eq!(appointment.hour_formatted, "14:30");
    }

    #[test]
    fn test_from_response_rejects_garbage() {
        let err = Appointment::from_response(response("tomorrow"), &brasilia()).unwrap_err();
        assert_eq!(err, ApiError::InvalidDate { value: "tomorrow".to_string() });
    }

    #[test]
    fn test_parse_appointments_is_all_or_nothing() {
        let batch = vec![response("2021-03-05T12:00:00Z"), response("not a date")];
        assert!(parse_appointments(batch, &brasilia()).is_err());
    }

    #[test]
    fn test_appointment_response_deserializes_without_avatar() {
        let json = r#"{"id":"x","date":"2021-03-05T09:00:00Z","user":{"name":"Ana"}}"#;
        let parsed: AppointmentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.user.avatar_url, None);
    }

    #[test]
    fn test_update_profile_request_omits_passwords() {
        let request = UpdateProfileRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            old_password: None,
            password: None,
            confirm_password: None,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Ana", "email": "ana@example.com" }));
    }

    #[test]
    fn test_update_profile_request_uses_camel_case_confirmation() {
        let request = UpdateProfileRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            old_password: Some("123456".to_string()),
            password: Some("654321".to_string()),
            confirm_password: Some("654321".to_string()),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["confirmPassword"], "654321");
        assert_eq!(json["old_password"], "123456");
    }
}
