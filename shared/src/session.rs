use serde::{Deserialize, Serialize};

use crate::User;

/// Local storage key holding the bearer token
pub const TOKEN_STORAGE_KEY: &str = "@GoBarber:token";
/// Local storage key holding the JSON-encoded user
pub const USER_STORAGE_KEY: &str = "@GoBarber:user";

/// Authenticated user context, handed explicitly to the pages that need it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// The logged-in user is the provider whose month availability is shown
    pub fn provider_id(&self) -> &str {
        &self.user.id
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Same token, refreshed user (after a profile or avatar update)
    pub fn with_user(&self, user: User) -> Self {
        Self {
            token: self.token.clone(),
            user,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "provider-1".to_string(),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            avatar_url: None,
        }
    }

    #[test]
    fn test_session_accessors() {
        let session = Session::new("jwt", user());
        assert_eq!(session.provider_id(), "provider-1");
        assert_eq!(session.authorization_header(), "Bearer jwt");
    }

    #[test]
    fn test_with_user_keeps_token() {
        let session = Session::new("jwt", user());
        let renamed = User { name: "Ana Maria".to_string(), ..user() };

        let updated = session.with_user(renamed.clone());
        assert_eq!(updated.token, "jwt");
        assert_eq!(updated.user, renamed);
    }
}
