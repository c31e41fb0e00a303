//! Authentication and profile payloads.

use serde::{Deserialize, Serialize};

use crate::domain::role::UserRole;

/// Authenticated user as returned by login and profile endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User identifier.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Mobile number, if registered.
    pub mobile: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Raw role string; see [`User::role`].
    pub role: String,
    /// Creation timestamp as sent by the API.
    pub created_at: Option<String>,
    /// Last update timestamp as sent by the API.
    pub updated_at: Option<String>,
}

impl User {
    /// `first last`, trimmed when either part is empty.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Parsed role; unknown values fall back to supervisor.
    #[must_use]
    pub fn role(&self) -> UserRole {
        UserRole::from_wire(&self.role)
    }
}

/// Credentials for `POST /auth/login`. `identifier` is an email or mobile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email or mobile number.
    pub identifier: String,
    /// Plain-text password.
    pub password: String,
}

/// Payload of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponseData {
    /// Bearer token for later calls.
    pub token: String,
    /// The user who logged in.
    pub user: User,
}

/// Owner self-registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Login email.
    pub email: String,
    /// Mobile number.
    pub mobile: String,
    /// Chosen password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

/// Request a password reset email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForgotPasswordRequest {
    /// Account email.
    pub email: String,
}

/// Complete a password reset with the emailed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    /// Reset token.
    pub token: String,
    /// New password.
    pub password: String,
}

/// Change the password of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    /// Existing password.
    pub current_password: String,
    /// Replacement password.
    pub new_password: String,
}

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    /// New given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// New mobile number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn user_decodes_with_missing_fields() {
        let user: User =
            serde_json::from_value(json!({ "id": 3, "email": "o@fleet.in", "role": "owner" }))
                .expect("sparse user decodes");
        assert_eq!(user.id, 3);
        assert_eq!(user.first_name, "");
        assert!(user.mobile.is_none());
        assert_eq!(user.role(), UserRole::Owner);
    }

    #[rstest]
    #[case("Asha", "Rao", "Asha Rao")]
    #[case("Asha", "", "Asha")]
    #[case("", "", "")]
    fn full_name_is_trimmed(#[case] first: &str, #[case] last: &str, #[case] expected: &str) {
        let user = User {
            first_name: first.to_owned(),
            last_name: last.to_owned(),
            ..User::default()
        };
        assert_eq!(user.full_name(), expected);
    }

    #[test]
    fn login_response_uses_snake_case_user_fields() {
        let data: LoginResponseData = serde_json::from_value(json!({
            "token": "t-1",
            "user": { "id": 1, "first_name": "Ravi", "last_name": "K", "role": "MANAGER" }
        }))
        .expect("login payload decodes");
        assert_eq!(data.token, "t-1");
        assert_eq!(data.user.full_name(), "Ravi K");
        assert_eq!(data.user.role(), UserRole::Manager);
    }

    #[test]
    fn profile_update_omits_absent_fields() {
        let body = serde_json::to_value(UpdateProfileRequest {
            mobile: Some("9876543210".to_owned()),
            ..UpdateProfileRequest::default()
        })
        .expect("encode");
        assert_eq!(body, json!({ "mobile": "9876543210" }));
    }
}
