//! Team member payloads. Only owners manage the team.

use serde::{Deserialize, Serialize};

use crate::domain::role::UserRole;

/// A manager or supervisor account under an owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMember {
    /// Member identifier.
    pub id: i64,
    /// Login email.
    pub email: String,
    /// Mobile number.
    pub mobile: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Raw role string.
    pub role: String,
    /// Owning account.
    pub owner_id: i64,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl TeamMember {
    /// `first last`, trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Parsed role.
    #[must_use]
    pub fn role(&self) -> UserRole {
        UserRole::from_wire(&self.role)
    }
}

/// Invite a manager or supervisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTeamMemberRequest {
    /// Login email.
    pub email: String,
    /// Mobile number.
    pub mobile: String,
    /// Initial password.
    pub password: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// `manager` or `supervisor`.
    pub role: String,
}

/// Partial team member update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTeamMemberRequest {
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Mobile number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}
