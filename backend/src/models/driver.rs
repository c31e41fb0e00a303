//! Driver payloads.

use serde::{Deserialize, Serialize};

wire_status! {
    /// Employment status of a driver.
    pub enum DriverStatus {
        /// Available for assignment.
        Active => "active",
        /// Not currently employed.
        Inactive => "inactive",
        /// Temporarily away.
        OnLeave => "on_leave",
        /// Barred from driving.
        Suspended => "suspended",
    }
}

/// A fleet driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Driver {
    /// Driver identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Mobile number.
    pub mobile: String,
    /// Email address.
    pub email: Option<String>,
    /// Licence number.
    pub license_number: String,
    /// Licence expiry, `DD-MM-YYYY`.
    pub license_expiry: Option<String>,
    /// Licence class.
    pub license_type: Option<String>,
    /// Date of birth, `DD-MM-YYYY`.
    pub date_of_birth: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Emergency contact number.
    pub emergency_contact: Option<String>,
    /// Blood group.
    pub blood_group: Option<String>,
    /// Raw status; see [`Driver::driver_status`].
    pub status: String,
    /// Owning account.
    pub owner_id: i64,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl Default for Driver {
    fn default() -> Self {
        Self {
            id: 0,
            first_name: String::new(),
            last_name: String::new(),
            mobile: String::new(),
            email: None,
            license_number: String::new(),
            license_expiry: None,
            license_type: None,
            date_of_birth: None,
            address: None,
            emergency_contact: None,
            blood_group: None,
            status: DriverStatus::Active.as_str().to_owned(),
            owner_id: 0,
            created_at: None,
            updated_at: None,
        }
    }
}

impl Driver {
    /// `first last`, trimmed.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_owned()
    }

    /// Parsed status; unknown values read as active.
    #[must_use]
    pub fn driver_status(&self) -> DriverStatus {
        DriverStatus::from_wire(&self.status)
    }
}

/// Create or update a driver. Absent fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverRequest {
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Mobile number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Licence number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    /// Licence expiry, `DD-MM-YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_expiry: Option<String>,
    /// Licence class.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    /// Date of birth, `DD-MM-YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    /// Postal address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Emergency contact number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    /// Blood group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
}

/// Body of `PATCH /drivers/{id}/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverStatusRequest {
    /// Target status in wire form.
    pub status: String,
}

impl From<DriverStatus> for DriverStatusRequest {
    fn from(status: DriverStatus) -> Self {
        Self {
            status: status.as_str().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("on_leave", DriverStatus::OnLeave)]
    #[case("SUSPENDED", DriverStatus::Suspended)]
    #[case("", DriverStatus::Active)]
    #[case("retired", DriverStatus::Active)]
    fn status_parses_leniently(#[case] raw: &str, #[case] expected: DriverStatus) {
        assert_eq!(DriverStatus::from_wire(raw), expected);
    }

    #[test]
    fn missing_status_defaults_to_active() {
        let driver: Driver = serde_json::from_str(r#"{"id": 2, "mobile": "99"}"#).expect("decode");
        assert_eq!(driver.driver_status(), DriverStatus::Active);
    }
}
