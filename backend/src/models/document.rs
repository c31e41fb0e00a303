//! Vehicle document payloads.

use serde::{Deserialize, Serialize};

wire_status! {
    /// Verification status of a document.
    pub enum DocumentStatus {
        /// Uploaded, not reviewed.
        Pending => "pending",
        /// Accepted.
        Verified => "verified",
        /// Refused.
        Rejected => "rejected",
        /// Past its expiry date.
        Expired => "expired",
    }
}

/// Document attached to a vehicle, such as insurance or permit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleDocument {
    /// Document identifier.
    pub id: i64,
    /// Owning vehicle.
    pub vehicle_id: i64,
    /// Type code.
    pub document_type: String,
    /// Type label.
    pub document_type_label: Option<String>,
    /// Download URL.
    pub file_url: Option<String>,
    /// Original file name.
    pub file_name: Option<String>,
    /// Expiry, `DD-MM-YYYY`.
    pub expiry_date: Option<String>,
    /// Raw status; see [`VehicleDocument::document_status`].
    pub status: String,
    /// Reviewer notes.
    pub notes: Option<String>,
    /// Reviewer.
    pub verified_by: Option<i64>,
    /// Review timestamp.
    pub verified_at: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
    /// Last update timestamp.
    pub updated_at: Option<String>,
}

impl Default for VehicleDocument {
    fn default() -> Self {
        Self {
            id: 0,
            vehicle_id: 0,
            document_type: String::new(),
            document_type_label: None,
            file_url: None,
            file_name: None,
            expiry_date: None,
            status: DocumentStatus::Pending.as_str().to_owned(),
            notes: None,
            verified_by: None,
            verified_at: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl VehicleDocument {
    /// Parsed status; unknown values read as pending.
    #[must_use]
    pub fn document_status(&self) -> DocumentStatus {
        DocumentStatus::from_wire(&self.status)
    }
}

/// Entry of `GET /documents/types`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    /// Type code.
    #[serde(rename = "type")]
    pub kind: String,
    /// Display label.
    pub label: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Accept or reject a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyDocumentRequest {
    /// `verified` or `rejected`.
    pub status: String,
    /// Reviewer notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Partial document update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateDocumentRequest {
    /// New expiry, `DD-MM-YYYY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<String>,
    /// New notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
