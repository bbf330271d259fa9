//! Status envelope returned by write operations
//!
//! `{"Status": "...", "Error": "..."}`. `Error` only appears when the
//! database driver reported a failure.

use serde::{Deserialize, Serialize};

pub const DATA_INSERTED: &str = "Data Inserted Successfully";
pub const DATA_NOT_INSERTED: &str = "Data Not Inserted";
pub const DATA_UPDATED: &str = "Data Updated Successfully";
pub const DATA_NOT_UPDATED: &str = "Data Not Updated";
pub const DATA_DELETED: &str = "Data Deleted Successfully";
pub const DATA_NOT_DELETED: &str = "Data Not Deleted";
pub const DATA_NOT_RETRIEVED: &str = "Data Not Retrieved";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEnvelope {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Error", skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl StatusEnvelope {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            error: None,
        }
    }

    pub fn failed(status: impl Into<String>, error: impl ToString) -> Self {
        Self {
            status: status.into(),
            error: Some(error.to_string()),
        }
    }

    pub fn inserted() -> Self {
        Self::status(DATA_INSERTED)
    }

    pub fn updated() -> Self {
        Self::status(DATA_UPDATED)
    }

    pub fn not_updated() -> Self {
        Self::status(DATA_NOT_UPDATED)
    }

    pub fn deleted() -> Self {
        Self::status(DATA_DELETED)
    }
}
