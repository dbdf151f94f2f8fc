use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Approval lifecycle of a booking request.
///
/// The backend stores the status as a bare string; statuses this client
/// does not know about must not poison a whole list fetch, so they land in
/// `Unknown` and are rendered like a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RecordStatus {
    Pending,
    Confirm,
    Reject,
    Unknown,
}

impl From<String> for RecordStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => RecordStatus::Pending,
            "confirm" => RecordStatus::Confirm,
            "reject" => RecordStatus::Reject,
            _ => RecordStatus::Unknown,
        }
    }
}

/// A client's request to book a specific slot.
///
/// At most one active record exists per (slot, client) pair; the backend
/// enforces the uniqueness. Records are never deleted through the normal
/// flow; a rejected record stays while the client may request again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub slot_id: u64,
    pub client_id: Uuid,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRecordRequest {
    pub slot_id: u64,
    pub client_id: Uuid,
}
