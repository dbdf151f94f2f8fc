use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bookable time window published by a master.
///
/// List endpoints return slots joined with display fields of the owning
/// master and the attached service; those fields are optional on the wire
/// and absent when a bare slot is returned. `is_booked` is
/// server-authoritative: it flips once any record on the slot is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    pub id: u64,
    pub master_id: Uuid,
    #[serde(default)]
    pub service_id: Option<u64>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_booked: bool,

    #[serde(default)]
    pub service_name: Option<String>,
    #[serde(default)]
    pub master_name: Option<String>,
    #[serde(default)]
    pub master_surname: Option<String>,
    #[serde(default)]
    pub master_telegram_id: Option<i64>,
    #[serde(default)]
    pub master_phone: Option<String>,
    #[serde(default)]
    pub master_timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub service_id: u64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}
