use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::slot::Slot;

/// The authenticated platform user, as persisted with the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub phone: String,
    pub telegram_id: i64,
    pub first_name: String,
    pub surname: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub active: bool,
}

/// Public display data of a master, as served by the public-user endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub telegram_id: Option<i64>,
}

impl PublicProfile {
    /// Fallback profile assembled from the joined master fields of a slot,
    /// used until the public-user endpoint answers.
    pub fn from_slot(slot: &Slot) -> Self {
        Self {
            id: slot.master_id,
            first_name: slot.master_name.clone(),
            surname: slot.master_surname.clone(),
            telegram_id: slot.master_telegram_id,
        }
    }
}
