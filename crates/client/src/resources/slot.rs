use uuid::Uuid;

use slotbook_core::models::slot::{CreateSlotRequest, Slot};

use crate::error::ApiError;
use crate::resources::ListPayload;
use crate::ApiClient;

/// All slots published by a master, joined with master/service display
/// fields. `master` is the opaque public-page reference.
pub async fn slots_for_master(client: &ApiClient, master: &str) -> Result<Vec<Slot>, ApiError> {
    let payload: ListPayload<Slot> = client.get_json(&format!("/api/slot/{master}")).await?;
    Ok(payload.into_vec())
}

pub async fn create_slot(client: &ApiClient, request: &CreateSlotRequest) -> Result<Slot, ApiError> {
    client.post_json("/api/slot/master/create", request).await
}

pub async fn delete_slot(client: &ApiClient, slot_id: u64) -> Result<(), ApiError> {
    client.delete(&format!("/api/slot/master/one/{slot_id}")).await
}

pub async fn delete_all_slots(client: &ApiClient, master_id: Uuid) -> Result<(), ApiError> {
    client.delete(&format!("/api/slot/master/{master_id}")).await
}
