use uuid::Uuid;

use slotbook_core::models::record::{CreateRecordRequest, Record};

use crate::error::ApiError;
use crate::resources::ListPayload;
use crate::ApiClient;

/// Submits a booking request. Fails with [`ApiError::DuplicateBooking`]
/// when the client already holds an active record for the slot.
pub async fn create_record(
    client: &ApiClient,
    request: &CreateRecordRequest,
) -> Result<Record, ApiError> {
    client.post_json("/api/record/master/create", request).await
}

/// Every record this client ever created, any status.
pub async fn records_for_client(
    client: &ApiClient,
    client_id: Uuid,
) -> Result<Vec<Record>, ApiError> {
    let payload: ListPayload<Record> = client.get_json(&format!("/api/record/{client_id}")).await?;
    Ok(payload.into_vec())
}

/// Incoming requests on one of the master's slots.
pub async fn records_for_slot(client: &ApiClient, slot_id: u64) -> Result<Vec<Record>, ApiError> {
    let payload: ListPayload<Record> = client
        .get_json(&format!("/api/record/master/{slot_id}"))
        .await?;
    Ok(payload.into_vec())
}

pub async fn confirm_record(client: &ApiClient, record_id: u64) -> Result<(), ApiError> {
    client
        .post_empty(&format!("/api/record/master/confirm/{record_id}"))
        .await
}

pub async fn reject_record(client: &ApiClient, record_id: u64) -> Result<(), ApiError> {
    client
        .post_empty(&format!("/api/record/master/reject/{record_id}"))
        .await
}
