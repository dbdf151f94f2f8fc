use uuid::Uuid;

use slotbook_core::models::service::{CreateServiceRequest, Service, UpdateServiceRequest};

use crate::error::ApiError;
use crate::resources::ListPayload;
use crate::ApiClient;

pub async fn services_for_master(
    client: &ApiClient,
    master_id: Uuid,
) -> Result<Vec<Service>, ApiError> {
    let payload: ListPayload<Service> = client
        .get_json(&format!("/api/service/master/{master_id}"))
        .await?;
    Ok(payload.into_vec())
}

pub async fn service_by_id(client: &ApiClient, service_id: u64) -> Result<Service, ApiError> {
    client.get_json(&format!("/api/service/{service_id}")).await
}

/// Validates the bounds locally before submitting; owner-initiated
/// mutations surface their failures instead of failing open.
pub async fn create_service(
    client: &ApiClient,
    request: &CreateServiceRequest,
) -> Result<Service, ApiError> {
    request.validate()?;
    client.post_json("/api/service/create", request).await
}

pub async fn update_service(
    client: &ApiClient,
    request: &UpdateServiceRequest,
) -> Result<Service, ApiError> {
    request.validate()?;
    client.put_json("/api/service/update", request).await
}

pub async fn delete_service(client: &ApiClient, service_id: u64) -> Result<(), ApiError> {
    client.delete(&format!("/api/service/{service_id}")).await
}
