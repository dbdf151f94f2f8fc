use slotbook_core::models::notification::{Notification, UnreadCount};

use crate::error::ApiError;
use crate::resources::ListPayload;
use crate::ApiClient;

pub async fn notifications(client: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    let payload: ListPayload<Notification> = client.get_json("/api/notification/").await?;
    Ok(payload.into_vec())
}

pub async fn unread_count(client: &ApiClient) -> Result<u64, ApiError> {
    let payload: UnreadCount = client.get_json("/api/notification/unread-count").await?;
    Ok(payload.count)
}

pub async fn mark_read(client: &ApiClient, notification_id: u64) -> Result<(), ApiError> {
    client
        .post_empty(&format!("/api/notification/{notification_id}/mark-read"))
        .await
}

pub async fn mark_all_read(client: &ApiClient) -> Result<(), ApiError> {
    client.post_empty("/api/notification/mark-all-read").await
}
