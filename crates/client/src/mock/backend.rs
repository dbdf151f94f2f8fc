use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use slotbook_core::models::record::{CreateRecordRequest, Record};
use slotbook_core::models::service::Service;
use slotbook_core::models::slot::Slot;
use slotbook_core::models::user::PublicProfile;

use crate::error::ApiError;
use crate::BookingApi;

// Mock backend for testing the view layer without a server.
mock! {
    pub Backend {}

    #[async_trait]
    impl BookingApi for Backend {
        async fn slots_for_master(&self, master: &str) -> Result<Vec<Slot>, ApiError>;

        async fn services_for_master(&self, master_id: Uuid) -> Result<Vec<Service>, ApiError>;

        async fn records_for_client(&self, client_id: Uuid) -> Result<Vec<Record>, ApiError>;

        async fn create_record(&self, request: CreateRecordRequest) -> Result<Record, ApiError>;

        async fn public_profile(&self, master: &str) -> Result<PublicProfile, ApiError>;

        async fn unread_notifications(&self) -> Result<u64, ApiError>;
    }
}
