use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};

pub const MIN_DURATION_MINUTES: i32 = 15;
pub const MAX_DURATION_MINUTES: i32 = 360;
pub const MAX_PRICE: f64 = 1_000_000.0;

/// A named offering a master provides, optionally attached to slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub master_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub duration: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub duration: i32,
}

impl CreateServiceRequest {
    pub fn validate(&self) -> BookingResult<()> {
        validate_offering(&self.name, self.price, self.duration)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateServiceRequest {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub duration: i32,
}

impl UpdateServiceRequest {
    pub fn validate(&self) -> BookingResult<()> {
        validate_offering(&self.name, self.price, self.duration)
    }
}

/// Client-side bounds check run before create/update submissions. The
/// backend enforces the same limits; failing early keeps bad payloads off
/// the wire.
fn validate_offering(name: &str, price: f64, duration: i32) -> BookingResult<()> {
    if name.trim().is_empty() {
        return Err(BookingError::Validation(
            "Service name must not be empty".to_string(),
        ));
    }
    if !(0.0..=MAX_PRICE).contains(&price) {
        return Err(BookingError::Validation(format!(
            "Price must be between 0 and {}, got {}",
            MAX_PRICE, price
        )));
    }
    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&duration) {
        return Err(BookingError::Validation(format!(
            "Duration must be between {} and {} minutes, got {}",
            MIN_DURATION_MINUTES, MAX_DURATION_MINUTES, duration
        )));
    }
    Ok(())
}
