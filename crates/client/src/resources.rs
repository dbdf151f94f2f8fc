pub mod notification;
pub mod record;
pub mod service;
pub mod slot;
pub mod user;

use serde::Deserialize;

/// List payloads as the backend has actually served them: a bare array or
/// an object wrapping it under one of a few historical keys.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListPayload<T> {
    Bare(Vec<T>),
    Data { data: Vec<T> },
    Slots { slots: Vec<T> },
    Services { services: Vec<T> },
}

impl<T> ListPayload<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Bare(items) => items,
            ListPayload::Data { data } => data,
            ListPayload::Slots { slots } => slots,
            ListPayload::Services { services } => services,
        }
    }
}
