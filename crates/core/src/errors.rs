use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid filter selection: {0}")]
    InvalidFilter(String),

    #[error("Authentication required")]
    AuthRequired,

    #[error("Backend error: {0}")]
    Backend(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
