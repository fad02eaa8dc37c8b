use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A disclosure threshold or section limit below 1.
    #[error("invalid configuration: {what} must be at least 1 (got {value})")]
    InvalidConfiguration { what: String, value: usize },

    #[error("appointment not found: {0}")]
    AppointmentNotFound(Uuid),

    #[error("appointment already exists: {0}")]
    DuplicateAppointment(Uuid),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
