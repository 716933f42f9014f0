use thiserror::Error;
use uuid::Uuid;

pub mod company;
pub mod employee;
pub mod submission;
pub mod time_entry;
pub mod timesheet_report;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Database query error: {0}")]
    DatabaseQueryError(#[from] dao::DaoError),

    #[error("Entity not found: {0}")]
    EntityNotFound(Uuid),

    #[error("Invalid duration value: {0}")]
    InvalidDuration(#[from] timesheet_utils::InvalidClockHours),
}
