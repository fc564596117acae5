use thiserror::Error;

use crate::domain::errors::DomainError;

/// Failures surfaced to the person at the dashboard.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound(id) => AppError::NotFound(format!("order {}", id)),
            DomainError::InvalidInput(msg) => AppError::InvalidCommand(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl AppError {
    /// Line shown under the table; internal details stay in the log.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NotFound(what) => format!("Tidak ditemukan: {}", what),
            AppError::InvalidCommand(msg) => format!("Perintah tidak valid: {}", msg),
            AppError::Config(msg) => format!("Konfigurasi salah: {}", msg),
            AppError::Internal(_) => "Terjadi kesalahan, coba lagi".to_string(),
        }
    }
}
