use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("Donor not found: {name}")]
    DonorNotFound { name: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
