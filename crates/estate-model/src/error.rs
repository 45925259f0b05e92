use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid project code: {0}")]
    InvalidProjectCode(String),
    #[error("invalid building code: {0}")]
    InvalidBuildingCode(String),
    #[error("invalid unit code: {0}")]
    InvalidUnitCode(String),
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    #[error("unknown prefix: {0}")]
    UnknownPrefix(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
