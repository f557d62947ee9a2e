use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("portfolio data is unusable: {0}")]
    InvalidData(String),
}
