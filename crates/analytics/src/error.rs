use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("not enough data to compute {0}")]
    NotEnoughData(String),
}
