use thiserror::Error;

/// Failure talking to the time-series store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("InfluxDB request failed: {0}")]
    Request(String),

    #[error("Failed to decode InfluxDB response: {0}")]
    Decode(String),
}
