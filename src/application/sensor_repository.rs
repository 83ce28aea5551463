// Repository trait for sensor data access
use crate::infrastructure::error::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

/// One row of a tabular query result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryRecord {
    pub field: Option<String>,
    pub value: Option<f64>,
    pub time: Option<DateTime<FixedOffset>>,
}

#[async_trait]
pub trait SensorRepository: Send + Sync {
    /// Run a Flux query and return every record of every table, in order
    async fn query(&self, flux: &str) -> Result<Vec<QueryRecord>, RepositoryError>;
}
