// InfluxDB repository implementation
use crate::application::sensor_repository::{QueryRecord, SensorRepository};
use crate::infrastructure::error::RepositoryError;
use async_trait::async_trait;
use influxdb2::api::query::FluxRecord;
use influxdb2::models::Query;
use influxdb2::Client;
use influxdb2_structmap::value::Value;

#[derive(Debug, Clone)]
pub struct InfluxRepository {
    url: String,
    org: String,
    token: String,
}

impl InfluxRepository {
    pub fn new(url: String, org: String, token: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            org,
            token,
        }
    }

    fn connect(&self) -> Client {
        Client::new(self.url.as_str(), self.org.as_str(), self.token.as_str())
    }
}

#[async_trait]
impl SensorRepository for InfluxRepository {
    async fn query(&self, flux: &str) -> Result<Vec<QueryRecord>, RepositoryError> {
        // One client per call, released when it goes out of scope on every path
        let client = self.connect();

        tracing::debug!("Executing Flux query: {}", flux);
        let records = client
            .query_raw(Some(Query::new(flux.to_string())))
            .await
            .map_err(|e| RepositoryError::Request(e.to_string()))?;

        tracing::debug!("Got {} records from InfluxDB", records.len());
        Ok(records.iter().map(to_query_record).collect())
    }
}

fn to_query_record(record: &FluxRecord) -> QueryRecord {
    let field = match record.values.get("_field") {
        Some(Value::String(name)) => Some(name.clone()),
        _ => None,
    };
    let time = match record.values.get("_time") {
        Some(Value::TimeRFC(time)) => Some(*time),
        _ => None,
    };
    let value = record.values.get("_value").and_then(numeric_value);

    QueryRecord { field, value, time }
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Double(v) => Some(v.into_inner()),
        Value::Long(v) => Some(*v as f64),
        Value::UnsignedLong(v) => Some(*v as f64),
        _ => None,
    }
}
