// Weather service - Builds the Flux queries and shapes their results
use crate::application::sensor_repository::SensorRepository;
use crate::domain::reading::{
    LiveReading, TemperatureAverage, TemperatureHistory, HUM_FIELD, TEMP_FIELD,
};
use crate::infrastructure::config::prepare_query;
use crate::infrastructure::error::RepositoryError;
use std::collections::HashMap;
use std::sync::Arc;

const LIVE_QUERY: &str = r#"from(bucket: "${bucket}")
  |> range(start: -24h)
  |> last()"#;

const AVERAGE_QUERY: &str = r#"from(bucket: "${bucket}")
  |> range(start: -${days}d)
  |> filter(fn: (r) => r._field == "temp")
  |> mean()"#;

const HISTORY_QUERY: &str = r#"from(bucket: "${bucket}")
  |> range(start: -${days}d)
  |> filter(fn: (r) => r._field == "temp")
  |> aggregateWindow(every: 1h, fn: mean, createEmpty: false)"#;

#[derive(Clone)]
pub struct WeatherService {
    repository: Arc<dyn SensorRepository>,
    bucket: String,
}

impl WeatherService {
    pub fn new(repository: Arc<dyn SensorRepository>, bucket: String) -> Self {
        Self { repository, bucket }
    }

    fn query_vars(&self, days: Option<i128>) -> HashMap<&'static str, String> {
        let mut vars = HashMap::new();
        vars.insert("bucket", self.bucket.clone());
        if let Some(days) = days {
            vars.insert("days", days.to_string());
        }
        vars
    }

    /// Most recent temp/hum values over the last 24 hours
    pub async fn live(&self) -> Result<LiveReading, RepositoryError> {
        let query = prepare_query(LIVE_QUERY, &self.query_vars(None));
        let records = self.repository.query(&query).await?;

        let mut reading = LiveReading::default();
        for record in records {
            let Some(field) = record.field else {
                continue;
            };
            if field != TEMP_FIELD && field != HUM_FIELD {
                continue;
            }
            let value = record.value.ok_or_else(|| {
                RepositoryError::Decode(format!("record for field {} has no numeric value", field))
            })?;
            if !value.is_finite() {
                return Err(RepositoryError::Decode(format!(
                    "record for field {} has non-finite value {}",
                    field, value
                )));
            }
            reading.record(&field, value);
        }

        Ok(reading)
    }

    /// Mean temperature over the trailing `days` days
    pub async fn average(&self, days: i128) -> Result<TemperatureAverage, RepositoryError> {
        let query = prepare_query(AVERAGE_QUERY, &self.query_vars(Some(days)));
        let records = self.repository.query(&query).await?;

        // With several tables the last record wins
        let mut mean = None;
        for record in records {
            let value = record.value.ok_or_else(|| {
                RepositoryError::Decode("mean record has no numeric value".to_string())
            })?;
            mean = Some(value);
        }

        Ok(TemperatureAverage::new(days, mean))
    }

    /// Hourly mean temperatures over the trailing `days` days
    pub async fn history(&self, days: i128) -> Result<TemperatureHistory, RepositoryError> {
        let query = prepare_query(HISTORY_QUERY, &self.query_vars(Some(days)));
        let records = self.repository.query(&query).await?;

        let mut history = TemperatureHistory::default();
        for record in records {
            match (record.time, record.value) {
                (Some(time), Some(value)) => history.push(&time, value),
                _ => {
                    return Err(RepositoryError::Decode(
                        "window record is missing _time or _value".to_string(),
                    ))
                }
            }
        }

        if history.is_empty() {
            tracing::debug!("No hourly temperature data in the last {} days", days);
        } else {
            tracing::debug!("Built {} hourly points for {} days", history.len(), days);
        }
        Ok(history)
    }
}
