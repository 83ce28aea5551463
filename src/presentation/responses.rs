// JSON payloads, one per route. Failures keep the success keys and add `error`.
use crate::domain::reading::{LiveReading, TemperatureAverage, TemperatureHistory};
use serde::Serialize;

pub const LIVE_FAILURE_MESSAGE: &str = "Database connection failed";

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LiveResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub temp: Option<f64>,
    pub hum: Option<i64>,
}

impl LiveResponse {
    pub fn failed() -> Self {
        Self {
            error: Some(LIVE_FAILURE_MESSAGE.to_string()),
            temp: None,
            hum: None,
        }
    }
}

impl From<LiveReading> for LiveResponse {
    fn from(reading: LiveReading) -> Self {
        Self {
            error: None,
            temp: reading.temp,
            hum: reading.hum,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AverageResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Null only when the path segment was not an integer
    pub days: Option<i128>,
    pub temp_avg: Option<f64>,
}

impl AverageResponse {
    pub fn failed(days: Option<i128>, error: String) -> Self {
        Self {
            error: Some(error),
            days,
            temp_avg: None,
        }
    }
}

impl From<TemperatureAverage> for AverageResponse {
    fn from(avg: TemperatureAverage) -> Self {
        Self {
            error: None,
            days: Some(avg.days),
            temp_avg: avg.temp_avg,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamps: Vec<String>,
    pub temperatures: Vec<f64>,
}

impl HistoryResponse {
    pub fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            timestamps: Vec::new(),
            temperatures: Vec::new(),
        }
    }
}

impl From<TemperatureHistory> for HistoryResponse {
    fn from(history: TemperatureHistory) -> Self {
        Self {
            error: None,
            timestamps: history.timestamps,
            temperatures: history.temperatures,
        }
    }
}
