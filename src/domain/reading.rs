// Reading domain model - what the dashboard endpoints return
use chrono::{DateTime, FixedOffset};

pub const TEMP_FIELD: &str = "temp";
pub const HUM_FIELD: &str = "hum";

const HISTORY_TIME_FORMAT: &str = "%d/%m %Hh";

/// Round to one decimal place from the exact binary value, ties to even.
/// Float formatting is exact, so going through it avoids the error of `x * 10.0`.
pub fn round1(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

/// Parse a `days` path segment. Anything integral is accepted, including
/// zero, negatives and values past i64.
pub fn parse_days(raw: &str) -> Option<i128> {
    raw.parse().ok()
}

/// Latest temperature and humidity values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LiveReading {
    pub temp: Option<f64>,
    pub hum: Option<i64>,
}

impl LiveReading {
    /// Apply one field/value pair; later values overwrite earlier ones
    pub fn record(&mut self, field: &str, value: f64) {
        match field {
            TEMP_FIELD => self.temp = Some(round1(value)),
            // Truncates toward zero
            HUM_FIELD => self.hum = Some(value as i64),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureAverage {
    pub days: i128,
    pub temp_avg: Option<f64>,
}

impl TemperatureAverage {
    pub fn new(days: i128, mean: Option<f64>) -> Self {
        Self {
            days,
            temp_avg: mean.map(round1),
        }
    }
}

/// Hourly temperature series as two parallel arrays
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureHistory {
    pub timestamps: Vec<String>,
    pub temperatures: Vec<f64>,
}

impl TemperatureHistory {
    pub fn push(&mut self, time: &DateTime<FixedOffset>, value: f64) {
        self.timestamps
            .push(time.format(HISTORY_TIME_FORMAT).to_string());
        self.temperatures.push(round1(value));
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
