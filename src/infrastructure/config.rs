use serde::Deserialize;
use std::collections::HashMap;

/// The store is always reached through its service name on the local network
pub const INFLUX_URL: &str = "http://influxdb:8086";

const DEFAULT_LISTEN: &str = "0.0.0.0:8000";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct InfluxSettings {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub org: String,
    #[serde(default)]
    pub bucket: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GatewaySettings {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySettings {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

fn default_listen() -> String {
    DEFAULT_LISTEN.to_string()
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub influx: InfluxSettings,
    pub gateway: GatewaySettings,
}

/// Read INFLUX_* and GATEWAY_* from the environment. Missing values fall
/// back to empty strings (or the default listen address) without validation.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let influx = config::Config::builder()
        .add_source(config::Environment::with_prefix("INFLUX"))
        .build()?
        .try_deserialize()?;

    let gateway = config::Config::builder()
        .add_source(config::Environment::with_prefix("GATEWAY"))
        .build()?
        .try_deserialize()?;

    Ok(AppConfig { influx, gateway })
}

/// Replace template variables in a query string
pub fn prepare_query(query: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = query.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
