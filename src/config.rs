use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub poll_interval: Duration,
    pub clock_interval: Duration,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/data.json".to_string(),
            poll_interval: Duration::from_millis(1000),
            clock_interval: Duration::from_millis(1000),
            fetch_timeout: Duration::from_millis(3000),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = env::var("STATION_URL") {
            config.endpoint = endpoint;
        }
        if let Some(millis) = env::var("STATION_POLL_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
        {
            config.poll_interval = Duration::from_millis(millis);
            config.clock_interval = Duration::from_millis(millis);
        }
        config
    }
}
