//! CLI configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use country_picker::PlusOnePreference;
use dotenvy::dotenv;
use verify::MockOptions;

/// Knobs for the mocked backend and the picker default. Everything is
/// optional; defaults match the mobile app.
#[derive(Debug, Clone)]
pub struct Config {
    pub latency: Duration,
    pub send_failure_rate: f32,
    pub accepted_code: String,
    pub plus_one: PlusOnePreference,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let latency_ms: u64 = env::var("OTP_LATENCY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .context("OTP_LATENCY_MS must be a number of milliseconds")?;
        let send_failure_rate: f32 = env::var("OTP_SEND_FAILURE_RATE")
            .unwrap_or_else(|_| "0.1".to_string())
            .parse()
            .context("OTP_SEND_FAILURE_RATE must be a number in [0, 1]")?;
        let accepted_code = env::var("OTP_ACCEPTED_CODE").unwrap_or_else(|_| "123456".to_string());
        let plus_one = match env::var("PLUS_ONE_ISO").as_deref() {
            Ok("US") => PlusOnePreference::UnitedStates,
            Ok("CA") | Err(_) => PlusOnePreference::Canada,
            Ok(other) => anyhow::bail!("PLUS_ONE_ISO must be US or CA, got {other}"),
        };

        Ok(Self {
            latency: Duration::from_millis(latency_ms),
            send_failure_rate,
            accepted_code,
            plus_one,
        })
    }

    pub fn mock_options(&self) -> MockOptions {
        MockOptions {
            latency: self.latency,
            send_failure_rate: self.send_failure_rate,
            accepted_code: self.accepted_code.clone(),
        }
    }
}
