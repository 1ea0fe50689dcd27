use crate::core::fetcher::{DEFAULT_MAX_ATTEMPTS, DEFAULT_UPSTREAM_URL};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::time::Duration;

use super::{validate_common, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_RETRY_DELAY_MS};

#[derive(Debug, Clone, Parser)]
#[command(name = "covid-choropleth")]
#[command(about = "Aggregates COVID-19 deaths per province for a choropleth map")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    #[arg(long, default_value_t = DEFAULT_RETRY_DELAY_MS)]
    pub retry_delay_ms: u64,

    #[arg(long, help = "Per-attempt HTTP timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Path to a TOML configuration file; replaces the flags above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn upstream_url(&self) -> &str {
        &self.upstream_url
    }

    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_common(&self.upstream_url, self.max_attempts, &self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["covid-choropleth"]);
        assert_eq!(config.upstream_url(), DEFAULT_UPSTREAM_URL);
        assert_eq!(config.max_attempts(), 3);
        assert_eq!(config.retry_delay(), Duration::from_millis(2000));
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.listen_addr(), "127.0.0.1:3000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = CliConfig::parse_from([
            "covid-choropleth",
            "--max-attempts",
            "5",
            "--retry-delay-ms",
            "100",
            "--timeout-seconds",
            "7",
            "--port",
            "8080",
        ]);
        assert_eq!(config.max_attempts(), 5);
        assert_eq!(config.retry_delay(), Duration::from_millis(100));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(7)));
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = CliConfig::parse_from(["covid-choropleth", "--max-attempts", "0"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["covid-choropleth", "--upstream-url", "ftp://x"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["covid-choropleth", "--port", "0"]);
        assert!(config.validate().is_err());
    }
}
