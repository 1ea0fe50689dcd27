#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation;

pub const DEFAULT_RETRY_DELAY_MS: u64 = 2000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

pub(crate) fn validate_common(url: &str, max_attempts: u32, host: &str, port: u16) -> Result<()> {
    validation::validate_url("upstream_url", url)?;
    validation::validate_positive_number("max_attempts", max_attempts as u64, 1)?;
    validation::validate_non_empty_string("host", host)?;
    validation::validate_range("port", port, 1, u16::MAX)?;
    Ok(())
}
