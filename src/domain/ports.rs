use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn upstream_url(&self) -> &str;
    fn max_attempts(&self) -> u32;
    fn retry_delay(&self) -> Duration;
    fn request_timeout(&self) -> Option<Duration>;
    fn listen_addr(&self) -> String;
}

/// Where the raw upstream document comes from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<serde_json::Value>;
}
