pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;
pub use crate::config::toml_config::TomlConfig;

pub use crate::core::{
    endpoint::AggregationService,
    fetcher::{ResilientFetcher, RetryPolicy},
    normalizer::NameMap,
};
pub use crate::domain::model::{Aggregate, RegionRecord};
pub use crate::utils::error::{MapError, Result};
