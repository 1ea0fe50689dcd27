pub mod aggregator;
pub mod endpoint;
pub mod fetcher;
pub mod normalizer;

pub use crate::domain::model::{Aggregate, RegionRecord};
pub use crate::domain::ports::{ConfigProvider, DatasetSource};
pub use crate::utils::error::Result;
