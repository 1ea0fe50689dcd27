use crate::core::aggregator::aggregate;
use crate::core::normalizer::NameMap;
use crate::core::DatasetSource;
use crate::domain::model::{Aggregate, RegionRecord};
use crate::utils::error::{MapError, Result};
use std::sync::Arc;

/// Pulls `data` out of the upstream document.
pub fn extract_records(document: &serde_json::Value) -> Result<Vec<RegionRecord>> {
    let data = document
        .get("data")
        .and_then(|d| d.as_array())
        .ok_or(MapError::InvalidResponseFormat)?;

    Ok(data.iter().map(RegionRecord::from_json).collect())
}

/// Fetch-then-aggregate, recomputed on every call. Holds no mutable state so
/// one instance can serve concurrent requests.
pub struct AggregationService<S: DatasetSource> {
    source: S,
    names: Arc<NameMap>,
}

impl<S: DatasetSource> AggregationService<S> {
    pub fn new(source: S, names: Arc<NameMap>) -> Self {
        Self { source, names }
    }

    pub async fn deaths_by_province(&self) -> Result<Aggregate> {
        let document = self.source.fetch().await?;
        let records = extract_records(&document)?;
        tracing::debug!("Extracted {} records", records.len());

        let result = aggregate(&records, &self.names);
        tracing::debug!("Processed data: {:?}", result.deaths_by_province);
        tracing::info!(
            "Aggregated {} deaths across {} provinces (update date: {})",
            result.total(),
            result.deaths_by_province.len(),
            result.update_date
        );

        Ok(result)
    }
}
