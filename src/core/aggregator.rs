use crate::core::normalizer::NameMap;
use crate::domain::model::{Aggregate, RegionRecord, UPDATE_DATE_NOT_SPECIFIED};
use std::collections::BTreeMap;

/// Counts records per resolved region name.
///
/// Records whose province resolves to an empty name are skipped. The
/// freshness marker comes from the first record only.
pub fn aggregate(records: &[RegionRecord], names: &NameMap) -> Aggregate {
    let mut deaths_by_province: BTreeMap<String, u64> = BTreeMap::new();

    for record in records {
        let province = names.resolve(record.province.as_deref().unwrap_or(""));
        if province.is_empty() {
            continue;
        }

        *deaths_by_province.entry(province.to_string()).or_insert(0) += 1;
    }

    let update_date = records
        .first()
        .and_then(|r| r.update_date.as_deref())
        .filter(|d| !d.is_empty())
        .unwrap_or(UPDATE_DATE_NOT_SPECIFIED)
        .to_string();

    Aggregate {
        deaths_by_province,
        update_date,
    }
}
