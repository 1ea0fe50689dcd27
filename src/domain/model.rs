use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 上游資料未提供更新日期時使用的值 ("not specified")
pub const UPDATE_DATE_NOT_SPECIFIED: &str = "ไม่ระบุ";

/// One raw death record from the upstream line list.
///
/// Only the fields the aggregation needs are kept; everything else in the
/// upstream object is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRecord {
    pub province: Option<String>,
    pub update_date: Option<String>,
}

impl RegionRecord {
    pub fn new(province: impl Into<String>, update_date: impl Into<String>) -> Self {
        Self {
            province: Some(province.into()),
            update_date: Some(update_date.into()),
        }
    }

    /// 寬鬆解析：非物件或非字串欄位一律視為缺值
    pub fn from_json(value: &serde_json::Value) -> Self {
        let text = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
        };

        Self {
            province: text("province"),
            update_date: text("update_date"),
        }
    }
}

/// Deaths per renderer-vocabulary region plus the dataset freshness marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregate {
    #[serde(rename = "deathsByProvince")]
    pub deaths_by_province: BTreeMap<String, u64>,
    pub update_date: String,
}

impl Aggregate {
    pub fn total(&self) -> u64 {
        self.deaths_by_province.values().sum()
    }
}
