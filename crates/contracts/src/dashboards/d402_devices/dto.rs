use serde::{Deserialize, Serialize};

/// One ranked row of a breakdown report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Display name (browser, OS, version or screen class)
    pub name: String,
    pub visitors: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    /// Parent browser on browser-version rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    /// Parent OS on OS-version rows
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ItemComparison>,
}

impl ListItem {
    pub fn new(name: impl Into<String>, visitors: u64) -> Self {
        Self {
            name: name.into(),
            visitors,
            percentage: None,
            conversion_rate: None,
            browser: None,
            os: None,
            comparison: None,
        }
    }
}

/// Previous-period values of a row when the query compares periods
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemComparison {
    pub visitors: u64,
    /// Change in percent relative to the previous period
    #[serde(default)]
    pub change: Option<f64>,
}

/// Response of every breakdown endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BreakdownResponse {
    pub results: Vec<ListItem>,
    /// Set when imported data could not be merged into this breakdown
    #[serde(default)]
    pub skip_imported_reason: Option<String>,
}
