use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel value the API uses for rows without a known value
pub const NOT_SET: &str = "(not set)";

/// Filter operation, serialized as the first element of a filter clause
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperation {
    Is,
    IsNot,
    Contains,
    ContainsNot,
    Matches,
    MatchesNot,
}

/// One filter clause: `[operation, key, values]`
///
/// On the wire this is a 3-element JSON array, e.g. `["is","browser",["Chrome"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterClause(pub FilterOperation, pub String, pub Vec<String>);

impl FilterClause {
    /// `["is", key, [value]]`
    pub fn is(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self(FilterOperation::Is, key.into(), vec![value.into()])
    }

    pub fn operation(&self) -> FilterOperation {
        self.0
    }

    pub fn key(&self) -> &str {
        &self.1
    }

    pub fn clauses(&self) -> &[String] {
        &self.2
    }
}

/// Query refinement produced when a row is selected.
///
/// Applying it removes every clause whose key starts with `prefix` and appends `filter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrilldownFilter {
    pub prefix: String,
    pub filter: FilterClause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    PreviousPeriod,
    YearOverYear,
    Custom,
}

/// Time range and filters shared by every report on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub period: String,
    pub date: Option<NaiveDate>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub filters: Vec<FilterClause>,
    pub with_imported: bool,
    pub comparison: Option<ComparisonMode>,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            period: "30d".to_string(),
            date: None,
            from: None,
            to: None,
            filters: Vec::new(),
            with_imported: true,
            comparison: None,
        }
    }
}

impl Query {
    /// Returns a copy with every clause under `drilldown.prefix` replaced by the drill-down clause.
    pub fn with_drilldown(&self, drilldown: &DrilldownFilter) -> Self {
        let mut next = self.clone();
        next.filters
            .retain(|clause| !clause.key().starts_with(drilldown.prefix.as_str()));
        next.filters.push(drilldown.filter.clone());
        next
    }

    /// Returns a copy without clauses on exactly `key`.
    pub fn without_filter(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.filters.retain(|clause| clause.key() != key);
        next
    }

    pub fn is_realtime(&self) -> bool {
        self.period == "realtime"
    }
}

/// Flat URL form of a [`Query`], suitable for `serde_qs`.
///
/// Filters travel as a JSON string, the way the stats API expects them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_imported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl StatsQueryParams {
    pub fn from_query(query: &Query) -> Self {
        let filters = if query.filters.is_empty() {
            None
        } else {
            serde_json::to_string(&query.filters).ok()
        };

        Self {
            period: Some(query.period.clone()),
            date: query.date,
            from: query.from,
            to: query.to,
            filters,
            with_imported: Some(query.with_imported),
            comparison: query.comparison,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Rebuilds a [`Query`]; missing fields take their defaults.
    pub fn into_query(self) -> anyhow::Result<Query> {
        let defaults = Query::default();
        let filters = match self.filters.as_deref() {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str::<Vec<FilterClause>>(raw)
                .with_context(|| format!("Invalid filters parameter: {}", raw))?,
            _ => Vec::new(),
        };

        Ok(Query {
            period: self.period.unwrap_or(defaults.period),
            date: self.date,
            from: self.from,
            to: self.to,
            filters,
            with_imported: self.with_imported.unwrap_or(defaults.with_imported),
            comparison: self.comparison,
        })
    }
}
