use super::dimension::Dimension;
use crate::shared::api_utils::{api_path, get_json, with_query};
use contracts::dashboards::d402_devices::BreakdownResponse;
use contracts::shared::stats_query::{Query, StatsQueryParams};

/// Request URL of a dimension's breakdown for a site
pub fn breakdown_url(
    domain: &str,
    dimension: Dimension,
    query: &Query,
    limit: usize,
) -> Result<String, String> {
    let params = StatsQueryParams::from_query(query).with_limit(limit);
    with_query(&api_path(domain, dimension.endpoint()), &params)
}

/// Fetch a dimension breakdown with rows already shaped for display
pub async fn fetch_breakdown(
    domain: String,
    dimension: Dimension,
    query: Query,
    limit: usize,
) -> Result<BreakdownResponse, String> {
    let url = breakdown_url(&domain, dimension, &query, limit)?;
    log::debug!("Fetching {:?} breakdown: {}", dimension, url);

    let response: BreakdownResponse = get_json(&url).await?;
    Ok(dimension.shape_response(response))
}
