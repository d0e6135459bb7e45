//! API utilities for frontend-backend communication
//!
//! Builds stats API URLs and performs JSON GET requests.

use contracts::shared::stats_query::StatsQueryParams;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// Root of the stats API, relative to the page origin
pub const API_ROOT: &str = "/api/stats";

/// Build the site-scoped API path for an endpoint
///
/// # Arguments
/// * `domain` - Site domain, percent-encoded into the path
/// * `path` - Endpoint path (should start with "/")
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::api_path;
///
/// let path = api_path("example.com", "/browsers");
/// assert_eq!(path, "/api/stats/example.com/browsers");
/// ```
pub fn api_path(domain: &str, path: &str) -> String {
    format!("{}/{}{}", API_ROOT, urlencoding::encode(domain), path)
}

/// Serialize query parameters into a query string (without the leading `?`)
pub fn query_string(params: &StatsQueryParams) -> Result<String, String> {
    serde_qs::to_string(params).map_err(|e| format!("Failed to serialize query: {}", e))
}

/// Full request URL: `path?query`
pub fn with_query(path: &str, params: &StatsQueryParams) -> Result<String, String> {
    let qs = query_string(params)?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

/// GET a URL and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::stats_query::{FilterClause, Query};

    #[test]
    fn test_api_path() {
        assert_eq!(
            api_path("example.com", "/browsers"),
            "/api/stats/example.com/browsers"
        );
        assert_eq!(
            api_path("my site/blog", "/screen-sizes"),
            "/api/stats/my%20site%2Fblog/screen-sizes"
        );
    }

    #[test]
    fn test_with_query() {
        let query = Query {
            period: "7d".to_string(),
            filters: vec![FilterClause::is("browser", "Chrome")],
            ..Query::default()
        };
        let params = StatsQueryParams::from_query(&query).with_limit(9);
        let url = with_query("/api/stats/example.com/browser-versions", &params).unwrap();

        assert!(url.starts_with("/api/stats/example.com/browser-versions?"));
        assert!(url.contains("period=7d"));
        assert!(url.contains("with_imported=true"));
        assert!(url.contains("limit=9"));

        let parsed: StatsQueryParams =
            serde_qs::from_str(url.split_once('?').unwrap().1).unwrap();
        assert_eq!(parsed.into_query().unwrap(), query);
    }

    #[test]
    fn test_with_query_empty_params() {
        assert_eq!(
            with_query("/api/stats/x/browsers", &StatsQueryParams::default()).unwrap(),
            "/api/stats/x/browsers"
        );
    }
}
