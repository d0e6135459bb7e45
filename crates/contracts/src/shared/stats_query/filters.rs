//! Read-only helpers over the filter clauses of a [`Query`]

use super::query::{FilterClause, FilterOperation, Query};

/// Clauses whose key starts with `prefix` (`"browser"` also matches `"browser_version"`).
pub fn get_filters_by_key_prefix<'a>(query: &'a Query, prefix: &str) -> Vec<&'a FilterClause> {
    query
        .filters
        .iter()
        .filter(|clause| clause.key().starts_with(prefix))
        .collect()
}

/// True when the query pins `key` to exactly one literal value:
/// a single clause on that key, operation `is`, one value.
pub fn is_filtering_on_fixed_value(query: &Query, key: &str) -> bool {
    let mut matching = query.filters.iter().filter(|clause| clause.key() == key);
    match (matching.next(), matching.next()) {
        (Some(clause), None) => {
            clause.operation() == FilterOperation::Is && clause.clauses().len() == 1
        }
        _ => false,
    }
}

/// The single value of the single clause matching `prefix`, if there is exactly one of each.
pub fn get_single_filter<'a>(query: &'a Query, prefix: &str) -> Option<&'a str> {
    let matches = get_filters_by_key_prefix(query, prefix);
    if matches.len() != 1 {
        return None;
    }
    match matches[0].clauses() {
        [value] => Some(value.as_str()),
        _ => None,
    }
}

/// Conversion-rate columns only make sense when a goal is selected.
pub fn has_goal_filter(query: &Query) -> bool {
    query
        .filters
        .iter()
        .any(|clause| clause.key() == "goal" && clause.operation() != FilterOperation::IsNot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::stats_query::NOT_SET;

    fn query_with(filters: Vec<FilterClause>) -> Query {
        Query {
            filters,
            ..Query::default()
        }
    }

    #[test]
    fn test_prefix_matches_nested_keys() {
        let query = query_with(vec![
            FilterClause::is("browser", "Chrome"),
            FilterClause::is("browser_version", "120"),
            FilterClause::is("os", "Linux"),
        ]);
        assert_eq!(get_filters_by_key_prefix(&query, "browser").len(), 2);
        assert_eq!(get_filters_by_key_prefix(&query, "os").len(), 1);
        assert!(get_filters_by_key_prefix(&query, "screen").is_empty());
    }

    #[test]
    fn test_fixed_value() {
        assert!(is_filtering_on_fixed_value(
            &query_with(vec![FilterClause::is("browser", "Chrome")]),
            "browser"
        ));
        // nested key does not count as the same dimension
        assert!(!is_filtering_on_fixed_value(
            &query_with(vec![FilterClause::is("browser_version", "120")]),
            "browser"
        ));
        assert!(!is_filtering_on_fixed_value(
            &query_with(vec![FilterClause(
                FilterOperation::Is,
                "browser".into(),
                vec!["Chrome".into(), "Firefox".into()]
            )]),
            "browser"
        ));
        assert!(!is_filtering_on_fixed_value(
            &query_with(vec![FilterClause(
                FilterOperation::Contains,
                "browser".into(),
                vec!["Chr".into()]
            )]),
            "browser"
        ));
        assert!(!is_filtering_on_fixed_value(
            &query_with(vec![
                FilterClause::is("os", "Linux"),
                FilterClause::is("os", "Mac"),
            ]),
            "os"
        ));
        assert!(!is_filtering_on_fixed_value(&Query::default(), "os"));
    }

    #[test]
    fn test_single_filter() {
        let query = query_with(vec![FilterClause::is("browser", NOT_SET)]);
        assert_eq!(get_single_filter(&query, "browser"), Some(NOT_SET));

        let query = query_with(vec![
            FilterClause::is("browser", "Chrome"),
            FilterClause::is("browser_version", "120"),
        ]);
        assert_eq!(get_single_filter(&query, "browser"), None);

        let query = query_with(vec![FilterClause(
            FilterOperation::IsNot,
            "os".into(),
            vec!["Mac".into(), "iOS".into()],
        )]);
        assert_eq!(get_single_filter(&query, "os"), None);
    }

    #[test]
    fn test_goal_filter() {
        assert!(has_goal_filter(&query_with(vec![FilterClause::is(
            "goal", "Signup"
        )])));
        assert!(!has_goal_filter(&query_with(vec![FilterClause(
            FilterOperation::IsNot,
            "goal".into(),
            vec!["Signup".into()]
        )])));
        assert!(!has_goal_filter(&Query::default()));
    }
}
