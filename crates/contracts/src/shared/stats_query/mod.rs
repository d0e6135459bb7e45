pub mod filters;
pub mod query;

pub use filters::{
    get_filters_by_key_prefix, get_single_filter, has_goal_filter, is_filtering_on_fixed_value,
};
pub use query::{
    ComparisonMode, DrilldownFilter, FilterClause, FilterOperation, Query, StatsQueryParams,
    NOT_SET,
};
