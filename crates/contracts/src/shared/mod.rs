pub mod stats_query;
