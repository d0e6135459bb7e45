pub mod component;
pub mod metrics;
pub mod traits;

pub use component::{rank_rows, ListReport, MAX_ITEMS};
pub use metrics::Metric;
pub use traits::ReportSource;
