pub mod filter_bar;
pub mod global_context;
