pub mod api_utils;
pub mod components;
pub mod icons;
pub mod list_report;
pub mod preferences;
