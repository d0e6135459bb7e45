pub mod dimension_view;
pub mod imported_warning;
pub mod panel;

pub use panel::DevicesPanel;
