pub mod api;
pub mod dimension;
pub mod icons;
pub mod state;
pub mod ui;
