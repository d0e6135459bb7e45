pub mod d402_devices;

pub use d402_devices::ui::DevicesPanel;
