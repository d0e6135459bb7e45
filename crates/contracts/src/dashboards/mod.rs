pub mod d402_devices;
