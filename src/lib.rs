// The binary entry point is main.rs; the module tree lives here so that
// integration tests under tests/ can drive the board and its storage.

pub mod app;
pub mod board;
pub mod config;
pub mod event;
pub mod input;
pub mod store;
pub mod ui;
