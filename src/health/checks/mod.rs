//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod gesture;

pub use build_info::BuildInfoCheck;
pub use self::config::ConfigCheck;
pub use gesture::GestureCheck;
