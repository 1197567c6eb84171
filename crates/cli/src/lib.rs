pub mod cli;
pub mod commands;
pub mod config;
pub mod export;

pub use tinge_core as core;
pub use tinge_core::contrast;
pub use tinge_core::format;
pub use tinge_core::palette;

pub use tinge_core::AppConfig;
