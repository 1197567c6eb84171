pub use tinge_cli::cli;
pub use tinge_cli::commands;
pub use tinge_cli::config;
pub use tinge_cli::export;
pub use tinge_cli::AppConfig;

pub use tinge_core as core;
pub use tinge_core::color;
pub use tinge_core::contrast;
pub use tinge_core::format;
pub use tinge_core::palette;
pub use tinge_core::shade;
