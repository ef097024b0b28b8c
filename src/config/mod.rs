#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{BuildArgs, ScaffoldArgs};
pub use toml_config::ToolConfig;
