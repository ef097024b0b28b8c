pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{BuildArgs, ScaffoldArgs};

pub use adapters::{SystemLocator, SystemRunner};
pub use config::ToolConfig;
pub use core::build::{BuildDriver, BuildRequest};
pub use core::scaffold::{ScaffoldOptions, Scaffolder};
pub use utils::error::{DevkitError, Result};
