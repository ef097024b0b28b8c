// Adapters layer: the real process and search-path implementations of the domain ports.

pub mod system;

pub use system::{SystemLocator, SystemRunner};
