pub mod build;
pub mod scaffold;
pub mod templates;

pub use crate::domain::model::{BuildArtifacts, Invocation, LaunchOutcome, ProcessOutput};
pub use crate::domain::ports::{ProcessRunner, ToolLocator};
pub use crate::utils::error::Result;
