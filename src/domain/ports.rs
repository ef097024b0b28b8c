use crate::domain::model::{Invocation, ProcessOutput};
use std::path::PathBuf;

/// Resolves an executable from an ordered list of candidates.
///
/// A candidate is either a filesystem path or a bare program name looked up on the
/// search path. The first candidate that resolves wins.
pub trait ToolLocator {
    fn locate(&self, candidates: &[String]) -> Option<PathBuf>;
}

pub trait ProcessRunner {
    /// Runs to completion, capturing stdout and stderr as text.
    ///
    /// An `io::ErrorKind::NotFound` error means the program itself could not be started.
    fn run_captured(&self, invocation: &Invocation) -> std::io::Result<ProcessOutput>;

    /// Starts the process with null standard streams and returns without waiting.
    fn spawn_detached(&self, invocation: &Invocation) -> std::io::Result<()>;
}
