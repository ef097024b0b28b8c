use crate::domain::model::{Invocation, ProcessOutput};
use crate::domain::ports::{ProcessRunner, ToolLocator};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Looks candidates up on disk, falling back to the search path for bare names.
#[derive(Debug, Clone, Default)]
pub struct SystemLocator {
    /// Replaces `PATH` when set.
    search_path: Option<OsString>,
}

impl SystemLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    fn lookup(&self, name: &str) -> Option<PathBuf> {
        match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(name, Some(paths), cwd).ok()
            }
            None => which::which(name).ok(),
        }
    }
}

fn is_bare_name(candidate: &str) -> bool {
    Path::new(candidate).components().count() == 1 && !Path::new(candidate).is_absolute()
}

impl ToolLocator for SystemLocator {
    fn locate(&self, candidates: &[String]) -> Option<PathBuf> {
        candidates.iter().find_map(|candidate| {
            let found = if is_bare_name(candidate) {
                self.lookup(candidate)
            } else {
                let path = Path::new(candidate);
                path.is_file().then(|| path.to_path_buf())
            };
            if let Some(path) = &found {
                tracing::debug!("Resolved {} -> {}", candidate, path.display());
            }
            found
        })
    }
}

/// Runs invocations through `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn command(invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if let Some(dir) = &invocation.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }
}

impl ProcessRunner for SystemRunner {
    fn run_captured(&self, invocation: &Invocation) -> std::io::Result<ProcessOutput> {
        // blocks for as long as the tool runs
        let output = Self::command(invocation).stdin(Stdio::null()).output()?;

        Ok(ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn spawn_detached(&self, invocation: &Invocation) -> std::io::Result<()> {
        let child = Self::command(invocation)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        tracing::debug!("Spawned {} (pid {})", invocation.command_line(), child.id());
        // the handle is dropped; the child keeps running on its own
        Ok(())
    }
}
