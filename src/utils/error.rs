use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevkitError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Source file '{}' not found", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Directory '{}' already exists", path.display())]
    ProjectExists { path: PathBuf },

    #[error("{tool} not found")]
    ToolNotFound { tool: String, install_hint: String },

    #[error("Assembly failed ({})", describe_status(*status))]
    AssemblyFailed {
        status: Option<i32>,
        stderr: String,
        stdout: String,
    },

    #[error("Failed to launch {}: {source}", program.display())]
    LaunchFailed {
        program: PathBuf,
        rom: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create '{}': {source}", path.display())]
    ScaffoldError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

fn describe_status(status: Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Precondition,
    ToolMissing,
    ToolFailure,
    Filesystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DevkitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DevkitError::UsageError { .. } => ErrorCategory::Usage,
            DevkitError::SourceNotFound { .. } | DevkitError::ProjectExists { .. } => {
                ErrorCategory::Precondition
            }
            DevkitError::ToolNotFound { .. } => ErrorCategory::ToolMissing,
            DevkitError::AssemblyFailed { .. } | DevkitError::LaunchFailed { .. } => {
                ErrorCategory::ToolFailure
            }
            DevkitError::ScaffoldError { .. } | DevkitError::IoError(_) => {
                ErrorCategory::Filesystem
            }
            DevkitError::ConfigValidationError { .. }
            | DevkitError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Usage | ErrorCategory::Precondition => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::ToolMissing | ErrorCategory::ToolFailure => ErrorSeverity::High,
            ErrorCategory::Filesystem => ErrorSeverity::Critical,
        }
    }

    /// Every failure is reported with exit status 1, whatever its category.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DevkitError::UsageError { .. } => "Run with --help to see the expected arguments".to_string(),
            DevkitError::SourceNotFound { .. } => {
                "Check the path to the .asm file and try again".to_string()
            }
            DevkitError::ProjectExists { .. } => {
                "Choose another project name or remove the existing directory".to_string()
            }
            DevkitError::ToolNotFound { install_hint, .. } => install_hint.clone(),
            DevkitError::AssemblyFailed { .. } => {
                "Fix the errors reported by the assembler and build again".to_string()
            }
            DevkitError::LaunchFailed { program, rom, .. } => {
                format!("Try manually: {} {}", program.display(), rom.display())
            }
            DevkitError::ScaffoldError { .. } => {
                "Check permissions and remove the partially created project before retrying"
                    .to_string()
            }
            DevkitError::IoError(_) => "Check file permissions and available disk space".to_string(),
            DevkitError::ConfigValidationError { .. }
            | DevkitError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the command-line flags".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DevkitError::UsageError { message } => message.clone(),
            DevkitError::SourceNotFound { path } => {
                format!("Error: Source file '{}' not found", path.display())
            }
            DevkitError::ProjectExists { path } => {
                format!("Error: Directory '{}' already exists", path.display())
            }
            DevkitError::ToolNotFound { tool, .. } => format!("Error: {} not found", tool),
            DevkitError::AssemblyFailed { .. } => "Assembly failed:".to_string(),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, DevkitError>;

/// Prints a failure the way the command-line tools report it and returns the exit code.
pub fn report_failure(err: &anyhow::Error) -> i32 {
    let Some(e) = err.downcast_ref::<DevkitError>() else {
        tracing::error!("❌ {:#}", err);
        eprintln!("❌ Error: {:#}", err);
        return 1;
    };

    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    match e {
        // raw tool diagnostics, stderr first
        DevkitError::AssemblyFailed { stderr, stdout, .. } => {
            eprintln!("{}", stderr);
            eprintln!("{}", stdout);
        }
        DevkitError::ToolNotFound { install_hint, .. } => eprintln!("{}", install_hint),
        other => eprintln!("💡 {}", other.recovery_suggestion()),
    }

    e.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_follow_taxonomy() {
        let missing = DevkitError::SourceNotFound {
            path: PathBuf::from("game.asm"),
        };
        assert_eq!(missing.category(), ErrorCategory::Precondition);

        let tool = DevkitError::ToolNotFound {
            tool: "dasm assembler".to_string(),
            install_hint: "brew install dasm".to_string(),
        };
        assert_eq!(tool.category(), ErrorCategory::ToolMissing);
        assert_eq!(tool.recovery_suggestion(), "brew install dasm");
        assert_eq!(tool.user_friendly_message(), "Error: dasm assembler not found");
    }

    #[test]
    fn test_every_failure_exits_with_one() {
        let errors = vec![
            DevkitError::UsageError {
                message: "bad".to_string(),
            },
            DevkitError::AssemblyFailed {
                status: Some(2),
                stderr: String::new(),
                stdout: String::new(),
            },
            DevkitError::IoError(std::io::Error::other("disk")),
        ];
        for e in errors {
            assert_eq!(e.exit_code(), 1);
        }
    }

    #[test]
    fn test_assembly_failure_display() {
        let e = DevkitError::AssemblyFailed {
            status: Some(1),
            stderr: "boom".to_string(),
            stdout: String::new(),
        };
        assert_eq!(e.to_string(), "Assembly failed (exit status 1)");

        let killed = DevkitError::AssemblyFailed {
            status: None,
            stderr: String::new(),
            stdout: String::new(),
        };
        assert_eq!(killed.to_string(), "Assembly failed (terminated by signal)");
    }
}
