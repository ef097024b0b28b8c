use crate::core::build::BuildRequest;
use crate::domain::model::TvMode;
use crate::utils::error::{DevkitError, Result};
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "create_project")]
#[command(about = "Create a new Atari 2600 project with src/, include/ and build/ directories")]
pub struct ScaffoldArgs {
    /// Project directory to create, relative to the current directory
    pub project_name: String,

    /// TV mode written into src/main.asm (ntsc, pal, pal60)
    #[arg(long)]
    pub tv_mode: Option<TvMode>,

    /// Copy vcs.h, macro.h and tv_modes.h from this directory instead of the bundled copies
    #[arg(long)]
    pub assets_dir: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Validate for ScaffoldArgs {
    fn validate(&self) -> Result<()> {
        validate_path("project_name", &self.project_name).map_err(into_usage)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "build_and_run")]
#[command(about = "Assemble an Atari 2600 source file with dasm and launch it in Stella")]
pub struct BuildArgs {
    /// Assembly source file
    pub source: PathBuf,

    /// Output ROM path (defaults to ../build/<name>.a26 or next to the source)
    pub output: Option<PathBuf>,

    /// Assemble only, do not start the emulator
    #[arg(long)]
    pub no_launch: bool,

    /// Show the resolved artifacts and assembler command without running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl BuildArgs {
    pub fn to_request(&self) -> BuildRequest {
        BuildRequest {
            source: self.source.clone(),
            output: self.output.clone(),
            launch: !self.no_launch,
        }
    }
}

impl Validate for BuildArgs {
    fn validate(&self) -> Result<()> {
        validate_path("source", &self.source.to_string_lossy()).map_err(into_usage)?;
        if let Some(output) = &self.output {
            validate_path("output", &output.to_string_lossy()).map_err(into_usage)?;
        }
        Ok(())
    }
}

fn into_usage(err: DevkitError) -> DevkitError {
    match err {
        DevkitError::InvalidConfigValueError { field, reason, .. } => DevkitError::UsageError {
            message: format!("Invalid <{}>: {}", field, reason),
        },
        other => other,
    }
}

/// Parses the process arguments, exiting with status 1 on a usage error.
///
/// `--help` and `--version` still exit 0.
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    }
}
