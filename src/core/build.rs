use crate::config::toml_config::{BuildConfig, ToolConfig};
use crate::domain::model::{BuildArtifacts, Invocation, LaunchOutcome, ProcessOutput};
use crate::domain::ports::{ProcessRunner, ToolLocator};
use crate::utils::error::{DevkitError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BuildRequest {
    pub source: PathBuf,
    pub output: Option<PathBuf>,
    pub launch: bool,
}

/// Everything decided before the assembler runs.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub source: PathBuf,
    pub artifacts: BuildArtifacts,
    pub assembler: Invocation,
}

#[derive(Debug, Clone)]
pub struct BuildReport {
    pub artifacts: BuildArtifacts,
    pub assembler_output: ProcessOutput,
    pub launch: LaunchOutcome,
}

/// Picks the ROM path for an absolute `source`.
///
/// An explicit output is made absolute against the current directory. Otherwise the ROM goes
/// to `<source>/../../build/` when that directory exists, or next to the source.
pub fn resolve_output_path(
    source: &Path,
    explicit: Option<&Path>,
    build: &BuildConfig,
) -> Result<PathBuf> {
    if let Some(output) = explicit {
        return Ok(std::path::absolute(output)?);
    }

    let beside_source = source.with_extension(&build.rom_extension);
    let build_dir = source
        .parent()
        .and_then(Path::parent)
        .map(|project| project.join(&build.build_dir));

    match (build_dir, beside_source.file_name()) {
        (Some(dir), Some(name)) if dir.is_dir() => Ok(dir.join(name)),
        _ => Ok(beside_source),
    }
}

pub struct BuildDriver<R: ProcessRunner, L: ToolLocator> {
    runner: R,
    locator: L,
    config: ToolConfig,
}

impl<R: ProcessRunner, L: ToolLocator> BuildDriver<R, L> {
    pub fn new(runner: R, locator: L, config: ToolConfig) -> Self {
        Self {
            runner,
            locator,
            config,
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Resolves the source and artifacts and builds the assembler command. Runs nothing.
    pub fn plan(&self, request: &BuildRequest) -> Result<BuildPlan> {
        let source = resolve_source(&request.source)?;
        let build = &self.config.build;
        let rom = resolve_output_path(&source, request.output.as_deref(), build)?;
        let artifacts =
            BuildArtifacts::from_rom(rom, &build.listing_extension, &build.symbol_extension);

        let assembler = self.assembler_invocation(&source, &artifacts);
        Ok(BuildPlan {
            source,
            artifacts,
            assembler,
        })
    }

    fn assembler_invocation(&self, source: &Path, artifacts: &BuildArtifacts) -> Invocation {
        let settings = &self.config.assembler;
        let file_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut invocation = Invocation::new(&settings.program)
            .arg(file_name)
            .arg(format!("-o{}", artifacts.rom.display()))
            .arg(format!("-f{}", settings.output_format))
            .arg(format!("-v{}", settings.verbosity))
            .arg(format!("-l{}", artifacts.listing.display()))
            .arg(format!("-s{}", artifacts.symbols.display()));

        // relative includes in the source resolve against its own directory
        if let Some(dir) = source.parent() {
            invocation = invocation.current_dir(dir);
        }
        invocation
    }

    pub fn assemble(&self, plan: &BuildPlan) -> Result<ProcessOutput> {
        let name = plan
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("🔨 Assembling {} with {}...", name, self.config.assembler.program);
        tracing::debug!("Running {}", plan.assembler.command_line());

        let output = self
            .runner
            .run_captured(&plan.assembler)
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DevkitError::ToolNotFound {
                    tool: format!("{} assembler", self.config.assembler.program),
                    install_hint: self.config.assembler.install_hint.clone(),
                },
                _ => DevkitError::IoError(e),
            })?;

        if !output.success() {
            tracing::warn!("Assembler exited with {:?}", output.status);
            return Err(DevkitError::AssemblyFailed {
                status: output.status,
                stderr: output.stderr,
                stdout: output.stdout,
            });
        }

        println!("✅ Assembly successful: {}", plan.artifacts.rom.display());
        if !output.stdout.is_empty() {
            println!("{}", output.stdout);
        }
        Ok(output)
    }

    /// Probes for the emulator and starts it on `rom` without waiting.
    pub fn launch(&self, rom: &Path) -> Result<LaunchOutcome> {
        let candidates = self.config.emulator_candidates();
        let Some(emulator) = self.locator.locate(&candidates) else {
            tracing::warn!("No emulator among {} candidates", candidates.len());
            return Ok(LaunchOutcome::EmulatorNotFound);
        };

        let rom_name = rom
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("🎮 Launching {} in {}...", rom_name, emulator.display());

        let invocation = Invocation::new(&emulator).arg(rom.display().to_string());
        self.runner
            .spawn_detached(&invocation)
            .map_err(|e| DevkitError::LaunchFailed {
                program: emulator.clone(),
                rom: rom.to_path_buf(),
                source: e,
            })?;

        Ok(LaunchOutcome::Launched { emulator })
    }

    /// Existence check, assemble, locate emulator, launch. Strictly in that order.
    pub fn run(&self, request: &BuildRequest) -> Result<BuildReport> {
        let plan = self.plan(request)?;
        let assembler_output = self.assemble(&plan)?;

        let launch = if request.launch {
            self.launch(&plan.artifacts.rom)?
        } else {
            LaunchOutcome::Skipped
        };

        Ok(BuildReport {
            artifacts: plan.artifacts,
            assembler_output,
            launch,
        })
    }
}

fn resolve_source(source: &Path) -> Result<PathBuf> {
    let not_found = || DevkitError::SourceNotFound {
        path: source.to_path_buf(),
    };

    let resolved = source.canonicalize().map_err(|_| not_found())?;
    if !resolved.is_file() {
        return Err(not_found());
    }
    Ok(resolved)
}
