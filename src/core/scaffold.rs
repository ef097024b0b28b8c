use crate::config::ToolConfig;
use crate::core::templates::{render_main_source, GITIGNORE_BODY, INCLUDE_ASSETS};
use crate::domain::model::{ProjectLayout, TvMode};
use crate::utils::error::{DevkitError, Result};
use crate::utils::validation::validate_path;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the three include files come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AssetSource {
    /// Copies compiled into the binary.
    #[default]
    Embedded,
    /// A directory holding `vcs.h`, `macro.h` and `tv_modes.h`.
    Directory(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    pub tv_mode: TvMode,
    pub assets: AssetSource,
}

impl ScaffoldOptions {
    pub fn from_config(config: &ToolConfig) -> Self {
        Self {
            tv_mode: config.scaffold.tv_mode,
            assets: config
                .scaffold
                .assets_dir
                .clone()
                .map(AssetSource::Directory)
                .unwrap_or_default(),
        }
    }
}

pub struct Scaffolder {
    options: ScaffoldOptions,
}

impl Scaffolder {
    pub fn new(options: ScaffoldOptions) -> Self {
        Self { options }
    }

    /// Creates `<project_name>/{src,include,build}` plus the template files.
    ///
    /// Refuses to touch an existing path. A failure part way through leaves whatever
    /// was already created on disk.
    pub fn create(&self, project_name: &str) -> Result<ProjectLayout> {
        validate_path("project_name", project_name)?;

        let layout = ProjectLayout::new(project_name);
        if layout.root().exists() {
            return Err(DevkitError::ProjectExists {
                path: layout.root().to_path_buf(),
            });
        }

        tracing::debug!("Creating project at {}", layout.root().display());
        create_dir(layout.root())?;
        for dir in layout.subdirectories() {
            create_dir(&dir)?;
        }

        self.install_includes(&layout.include_dir())?;

        write_file(
            &layout.main_source(),
            &render_main_source(self.options.tv_mode),
        )?;
        write_file(&layout.gitignore(), GITIGNORE_BODY)?;

        tracing::info!(
            "Project {} created ({} mode)",
            layout.root().display(),
            self.options.tv_mode
        );
        Ok(layout)
    }

    fn install_includes(&self, include_dir: &Path) -> Result<()> {
        for asset in INCLUDE_ASSETS {
            let target = include_dir.join(asset.file_name);
            match &self.options.assets {
                AssetSource::Embedded => write_file(&target, asset.contents)?,
                AssetSource::Directory(dir) => {
                    let source = dir.join(asset.file_name);
                    tracing::debug!("Copying {} -> {}", source.display(), target.display());
                    fs::copy(&source, &target).map_err(|e| DevkitError::ScaffoldError {
                        path: source.clone(),
                        source: e,
                    })?;
                }
            }
        }
        Ok(())
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir(path).map_err(|e| DevkitError::ScaffoldError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| DevkitError::ScaffoldError {
        path: path.to_path_buf(),
        source: e,
    })
}
