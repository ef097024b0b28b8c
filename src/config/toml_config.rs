use crate::domain::model::{TvMode, BUILD_DIR};
use crate::utils::error::{DevkitError, Result};
use crate::utils::validation::{
    validate_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file when `--config` is absent.
pub const CONFIG_ENV: &str = "VCSDEV_CONFIG";

/// Fixed probe order for the emulator. Bare names go through the search path.
pub const DEFAULT_EMULATOR_CANDIDATES: &[&str] = &[
    "/Applications/Stella.app/Contents/MacOS/Stella",
    "/usr/bin/stella",
    "/usr/local/bin/stella",
    "/opt/homebrew/bin/stella",
    r"C:\Program Files\Stella\Stella.exe",
    "stella",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub assembler: AssemblerConfig,
    pub emulator: EmulatorConfig,
    pub build: BuildConfig,
    pub scaffold: ScaffoldConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    pub program: String,
    /// dasm `-f`: 3 is a raw binary image.
    pub output_format: u8,
    /// dasm `-v`: 0 reports errors only.
    pub verbosity: u8,
    pub install_hint: String,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            program: "dasm".to_string(),
            output_format: 3,
            verbosity: 0,
            install_hint: "Install with: brew install dasm (macOS) or apt-get install dasm (Linux)"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmulatorConfig {
    /// Probed before `candidates`.
    pub program: Option<String>,
    pub candidates: Vec<String>,
    pub install_hint: String,
}

impl Default for EmulatorConfig {
    fn default() -> Self {
        Self {
            program: None,
            candidates: DEFAULT_EMULATOR_CANDIDATES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            install_hint: "Install with: brew install --cask stella (macOS) or download from stella-emu.github.io"
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub rom_extension: String,
    pub listing_extension: String,
    pub symbol_extension: String,
    pub build_dir: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            rom_extension: "a26".to_string(),
            listing_extension: "lst".to_string(),
            symbol_extension: "sym".to_string(),
            build_dir: BUILD_DIR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub assets_dir: Option<PathBuf>,
    pub tv_mode: TvMode,
}

impl ToolConfig {
    /// `explicit` wins, then the file named by `VCSDEV_CONFIG`, then built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => {
                tracing::debug!("Loading configuration from ${}", CONFIG_ENV);
                Self::from_file(Path::new(&path))
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DevkitError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DevkitError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Expands `${VAR}`; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DevkitError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Configured program first, then the fixed probe list.
    pub fn emulator_candidates(&self) -> Vec<String> {
        let mut candidates = Vec::with_capacity(self.emulator.candidates.len() + 1);
        if let Some(program) = &self.emulator.program {
            candidates.push(program.clone());
        }
        candidates.extend(self.emulator.candidates.iter().cloned());
        candidates
    }

    /// Name shown in the manual-run hint.
    pub fn emulator_display_name(&self) -> &str {
        self.emulator.program.as_deref().unwrap_or("stella")
    }
}

impl Validate for ToolConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("assembler.program", &self.assembler.program)?;
        validate_range("assembler.output_format", self.assembler.output_format, 1, 3)?;
        validate_range("assembler.verbosity", self.assembler.verbosity, 0, 4)?;

        if let Some(program) = &self.emulator.program {
            validate_non_empty_string("emulator.program", program)?;
        }
        for candidate in &self.emulator.candidates {
            validate_path("emulator.candidates", candidate)?;
        }

        validate_extension("build.rom_extension", &self.build.rom_extension)?;
        validate_extension("build.listing_extension", &self.build.listing_extension)?;
        validate_extension("build.symbol_extension", &self.build.symbol_extension)?;
        validate_path("build.build_dir", &self.build.build_dir)?;

        if let Some(dir) = &self.scaffold.assets_dir {
            validate_path("scaffold.assets_dir", &dir.to_string_lossy())?;
        }

        Ok(())
    }
}
