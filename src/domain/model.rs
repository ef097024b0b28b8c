use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const SRC_DIR: &str = "src";
pub const INCLUDE_DIR: &str = "include";
pub const BUILD_DIR: &str = "build";
pub const MAIN_SOURCE: &str = "main.asm";
pub const GITIGNORE: &str = ".gitignore";

/// Fixed directory tree of a scaffolded project, rooted at the project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn src_dir(&self) -> PathBuf {
        self.root.join(SRC_DIR)
    }

    pub fn include_dir(&self) -> PathBuf {
        self.root.join(INCLUDE_DIR)
    }

    pub fn build_dir(&self) -> PathBuf {
        self.root.join(BUILD_DIR)
    }

    pub fn main_source(&self) -> PathBuf {
        self.src_dir().join(MAIN_SOURCE)
    }

    pub fn gitignore(&self) -> PathBuf {
        self.root.join(GITIGNORE)
    }

    pub fn subdirectories(&self) -> [PathBuf; 3] {
        [self.src_dir(), self.include_dir(), self.build_dir()]
    }
}

/// ROM plus the listing and symbol side-files the assembler writes next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifacts {
    pub rom: PathBuf,
    pub listing: PathBuf,
    pub symbols: PathBuf,
}

impl BuildArtifacts {
    pub fn from_rom(rom: PathBuf, listing_ext: &str, symbol_ext: &str) -> Self {
        Self {
            listing: rom.with_extension(listing_ext),
            symbols: rom.with_extension(symbol_ext),
            rom,
        }
    }
}

/// A fully resolved external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    /// `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchOutcome {
    Launched { emulator: PathBuf },
    EmulatorNotFound,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TvMode {
    #[default]
    Ntsc,
    Pal,
    Pal60,
}

impl TvMode {
    /// Symbol defined by `tv_modes.h`.
    pub fn symbol(self) -> &'static str {
        match self {
            TvMode::Ntsc => "NTSC",
            TvMode::Pal => "PAL",
            TvMode::Pal60 => "PAL60",
        }
    }
}

impl fmt::Display for TvMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TvMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ntsc" => Ok(TvMode::Ntsc),
            "pal" => Ok(TvMode::Pal),
            "pal60" => Ok(TvMode::Pal60),
            other => Err(format!(
                "unknown TV mode '{}', expected one of: ntsc, pal, pal60",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = ProjectLayout::new("pong");
        assert_eq!(layout.main_source(), PathBuf::from("pong/src/main.asm"));
        assert_eq!(layout.gitignore(), PathBuf::from("pong/.gitignore"));
        assert_eq!(layout.include_dir(), PathBuf::from("pong/include"));
    }

    #[test]
    fn test_artifacts_share_stem() {
        let artifacts = BuildArtifacts::from_rom(PathBuf::from("/p/build/game.a26"), "lst", "sym");
        assert_eq!(artifacts.listing, PathBuf::from("/p/build/game.lst"));
        assert_eq!(artifacts.symbols, PathBuf::from("/p/build/game.sym"));
    }

    #[test]
    fn test_tv_mode_parse() {
        assert_eq!("PAL".parse::<TvMode>(), Ok(TvMode::Pal));
        assert_eq!("pal60".parse::<TvMode>(), Ok(TvMode::Pal60));
        assert!("secam".parse::<TvMode>().is_err());
        assert_eq!(TvMode::default().symbol(), "NTSC");
    }
}
