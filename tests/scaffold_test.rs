use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use vcs_devkit::core::scaffold::AssetSource;
use vcs_devkit::domain::model::TvMode;
use vcs_devkit::{DevkitError, ScaffoldOptions, Scaffolder};

/// Every path under `root`, relative to it.
fn tree(root: &Path) -> BTreeSet<PathBuf> {
    let mut entries = BTreeSet::new();
    let mut pending = vec![root.to_path_buf()];
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path.clone());
            }
            entries.insert(path.strip_prefix(root).unwrap().to_path_buf());
        }
    }
    entries
}

#[test]
fn test_scaffold_creates_exact_tree() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("pong");

    let layout = Scaffolder::new(ScaffoldOptions::default())
        .create(project.to_str().unwrap())
        .unwrap();
    assert_eq!(layout.root(), project.as_path());

    let expected: BTreeSet<PathBuf> = [
        ".gitignore",
        "build",
        "include",
        "include/macro.h",
        "include/tv_modes.h",
        "include/vcs.h",
        "src",
        "src/main.asm",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(tree(&project), expected);

    let main = fs::read_to_string(project.join("src/main.asm")).unwrap();
    assert!(main.contains("include \"../include/vcs.h\""));
    assert!(main.contains("TV_MODE = NTSC"));

    let gitignore = fs::read_to_string(project.join(".gitignore")).unwrap();
    assert!(gitignore.contains("*.a26"));

    let tv_modes = fs::read_to_string(project.join("include/tv_modes.h")).unwrap();
    assert!(tv_modes.contains("KERNEL_LINES"));
    assert!(fs::read_dir(project.join("build")).unwrap().next().is_none());
}

#[test]
fn test_scaffold_refuses_existing_directory() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("pong");
    fs::create_dir(&project).unwrap();
    fs::write(project.join("notes.txt"), "keep me").unwrap();

    let err = Scaffolder::new(ScaffoldOptions::default())
        .create(project.to_str().unwrap())
        .unwrap_err();

    assert!(matches!(err, DevkitError::ProjectExists { .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(tree(&project), BTreeSet::from([PathBuf::from("notes.txt")]));
    assert_eq!(fs::read_to_string(project.join("notes.txt")).unwrap(), "keep me");
}

#[test]
fn test_scaffold_with_tv_mode() {
    let temp_dir = TempDir::new().unwrap();
    let project = temp_dir.path().join("pal-game");

    let options = ScaffoldOptions {
        tv_mode: TvMode::Pal,
        ..ScaffoldOptions::default()
    };
    Scaffolder::new(options)
        .create(project.to_str().unwrap())
        .unwrap();

    let main = fs::read_to_string(project.join("src/main.asm")).unwrap();
    assert!(main.contains("TV_MODE = PAL\n"));
}

#[test]
fn test_scaffold_copies_from_assets_dir() {
    let temp_dir = TempDir::new().unwrap();
    let assets = temp_dir.path().join("assets");
    fs::create_dir(&assets).unwrap();
    for name in ["vcs.h", "macro.h", "tv_modes.h"] {
        fs::write(assets.join(name), format!("; custom {}\n", name)).unwrap();
    }
    let project = temp_dir.path().join("custom");

    let options = ScaffoldOptions {
        assets: AssetSource::Directory(assets),
        ..ScaffoldOptions::default()
    };
    Scaffolder::new(options)
        .create(project.to_str().unwrap())
        .unwrap();

    assert_eq!(
        fs::read_to_string(project.join("include/macro.h")).unwrap(),
        "; custom macro.h\n"
    );
}

#[test]
fn test_missing_asset_aborts_without_cleanup() {
    let temp_dir = TempDir::new().unwrap();
    let assets = temp_dir.path().join("assets");
    fs::create_dir(&assets).unwrap();
    fs::write(assets.join("vcs.h"), "; vcs\n").unwrap();
    let project = temp_dir.path().join("broken");

    let options = ScaffoldOptions {
        assets: AssetSource::Directory(assets.clone()),
        ..ScaffoldOptions::default()
    };
    let err = Scaffolder::new(options)
        .create(project.to_str().unwrap())
        .unwrap_err();

    match err {
        DevkitError::ScaffoldError { path, .. } => assert_eq!(path, assets.join("macro.h")),
        other => panic!("unexpected error: {other:?}"),
    }
    // the partial tree stays on disk
    assert!(project.join("include/vcs.h").is_file());
    assert!(!project.join("src/main.asm").exists());
}

#[test]
fn test_empty_project_name_is_rejected() {
    let err = Scaffolder::new(ScaffoldOptions::default())
        .create("")
        .unwrap_err();
    assert!(matches!(err, DevkitError::InvalidConfigValueError { .. }));
}
