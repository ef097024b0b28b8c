use anyhow::Context;
use vcs_devkit::config::cli::parse_or_exit;
use vcs_devkit::core::scaffold::AssetSource;
use vcs_devkit::domain::model::ProjectLayout;
use vcs_devkit::utils::error::report_failure;
use vcs_devkit::utils::{logger, validation::Validate};
use vcs_devkit::{ScaffoldArgs, ScaffoldOptions, Scaffolder, ToolConfig};

fn main() {
    let args: ScaffoldArgs = parse_or_exit();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args) {
        std::process::exit(report_failure(&e));
    }
}

fn run(args: &ScaffoldArgs) -> anyhow::Result<()> {
    args.validate()?;

    let config = ToolConfig::load(args.config.as_deref())
        .context("Failed to load tool configuration")?;
    config.validate()?;

    // flags override the config file
    let mut options = ScaffoldOptions::from_config(&config);
    if let Some(tv_mode) = args.tv_mode {
        options.tv_mode = tv_mode;
    }
    if let Some(dir) = &args.assets_dir {
        options.assets = AssetSource::Directory(dir.clone());
    }

    let layout = Scaffolder::new(options).create(&args.project_name)?;
    display_summary(&args.project_name, &layout);
    Ok(())
}

fn display_summary(project_name: &str, layout: &ProjectLayout) {
    println!("✅ Project '{}' created successfully!", project_name);
    println!();
    println!("Project structure:");
    println!("  {}/", layout.root().display());
    println!("  ├── src/");
    println!("  │   └── main.asm          # Your code here");
    println!("  ├── include/");
    println!("  │   ├── vcs.h             # TIA/RIOT registers");
    println!("  │   ├── macro.h           # Helpful macros");
    println!("  │   └── tv_modes.h        # TV mode constants");
    println!("  ├── build/                # Build output");
    println!("  └── .gitignore");
    println!();
    println!("Next steps:");
    println!("  cd {}", project_name);
    println!("  build_and_run src/main.asm");
    println!("  (or manually: dasm src/main.asm -f3 -obuild/game.a26 && stella build/game.a26)");
}
