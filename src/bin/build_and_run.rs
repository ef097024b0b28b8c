use anyhow::Context;
use vcs_devkit::config::cli::parse_or_exit;
use vcs_devkit::core::build::{BuildPlan, BuildReport};
use vcs_devkit::domain::model::LaunchOutcome;
use vcs_devkit::utils::error::report_failure;
use vcs_devkit::utils::{logger, validation::Validate};
use vcs_devkit::{BuildArgs, BuildDriver, SystemLocator, SystemRunner, ToolConfig};

fn main() {
    let args: BuildArgs = parse_or_exit();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    if let Err(e) = run(&args) {
        std::process::exit(report_failure(&e));
    }
}

fn run(args: &BuildArgs) -> anyhow::Result<()> {
    args.validate()?;

    let config = ToolConfig::load(args.config.as_deref())
        .context("Failed to load tool configuration")?;
    config.validate()?;

    let driver = BuildDriver::new(SystemRunner, SystemLocator::new(), config);
    let request = args.to_request();

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be executed");
        let plan = driver.plan(&request)?;
        display_plan(&plan);
        return Ok(());
    }

    let report = driver.run(&request)?;
    display_outcome(&report, driver.config());
    Ok(())
}

fn display_plan(plan: &BuildPlan) {
    println!("🔍 Dry Run:");
    println!("  Source:   {}", plan.source.display());
    println!("  ROM:      {}", plan.artifacts.rom.display());
    println!("  Listing:  {}", plan.artifacts.listing.display());
    println!("  Symbols:  {}", plan.artifacts.symbols.display());
    if let Some(dir) = &plan.assembler.working_dir {
        println!("  Run in:   {}", dir.display());
    }
    println!("  Command:  {}", plan.assembler.command_line());
}

fn display_outcome(report: &BuildReport, config: &ToolConfig) {
    let rom = report.artifacts.rom.display();
    match &report.launch {
        LaunchOutcome::Launched { emulator } => {
            tracing::info!("Emulator {} started", emulator.display());
            println!("✅ Emulator launched successfully");
        }
        LaunchOutcome::EmulatorNotFound => {
            println!("⚠️  Emulator not found. ROM built successfully but cannot launch.");
            println!("{}", config.emulator.install_hint);
            println!("Or manually run: {} {}", config.emulator_display_name(), rom);
        }
        LaunchOutcome::Skipped => {
            println!("ROM ready: {}", rom);
        }
    }
}
