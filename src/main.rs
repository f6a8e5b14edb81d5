use anyhow::Result;
use clap::{CommandFactory, Parser};

use pypublish::cli::{Args, Orchestrator};
use pypublish::config::{self, ReleaseConfig};
use pypublish::runner::{CommandRunner, DryRunRunner, ShellRunner};
use pypublish::{ui, PublishError};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Warn
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("pypublish")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn fail(error: &PublishError) -> ! {
    log::debug!("aborting: {:?}", error);
    ui::display_failure(error);
    std::process::exit(1);
}

fn run<R: CommandRunner>(config: &ReleaseConfig, runner: &R, args: &Args) -> Result<()> {
    let operation = args.operation()?;
    Orchestrator::new(config, runner).execute(&operation)?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logger(args.debug)?;

    // Reject a missing version before touching configuration or tools
    if let Err(PublishError::MissingArgument(message)) = args.operation() {
        let usage = Args::command().error(clap::error::ErrorKind::MissingRequiredArgument, message);
        if let Err(e) = usage.print() {
            log::error!("failed to print usage error: {}", e);
        }
        std::process::exit(1);
    }

    let working_dir = match args.directory.clone() {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let release_config = config::load_config(args.config.as_deref(), &working_dir)
        .and_then(|file| ReleaseConfig::resolve(file, &working_dir))
        .map(|resolved| resolved.with_remote(args.remote.clone()))
        .unwrap_or_else(|e| fail(&e));

    log::debug!(
        "working in {} with remote {}",
        release_config.working_dir.display(),
        release_config.remote
    );

    let shell = ShellRunner::new(&release_config);
    let outcome = if args.dry_run {
        run(&release_config, &DryRunRunner::new(shell), &args)
    } else {
        run(&release_config, &shell, &args)
    };

    if let Err(e) = outcome {
        match e.downcast_ref::<PublishError>() {
            Some(error) => fail(error),
            None => return Err(e),
        }
    }

    if args.dry_run {
        ui::display_status("Dry run: no commands were executed");
    }

    Ok(())
}
