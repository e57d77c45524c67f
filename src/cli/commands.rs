//! Command dispatch

use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::TreeService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{global_config_path, Settings};
use crate::domain::TreeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Show { file, indent } => cmd_show(&service(cli)?, file, *indent),
        Commands::Tree { file } => cmd_tree(&service(cli)?, file),
        Commands::Price { file } => cmd_price(&service(cli)?, file),
        Commands::Stats { file } => cmd_stats(&service(cli)?, file),
        Commands::Config { command } => cmd_config(cli, command),
        Commands::Completion { shell } => {
            cmd_completion(*shell);
            Ok(())
        }
    }
}

fn service(cli: &Cli) -> CliResult<TreeService> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);
    Ok(TreeService::new(Arc::new(settings)))
}

#[instrument(skip(service))]
fn cmd_show(service: &TreeService, file: &Path, indent: usize) -> CliResult<()> {
    let tree = service.load(file)?;
    for line in service.render(&tree, indent) {
        output::info(&line);
    }
    Ok(())
}

#[instrument(skip(service))]
fn cmd_tree(service: &TreeService, file: &Path) -> CliResult<()> {
    let tree = service.load(file)?;
    // termtree ends every line with a newline
    print!("{}", tree.to_tree_string());
    Ok(())
}

#[instrument(skip(service))]
fn cmd_price(service: &TreeService, file: &Path) -> CliResult<()> {
    let tree = service.load(file)?;
    output::action("Total price", &service.price(&tree));
    Ok(())
}

#[instrument(skip(service))]
fn cmd_stats(service: &TreeService, file: &Path) -> CliResult<()> {
    let tree = service.load(file)?;
    let stats = service.stats(&tree);

    output::header(tree.name());
    output::detail(&format!("nodes: {}", stats.nodes));
    output::detail(&format!("depth: {}", stats.depth));
    output::detail(&format!("containers: {}", stats.containers));
    output::detail(&format!("leaves: {}", stats.leaves));
    for (kind, count) in &stats.by_kind {
        output::detail(&format!("  {kind}: {count}"));
    }
    Ok(())
}

fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Path => {
            let path = global_config_path().ok_or_else(|| ApplicationError::Config {
                message: "cannot determine config directory".into(),
            })?;
            output::info(&path.display());
        }
    }
    Ok(())
}

fn cmd_completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
