use clap::Parser;
use kubemon::{cli::Cli, config, run_command};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> kubemon::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let working_dir = std::env::current_dir().ok();
    let config = config::load_config(cli.config.as_deref(), working_dir.as_deref())?;

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let output = run_command(&cli.command, &config)?;
    if !cli.quiet {
        println!("{}", output);
    }

    Ok(())
}
