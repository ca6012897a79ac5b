use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use randval::commands::{Cli, Commander, GeneratedValue, Report};
use randval::{GeneratorConfig, Result};

fn run(cli: &Cli) -> Result<GeneratedValue> {
    let config = match &cli.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    }
    .with_overrides(cli.seed, cli.words.clone());

    let generator = config.build()?;
    let commander = Commander::new(generator, config.separator.clone());
    commander.execute(&cli.command)
}

fn print_json(report: &Report) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialise report: {}", e),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    info!("Starting up");

    match run(&cli) {
        Ok(value) => {
            if cli.json {
                print_json(&Report::ok(value));
            } else {
                println!("{}", value);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            if cli.json {
                print_json(&Report::error(e.to_string()));
            } else {
                eprintln!("error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
