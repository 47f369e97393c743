//! zabbix-cli Binary
//!
//! Loads the zabbix-cli configuration and runs the requested command. Any configuration error
//! ends the process with status 1.

use clap::Parser;
use std::process;
use tracing::{error, info};
use zabbix_cli::cli::{map_error, Cli, RunContext};
use zabbix_cli::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let context = match RunContext::new(cli.config.clone(), &cli.command) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("\n{}\n", map_error(&e));
            process::exit(1);
        }
    };

    // Initialize logging once the [logging] section is known
    if let Err(e) = init_logging(&context.logging_settings(cli.verbose)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!(
        config_file = ?context.config().and_then(|c| c.config_file()),
        "zabbix-cli starting"
    );

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {:#}", e);
            eprintln!("[ERROR]: {:#}", e);
            process::exit(1);
        }
    }
}
