use std::path::Path;
use std::process;

use log::{error, info};

use crskit::catalog::CATALOG;
use crskit::commands::{build_cli, CommandFactory, CrskitCommandFactory};
use crskit::config::{SystemDefinitions, SystemSet, DEFAULT_DEFINITIONS_FILE};
use crskit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    Logger::init_global_logger(matches.get_flag("verbose"));

    let log_file = matches.get_one::<String>("log").map(String::as_str).unwrap_or("crskit.log");
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    // Explicit --systems file, else the default file if present
    let definitions_path = matches.get_one::<String>("systems")
        .cloned()
        .or_else(|| Path::new(DEFAULT_DEFINITIONS_FILE).exists().then(|| DEFAULT_DEFINITIONS_FILE.to_string()));

    let user_systems = match definitions_path {
        Some(path) => match SystemDefinitions::from_file(&path) {
            Ok(definitions) => definitions.build(&CATALOG),
            Err(e) => {
                error!("Failed to load system definitions from {}: {}", path, e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => {
            info!("No system definitions loaded");
            SystemSet::new()
        }
    };

    let factory = CrskitCommandFactory::new(&CATALOG, user_systems);

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
