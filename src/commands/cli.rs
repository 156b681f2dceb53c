//! Command-line interface definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the `crskit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("crskit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert coordinates between coordinate reference systems")
        .arg(
            Arg::new("coordinate")
                .help("Coordinate to convert, as 'x,y' in the source system")
                .allow_hyphen_values(true)
                .required_unless_present_any(["list", "check"])
                .index(1),
        )
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .help("Source system (e.g. EPSG:4326, 3857, wgs84, or a name from --systems)")
                .value_name("SYSTEM")
                .default_value("wgs84"),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Target system")
                .value_name("SYSTEM")
                .required_unless_present("list"),
        )
        .arg(
            Arg::new("systems")
                .short('s')
                .long("systems")
                .help("TOML file with additional system definitions")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List known reference systems")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Only report whether the systems are convertible")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .help("Transcript file for results")
                .value_name("FILE")
                .default_value("crskit.log"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
