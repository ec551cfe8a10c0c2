use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use lib_version::config::{self, Config};
use lib_version::{ui, VersionResolver};

#[derive(clap::Parser)]
#[command(
    name = "lib-version",
    about = "Print the library version resolved from build metadata or version.properties"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Log each resolution step to stderr")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    // A broken config never prevents printing a version
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_warning(&format!("Ignoring configuration: {}", e));
            Config::default()
        }
    };

    VersionResolver::from_config(&config).print_version();
    Ok(())
}
