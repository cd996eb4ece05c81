use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use tracing_subscriber::EnvFilter;

use postman_actions::{CatalogConfig, CatalogVars, GroupNode};

fn cli() -> Command {
    Command::new("postman-actions")
        .about("Reduce a Postman API export into an SDK action catalog (JSON)")
        .arg(
            Arg::new("api-file")
                .long("api-file")
                .short('f')
                .env("POSTMAN_API_FILE")
                .default_value("./postman-api.json")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the Postman collection export"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_parser(value_parser!(PathBuf))
                .help("Write the catalog here instead of stdout"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .action(ArgAction::SetTrue)
                .help("Emit compact JSON"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let api_file = matches
        .get_one::<PathBuf>("api-file")
        .context("missing --api-file")?;
    tracing::info!("using API file: {}", api_file.display());

    let raw = fs::read_to_string(api_file)
        .with_context(|| format!("failed to read {}", api_file.display()))?;
    let doc: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("invalid JSON in {}", api_file.display()))?;

    let config = CatalogConfig::default();
    let root = GroupNode::build(&doc, &config)?;
    tracing::info!("{root}");
    let vars = CatalogVars::from_root(&root, &config);

    let json = if matches.get_flag("compact") {
        serde_json::to_string(&vars)?
    } else {
        serde_json::to_string_pretty(&vars)?
    };

    match matches.get_one::<PathBuf>("output") {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
