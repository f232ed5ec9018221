//! Runs a scripted session of the desktop and prints where everything ended up.

use anyhow::{Context, Result};
use clap::Parser;
use deskwm::script::parse_script;
use deskwm::utils::log::parse_log_level;
use deskwm::{config, Desktop};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Reads shell input as JSON lines from a file or stdin, applies it to a fresh \
             desktop and prints the resulting window manager state."
)]
struct DeskwmCli {
    /// Configuration file to use instead of the one in the XDG config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File with one JSON input per line. Reads stdin when omitted
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Also print a text picture of the desktop
    #[arg(short, long)]
    render: bool,
}

fn main() -> Result<()> {
    let cli = DeskwmCli::parse();

    let config = match &cli.config {
        Some(path) => config::load_from_file(Some(path.as_path()))?,
        None => config::load(),
    };

    let (subscriber, parse_err) = parse_log_level(&config.log_level);
    tracing::subscriber::set_global_default(subscriber)
        .context("couldn't setup global subscriber (logger)")?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log_level, falling back to info: {}", err);
    }

    let inputs = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("couldn't open {}", path.display()))?;
            parse_script(BufReader::new(file))?
        }
        None => parse_script(io::stdin().lock())?,
    };

    let mut desktop = Desktop::new(config);
    for input in inputs {
        desktop.apply(input);
    }

    println!("{}", desktop.state().to_json()?);
    if cli.render {
        println!("{}", desktop.render());
    }
    Ok(())
}
