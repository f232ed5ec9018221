use anyhow::Result;
use clap::{arg, command};
use deskwm::config::{self, Config};
use std::path::PathBuf;

fn main() -> Result<()> {
    let matches = command!("DeskWM Check")
        .about("Checks syntax of the configuration file")
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(PathBuf::from);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m DeskWM version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    match config::load_from_file(config_file.as_deref()) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
            }
            report(&config, verbose);
        }
        Err(e) => {
            println!("Configuration failed. Reason: {e:?}");
        }
    }
    Ok(())
}

fn report(config: &Config, verbose: bool) {
    println!("\x1b[0;94m::\x1b[0m Checking geometry . . .");
    print_problems(&config.check_geometry(verbose));

    println!("\x1b[0;94m::\x1b[0m Checking log level . . .");
    let log_level: Vec<String> = config.check_log_level(verbose).into_iter().collect();
    print_problems(&log_level);

    println!("\x1b[0;94m::\x1b[0m Checking keybinds . . .");
    print_problems(&config.check_keybinds(verbose));
}

fn print_problems(problems: &[String]) {
    if problems.is_empty() {
        println!("\x1b[0;92m    -> All ok\x1b[0m");
    }
    for problem in problems {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {problem} \x1b[0m");
    }
}
