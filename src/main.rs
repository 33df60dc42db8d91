//! bootiso CLI
//!
//! Entry point for the `bootiso` command-line tool.

use bootiso::style::Styler;
use bootiso::{app, logging, BootisoError, ExitCode, DEFAULT_SETTINGS_PATH};
use clap::{Parser, Subcommand};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "bootiso")]
#[command(about = "Generate GRUB2 boot entries for ISO images", version)]
struct Cli {
    /// Path to the global settings file
    #[arg(long, short = 's', global = true, default_value = DEFAULT_SETTINGS_PATH)]
    settings: PathBuf,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print boot entries for every config file (default)
    Generate,

    /// List config files defined in the repository
    List {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose, !cli.no_color && io::stderr().is_terminal());
    let stderr_styler = Styler::detect(cli.no_color, io::stderr().is_terminal());

    if let Err(e) = run(&cli) {
        eprintln!("{}", stderr_styler.error(&e.to_string()));
        process::exit(e.exit_code().as_i32());
    }

    process::exit(ExitCode::Success.as_i32());
}

fn run(cli: &Cli) -> Result<(), BootisoError> {
    let settings = app::load_settings(&cli.settings)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        None | Some(Commands::Generate) => {
            app::generate(&settings, &mut out)?;
        }
        Some(Commands::List { json }) => {
            let styler = Styler::detect(cli.no_color, io::stdout().is_terminal());
            app::list(&settings, json, &styler, &mut out)?;
        }
    }

    Ok(())
}
