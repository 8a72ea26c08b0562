//! Binary entry point for the termrig CLI.

use anyhow::Result;
use clap::Parser;

use termrig::cli::{Cli, Command};
use termrig::{commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    logging::init(args.verbose);

    match args.command {
        Command::Render(opts) => commands::render::run(&args.global, &opts),
        Command::Show(opts) => commands::show::run(&args.global, &opts),
        Command::List(opts) => commands::list::run(&args.global, &opts),
        Command::Completion(opts) => commands::completion::run(&opts),
        Command::Version => {
            let version = option_env!("TERMRIG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"));
            println!("termrig {version}");
            Ok(())
        }
    }
}
