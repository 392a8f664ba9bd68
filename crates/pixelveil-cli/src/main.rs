use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = pixelveil_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    match CliArgs::parse().command {
        Commands::Embed(args) => args.run(),
        Commands::Extract(args) => args.run(),
    }
}
