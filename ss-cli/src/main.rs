mod load;
mod sequences;
mod summary;

use clap::{
    Parser,
    Subcommand,
};
use ss_core::prelude::*;

#[derive(Parser)]
#[command(
    about = "command-line app for inspecting SkipSim datasets",
    version,
    propagate_version = true
)]
struct Options {
    #[command(subcommand)]
    subcommand: SsCommand,

    #[arg(short, long, global = true, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum SsCommand {
    #[command(about = "windowed per-session feature sequences for sequence models")]
    Sequences(sequences::Args),

    #[command(about = "skip-rate breakdowns of an exported dataset")]
    Summary(summary::Args),
}

fn main() -> EmptyResult {
    let args = Options::parse();
    ss_core::logging::setup(&args.verbosity);

    match &args.subcommand {
        SsCommand::Sequences(args) => sequences::cmd(args),
        SsCommand::Summary(args) => summary::cmd(args),
    }
}

#[cfg(test)]
mod tests;
