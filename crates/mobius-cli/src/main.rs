use std::error::Error;
use std::process;

use clap::{Parser, Subcommand};

use commands::{
    envelope::{self, EnvelopeArgs},
    index::{self, IndexArgs},
};

mod commands;
mod render;

#[derive(Parser, Debug)]
#[command(name = "mobius", about = "Möbius index and envelope normalization verifier")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate the heat-kernel envelope normalization on S^1 x RP^3 vs. S^1 x S^3.
    Envelope(EnvelopeArgs),
    /// Verify the AHSS rank sum and the decade-index density prediction.
    Index(IndexArgs),
}

fn main() {
    let cli = Cli::parse();
    let outcome: Result<i32, Box<dyn Error>> = match cli.command {
        Command::Envelope(args) => envelope::run(&args),
        Command::Index(args) => index::run(&args),
    };
    match outcome {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("ERROR: {err}");
            process::exit(2);
        }
    }
}
