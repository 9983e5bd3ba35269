//! CLI command definitions for confshape
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod read;
pub mod write;

use clap::{Parser, Subcommand};
use read::ReadArgs;
use write::WriteArgs;

/// Fold trees of config files into a single document and back
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (lists files to be written, raises log level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recursively read property files into a single document
    Read(ReadArgs),

    /// Write property files from a single document
    Write(WriteArgs),
}
