//! Read subcommand for confshape
//!
//! Harvests property-bearing files under a directory root and folds them
//! into a single nested document.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the read subcommand
#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Directory root (or single file) to harvest properties from
    pub src_path: PathBuf,

    /// Output document; format follows the file extension
    #[arg(short, long, value_name = "FILE", default_value = "out.yml")]
    pub out: PathBuf,
}
