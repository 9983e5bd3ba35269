//! Write subcommand for confshape
//!
//! Reads a single nested document and expands it back into a tree of
//! property files under an output directory.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the write subcommand
#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Document holding the nested structure to expand into files
    pub src_structure: PathBuf,

    /// Output directory root
    #[arg(short, long, value_name = "DIR", default_value = "./out/")]
    pub out: PathBuf,

    /// Only materialize files whose path contains this substring
    #[arg(short, long, value_name = "KEY")]
    pub key: Option<String>,
}
