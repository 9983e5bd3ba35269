//! confshape CLI
//!
//! One-shot converter between directory trees of Java properties, XML,
//! YAML, and JSON files and a single nested document. `read` folds a
//! directory into one document; `write` expands a document back into files.

use anyhow::Result;
use clap::Parser;
use confshape::cli::read::ReadArgs;
use confshape::cli::write::WriteArgs;
use confshape::cli::{Cli, Command};
use confshape::codec::CodecRegistry;
use confshape::{harvest, materialize, tree};
use serde_json::Value;
use std::fs::OpenOptions;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(file)
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let registry = CodecRegistry::standard();

    match cli.command {
        Command::Read(args) => run_read(&registry, args),
        Command::Write(args) => run_write(&registry, args, cli.verbose),
    }
}

/// Run the read command: harvest files, nest their paths, dump one document.
fn run_read(registry: &CodecRegistry, args: ReadArgs) -> Result<()> {
    let flat = harvest::read_properties(&args.src_path, registry)?;
    info!(
        "harvested {} files under {}",
        flat.len(),
        args.src_path.display()
    );

    let nested = tree::nest(&flat)?;
    registry.write(&args.out, &Value::Object(nested))?;
    info!("wrote {}", args.out.display());
    Ok(())
}

/// Run the write command: read one document, flatten it, materialize files.
fn run_write(registry: &CodecRegistry, args: WriteArgs, verbose: bool) -> Result<()> {
    let document = registry.read(&args.src_structure)?;
    let Value::Object(ref root) = document else {
        anyhow::bail!(
            "{}: document root must be a mapping",
            args.src_structure.display()
        );
    };

    let mut flat = tree::flatten(root, |segment| registry.is_registered(segment))?;
    if let Some(ref needle) = args.key {
        flat = materialize::filter_keys(flat, needle);
    }

    if verbose {
        println!("Files to write:");
        for key in flat.keys() {
            println!("{key}");
        }
    }

    materialize::write_properties(&flat, &args.out, registry)?;
    info!("wrote {} files under {}", flat.len(), args.out.display());
    Ok(())
}
