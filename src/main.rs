//! confdoc — extract documentation from an annotated sample config file.
//!
//! Reads a PHP-style sample config (`$CONFIG = array( ... );`) whose entries
//! carry `/** ... */` doc comments and emits the documentation in one of two
//! notations:
//!
//! - **rst** (default): merged into an existing document at marker-delimited
//!   regions, leaving hand-authored content untouched
//! - **asciidoc**: a freshly serialized document, overwriting the output file

mod assemble;
mod merge;
mod model;
mod parser;
mod render;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use parser::docblock::PhpdocParser;
use render::asciidoc::AsciiDocRenderer;
use render::rst::RstRenderer;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "confdoc",
    about = "Convert an annotated sample config file into RST or AsciiDoc documentation"
)]
struct Cli {
    /// The location of the sample config file
    #[arg(short = 'i', long)]
    input_file: PathBuf,

    /// The location of the destination document
    #[arg(short = 'o', long)]
    output_file: PathBuf,

    /// Tag name used for copying a config entry's documentation
    #[arg(short = 't', long, default_value = "see")]
    tag: String,

    /// Output format: rst (marker merge) or asciidoc (full overwrite)
    #[arg(short = 'f', long, default_value = "rst")]
    format: String,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input_file)
        .with_context(|| format!("failed to read {}", cli.input_file.display()))?;
    let blocks = parser::parse_source(&source, &PhpdocParser)
        .with_context(|| format!("failed to extract blocks from {}", cli.input_file.display()))?;

    let output = match cli.format.as_str() {
        "rst" => {
            let sections =
                assemble::Sections::from_assembled(assemble::assemble(&blocks, &RstRenderer, &cli.tag));
            let dest = fs::read_to_string(&cli.output_file)
                .with_context(|| format!("failed to read {}", cli.output_file.display()))?;
            merge::merge_sections(&dest, &sections)?
        }
        "asciidoc" | "adoc" => {
            let records =
                assemble::into_records(assemble::assemble(&blocks, &AsciiDocRenderer, &cli.tag));
            render::asciidoc::render_document(&records)
        }
        other => return Err(anyhow!("unknown format: {}. Use rst or asciidoc", other)),
    };

    fs::write(&cli.output_file, output)
        .with_context(|| format!("failed to write {}", cli.output_file.display()))?;

    Ok(())
}
