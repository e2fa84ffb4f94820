//! CLI entry point for converting image directories into collage PDFs

use clap::Parser;
use imagecollage::io::cli::{Cli, FileProcessor};

fn main() -> imagecollage::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
