use std::fs;
use std::path::PathBuf;

use clap::Args;
use pixelveil_core::PixelveilError;

use crate::CliResult;

/// Extracts a hidden text message from an image
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Source image that contains the hidden message
    #[arg(
        short = 'i',
        long = "in",
        value_name = "image source file",
        required = true
    )]
    pub media: PathBuf,

    /// Write the message to this file instead of stdout
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub write_to_file: Option<PathBuf>,
}

impl ExtractArgs {
    pub fn run(self) -> CliResult<()> {
        let message = pixelveil_core::commands::extract(&self.media)?;

        match self.write_to_file {
            Some(path) => fs::write(path, message)
                .map_err(|source| PixelveilError::WriteError { source })?,
            None => println!("{message}"),
        }

        Ok(())
    }
}
