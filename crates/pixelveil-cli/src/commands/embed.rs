use std::fs;
use std::path::PathBuf;

use clap::Args;
use pixelveil_core::{CodecOptions, OverflowBehavior, PixelveilError};

use crate::CliResult;

/// Embeds a text message in PNG and BMP images
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Carrier image such as a PNG or BMP file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub media: PathBuf,

    /// Image with the embedded message will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "message_file"
    )]
    pub message: Option<String>,

    /// Read the message from a text file instead
    #[arg(
        short = 'd',
        long = "data",
        value_name = "text file",
        required_unless_present = "message"
    )]
    pub message_file: Option<PathBuf>,

    /// Fail instead of truncating when the message does not fit the image
    #[arg(long)]
    pub strict: bool,
}

impl EmbedArgs {
    pub fn run(self) -> CliResult<()> {
        let text = match (self.message, self.message_file) {
            (Some(message), _) => message,
            (None, Some(file)) => fs::read_to_string(file)?,
            (None, None) => return Err(PixelveilError::MissingMessage),
        };

        let options = CodecOptions {
            overflow: if self.strict {
                OverflowBehavior::Fail
            } else {
                OverflowBehavior::Truncate
            },
        };

        pixelveil_core::commands::embed(&self.media, &self.write_to_file, &text, &options)
    }
}
