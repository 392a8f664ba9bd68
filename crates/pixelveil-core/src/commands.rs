//! File level operations: the seam between the pure codec and the
//! filesystem. Everything in here deals with paths and image containers,
//! nothing in here knows how bits are laid out in pixels.

use std::path::Path;

use image::RgbaImage;
use log::{error, info};

use crate::error::PixelveilError;
use crate::media::image::{CodecOptions, LsbCodec};
use crate::result::Result;

/// Embeds `text` into the image at `media` and writes the result to
/// `target`.
///
/// PNG, BMP and JPEG carriers are accepted as input. The target must be a
/// lossless format: JPEG targets are rejected because re-compression would
/// destroy the least significant bits.
pub fn embed(media: &Path, target: &Path, text: &str, options: &CodecOptions) -> Result<()> {
    let carrier = open_carrier(media)?;
    let encoded = LsbCodec::embed(&carrier, text, options)?;
    save_carrier(&encoded, target)?;
    info!("embedded {} characters into {target:?}", text.chars().count());

    Ok(())
}

/// Extracts the embedded message from the image at `media`.
pub fn extract(media: &Path) -> Result<String> {
    let carrier = open_carrier(media)?;

    LsbCodec::extract(&carrier)
}

fn open_carrier(path: &Path) -> Result<RgbaImage> {
    match extension(path)?.as_str() {
        // JPEG input decodes fine, but anything embedded before a lossy
        // re-compression is gone
        "png" | "bmp" | "jpg" | "jpeg" => image::open(path)
            .map(|img| img.to_rgba8())
            .map_err(|e| {
                error!("Error opening image {path:?}: {e}");
                PixelveilError::InvalidImageMedia
            }),
        _ => Err(PixelveilError::UnsupportedMedia),
    }
}

fn save_carrier(img: &RgbaImage, path: &Path) -> Result<()> {
    match extension(path)?.as_str() {
        "png" | "bmp" => img.save(path).map_err(|e| {
            error!("Error saving image {path:?}: {e}");
            PixelveilError::ImageEncodingError
        }),
        "jpg" | "jpeg" => Err(PixelveilError::LossyOutputFormat),
        _ => Err(PixelveilError::UnsupportedMedia),
    }
}

fn extension(path: &Path) -> Result<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .ok_or(PixelveilError::UnsupportedMedia)
}
