use bitstream_io::{BigEndian, BitWrite, BitWriter};
use image::{ImageBuffer, Pixel};
use log::debug;

use crate::bit_iterator::BitIterator;
use crate::error::PixelveilError;
use crate::media::image::iterators::{
    ColumnMajorPixels, ColumnMajorPixelsMut, RgbChannels, RgbChannelsMut, EMBED_CHANNELS,
};
use crate::payload;
use crate::result::Result;

/// Decides what happens when a message needs more bits than the carrier
/// offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowBehavior {
    /// Embed as many bits as fit and stop silently. The extracted message
    /// will be cut short and carry no terminator.
    #[default]
    Truncate,
    /// Refuse the whole message with [`PixelveilError::CapacityExceeded`]
    /// and leave the carrier alone.
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecOptions {
    /// Overflow handling for messages larger than the carrier capacity.
    /// Note this only concerns embedding, extraction is always best effort.
    pub overflow: OverflowBehavior,
}

/// The LSB codec for text messages in the color channels of an image.
///
/// Bits travel through the image column by column, 3 bits per pixel, one in
/// the least significant bit of each color channel. The alpha channel and
/// the upper 7 bits of every color channel are never modified.
pub struct LsbCodec;

impl LsbCodec {
    /// Hides a message in a copy of the carrier image.
    ///
    /// The carrier itself is left untouched; the returned image differs
    /// from it in at most the least significant bit of its color channels.
    ///
    /// ## Example
    /// ```rust
    /// use image::RgbaImage;
    /// use pixelveil_core::{CodecOptions, LsbCodec};
    ///
    /// let carrier = RgbaImage::from_pixel(32, 32, image::Rgba([120, 60, 30, 255]));
    /// let encoded = LsbCodec::embed(&carrier, "Hello, World!", &CodecOptions::default())
    ///     .expect("Failed to embed message");
    ///
    /// assert_eq!(
    ///     LsbCodec::extract(&encoded).expect("Failed to extract message"),
    ///     "Hello, World!"
    /// );
    /// ```
    pub fn embed<P>(
        carrier: &ImageBuffer<P, Vec<u8>>,
        text: &str,
        options: &CodecOptions,
    ) -> Result<ImageBuffer<P, Vec<u8>>>
    where
        P: Pixel<Subpixel = u8>,
    {
        ensure_color_channels::<P>()?;

        let message = payload::message_to_bytes(text)?;
        let required = message.len() * 8;
        let capacity = capacity_in_bits(carrier.width(), carrier.height());
        if required > capacity {
            match options.overflow {
                OverflowBehavior::Fail => {
                    return Err(PixelveilError::CapacityExceeded { required, capacity })
                }
                OverflowBehavior::Truncate => {
                    debug!("message needs {required} bits, carrier offers {capacity}, truncating")
                }
            }
        }

        // chunking the rows of a zero width image would panic below
        if capacity == 0 {
            return Ok(carrier.clone());
        }

        let mut encoded = carrier.clone();
        let width = encoded.width();
        let channels =
            RgbChannelsMut::from_pixels(ColumnMajorPixelsMut::from_rows_mut(
                encoded.rows_mut(),
                width,
            ));
        for (channel, bit) in channels.zip(BitIterator::new(&message)) {
            *channel = (*channel & !1) | bit;
        }

        Ok(encoded)
    }

    /// Reads a message back out of a carrier image.
    ///
    /// Extraction is best effort and never fails on content: an image that
    /// was never embedded into yields whatever its least significant bits
    /// happen to spell out. Only a pixel format with fewer than 3 color
    /// channels is rejected.
    pub fn extract<P>(carrier: &ImageBuffer<P, Vec<u8>>) -> Result<String>
    where
        P: Pixel<Subpixel = u8>,
    {
        ensure_color_channels::<P>()?;

        let capacity = capacity_in_bits(carrier.width(), carrier.height());
        if capacity == 0 {
            return Ok(String::new());
        }

        let mut bits = BitWriter::endian(Vec::with_capacity(capacity / 8), BigEndian);
        let channels =
            RgbChannels::from_pixels(ColumnMajorPixels::from_rows(carrier.rows(), carrier.width()));
        for channel in channels {
            bits.write_bit(channel & 1 == 1)?;
        }

        // a trailing chunk of fewer than 8 bits never forms a character,
        // leaving the writer unaligned drops it
        Ok(payload::bytes_to_message(&bits.into_writer()))
    }
}

/// Embeddable bits of a carrier: one per color channel, 3 channels per pixel.
pub fn capacity_in_bits(width: u32, height: u32) -> usize {
    width as usize * height as usize * EMBED_CHANNELS
}

fn ensure_color_channels<P: Pixel>() -> Result<()> {
    if (P::CHANNEL_COUNT as usize) < EMBED_CHANNELS {
        return Err(PixelveilError::InvalidChannelCount(P::CHANNEL_COUNT));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, LumaA, Rgba, RgbaImage};

    #[test]
    fn should_write_bits_column_major_into_the_lsb() {
        // 'H' = 0b0100_1000, so down the first column: 0,1,0,0 then 1,0,0,0
        let carrier = RgbaImage::from_pixel(2, 2, Rgba([10, 10, 10, 255]));

        let encoded = LsbCodec::embed(&carrier, "H", &CodecOptions::default())
            .expect("Failed to embed message");

        assert_eq!(encoded.get_pixel(0, 0).0, [10, 11, 10, 255]);
        assert_eq!(encoded.get_pixel(0, 1).0, [10, 11, 10, 255]);
        assert_eq!(encoded.get_pixel(1, 0).0, [10, 10, 10, 255]);
        assert_eq!(encoded.get_pixel(1, 1).0, [10, 10, 10, 255]);
    }

    #[test]
    fn should_not_mutate_the_callers_carrier() {
        let carrier = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4]));
        let untouched = carrier.clone();

        let _ = LsbCodec::embed(&carrier, "x", &CodecOptions::default())
            .expect("Failed to embed message");

        assert_eq!(carrier, untouched);
    }

    #[test]
    fn should_fail_on_overflow_in_strict_mode() {
        let carrier = RgbaImage::new(2, 2);
        let options = CodecOptions {
            overflow: OverflowBehavior::Fail,
        };

        // 2x2 carries 12 bits, "A" plus terminator needs 16
        match LsbCodec::embed(&carrier, "A", &options) {
            Err(PixelveilError::CapacityExceeded {
                required: 16,
                capacity: 12,
            }) => (),
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn should_leave_the_carrier_format_capacity_alone_in_truncate_mode() {
        let carrier = RgbaImage::new(2, 2);

        let encoded = LsbCodec::embed(&carrier, "A", &CodecOptions::default())
            .expect("Truncating embed must not fail");

        // 12 bits fit: all 8 bits of 'A' and the high 4 bits of the terminator
        assert_eq!(
            LsbCodec::extract(&encoded).expect("Failed to extract message"),
            "A"
        );
    }

    #[test]
    fn should_reject_grayscale_carriers() {
        let carrier = ImageBuffer::<Luma<u8>, Vec<u8>>::new(8, 8);

        match LsbCodec::extract(&carrier) {
            Err(PixelveilError::InvalidChannelCount(1)) => (),
            other => panic!("expected InvalidChannelCount, got {other:?}"),
        }

        match LsbCodec::embed(&carrier, "hi", &CodecOptions::default()) {
            Err(PixelveilError::InvalidChannelCount(1)) => (),
            other => panic!("expected InvalidChannelCount, got {other:?}"),
        }
    }

    #[test]
    fn should_reject_grayscale_alpha_carriers() {
        let carrier = ImageBuffer::<LumaA<u8>, Vec<u8>>::new(8, 8);

        match LsbCodec::extract(&carrier) {
            Err(PixelveilError::InvalidChannelCount(2)) => (),
            other => panic!("expected InvalidChannelCount, got {other:?}"),
        }
    }
}
