//! # Pixelveil Core API
//!
//! Hides a text message in the least significant bits of an image's color
//! channels and recovers it again. The two halves are:
//! - [`LsbCodec::embed`][embed] for writing a message into a pixel buffer
//! - [`LsbCodec::extract`][extract] for reading a message back out
//!
//! Both operate purely on in-memory [`image::ImageBuffer`]s; the
//! [`commands`] module wraps them with file open/save for callers that work
//! with paths.
//!
//! # Usage Examples
//!
//! ## Hide a message inside an image
//!
//! ```rust
//! use image::RgbaImage;
//! use pixelveil_core::{CodecOptions, LsbCodec};
//!
//! let carrier = RgbaImage::from_fn(64, 64, |x, y| {
//!     image::Rgba([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255])
//! });
//!
//! let encoded = LsbCodec::embed(&carrier, "Meet me at dawn", &CodecOptions::default())
//!     .expect("Failed to embed message");
//!
//! assert_eq!(
//!     LsbCodec::extract(&encoded).expect("Failed to extract message"),
//!     "Meet me at dawn"
//! );
//! ```
//!
//! ## Strict capacity handling
//!
//! ```rust
//! use image::RgbaImage;
//! use pixelveil_core::{CodecOptions, LsbCodec, OverflowBehavior, PixelveilError};
//!
//! let tiny = RgbaImage::new(2, 2);
//! let options = CodecOptions { overflow: OverflowBehavior::Fail };
//!
//! let result = LsbCodec::embed(&tiny, "far too long for 12 bits", &options);
//! assert!(matches!(result, Err(PixelveilError::CapacityExceeded { .. })));
//! ```
//!
//! [embed]: ./media/image/lsb_codec/struct.LsbCodec.html#method.embed
//! [extract]: ./media/image/lsb_codec/struct.LsbCodec.html#method.extract

#![warn(clippy::redundant_else)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod commands;
pub mod error;
pub mod media;
pub mod payload;
pub mod result;

pub use crate::error::PixelveilError;
pub use crate::media::image::{capacity_in_bits, CodecOptions, LsbCodec, OverflowBehavior};
pub use crate::result::Result;
