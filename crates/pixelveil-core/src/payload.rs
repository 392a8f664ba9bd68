//! Byte representation of a text message.
//!
//! A message is stored as one byte per character in the Latin-1 range,
//! followed by a single `0x00` terminator. The terminator marks the end of
//! the message on extraction; a carrier without one simply yields all the
//! bytes it holds.

use crate::error::PixelveilError;
use crate::result::Result;

/// Marks the end of the embedded message.
pub const TERMINATOR: u8 = 0;

/// Turns a message into the byte run that goes into the carrier,
/// terminator included.
///
/// Characters above U+00FF do not fit into a single byte and are rejected,
/// a `0x00` inside the message is accepted but will truncate the message
/// on extraction.
pub fn message_to_bytes(text: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len() + 1);
    for c in text.chars() {
        let code = u32::from(c);
        if code > 0xFF {
            return Err(PixelveilError::UnencodableCharacter(c));
        }
        bytes.push(code as u8);
    }
    bytes.push(TERMINATOR);

    Ok(bytes)
}

/// Reassembles the message from the raw bytes read out of a carrier.
///
/// Everything before the first terminator is the message. Without a
/// terminator the whole byte run is returned, mapped byte for byte onto
/// U+0000..=U+00FF.
pub fn bytes_to_message(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .position(|&b| b == TERMINATOR)
        .unwrap_or(bytes.len());

    bytes[..end].iter().map(|&b| char::from(b)).collect()
}
