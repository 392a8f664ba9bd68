mod iterators;
pub mod lsb_codec;

pub use lsb_codec::{capacity_in_bits, CodecOptions, LsbCodec, OverflowBehavior};
