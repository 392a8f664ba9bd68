/// Iterates the bits of a byte slice, most significant bit first.
///
/// This is the bit order the message bytes are laid out in across the
/// color channels, so the first channel of the first pixel carries the
/// highest bit of the first message byte.
pub struct BitIterator<'a> {
    bytes: &'a [u8],
    cursor: usize,
}

impl<'a> BitIterator<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, cursor: 0 }
    }
}

impl Iterator for BitIterator<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let byte = self.bytes.get(self.cursor >> 3)?;
        let bit = (byte >> (7 - (self.cursor & 7))) & 1;
        self.cursor += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() * 8 - self.cursor;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use bitstream_io::{BigEndian, BitRead, BitReader};

    #[test]
    fn should_return_the_8_bits_of_h_most_significant_first() {
        let b = [0b0100_1000, 0b0110_0001, 0b0110_1100];
        let mut it = BitIterator::new(&b[..]);

        assert_eq!(it.next().unwrap(), 0, "1st bit not correct");
        assert_eq!(it.next().unwrap(), 1, "2nd bit not correct");
        assert_eq!(it.next().unwrap(), 0, "3rd bit not correct");
        assert_eq!(it.next().unwrap(), 0, "4th bit not correct");
        assert_eq!(it.next().unwrap(), 1, "5th bit not correct");
        assert_eq!(it.next().unwrap(), 0, "6th bit not correct");
        assert_eq!(it.next().unwrap(), 0, "7th bit not correct");
        assert_eq!(it.next().unwrap(), 0, "8th bit not correct");
    }

    #[test]
    fn should_return_the_bits_of_e_after_skip_8() {
        let b = [0b0100_1000, 0b0110_0101];
        let mut it = BitIterator::new(&b[..]).skip(8);

        assert_eq!(it.next().unwrap(), 0, "1st bit not correct");
        assert_eq!(it.next().unwrap(), 1, "2nd bit not correct");
        assert_eq!(it.next().unwrap(), 1, "3rd bit not correct");
        assert_eq!(it.next().unwrap(), 0, "4th bit not correct");
        assert_eq!(it.next().unwrap(), 0, "5th bit not correct");
        assert_eq!(it.next().unwrap(), 1, "6th bit not correct");
        assert_eq!(it.next().unwrap(), 0, "7th bit not correct");
        assert_eq!(it.next().unwrap(), 1, "8th bit not correct");
        assert_eq!(
            it.next(),
            None,
            "it should end after the last bit of the last byte"
        );
    }

    #[test]
    fn should_behave_as_the_big_endian_bit_reader() {
        let b = [0b0100_1000, 0b0110_0001];
        let mut it = BitIterator::new(&b[..]);
        let mut reader = BitReader::endian(&b[..], BigEndian);

        for i in 0..16 {
            assert_eq!(
                it.next().unwrap(),
                if reader.read_bit().unwrap() { 1 } else { 0 },
                "{} bit not correct",
                i
            );
        }
    }

    #[test]
    fn should_report_the_remaining_length() {
        let b = [0xff, 0x00];
        let mut it = BitIterator::new(&b[..]);
        assert_eq!(it.len(), 16);
        it.next();
        assert_eq!(it.len(), 15);
    }
}
