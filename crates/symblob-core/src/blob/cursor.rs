use crate::error::DecodeError;

use super::layout;

/// Read position, nesting depth, and safe byte access over one blob.
///
/// A cursor is owned by a single decode call. Depth starts at 1 and is
/// only changed through [`Cursor::dive`] and [`Cursor::rise`].
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    depth: u16,
}

impl<'a> Cursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            depth: 1,
        }
    }

    pub fn tell(&self) -> usize {
        self.pos
    }

    pub fn depth(&self) -> u16 {
        self.depth
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn seek(&mut self, pos: usize) -> Result<(), DecodeError> {
        if pos > self.data.len() {
            return Err(DecodeError::UnexpectedEndOfStream {
                offset: self.data.len(),
                needed: pos - self.data.len(),
                remaining: 0,
            });
        }
        self.pos = pos;
        Ok(())
    }

    pub fn dive(&mut self) {
        self.depth = self.depth.wrapping_add(1);
    }

    pub fn rise(&mut self) {
        self.depth = self.depth.wrapping_sub(1);
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(DecodeError::UnexpectedEndOfStream {
                offset: self.pos,
                needed: len,
                remaining: self.remaining(),
            })?;
        let bytes = &self.data[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn skip(&mut self, len: usize) -> Result<(), DecodeError> {
        self.read_bytes(len).map(|_| ())
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let [value] = self.read_array::<1>()?;
        Ok(value)
    }

    pub fn read_u16_le(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64, DecodeError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_f64_le(&mut self) -> Result<f64, DecodeError> {
        self.read_u64_le().map(f64::from_bits)
    }

    /// Read a 4-byte little-endian byte length followed by that many bytes
    /// of UTF-16LE text.
    pub fn read_length_prefixed_utf16_string(&mut self) -> Result<String, DecodeError> {
        let len = self.read_u32_le()? as usize;
        let offset = self.pos;
        let bytes = self.read_bytes(len)?;
        if bytes.len() % 2 != 0 {
            return Err(DecodeError::InvalidUtf16 { offset });
        }
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).map_err(|_| DecodeError::InvalidUtf16 { offset })
    }

    pub fn peek_u8(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Consume a run of zero bytes, leaving the first non-zero byte unread.
    ///
    /// Reaching the end of the stream simply ends the run.
    pub fn consume_padding(&mut self) -> usize {
        let start = self.pos;
        while self.peek_u8() == Some(0) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Read `expected.len()` bytes and require them to match exactly.
    pub fn expect_bytes(
        &mut self,
        expected: &[u8],
        context: &'static str,
    ) -> Result<(), DecodeError> {
        let offset = self.pos;
        let found = self.read_bytes(expected.len())?;
        if found != expected {
            return Err(DecodeError::UnexpectedMarker {
                offset,
                context,
                expected: expected.to_vec(),
                found: found.to_vec(),
            });
        }
        Ok(())
    }

    pub fn expect_magic(&mut self, magic: &[u8], context: &'static str) -> Result<(), DecodeError> {
        let offset = self.pos;
        let found = self.read_bytes(magic.len())?;
        if found != magic {
            return Err(DecodeError::CorruptMagic {
                offset,
                context,
                found: found.to_vec(),
            });
        }
        Ok(())
    }

    pub fn expect_terminator(
        &mut self,
        expected: u8,
        context: &'static str,
    ) -> Result<(), DecodeError> {
        let offset = self.pos;
        let found = self.read_u8()?;
        if found != expected {
            return Err(DecodeError::UnexpectedTerminator {
                offset,
                context,
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Read one 4-byte enabled/locked flag.
    pub fn read_flag(&mut self) -> Result<bool, DecodeError> {
        Ok(self.read_u32_le()? == layout::FLAG_SET)
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;
    use crate::error::DecodeError;

    #[test]
    fn reads_little_endian_values() {
        let mut bytes = vec![0x34, 0x12, 0x78, 0x56, 0x34, 0x12];
        bytes.extend_from_slice(&1.5f64.to_le_bytes());
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_u16_le().unwrap(), 0x1234);
        assert_eq!(cursor.read_u32_le().unwrap(), 0x1234_5678);
        assert_eq!(cursor.read_f64_le().unwrap(), 1.5);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn short_read_reports_offset_and_sizes() {
        let bytes = [0u8; 3];
        let mut cursor = Cursor::new(&bytes);
        cursor.skip(1).unwrap();
        let err = cursor.read_u32_le().unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnexpectedEndOfStream {
                offset: 1,
                needed: 4,
                remaining: 2,
            }
        );
        assert_eq!(cursor.tell(), 1);
    }

    #[test]
    fn padding_stops_before_non_zero_byte() {
        let bytes = [0, 0, 0, 7, 0];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.consume_padding(), 3);
        assert_eq!(cursor.tell(), 3);
        assert_eq!(cursor.read_u8().unwrap(), 7);
    }

    #[test]
    fn padding_without_zeros_is_a_no_op() {
        let bytes = [5, 0];
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.consume_padding(), 0);
        assert_eq!(cursor.tell(), 0);
    }

    #[test]
    fn padding_at_end_of_stream() {
        let bytes = [1, 0, 0];
        let mut cursor = Cursor::new(&bytes);
        cursor.skip(1).unwrap();
        assert_eq!(cursor.consume_padding(), 2);
        assert_eq!(cursor.remaining(), 0);
    }

    #[test]
    fn dive_and_rise_track_depth() {
        let mut cursor = Cursor::new(&[]);
        assert_eq!(cursor.depth(), 1);
        cursor.dive();
        cursor.dive();
        assert_eq!(cursor.depth(), 3);
        cursor.rise();
        assert_eq!(cursor.depth(), 2);
    }

    #[test]
    fn seek_past_end_fails() {
        let bytes = [0u8; 2];
        let mut cursor = Cursor::new(&bytes);
        cursor.seek(2).unwrap();
        assert!(cursor.seek(3).is_err());
        assert_eq!(cursor.tell(), 2);
    }

    #[test]
    fn reads_utf16_string() {
        let mut bytes = 4u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[b'o', 0, b'k', 0]);
        let mut cursor = Cursor::new(&bytes);
        assert_eq!(cursor.read_length_prefixed_utf16_string().unwrap(), "ok");
    }

    #[test]
    fn odd_length_utf16_string_is_rejected() {
        let mut bytes = 3u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&[b'o', 0, b'k']);
        let mut cursor = Cursor::new(&bytes);
        let err = cursor.read_length_prefixed_utf16_string().unwrap_err();
        assert_eq!(err, DecodeError::InvalidUtf16 { offset: 4 });
    }

    #[test]
    fn unpaired_surrogate_is_rejected() {
        let mut bytes = 2u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&0xd800u16.to_le_bytes());
        let mut cursor = Cursor::new(&bytes);
        assert!(matches!(
            cursor.read_length_prefixed_utf16_string(),
            Err(DecodeError::InvalidUtf16 { .. })
        ));
    }

    #[test]
    fn expect_bytes_reports_mismatch() {
        let bytes = [0x01, 0x01];
        let mut cursor = Cursor::new(&bytes);
        let err = cursor.expect_bytes(&[0x01, 0x00], "marker").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedMarker { offset: 0, .. }
        ));
    }

    #[test]
    fn expect_terminator_reports_found_byte() {
        let bytes = [0x0d, 0x02];
        let mut cursor = Cursor::new(&bytes);
        cursor.expect_terminator(0x0d, "layer").unwrap();
        let err = cursor.expect_terminator(0x0d, "layer").unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedTerminator {
                offset: 1,
                expected: 0x0d,
                found: 0x02,
                ..
            }
        ));
        assert_eq!(cursor.tell(), 2);
    }

    #[test]
    fn flag_is_true_only_for_one() {
        let mut bytes = 1u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        let mut cursor = Cursor::new(&bytes);
        assert!(cursor.read_flag().unwrap());
        assert!(!cursor.read_flag().unwrap());
        assert!(!cursor.read_flag().unwrap());
    }
}
