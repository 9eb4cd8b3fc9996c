//! Reading integers and flags at arbitrary bit positions.
//!
//! Header fields and a few record data fields aren’t aligned to octet
//! boundaries. The two functions in this module extract them from an
//! octets slice. Bits are counted from the most significant bit of the
//! first octet, i.e., in network order, and integers are big-endian.

use super::wire::ParseError;

/// The widest integer [`read_uint`] will extract.
pub const MAX_UINT_BITS: usize = 32;

/// Reads an unsigned integer of `width` bits starting at bit `offset`.
///
/// Returns [`ParseError::TruncatedBuffer`] if the range of bits reaches
/// beyond the end of `buf`.
///
/// # Panics
///
/// The function panics if `width` is larger than [`MAX_UINT_BITS`].
pub fn read_uint(
    buf: &[u8],
    offset: usize,
    width: usize,
) -> Result<u32, ParseError> {
    assert!(width <= MAX_UINT_BITS, "bit width exceeds 32 bits");
    let end = offset
        .checked_add(width)
        .ok_or(ParseError::TruncatedBuffer)?;
    if end > buf.len().saturating_mul(8) {
        return Err(ParseError::TruncatedBuffer);
    }
    if width == 0 {
        return Ok(0);
    }

    // At most five octets are involved, so everything fits into a u64.
    let first = offset / 8;
    let last = (end + 7) / 8;
    let mut res = buf[first..last]
        .iter()
        .fold(0u64, |res, octet| (res << 8) | u64::from(*octet));
    res >>= last * 8 - end;
    res &= (1u64 << width) - 1;
    Ok(res as u32)
}

/// Returns whether any bit of `mask` is set in the octet at `offset`.
pub fn read_flag(
    buf: &[u8],
    offset: usize,
    mask: u8,
) -> Result<bool, ParseError> {
    buf.get(offset)
        .map(|octet| octet & mask != 0)
        .ok_or(ParseError::TruncatedBuffer)
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn aligned() {
        let buf = b"\x12\x34\x56\x78\x9a";
        assert_eq!(read_uint(buf, 0, 8), Ok(0x12));
        assert_eq!(read_uint(buf, 0, 16), Ok(0x1234));
        assert_eq!(read_uint(buf, 8, 32), Ok(0x3456_789a));
    }

    #[test]
    fn unaligned() {
        // 0xC0 0x0C: a compression pointer to offset 12.
        let buf = b"\xc0\x0c";
        assert_eq!(read_uint(buf, 0, 2), Ok(0b11));
        assert_eq!(read_uint(buf, 2, 14), Ok(12));

        // Low nibble of the fourth header octet is the rcode.
        let buf = b"\x00\x28\x81\x83";
        assert_eq!(read_uint(buf, 28, 4), Ok(3));
        assert_eq!(read_uint(buf, 17, 4), Ok(0));

        // 32 bits not starting on an octet boundary.
        let buf = b"\x0f\xff\xff\xff\xf0";
        assert_eq!(read_uint(buf, 4, 32), Ok(0xFFFF_FFFF));
    }

    #[test]
    fn bounds() {
        let buf = b"\x01\x02";
        assert_eq!(read_uint(buf, 0, 0), Ok(0));
        assert_eq!(read_uint(buf, 16, 0), Ok(0));
        assert_eq!(read_uint(buf, 9, 7), Ok(2));
        assert_eq!(read_uint(buf, 9, 8), Err(ParseError::TruncatedBuffer));
        assert_eq!(
            read_uint(buf, usize::MAX, 1),
            Err(ParseError::TruncatedBuffer)
        );
        assert_eq!(read_uint(b"", 0, 1), Err(ParseError::TruncatedBuffer));
    }

    #[test]
    #[should_panic]
    fn too_wide() {
        let _ = read_uint(b"\0\0\0\0\0", 0, 33);
    }

    #[test]
    fn flags() {
        let buf = b"\x00\x00\x81\x10";
        assert_eq!(read_flag(buf, 2, 0x80), Ok(true));
        assert_eq!(read_flag(buf, 2, 0x04), Ok(false));
        assert_eq!(read_flag(buf, 2, 0x01), Ok(true));
        assert_eq!(read_flag(buf, 3, 0x10), Ok(true));
        assert_eq!(read_flag(buf, 4, 0x10), Err(ParseError::TruncatedBuffer));
    }
}
