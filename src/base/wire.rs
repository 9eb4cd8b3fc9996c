//! Creating and consuming data in wire format.
//!
//! This module contains the two error types used throughout the crate,
//! [`ParseError`] for taking data out of a wire-format message and
//! [`ComposeError`] for putting it in, together with a few small helpers
//! shared by the composing code of the other modules.

use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf};
use octseq::parse::ShortInput;

//------------ compose functions ---------------------------------------------

/// Appends a 16 bit integer in network byte order.
pub fn compose_u16<Target>(
    target: &mut Target,
    value: u16,
) -> Result<(), ComposeError>
where
    Target: OctetsBuilder + ?Sized,
    Target::AppendError: Into<ShortBuf>,
{
    append_slice(target, &value.to_be_bytes())
}

/// Appends a 32 bit integer in network byte order.
pub fn compose_u32<Target>(
    target: &mut Target,
    value: u32,
) -> Result<(), ComposeError>
where
    Target: OctetsBuilder + ?Sized,
    Target::AppendError: Into<ShortBuf>,
{
    append_slice(target, &value.to_be_bytes())
}

/// Appends a slice, translating the builder’s error.
pub fn append_slice<Target>(
    target: &mut Target,
    slice: &[u8],
) -> Result<(), ComposeError>
where
    Target: OctetsBuilder + ?Sized,
    Target::AppendError: Into<ShortBuf>,
{
    target.append_slice(slice).map_err(|err| {
        let err: ShortBuf = err.into();
        ComposeError::from(err)
    })
}

/// Converts a length into the 16 bit value used on the wire.
///
/// Fails with [`ComposeError::LongData`] if the length doesn’t fit.
pub fn len_u16(len: usize) -> Result<u16, ComposeError> {
    u16::try_from(len).map_err(|_| ComposeError::LongData)
}

//============ Error Types ===================================================

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing a wire-format message.
///
/// All variants are terminal for the parse that produced them: there is no
/// partial result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to read beyond the end of the buffer.
    ///
    /// This covers a header shorter than twelve octets, sections that
    /// contain fewer entries than the header announces, record data
    /// extending beyond the buffer, and compression pointers into nowhere.
    TruncatedBuffer,

    /// A label length octet had its top two bits set to `01` or `10`.
    MalformedLabel,

    /// Following compression pointers did not terminate.
    ///
    /// This is also reported when more than
    /// [`MAX_POINTERS`](super::name::MAX_POINTERS) pointers are followed
    /// for a single name or when pointers expand a name beyond 255 octets.
    CompressionLoop,

    /// A domain name without compression was longer than 255 octets.
    LongName,

    /// Record data had octets left over after its last field.
    TrailingData,

    /// The header carried a response code outside of 0 to 5.
    InvalidReplyCode(u8),
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::TruncatedBuffer
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::TruncatedBuffer => {
                f.write_str("unexpected end of input")
            }
            ParseError::MalformedLabel => f.write_str("invalid label type"),
            ParseError::CompressionLoop => {
                f.write_str("too many compression pointers")
            }
            ParseError::LongName => f.write_str("long domain name"),
            ParseError::TrailingData => {
                f.write_str("trailing data in record data")
            }
            ParseError::InvalidReplyCode(code) => {
                write!(f, "invalid response code {}", code)
            }
        }
    }
}

impl std::error::Error for ParseError {}

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// A label of a domain name was longer than 63 octets.
    LabelTooLong,

    /// A domain name was longer than 255 octets in wire format.
    LongName,

    /// The record data does not have the shape its record type requires.
    RdataMismatch,

    /// A length or count didn’t fit into its 16 bit field.
    LongData,

    /// The target buffer ran out of space.
    ShortBuf,
}

impl From<ShortBuf> for ComposeError {
    fn from(_: ShortBuf) -> Self {
        ComposeError::ShortBuf
    }
}

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::LabelTooLong => f.write_str("long label"),
            ComposeError::LongName => f.write_str("long domain name"),
            ComposeError::RdataMismatch => {
                f.write_str("record data does not match record type")
            }
            ComposeError::LongData => f.write_str("long data"),
            ComposeError::ShortBuf => f.write_str("buffer size exceeded"),
        }
    }
}

impl std::error::Error for ComposeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compose_integers() {
        let mut buf = Vec::<u8>::new();
        compose_u16(&mut buf, 0x1234).unwrap();
        compose_u32(&mut buf, 0xdead_beef).unwrap();
        assert_eq!(buf, b"\x12\x34\xde\xad\xbe\xef");
    }

    #[test]
    fn long_len() {
        assert_eq!(len_u16(0xFFFF), Ok(0xFFFF));
        assert_eq!(len_u16(0x10000), Err(ComposeError::LongData));
    }

    #[test]
    fn short_input() {
        let mut parser = octseq::parse::Parser::from_ref(&b"\x01"[..]);
        assert_eq!(
            parser.parse_u16_be().map_err(ParseError::from),
            Err(ParseError::TruncatedBuffer)
        );
        assert_eq!(
            format!("{}", ParseError::InvalidReplyCode(6)),
            "invalid response code 6"
        );
    }
}
