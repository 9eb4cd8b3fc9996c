//! Domain names in wire format.
//!
//! Domain names are handled as dot-separated strings such as
//! `"www.example.com"`. On the wire, a name is a sequence of labels, each
//! prefixed by a single length octet, terminated by the empty root label.
//! The top two bits of the length octet are a tag: `00` marks a normal
//! label with the remaining six bits as its length, while `11` marks a
//! compression pointer. Such a pointer takes up two octets; the lower
//! fourteen bits give the position in the message where the rest of the
//! name continues.
//!
//! Parsing resolves all compression pointers so the resulting string never
//! depends on the message it was taken from. Composing never produces
//! compression pointers.

use super::bits;
use super::wire::{append_slice, ComposeError, ParseError};
use octseq::builder::{OctetsBuilder, ShortBuf};
use octseq::parse::Parser;

/// The maximum length of a single label.
pub const MAX_LABEL_LEN: usize = 63;

/// The maximum length of a name in wire format, including the root label.
pub const MAX_NAME_LEN: usize = 255;

/// The maximum number of compression pointers followed for a single name.
///
/// A name of at most 255 octets has no more than 127 non-root labels.
pub const MAX_POINTERS: usize = 127;

//------------ Composing -----------------------------------------------------

/// Returns an iterator over the non-empty labels of a name.
fn labels(name: &str) -> impl Iterator<Item = &str> {
    name.split('.').filter(|label| !label.is_empty())
}

/// Returns the length of the wire-format encoding of `name`.
///
/// This is the sum of the label lengths plus one length octet per label
/// plus the terminating root label. It may not exceed 255 octets.
pub fn name_compose_len(name: &str) -> Result<usize, ComposeError> {
    let len = labels(name).try_fold(1, |len, label| {
        if label.len() > MAX_LABEL_LEN {
            Err(ComposeError::LabelTooLong)
        } else {
            Ok(len + label.len() + 1)
        }
    })?;
    if len > MAX_NAME_LEN {
        return Err(ComposeError::LongName);
    }
    Ok(len)
}

/// Appends the uncompressed wire-format encoding of `name` to `target`.
///
/// Empty labels are skipped, so both `"example.com"` and `"example.com."`
/// produce the same encoding and the empty string produces the root name.
///
/// Nothing is appended if a label is longer than 63 octets or the whole
/// name longer than 255 octets.
pub fn compose_name<Target>(
    name: &str,
    target: &mut Target,
) -> Result<(), ComposeError>
where
    Target: OctetsBuilder + ?Sized,
    Target::AppendError: Into<ShortBuf>,
{
    name_compose_len(name)?;
    for label in labels(name) {
        append_slice(target, &[label.len() as u8])?;
        append_slice(target, label.as_bytes())?;
    }
    append_slice(target, b"\0")
}

/// Returns the uncompressed wire-format encoding of `name`.
pub fn encode_name(name: &str) -> Result<Vec<u8>, ComposeError> {
    let mut res = Vec::with_capacity(name_compose_len(name)?);
    compose_name(name, &mut res)?;
    Ok(res)
}

//------------ Parsing -------------------------------------------------------

/// Decodes the name starting at octet `start` of the message `msg`.
///
/// Returns the name and the position of the first octet following it. If
/// the name contains a compression pointer, that position is right behind
/// the first pointer no matter where the pointer leads.
///
/// Compression pointers are positions relative to the start of `msg`, so
/// this must be the complete message. Following more than
/// [`MAX_POINTERS`] pointers results in [`ParseError::CompressionLoop`].
///
/// The decoded name may not be longer than 255 octets in wire format. If
/// it is, the error is [`ParseError::CompressionLoop`] if a pointer was
/// followed on the way and [`ParseError::LongName`] otherwise.
pub fn decode_name(
    msg: &[u8],
    start: usize,
) -> Result<(String, usize), ParseError> {
    let mut name = String::new();
    let mut pos = start;
    let mut end = None;
    let mut hops = 0usize;
    // Wire length so far, starting with the root label.
    let mut name_len = 1usize;
    loop {
        match LabelType::read(msg, pos)? {
            LabelType::Normal(0) => {
                pos += 1;
                break;
            }
            LabelType::Normal(len) => {
                name_len += len + 1;
                if name_len > MAX_NAME_LEN {
                    return Err(if hops > 0 {
                        ParseError::CompressionLoop
                    } else {
                        ParseError::LongName
                    });
                }
                let label = msg
                    .get(pos + 1..pos + 1 + len)
                    .ok_or(ParseError::TruncatedBuffer)?;
                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(&String::from_utf8_lossy(label));
                pos += len + 1;
            }
            LabelType::Compressed(ptr) => {
                if end.is_none() {
                    end = Some(pos + 2);
                }
                hops += 1;
                if hops > MAX_POINTERS {
                    return Err(ParseError::CompressionLoop);
                }
                pos = ptr;
            }
        }
    }
    Ok((name, end.unwrap_or(pos)))
}

/// Takes a name from the current position of `parser`.
///
/// The parser must have been created over the complete message. It is
/// left positioned behind the name.
pub fn parse_name(
    parser: &mut Parser<'_, [u8]>,
) -> Result<String, ParseError> {
    let (name, end) = decode_name(parser.octets_ref(), parser.pos())?;
    parser.seek(end)?;
    Ok(name)
}

//------------ LabelType -----------------------------------------------------

/// The type of a label.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LabelType {
    /// A normal label with its size in octets.
    Normal(usize),

    /// A compressed label with the position of where to continue.
    Compressed(usize),
}

impl LabelType {
    /// Reads the label type at octet `pos` of `msg`.
    fn read(msg: &[u8], pos: usize) -> Result<Self, ParseError> {
        let bit_pos =
            pos.checked_mul(8).ok_or(ParseError::TruncatedBuffer)?;
        match bits::read_uint(msg, bit_pos, 2)? {
            0b00 => Ok(LabelType::Normal(
                bits::read_uint(msg, bit_pos + 2, 6)? as usize,
            )),
            0b11 => Ok(LabelType::Compressed(
                bits::read_uint(msg, bit_pos + 2, 14)? as usize,
            )),
            _ => Err(ParseError::MalformedLabel),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode() {
        assert_eq!(
            encode_name("www.example.com").unwrap(),
            b"\x03www\x07example\x03com\0"
        );
        assert_eq!(
            encode_name("www.example.com.").unwrap(),
            b"\x03www\x07example\x03com\0"
        );
        assert_eq!(encode_name("").unwrap(), b"\0");
        assert_eq!(encode_name(".").unwrap(), b"\0");
        assert_eq!(name_compose_len("www.youtube.com"), Ok(17));
    }

    #[test]
    fn long_label() {
        let ok = "a".repeat(63);
        assert_eq!(encode_name(&ok).unwrap().len(), 65);
        let bad = format!("www.{}.com", "a".repeat(64));
        assert_eq!(encode_name(&bad), Err(ComposeError::LabelTooLong));

        let mut target = Vec::<u8>::new();
        assert_eq!(
            compose_name(&bad, &mut target),
            Err(ComposeError::LabelTooLong)
        );
        assert!(target.is_empty());
    }

    #[test]
    fn long_name() {
        // Four labels of 62 octets make 253 octets, a fifth of one octet
        // brings the total to exactly 255.
        let label = "a".repeat(62);
        let ok = format!("{label}.{label}.{label}.{label}.b");
        assert_eq!(name_compose_len(&ok), Ok(255));
        let wire = encode_name(&ok).unwrap();
        assert_eq!(decode_name(&wire, 0), Ok((ok.clone(), 255)));

        let bad = format!("{ok}b");
        assert_eq!(name_compose_len(&bad), Err(ComposeError::LongName));
        assert_eq!(encode_name(&bad), Err(ComposeError::LongName));

        let mut wire = wire[..252].to_vec();
        wire.extend_from_slice(b"\x02bb\0");
        assert_eq!(decode_name(&wire, 0), Err(ParseError::LongName));
    }

    #[test]
    fn decode_flat() {
        let msg = b"\x03www\x07example\x03com\0rest";
        assert_eq!(
            decode_name(msg, 0),
            Ok(("www.example.com".into(), 17))
        );
        assert_eq!(decode_name(b"\0", 0), Ok((String::new(), 1)));
    }

    #[test]
    fn decode_pointer() {
        let msg = b"\x07example\0\xc0\x00";
        assert_eq!(decode_name(msg, 9), Ok(("example".into(), 11)));

        // Pointer after some labels.
        let msg = b"\x03com\0\x07example\xc0\x00\x03www\xc0\x05";
        assert_eq!(decode_name(msg, 5), Ok(("example.com".into(), 15)));
        assert_eq!(
            decode_name(msg, 15),
            Ok(("www.example.com".into(), 21))
        );
    }

    #[test]
    fn decode_errors() {
        // Short buffer in the middle of a label.
        assert_eq!(
            decode_name(b"\x03www\x07exam", 0),
            Err(ParseError::TruncatedBuffer)
        );

        // Missing root label.
        assert_eq!(
            decode_name(b"\x03www", 0),
            Err(ParseError::TruncatedBuffer)
        );

        // Compression pointer beyond the end of the buffer.
        assert_eq!(
            decode_name(b"\x03www\xc0\xee12", 0),
            Err(ParseError::TruncatedBuffer)
        );

        // Half a compression pointer.
        assert_eq!(decode_name(b"\xc0", 0), Err(ParseError::TruncatedBuffer));

        // Bad label headers.
        assert_eq!(
            decode_name(b"\x03www\x40foo", 0),
            Err(ParseError::MalformedLabel)
        );
        assert_eq!(
            decode_name(b"\x03www\xbffoo", 0),
            Err(ParseError::MalformedLabel)
        );
    }

    #[test]
    fn decode_loops() {
        // Pointer to itself.
        assert_eq!(
            decode_name(b"\xc0\x00", 0),
            Err(ParseError::CompressionLoop)
        );

        // Two pointers pointing at each other.
        assert_eq!(
            decode_name(b"\xc0\x02\xc0\x00", 2),
            Err(ParseError::CompressionLoop)
        );

        // Loop through a label.
        assert_eq!(
            decode_name(b"\x03www\xc0\x00", 0),
            Err(ParseError::CompressionLoop)
        );

        // Chain of pointers one longer than allowed, ending in the root.
        let mut msg = vec![0u8];
        for i in 0..=MAX_POINTERS {
            let target = if i == 0 { 0 } else { 1 + 2 * (i - 1) };
            msg.extend_from_slice(&[0xc0, target as u8]);
        }
        let last = msg.len() - 2;
        assert_eq!(decode_name(&msg, last), Err(ParseError::CompressionLoop));
        assert_eq!(decode_name(&msg, last - 2), Ok((String::new(), last)));
    }

    #[test]
    fn pointer_expanding_long_labels() {
        // The question of a message: 250 labels of 63 octets each followed
        // by a pointer back to the first label.
        let mut msg = vec![0u8; 12];
        for _ in 0..250 {
            msg.push(63);
            msg.extend_from_slice(&[b'a'; 63]);
        }
        msg.extend_from_slice(b"\xc0\x0c");
        assert_eq!(decode_name(&msg, 12), Err(ParseError::LongName));

        // Jumping into the labels lets the pointer do the growing.
        let start = msg.len() - 2;
        assert_eq!(
            decode_name(&msg, start),
            Err(ParseError::CompressionLoop)
        );
    }

    #[test]
    fn parser_position() {
        let msg = b"\x07example\0\x03www\xc0\x00\x12\x34";
        let mut parser = Parser::from_ref(&msg[..]);
        parser.advance(9).unwrap();
        assert_eq!(parse_name(&mut parser).unwrap(), "www.example");
        assert_eq!(parser.parse_u16_be().unwrap(), 0x1234);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn round_trip() {
        for name in ["a", "www.youtube.com", "x.y.z.w.example.org"] {
            let wire = encode_name(name).unwrap();
            assert_eq!(decode_name(&wire, 0), Ok((name.into(), wire.len())));
        }
    }
}
