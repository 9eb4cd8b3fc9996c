//! Resource record data.
//!
//! Each resource record carries data whose format depends on the record
//! type. For most types, the data is kept as it appeared on the wire. The
//! exception are the types from [RFC 1035] whose data contains domain
//! names that may be compressed: NS, CNAME, and PTR hold a single name,
//! SOA holds two names followed by five 32 bit values, and MX holds a
//! preference value followed by a name. For these, the names are resolved
//! while parsing so the data never refers back into the message it was
//! taken from.
//!
//! The [`RecordData`] enum represents these four shapes.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::Rtype;
use super::name::{compose_name, name_compose_len, parse_name};
use super::wire::{append_slice, compose_u16, ComposeError, ParseError};
use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf};
use octseq::parse::Parser;
use tracing::debug;

//------------ RecordData ----------------------------------------------------

/// The data of a resource record.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RecordData {
    /// A single domain name.
    ///
    /// This is the data of NS, CNAME, and PTR records.
    Name(String),

    /// The data of an SOA record.
    Soa(Soa),

    /// The data of an MX record.
    Mx(Mx),

    /// Data of any other record type, kept as is.
    Other(Vec<u8>),
}

/// # Parsing and Composing
///
impl RecordData {
    /// Parses record data of type `rtype` and length `rdlen`.
    ///
    /// The parser has to be positioned at the start of the record data
    /// and must cover the complete message so that compression pointers
    /// can be followed. On success, it is positioned right behind the
    /// record data.
    ///
    /// The data of name-carrying types must not extend beyond `rdlen`;
    /// if it does, the data is considered truncated. It must not end short
    /// of `rdlen` either, which results in [`ParseError::TrailingData`].
    pub fn parse(
        rtype: Rtype,
        rdlen: u16,
        parser: &mut Parser<'_, [u8]>,
    ) -> Result<Self, ParseError> {
        let end = parser.pos() + usize::from(rdlen);
        if end > parser.octets_ref().len() {
            return Err(ParseError::TruncatedBuffer);
        }
        let res = match rtype {
            rtype if rtype.is_name_only() => {
                RecordData::Name(parse_name(parser)?)
            }
            Rtype::SOA => RecordData::Soa(Soa::parse(parser)?),
            Rtype::MX => RecordData::Mx(Mx::parse(parser)?),
            _ => {
                let data = parser.peek(usize::from(rdlen))?.to_vec();
                parser.advance(usize::from(rdlen))?;
                RecordData::Other(data)
            }
        };
        if parser.pos() > end {
            return Err(ParseError::TruncatedBuffer);
        }
        if parser.pos() < end {
            debug!(
                %rtype,
                trailing = end - parser.pos(),
                "trailing data in record data"
            );
            return Err(ParseError::TrailingData);
        }
        Ok(res)
    }

    /// Returns whether the data has the shape required for `rtype`.
    ///
    /// NS, CNAME, and PTR need [`RecordData::Name`], SOA and MX need their
    /// own variants. All other types need [`RecordData::Other`].
    pub fn matches(&self, rtype: Rtype) -> bool {
        match *self {
            RecordData::Name(_) => rtype.is_name_only(),
            RecordData::Soa(_) => rtype == Rtype::SOA,
            RecordData::Mx(_) => rtype == Rtype::MX,
            RecordData::Other(_) => {
                !rtype.is_name_only()
                    && rtype != Rtype::SOA
                    && rtype != Rtype::MX
            }
        }
    }

    /// Creates record data of type `rtype` from its uncompressed encoding.
    ///
    /// This is the inverse of [`to_octets`][Self::to_octets].
    pub fn from_octets(
        rtype: Rtype,
        octets: &[u8],
    ) -> Result<Self, ParseError> {
        let rdlen = u16::try_from(octets.len())
            .map_err(|_| ParseError::TruncatedBuffer)?;
        Self::parse(rtype, rdlen, &mut Parser::from_ref(octets))
    }

    /// Returns the length of the uncompressed encoding of the data.
    pub fn compose_len(&self) -> Result<usize, ComposeError> {
        match *self {
            RecordData::Name(ref name) => name_compose_len(name),
            RecordData::Soa(ref soa) => soa.compose_len(),
            RecordData::Mx(ref mx) => mx.compose_len(),
            RecordData::Other(ref data) => Ok(data.len()),
        }
    }

    /// Appends the uncompressed encoding of the data to `target`.
    ///
    /// Only the data itself is appended, not its length.
    pub fn compose<Target>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        match *self {
            RecordData::Name(ref name) => compose_name(name, target),
            RecordData::Soa(ref soa) => soa.compose(target),
            RecordData::Mx(ref mx) => mx.compose(target),
            RecordData::Other(ref data) => append_slice(target, data),
        }
    }

    /// Returns the uncompressed encoding of the data.
    pub fn to_octets(&self) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::with_capacity(self.compose_len()?);
        self.compose(&mut res)?;
        Ok(res)
    }
}

//--- From

impl From<Soa> for RecordData {
    fn from(soa: Soa) -> Self {
        RecordData::Soa(soa)
    }
}

impl From<Mx> for RecordData {
    fn from(mx: Mx) -> Self {
        RecordData::Mx(mx)
    }
}

//--- Display

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecordData::Name(ref name) => write!(f, "{}.", name),
            RecordData::Soa(ref soa) => fmt::Display::fmt(soa, f),
            RecordData::Mx(ref mx) => fmt::Display::fmt(mx, f),
            RecordData::Other(ref data) => {
                write!(f, "\\# {}", data.len())?;
                if !data.is_empty() {
                    f.write_str(" ")?;
                    for octet in data {
                        write!(f, "{:02x}", octet)?;
                    }
                }
                Ok(())
            }
        }
    }
}

//------------ Soa -----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent
/// to name server maintenance operations. The five 32 bit values after the
/// two names are kept in their wire format.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Soa {
    mname: String,
    rname: String,
    timers: [u8; Soa::TIMERS_LEN],
}

impl Soa {
    /// The length of the five values following the names.
    pub const TIMERS_LEN: usize = 20;

    /// Creates new Soa record data from content.
    pub fn new(
        mname: impl Into<String>,
        rname: impl Into<String>,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    ) -> Self {
        let mut timers = [0; Soa::TIMERS_LEN];
        for (chunk, value) in timers
            .chunks_mut(4)
            .zip([serial, refresh, retry, expire, minimum])
        {
            chunk.copy_from_slice(&value.to_be_bytes());
        }
        Self::from_parts(mname, rname, timers)
    }

    /// Creates new Soa record data keeping the values in wire format.
    pub fn from_parts(
        mname: impl Into<String>,
        rname: impl Into<String>,
        timers: [u8; Soa::TIMERS_LEN],
    ) -> Self {
        Soa {
            mname: mname.into(),
            rname: rname.into(),
            timers,
        }
    }

    /// The primary name server for the zone.
    pub fn mname(&self) -> &str {
        &self.mname
    }

    /// The mailbox for the person responsible for this zone.
    pub fn rname(&self) -> &str {
        &self.rname
    }

    /// The five values following the names in wire format.
    pub fn timers(&self) -> &[u8; Soa::TIMERS_LEN] {
        &self.timers
    }

    /// The serial number of the original copy of the zone.
    pub fn serial(&self) -> u32 {
        self.timer(0)
    }

    /// The time interval before the zone should be refreshed.
    pub fn refresh(&self) -> u32 {
        self.timer(1)
    }

    /// The time before a failed refresh is retried.
    pub fn retry(&self) -> u32 {
        self.timer(2)
    }

    /// The upper limit of time the zone is authoritative.
    pub fn expire(&self) -> u32 {
        self.timer(3)
    }

    /// The minimum TTL to be exported with any RR from this zone.
    pub fn minimum(&self) -> u32 {
        self.timer(4)
    }

    fn timer(&self, idx: usize) -> u32 {
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.timers[idx * 4..idx * 4 + 4]);
        u32::from_be_bytes(buf)
    }

    fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let mname = parse_name(parser)?;
        let rname = parse_name(parser)?;
        let mut timers = [0; Soa::TIMERS_LEN];
        parser.parse_buf(&mut timers)?;
        Ok(Self::from_parts(mname, rname, timers))
    }

    fn compose_len(&self) -> Result<usize, ComposeError> {
        Ok(name_compose_len(&self.mname)?
            + name_compose_len(&self.rname)?
            + Soa::TIMERS_LEN)
    }

    fn compose<Target>(&self, target: &mut Target) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        compose_name(&self.mname, target)?;
        compose_name(&self.rname, target)?;
        append_slice(target, &self.timers)
    }
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}. {}. {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial(),
            self.refresh(),
            self.retry(),
            self.expire(),
            self.minimum()
        )
    }
}

//------------ Mx ------------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mx {
    preference: u16,
    exchange: String,
}

impl Mx {
    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Mx {
            preference,
            exchange: exchange.into(),
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let preference = parser.parse_u16_be()?;
        Ok(Self::new(preference, parse_name(parser)?))
    }

    fn compose_len(&self) -> Result<usize, ComposeError> {
        Ok(2 + name_compose_len(&self.exchange)?)
    }

    fn compose<Target>(&self, target: &mut Target) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        compose_u16(target, self.preference)?;
        compose_name(&self.exchange, target)
    }
}

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}.", self.preference, self.exchange)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn parse_at(
        rtype: Rtype,
        msg: &[u8],
        pos: usize,
        rdlen: u16,
    ) -> Result<(RecordData, usize), ParseError> {
        let mut parser = Parser::from_ref(msg);
        parser.advance(pos)?;
        let data = RecordData::parse(rtype, rdlen, &mut parser)?;
        Ok((data, parser.pos()))
    }

    #[test]
    fn compressed_name() {
        // "example.com" at 0, then a CNAME target "www" + pointer.
        let msg = b"\x07example\x03com\0\x03www\xc0\x00";
        assert_eq!(
            parse_at(Rtype::CNAME, msg, 13, 6),
            Ok((RecordData::Name("www.example.com".into()), 19))
        );
        assert_eq!(
            RecordData::Name("www.example.com".into()).to_octets().unwrap(),
            b"\x03www\x07example\x03com\0"
        );
    }

    #[test]
    fn name_beyond_rdlen() {
        let msg = b"\x03www\x07example\0";
        assert_eq!(
            parse_at(Rtype::NS, msg, 0, 4),
            Err(ParseError::TruncatedBuffer)
        );
    }

    #[test]
    fn trailing_data() {
        // A name of five octets in six octets of record data.
        let msg = b"\x07example\0\x02ns\xc0\x00\xff";
        assert_eq!(
            parse_at(Rtype::NS, msg, 9, 6),
            Err(ParseError::TrailingData)
        );
        assert_eq!(
            parse_at(Rtype::NS, msg, 9, 5),
            Ok((RecordData::Name("ns.example".into()), 14))
        );
        assert_eq!(
            RecordData::from_octets(Rtype::MX, b"\x00\x0a\0\0"),
            Err(ParseError::TrailingData)
        );
    }

    #[test]
    fn shape_matches_type() {
        let name = RecordData::Name("ns.example".into());
        assert!(name.matches(Rtype::NS));
        assert!(name.matches(Rtype::PTR));
        assert!(!name.matches(Rtype::A));
        assert!(!name.matches(Rtype::MX));

        let other = RecordData::Other(vec![192, 0, 2, 1]);
        assert!(other.matches(Rtype::A));
        assert!(other.matches(Rtype::from_int(65280)));
        assert!(!other.matches(Rtype::NS));
        assert!(!other.matches(Rtype::SOA));

        let mx = RecordData::from(Mx::new(10, "mail.example"));
        assert!(mx.matches(Rtype::MX));
        assert!(!mx.matches(Rtype::CNAME));
    }

    #[test]
    fn rdlen_beyond_buffer() {
        assert_eq!(
            parse_at(Rtype::A, b"\x01\x02\x03", 0, 4),
            Err(ParseError::TruncatedBuffer)
        );
        assert_eq!(
            parse_at(Rtype::A, b"\x01\x02\x03\x04\x05", 1, 4),
            Ok((RecordData::Other(vec![2, 3, 4, 5]), 5))
        );
    }

    #[test]
    fn soa() {
        let soa = Soa::new(
            "ns.example.com",
            "hostmaster.example.com",
            2024010101,
            3600,
            900,
            604800,
            86400,
        );
        assert_eq!(soa.serial(), 2024010101);
        assert_eq!(soa.refresh(), 3600);
        assert_eq!(soa.retry(), 900);
        assert_eq!(soa.expire(), 604800);
        assert_eq!(soa.minimum(), 86400);

        let data = RecordData::from(soa.clone());
        let octets = data.to_octets().unwrap();
        assert_eq!(octets.len(), data.compose_len().unwrap());
        assert_eq!(octets.len(), 16 + 24 + 20);
        assert_eq!(RecordData::from_octets(Rtype::SOA, &octets), Ok(data));
        assert_eq!(
            format!("{}", soa),
            "ns.example.com. hostmaster.example.com. \
             2024010101 3600 900 604800 86400"
        );
    }

    #[test]
    fn soa_compressed() {
        let mut msg = Vec::from(&b"\x07example\x03com\0"[..]);
        msg.extend_from_slice(b"\x02ns\xc0\x00\x0ahostmaster\xc0\x00");
        msg.extend_from_slice(&[0; 19]);
        msg.push(7);
        let rdlen = (msg.len() - 13) as u16;
        let (data, end) = parse_at(Rtype::SOA, &msg, 13, rdlen).unwrap();
        assert_eq!(end, msg.len());
        match data {
            RecordData::Soa(soa) => {
                assert_eq!(soa.mname(), "ns.example.com");
                assert_eq!(soa.rname(), "hostmaster.example.com");
                assert_eq!(soa.minimum(), 7);
            }
            other => panic!("unexpected data {:?}", other),
        }

        // Missing timers.
        assert_eq!(
            parse_at(Rtype::SOA, &msg[..msg.len() - 1], 13, rdlen - 1),
            Err(ParseError::TruncatedBuffer)
        );
    }

    #[test]
    fn mx() {
        let msg = b"\x07example\0\x00\x0a\x04mail\xc0\x00";
        let (data, end) = parse_at(Rtype::MX, msg, 9, 9).unwrap();
        assert_eq!(end, 18);
        assert_eq!(data, RecordData::Mx(Mx::new(10, "mail.example")));
        assert_eq!(
            data.to_octets().unwrap(),
            b"\x00\x0a\x04mail\x07example\0"
        );
        assert_eq!(format!("{}", data), "10 mail.example.");
    }

    #[test]
    fn other_display() {
        assert_eq!(
            format!("{}", RecordData::Other(vec![0xc0, 0x00, 0x02, 0x01])),
            "\\# 4 c0000201"
        );
        assert_eq!(format!("{}", RecordData::Other(Vec::new())), "\\# 0");
    }
}
