//! Resource Records.
//!
//! This module defines the type [`Record`] representing DNS resource
//! records. On the wire, a record consists of the owner name, the record
//! type, the class, the TTL, the length of the record data, and the data
//! itself. The record data is interpreted according to the record type,
//! see [`RecordData`] for details.
//!
//! Records are composed without name compression, so the length of a
//! composed record is always the length of its owner name plus ten for the
//! fixed fields plus the length of its data.

use super::iana::{Class, Rtype};
use super::name::{compose_name, name_compose_len, parse_name};
use super::rdata::RecordData;
use super::wire::{
    append_slice, compose_u16, compose_u32, len_u16, ComposeError,
    ParseError,
};
use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf};
use octseq::parse::Parser;
use std::net::{Ipv4Addr, Ipv6Addr};

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// The TTL is kept as the unsigned 32 bit integer it is on the wire. No
/// adjustment for values with the top bit set takes place.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// The owner of the record.
    owner: String,

    /// The type of the record.
    rtype: Rtype,

    /// The class of the record.
    class: Class,

    /// The time-to-live value of the record.
    ttl: u32,

    /// The record data.
    data: RecordData,
}

/// # Creation and Element Access
///
impl Record {
    /// Creates a new record from its parts.
    ///
    /// The shape of `data` has to match `rtype` as described by
    /// [`RecordData::matches`]. This is not checked here, but composing a
    /// record where it doesn't fails with [`ComposeError::RdataMismatch`].
    pub fn new(
        owner: impl Into<String>,
        rtype: Rtype,
        class: Class,
        ttl: u32,
        data: RecordData,
    ) -> Self {
        Record {
            owner: owner.into(),
            rtype,
            class,
            ttl,
            data,
        }
    }

    /// Creates a new record from uncompressed wire-format record data.
    ///
    /// The data is interpreted according to `rtype`.
    pub fn from_octets(
        owner: impl Into<String>,
        rtype: Rtype,
        class: Class,
        ttl: u32,
        data: &[u8],
    ) -> Result<Self, ParseError> {
        Ok(Self::new(
            owner,
            rtype,
            class,
            ttl,
            RecordData::from_octets(rtype, data)?,
        ))
    }

    /// Returns a reference to the owner domain name.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns the class of the record.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Returns the record’s time-to-live in seconds.
    pub fn ttl(&self) -> u32 {
        self.ttl
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Returns the uncompressed wire-format encoding of the record data.
    pub fn rdata_octets(&self) -> Result<Vec<u8>, ComposeError> {
        self.data.to_octets()
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData {
        self.data
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Parses a record from the current position of `parser`.
    ///
    /// The parser must cover the complete message. On success, it is left
    /// positioned right behind the record data.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        let owner = parse_name(parser)?;
        let rtype = Rtype::from_int(parser.parse_u16_be()?);
        let class = Class::from_int(parser.parse_u16_be()?);
        let ttl = parser.parse_u32_be()?;
        let rdlen = parser.parse_u16_be()?;
        let data = RecordData::parse(rtype, rdlen, parser)?;
        Ok(Record::new(owner, rtype, class, ttl, data))
    }

    /// Parses the record starting at octet `start` of the message `msg`.
    ///
    /// Returns the record and the position of the octet following it.
    pub fn parse_at(
        msg: &[u8],
        start: usize,
    ) -> Result<(Self, usize), ParseError> {
        let mut parser = Parser::from_ref(msg);
        parser.seek(start)?;
        let res = Self::parse(&mut parser)?;
        Ok((res, parser.pos()))
    }

    /// Returns the length of the wire-format encoding of the record.
    pub fn compose_len(&self) -> Result<usize, ComposeError> {
        self.check_data()?;
        Ok(name_compose_len(&self.owner)? + 10 + self.data.compose_len()?)
    }

    /// Appends the wire-format encoding of the record to `target`.
    pub fn compose<Target>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        self.check_data()?;
        let rdata = self.data.to_octets()?;
        let rdlen = len_u16(rdata.len())?;
        compose_name(&self.owner, target)?;
        compose_u16(target, self.rtype.to_int())?;
        compose_u16(target, self.class.to_int())?;
        compose_u32(target, self.ttl)?;
        compose_u16(target, rdlen)?;
        append_slice(target, &rdata)
    }

    /// Returns the wire-format encoding of the record.
    pub fn to_octets(&self) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::with_capacity(self.compose_len()?);
        self.compose(&mut res)?;
        Ok(res)
    }

    fn check_data(&self) -> Result<(), ComposeError> {
        if self.data.matches(self.rtype) {
            Ok(())
        } else {
            Err(ComposeError::RdataMismatch)
        }
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.\t{}\t{}\t{}\t",
            self.owner, self.ttl, self.class, self.rtype
        )?;
        match (self.rtype, &self.data) {
            (Rtype::A, RecordData::Other(data)) if data.len() == 4 => {
                let mut addr = [0u8; 4];
                addr.copy_from_slice(data);
                fmt::Display::fmt(&Ipv4Addr::from(addr), f)
            }
            (Rtype::AAAA, RecordData::Other(data)) if data.len() == 16 => {
                let mut addr = [0u8; 16];
                addr.copy_from_slice(data);
                fmt::Display::fmt(&Ipv6Addr::from(addr), f)
            }
            (_, data) => fmt::Display::fmt(data, f),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::rdata::Mx;

    #[test]
    fn compose_a() {
        let record = Record::new(
            "example.com",
            Rtype::A,
            Class::IN,
            3600,
            RecordData::Other(vec![192, 0, 2, 1]),
        );
        let octets = record.to_octets().unwrap();
        assert_eq!(
            octets,
            b"\x07example\x03com\0\
              \x00\x01\x00\x01\x00\x00\x0e\x10\x00\x04\
              \xc0\x00\x02\x01"
        );
        assert_eq!(octets.len(), record.compose_len().unwrap());
        assert_eq!(Record::parse_at(&octets, 0), Ok((record, octets.len())));
    }

    #[test]
    fn large_ttl() {
        let record = Record::new(
            "a",
            Rtype::TXT,
            Class::IN,
            0x8000_0001,
            RecordData::Other(b"\x02hi".to_vec()),
        );
        let octets = record.to_octets().unwrap();
        let (parsed, _) = Record::parse_at(&octets, 0).unwrap();
        assert_eq!(parsed.ttl(), 0x8000_0001);
    }

    #[test]
    fn parse_compressed() {
        // Question-like owner at 0, then a CNAME record using pointers.
        let mut msg = Vec::from(&b"\x03www\x07example\x03com\0"[..]);
        msg.extend_from_slice(b"\xc0\x00\x00\x05\x00\x01\x00\x00\x00\x3c");
        msg.extend_from_slice(b"\x00\x06\x03cdn\xc0\x04");
        msg.extend_from_slice(b"trailing");
        let (record, end) = Record::parse_at(&msg, 17).unwrap();
        assert_eq!(end, msg.len() - 8);
        assert_eq!(record.owner(), "www.example.com");
        assert_eq!(record.rtype(), Rtype::CNAME);
        assert_eq!(record.ttl(), 60);
        assert_eq!(
            record.data(),
            &RecordData::Name("cdn.example.com".into())
        );
        assert_eq!(
            record.rdata_octets().unwrap(),
            b"\x03cdn\x07example\x03com\0"
        );
    }

    #[test]
    fn truncated() {
        let record = Record::new(
            "example.com",
            Rtype::MX,
            Class::IN,
            300,
            Mx::new(10, "mail.example.com").into(),
        );
        let octets = record.to_octets().unwrap();
        for len in 0..octets.len() {
            assert_eq!(
                Record::parse_at(&octets[..len], 0),
                Err(ParseError::TruncatedBuffer),
                "length {}",
                len
            );
        }
    }

    #[test]
    fn from_octets() {
        let record = Record::from_octets(
            "example.com",
            Rtype::NS,
            Class::IN,
            86400,
            b"\x02ns\x07example\x03com\0",
        )
        .unwrap();
        assert_eq!(
            record.data(),
            &RecordData::Name("ns.example.com".into())
        );
    }

    #[test]
    fn data_mismatch() {
        // Would parse back as RecordData::Name("ns").
        let record = Record::new(
            "example.com",
            Rtype::NS,
            Class::IN,
            3600,
            RecordData::Other(b"\x02ns\0".to_vec()),
        );
        assert_eq!(record.compose_len(), Err(ComposeError::RdataMismatch));
        assert_eq!(record.to_octets(), Err(ComposeError::RdataMismatch));
        let mut target = Vec::<u8>::new();
        assert_eq!(
            record.compose(&mut target),
            Err(ComposeError::RdataMismatch)
        );
        assert!(target.is_empty());

        let record = Record::new(
            "example.com",
            Rtype::A,
            Class::IN,
            3600,
            RecordData::Name("www.example.com".into()),
        );
        assert_eq!(record.to_octets(), Err(ComposeError::RdataMismatch));
    }

    #[test]
    fn display() {
        let record = Record::new(
            "example.com",
            Rtype::A,
            Class::IN,
            60,
            RecordData::Other(vec![192, 0, 2, 1]),
        );
        assert_eq!(record.to_string(), "example.com.\t60\tIN\tA\t192.0.2.1");
    }
}
