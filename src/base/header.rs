//! The header of a DNS message.
//!
//! Each DNS message starts with a twelve octet long header section
//! containing some general information related to the message as well as
//! the number of records in each of the four sections that follow the header.
//! Its content and format are defined in section 4.1.1 of [RFC 1035].
//!
//! In order to reflect the fact that the section counts are derived from
//! the content of a message whereas the other elements of the header can be
//! chosen freely, the header has been split into two separate types:
//! [`Header`] contains the first four octets and [`HeaderCounts`] contains
//! the section counts. The [`HeaderSection`] type wraps both of them.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::bits::{read_flag, read_uint};
use super::iana::{Opcode, Rcode};
use super::wire::{append_slice, compose_u16, ComposeError, ParseError};
use core::{fmt, str::FromStr};
use octseq::builder::{OctetsBuilder, ShortBuf};

//------------ Header --------------------------------------------------

/// The first part of the header of a DNS message.
///
/// This type represents the information contained in the first four octets
/// of the header: the message ID, opcode, rcode, and the various flags.
/// The data is layed out like this:
///
/// ```text
///                                 1  1  1  1  1  1
///   0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |                      ID                       |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|Z |AD|CD|   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// The basic structure and most of the fields re defined in [RFC 1035],
/// except for the AD and CD flags, which are defined in [RFC 4035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [RFC 4035]: https://tools.ietf.org/html/rfc4035
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Header {
    id: u16,
    opcode: Opcode,
    flags: Flags,
    z: bool,
    rcode: Rcode,
}

/// # Creation and Conversion
///
impl Header {
    /// The length of the header in octets.
    pub const LEN: usize = 4;

    /// Creates a new header.
    ///
    /// The new header has all fields as either zero or false. Thus, the
    /// opcode will be [`Opcode::QUERY`] and the response code will be
    /// [`Rcode::NoError`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the header from the first four octets of `msg`.
    pub fn parse(msg: &[u8]) -> Result<Self, ParseError> {
        Ok(Header {
            id: read_uint(msg, 0, 16)? as u16,
            opcode: Opcode::from_int(read_uint(msg, 17, 4)? as u8),
            flags: Flags {
                qr: read_flag(msg, 2, 0x80)?,
                aa: read_flag(msg, 2, 0x04)?,
                tc: read_flag(msg, 2, 0x02)?,
                rd: read_flag(msg, 2, 0x01)?,
                ra: read_flag(msg, 3, 0x80)?,
                ad: read_flag(msg, 3, 0x20)?,
                cd: read_flag(msg, 3, 0x10)?,
            },
            z: read_flag(msg, 3, 0x40)?,
            rcode: Rcode::from_int(read_uint(msg, 28, 4)? as u8)?,
        })
    }

    /// Returns the wire-format representation of the header.
    ///
    /// The opcode field is four bits wide. An opcode above 15 cannot be
    /// represented and results in [`ComposeError::LongData`].
    pub fn to_array(self) -> Result<[u8; Header::LEN], ComposeError> {
        let opcode = self.opcode.to_int();
        if opcode > 0x0F {
            return Err(ComposeError::LongData);
        }
        let [id_hi, id_lo] = self.id.to_be_bytes();
        let mut first = opcode << 3;
        let mut second = self.rcode.to_int();
        for (set, mask) in [
            (self.flags.qr, 0x80),
            (self.flags.aa, 0x04),
            (self.flags.tc, 0x02),
            (self.flags.rd, 0x01),
        ] {
            if set {
                first |= mask
            }
        }
        for (set, mask) in [
            (self.flags.ra, 0x80),
            (self.z, 0x40),
            (self.flags.ad, 0x20),
            (self.flags.cd, 0x10),
        ] {
            if set {
                second |= mask
            }
        }
        Ok([id_hi, id_lo, first, second])
    }
}

/// # Field Access
///
impl Header {
    /// Returns the value of the ID field.
    ///
    /// The ID field is an identifier chosen by whoever created a query
    /// and is copied into a response by a server. It allows matching
    /// incoming responses to their queries.
    pub fn id(self) -> u16 {
        self.id
    }

    /// Sets the value of the ID field.
    pub fn set_id(&mut self, value: u16) {
        self.id = value
    }

    /// Sets the value of the ID field to a randomly chosen number.
    #[cfg(feature = "rand")]
    pub fn set_random_id(&mut self) {
        self.set_id(::rand::random())
    }

    /// Returns whether the [QR](Flags::qr) bit is set.
    pub fn qr(self) -> bool {
        self.flags.qr
    }

    /// Sets the value of the [QR](Flags::qr) bit.
    pub fn set_qr(&mut self, set: bool) {
        self.flags.qr = set
    }

    /// Returns the value of the Opcode field.
    pub fn opcode(self) -> Opcode {
        self.opcode
    }

    /// Sets the value of the opcode field.
    ///
    /// The field is four bits wide. A larger opcode is kept here but
    /// makes [`to_array`][Self::to_array] fail.
    pub fn set_opcode(&mut self, opcode: Opcode) {
        self.opcode = opcode
    }

    /// Returns all flags contained in the header.
    pub fn flags(self) -> Flags {
        self.flags
    }

    /// Sets all flag bits.
    pub fn set_flags(&mut self, flags: Flags) {
        self.flags = flags
    }

    /// Returns whether the [AA](Flags::aa) bit is set.
    pub fn aa(self) -> bool {
        self.flags.aa
    }

    /// Sets the value of the [AA](Flags::aa) bit.
    pub fn set_aa(&mut self, set: bool) {
        self.flags.aa = set
    }

    /// Returns whether the [TC](Flags::tc) bit is set.
    pub fn tc(self) -> bool {
        self.flags.tc
    }

    /// Sets the value of the [TC](Flags::tc) bit.
    pub fn set_tc(&mut self, set: bool) {
        self.flags.tc = set
    }

    /// Returns whether the [RD](Flags::rd) bit is set.
    pub fn rd(self) -> bool {
        self.flags.rd
    }

    /// Sets the value of the [RD](Flags::rd) bit.
    pub fn set_rd(&mut self, set: bool) {
        self.flags.rd = set
    }

    /// Returns whether the [RA](Flags::ra) bit is set.
    pub fn ra(self) -> bool {
        self.flags.ra
    }

    /// Sets the value of the [RA](Flags::ra) bit.
    pub fn set_ra(&mut self, set: bool) {
        self.flags.ra = set
    }

    /// Returns whether the reserved bit is set.
    ///
    /// This bit must be `false` in all queries and responses.
    pub fn z(self) -> bool {
        self.z
    }

    /// Sets the value of the reserved bit.
    pub fn set_z(&mut self, set: bool) {
        self.z = set
    }

    /// Returns whether the [AD](Flags::ad) bit is set.
    pub fn ad(self) -> bool {
        self.flags.ad
    }

    /// Sets the value of the [AD](Flags::ad) bit.
    pub fn set_ad(&mut self, set: bool) {
        self.flags.ad = set
    }

    /// Returns whether the [CD](Flags::cd) bit is set.
    pub fn cd(self) -> bool {
        self.flags.cd
    }

    /// Sets the value of the [CD](Flags::cd) bit.
    pub fn set_cd(&mut self, set: bool) {
        self.flags.cd = set
    }

    /// Returns the value of the RCODE field.
    pub fn rcode(self) -> Rcode {
        self.rcode
    }

    /// Sets the value of the RCODE field.
    pub fn set_rcode(&mut self, rcode: Rcode) {
        self.rcode = rcode
    }
}

//------------ Flags ---------------------------------------------------

/// The flags contained in the DNS message header.
///
/// This type has a text notation and can be created from it as well. Each
/// flags that is set is represented by a two-letter token, which is the
/// uppercase version of the flag name.  If mutliple flags are set, the tokens
/// are separated by space.
///
/// ```
/// use core::str::FromStr;
/// use dnswire::base::header::Flags;
///
/// let flags = Flags::from_str("QR AA").unwrap();
/// assert!(flags.qr && flags.aa);
/// assert_eq!(format!("{}", flags), "QR AA");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// The `QR` bit specifies whether a message is a query (`false`) or a
    /// response (`true`).
    pub qr: bool,

    /// Using the `AA` bit, a name server generating a response states whether
    /// it is authoritative for the requested domain name.
    pub aa: bool,

    /// The *truncation* (`TC`) bit is set if there was more data available then
    /// fit into the message.
    pub tc: bool,

    /// The *recursion desired* (`RD`) bit may be set in a query to ask the name
    /// server to try and recursively gather a response.
    pub rd: bool,

    /// In a response, the *recursion available* (`RA`) bit denotes whether the
    /// responding name server supports recursion.
    pub ra: bool,

    /// The *authentic data* (`AD`) bit states that the server considers
    /// all data in the response authentic.
    pub ad: bool,

    /// The *checking disabled* (`CD`) bit states that non-authenticated
    /// data is acceptable to the resolver sending the query.
    pub cd: bool,
}

/// # Creation and Conversion
///
impl Flags {
    /// Creates new flags.
    ///
    /// All flags will be unset.
    pub fn new() -> Self {
        Self::default()
    }
}

//--- Display & FromStr

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut sep = "";
        for (set, token) in [
            (self.qr, "QR"),
            (self.aa, "AA"),
            (self.tc, "TC"),
            (self.rd, "RD"),
            (self.ra, "RA"),
            (self.ad, "AD"),
            (self.cd, "CD"),
        ] {
            if set {
                write!(f, "{}{}", sep, token)?;
                sep = " ";
            }
        }
        Ok(())
    }
}

impl FromStr for Flags {
    type Err = FlagsFromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Flags::new();
        for token in s.to_uppercase().split(' ') {
            match token {
                "QR" => flags.qr = true,
                "AA" => flags.aa = true,
                "TC" => flags.tc = true,
                "RD" => flags.rd = true,
                "RA" => flags.ra = true,
                "AD" => flags.ad = true,
                "CD" => flags.cd = true,
                "" => {}
                _ => return Err(FlagsFromStrError),
            }
        }
        Ok(flags)
    }
}

//------------ HeaderCounts ---------------------------------------------

/// The section count part of the header section of a DNS message.
///
/// This part consists of four 16 bit counters for the number of entries in
/// the four sections of a DNS message.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HeaderCounts {
    qdcount: u16,
    ancount: u16,
    nscount: u16,
    arcount: u16,
}

impl HeaderCounts {
    /// The length of the section counts in octets.
    pub const LEN: usize = 8;

    /// Creates section counts from the four values.
    pub fn new(
        qdcount: u16,
        ancount: u16,
        nscount: u16,
        arcount: u16,
    ) -> Self {
        HeaderCounts {
            qdcount,
            ancount,
            nscount,
            arcount,
        }
    }

    /// Parses the counts from octets four to eleven of `msg`.
    pub fn parse(msg: &[u8]) -> Result<Self, ParseError> {
        Ok(HeaderCounts {
            qdcount: read_uint(msg, 32, 16)? as u16,
            ancount: read_uint(msg, 48, 16)? as u16,
            nscount: read_uint(msg, 64, 16)? as u16,
            arcount: read_uint(msg, 80, 16)? as u16,
        })
    }

    /// Returns the number of questions in the message.
    pub fn qdcount(self) -> u16 {
        self.qdcount
    }

    /// Returns the number of records in the answer section.
    pub fn ancount(self) -> u16 {
        self.ancount
    }

    /// Returns the number of records in the authority section.
    pub fn nscount(self) -> u16 {
        self.nscount
    }

    /// Returns the number of records in the additional section.
    pub fn arcount(self) -> u16 {
        self.arcount
    }

    /// Appends the counts to `target`.
    pub fn compose<Target>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        compose_u16(target, self.qdcount)?;
        compose_u16(target, self.ancount)?;
        compose_u16(target, self.nscount)?;
        compose_u16(target, self.arcount)
    }
}

//------------ HeaderSection -------------------------------------------------

/// The complete header section of a DNS message.
///
/// Consists of a [`Header`] directly followed by a [`HeaderCounts`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HeaderSection {
    header: Header,
    counts: HeaderCounts,
}

impl HeaderSection {
    /// The length of the header section in octets.
    pub const LEN: usize = Header::LEN + HeaderCounts::LEN;

    /// Creates a header section from its parts.
    pub fn new(header: Header, counts: HeaderCounts) -> Self {
        HeaderSection { header, counts }
    }

    /// Parses the header section from the beginning of `msg`.
    ///
    /// Fails with [`ParseError::TruncatedBuffer`] if `msg` is shorter
    /// than twelve octets.
    pub fn parse(msg: &[u8]) -> Result<Self, ParseError> {
        if msg.len() < HeaderSection::LEN {
            return Err(ParseError::TruncatedBuffer);
        }
        Ok(HeaderSection {
            header: Header::parse(msg)?,
            counts: HeaderCounts::parse(msg)?,
        })
    }

    /// Returns the header.
    pub fn header(self) -> Header {
        self.header
    }

    /// Returns the section counts.
    pub fn counts(self) -> HeaderCounts {
        self.counts
    }

    /// Appends the header section to `target`.
    pub fn compose<Target>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        append_slice(target, &self.header.to_array()?)?;
        self.counts.compose(target)
    }
}

//============ Error Types ===================================================

//------------ FlagsFromStrError --------------------------------------------

/// An error happened when converting string to flags.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlagsFromStrError;

impl fmt::Display for FlagsFromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("illegal flags token")
    }
}

impl std::error::Error for FlagsFromStrError {}

//============ Testing ======================================================
