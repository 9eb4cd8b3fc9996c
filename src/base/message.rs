//! Accessing existing DNS messages.
//!
//! This module defines the [`Message`] type, a DNS message taken apart
//! into its header and the four sections. Since the message is completely
//! parsed when created, every name in it has its compression pointers
//! resolved and the message no longer depends on the buffer it was parsed
//! from.
//!
//! Messages are immutable. In order to create a new message or a changed
//! version of an existing one, use a
//! [`MessageBuilder`](super::message_builder::MessageBuilder).

use super::dig_printer::DigPrinter;
use super::header::{Flags, Header, HeaderCounts, HeaderSection};
use super::iana::{Opcode, Rcode, Rtype};
use super::question::Question;
use super::record::Record;
use super::wire::ParseError;
use core::fmt;
use octseq::parse::Parser;
use tracing::{debug, trace};

//------------ Message -------------------------------------------------------

/// A parsed DNS message.
///
/// The section counts of the header are kept as they appeared on the
/// wire. A successfully parsed message always has exactly as many entries
/// in each section as its count announces.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Message {
    header: Header,
    counts: HeaderCounts,
    question: Vec<Question>,
    answer: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

/// # Creation and Conversion
///
impl Message {
    /// Parses a message from its wire-format octets.
    ///
    /// The octets must contain exactly one message without any length
    /// prefix. Octets following the last record of the additional section
    /// are ignored.
    ///
    /// Any octets sequence that can be referenced as a slice can be used,
    /// including `bytes::Bytes`.
    pub fn from_octets<Octs: AsRef<[u8]>>(
        octets: Octs,
    ) -> Result<Self, ParseError> {
        let octets = octets.as_ref();
        Self::parse(octets).map_err(|err| {
            debug!(%err, len = octets.len(), "failed to parse message");
            err
        })
    }

    /// Parses a message preceded by a 16 bit length as used on streams.
    ///
    /// Returns the message and the number of octets consumed, i.e., the
    /// length of the message plus two. If the length prefix promises more
    /// octets than are available, returns
    /// [`ParseError::TruncatedBuffer`].
    pub fn from_stream_octets(
        octets: &[u8],
    ) -> Result<(Self, usize), ParseError> {
        let mut parser = Parser::from_ref(octets);
        let len = usize::from(parser.parse_u16_be()?);
        let msg = parser.peek(len)?;
        Ok((Self::from_octets(msg)?, len + 2))
    }

    fn parse(msg: &[u8]) -> Result<Self, ParseError> {
        let section = HeaderSection::parse(msg)?;
        let counts = section.counts();
        let mut parser = Parser::from_ref(msg);
        parser.advance(HeaderSection::LEN)?;
        trace!(
            id = section.header().id(),
            qdcount = counts.qdcount(),
            ancount = counts.ancount(),
            nscount = counts.nscount(),
            arcount = counts.arcount(),
            "parsed header section"
        );

        let question = (0..counts.qdcount())
            .map(|_| Question::parse(&mut parser))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(pos = parser.pos(), "parsed question section");
        let answer = parse_records(&mut parser, counts.ancount(), "answer")?;
        let authority =
            parse_records(&mut parser, counts.nscount(), "authority")?;
        let additional =
            parse_records(&mut parser, counts.arcount(), "additional")?;

        if parser.remaining() > 0 {
            debug!(
                remaining = parser.remaining(),
                "ignoring trailing octets after message"
            );
        }

        Ok(Message {
            header: section.header(),
            counts,
            question,
            answer,
            authority,
            additional,
        })
    }
}

/// Parses `count` records of the section called `name`.
fn parse_records(
    parser: &mut Parser<'_, [u8]>,
    count: u16,
    name: &'static str,
) -> Result<Vec<Record>, ParseError> {
    let res = (0..count)
        .map(|_| Record::parse(parser))
        .collect::<Result<Vec<_>, _>>()?;
    trace!(section = name, pos = parser.pos(), "parsed record section");
    Ok(res)
}

/// # Header Section
///
impl Message {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns the header counts of the message.
    pub fn header_counts(&self) -> HeaderCounts {
        self.counts
    }

    /// Returns the entire header section.
    pub fn header_section(&self) -> HeaderSection {
        HeaderSection::new(self.header, self.counts)
    }

    /// Returns the message ID.
    pub fn id(&self) -> u16 {
        self.header.id()
    }

    /// Returns whether the message is a response.
    pub fn qr(&self) -> bool {
        self.header.qr()
    }

    /// Returns the opcode.
    pub fn opcode(&self) -> Opcode {
        self.header.opcode()
    }

    /// Returns all flags.
    pub fn flags(&self) -> Flags {
        self.header.flags()
    }

    /// Returns whether the answer is authoritative.
    pub fn aa(&self) -> bool {
        self.header.aa()
    }

    /// Returns whether the message was truncated.
    pub fn tc(&self) -> bool {
        self.header.tc()
    }

    /// Returns whether recursion was desired.
    pub fn rd(&self) -> bool {
        self.header.rd()
    }

    /// Returns whether recursion is available.
    pub fn ra(&self) -> bool {
        self.header.ra()
    }

    /// Returns the value of the reserved bit.
    pub fn z(&self) -> bool {
        self.header.z()
    }

    /// Returns whether the data has been authenticated.
    pub fn ad(&self) -> bool {
        self.header.ad()
    }

    /// Returns whether non-authenticated data is acceptable.
    pub fn cd(&self) -> bool {
        self.header.cd()
    }

    /// Returns the response code.
    pub fn rcode(&self) -> Rcode {
        self.header.rcode()
    }

    /// Returns whether the rcode is NoError.
    pub fn no_error(&self) -> bool {
        self.header.rcode() == Rcode::NoError
    }

    /// Returns whether the rcode is one of the error values.
    pub fn is_error(&self) -> bool {
        self.header.rcode() != Rcode::NoError
    }
}

/// # Sections
///
impl Message {
    /// Returns the question section.
    pub fn question(&self) -> &[Question] {
        &self.question
    }

    /// Returns the answer section.
    pub fn answer(&self) -> &[Record] {
        &self.answer
    }

    /// Returns the authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional section.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Trades the message for its four sections.
    #[allow(clippy::type_complexity)]
    pub fn into_sections(
        self,
    ) -> (Vec<Question>, Vec<Record>, Vec<Record>, Vec<Record>) {
        (self.question, self.answer, self.authority, self.additional)
    }
}

/// # Helpers for Common Tasks
///
impl Message {
    /// Returns whether this is the answer to some other message.
    ///
    /// The method checks whether the ID fields of the headers are the same,
    /// whether the QR flag is set in this message, and whether the questions
    /// are the same.
    pub fn is_answer(&self, query: &Message) -> bool {
        self.qr()
            && self.id() == query.id()
            && self.question == query.question
    }

    /// Returns the first question, if there is any.
    pub fn first_question(&self) -> Option<&Question> {
        self.question.first()
    }

    /// Returns the query type of the first question, if any.
    pub fn qtype(&self) -> Option<Rtype> {
        self.first_question().map(Question::qtype)
    }

    /// Returns whether the answer section contains records of `rtype`.
    pub fn contains_answer(&self, rtype: Rtype) -> bool {
        self.answer.iter().any(|record| record.rtype() == rtype)
    }
}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&DigPrinter { msg: self }, f)
    }
}

//============ Testing =======================================================
