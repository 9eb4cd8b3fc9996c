//! A single question in a DNS message.
//!
//! This module defines the type `Question` which represents an entry in
//! the question section of a DNS message.

use super::iana::{Class, Rtype};
use super::name::{compose_name, name_compose_len, parse_name};
use super::wire::{compose_u16, ComposeError, ParseError};
use core::fmt;
use octseq::builder::{OctetsBuilder, ShortBuf};
use octseq::parse::Parser;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. This type
/// represents such a question.
///
/// The name is kept with any compression resolved, so a question taken
/// from a message is independent of that message.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    /// The domain name of the question.
    qname: String,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the quesiton.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three componets.
    pub fn new(qname: impl Into<String>, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname: qname.into(),
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: impl Into<String>, qtype: Rtype) -> Self {
        Self::new(qname, qtype, Class::IN)
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> String {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain name in the question.
    pub fn qname(&self) -> &str {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question {
    /// Parses a question from the current position of `parser`.
    ///
    /// The parser must cover the complete message.
    pub fn parse(parser: &mut Parser<'_, [u8]>) -> Result<Self, ParseError> {
        Ok(Question::new(
            parse_name(parser)?,
            parser.parse_u16_be()?.into(),
            parser.parse_u16_be()?.into(),
        ))
    }

    /// Returns the length of the wire-format encoding of the question.
    pub fn compose_len(&self) -> Result<usize, ComposeError> {
        Ok(name_compose_len(&self.qname)? + 4)
    }

    /// Appends the wire-format encoding of the question to `target`.
    pub fn compose<Target>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        compose_name(&self.qname, target)?;
        compose_u16(target, self.qtype.to_int())?;
        compose_u16(target, self.qclass.to_int())
    }
}

//--- From

impl<N: Into<String>> From<(N, Rtype, Class)> for Question {
    fn from((name, rtype, class): (N, Rtype, Class)) -> Self {
        Question::new(name, rtype, class)
    }
}

impl<N: Into<String>> From<(N, Rtype)> for Question {
    fn from((name, rtype): (N, Rtype)) -> Self {
        Question::new(name, rtype, Class::IN)
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn compose_parse() {
        let question = Question::new_in("www.youtube.com", Rtype::A);
        let mut buf = Vec::<u8>::new();
        question.compose(&mut buf).unwrap();
        assert_eq!(buf.len(), question.compose_len().unwrap());
        assert_eq!(buf.len(), 21);
        assert_eq!(&buf[17..], b"\x00\x01\x00\x01");

        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(Question::parse(&mut parser), Ok(question));
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn parse_compressed() {
        let msg = b"\x07example\0\xc0\x00\x00\x0f\x00\x01";
        let mut parser = Parser::from_ref(&msg[..]);
        parser.advance(9).unwrap();
        assert_eq!(
            Question::parse(&mut parser),
            Ok(Question::new("example", Rtype::MX, Class::IN))
        );
    }

    #[test]
    fn parse_short() {
        let mut parser = Parser::from_ref(&b"\x07example\0\x00\x01\x00"[..]);
        assert_eq!(
            Question::parse(&mut parser),
            Err(ParseError::TruncatedBuffer)
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Question::from(("example.com", Rtype::AAAA)).to_string(),
            "example.com.\tIN\tAAAA"
        );
    }
}
