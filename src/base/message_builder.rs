//! Building a new DNS message.
//!
//! The type [`MessageBuilder`] collects the header fields and the entries
//! of the four sections of a message. Once everything is in place, it
//! produces the wire-format message through one of its output methods:
//!
//! * [`compose`][MessageBuilder::compose] appends the message to any
//!   octets builder,
//! * [`to_vec`][MessageBuilder::to_vec] returns it as a vec,
//! * [`to_stream_vec`][MessageBuilder::to_stream_vec] returns it preceded
//!   by the 16 bit length used on streaming transports such as TCP, and
//! * [`to_message`][MessageBuilder::to_message] returns it as a parsed
//!   [`Message`].
//!
//! None of these change the builder, so it can be used again afterwards.
//!
//! The section counts of the header are always derived from the number of
//! entries in each section. Names are never compressed.
//!
//! # Example
//!
//! ```
//! use dnswire::base::iana::Rtype;
//! use dnswire::base::message::Message;
//! use dnswire::base::message_builder::MessageBuilder;
//! use dnswire::base::question::Question;
//!
//! let mut builder = MessageBuilder::new();
//! builder
//!     .set_id(40)
//!     .push_question(Question::new_in("www.youtube.com", Rtype::A));
//! let octets = builder.to_vec().unwrap();
//! assert_eq!(octets.len(), 33);
//!
//! let msg = Message::from_octets(&octets).unwrap();
//! assert_eq!(msg.id(), 40);
//! assert!(msg.rd());
//! ```

use super::header::{Flags, Header, HeaderCounts, HeaderSection};
use super::iana::{Opcode, Rcode};
use super::message::Message;
use super::question::Question;
use super::record::Record;
use super::wire::{len_u16, ComposeError};
use crate::Error;
use octseq::builder::{OctetsBuilder, ShortBuf};
use tracing::trace;

//------------ MessageBuilder ------------------------------------------------

/// Builds a DNS message.
///
/// A new builder starts out with all header fields zero or unset except
/// for the RD flag and with empty sections. Alternatively, a builder can
/// start as a copy of an existing message through
/// [`from_message`][Self::from_message].
///
/// All setters return a mutable reference to the builder so they can be
/// chained.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MessageBuilder {
    header: Header,
    question: Vec<Question>,
    answer: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

/// # Creating Message Builders
///
impl MessageBuilder {
    /// Creates a new, empty message builder.
    pub fn new() -> Self {
        let mut header = Header::new();
        header.set_rd(true);
        MessageBuilder {
            header,
            question: Vec::new(),
            answer: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Creates a message builder holding a copy of `msg`.
    ///
    /// All header fields and all entries of all sections are copied.
    pub fn from_message(msg: &Message) -> Self {
        MessageBuilder {
            header: msg.header(),
            question: msg.question().to_vec(),
            answer: msg.answer().to_vec(),
            authority: msg.authority().to_vec(),
            additional: msg.additional().to_vec(),
        }
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&Message> for MessageBuilder {
    fn from(msg: &Message) -> Self {
        Self::from_message(msg)
    }
}

/// # Header Fields
///
impl MessageBuilder {
    /// Returns the header as it currently stands.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns a mutable reference to the header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Sets the message ID.
    pub fn set_id(&mut self, id: u16) -> &mut Self {
        self.header.set_id(id);
        self
    }

    /// Sets the message ID to a randomly chosen number.
    #[cfg(feature = "rand")]
    pub fn set_random_id(&mut self) -> &mut Self {
        self.header.set_random_id();
        self
    }

    /// Sets the QR flag marking the message as a response.
    pub fn set_qr(&mut self, set: bool) -> &mut Self {
        self.header.set_qr(set);
        self
    }

    /// Sets the opcode.
    ///
    /// Only opcodes up to 15 fit the header. Composing a message with a
    /// larger one fails with [`ComposeError::LongData`].
    pub fn set_opcode(&mut self, opcode: Opcode) -> &mut Self {
        self.header.set_opcode(opcode);
        self
    }

    /// Replaces all flags at once.
    pub fn set_flags(&mut self, flags: Flags) -> &mut Self {
        self.header.set_flags(flags);
        self
    }

    /// Sets the AA flag marking the answer as authoritative.
    pub fn set_aa(&mut self, set: bool) -> &mut Self {
        self.header.set_aa(set);
        self
    }

    /// Sets the TC flag marking the message as truncated.
    pub fn set_tc(&mut self, set: bool) -> &mut Self {
        self.header.set_tc(set);
        self
    }

    /// Sets the RD flag asking for recursion.
    pub fn set_rd(&mut self, set: bool) -> &mut Self {
        self.header.set_rd(set);
        self
    }

    /// Sets the RA flag stating that recursion is available.
    pub fn set_ra(&mut self, set: bool) -> &mut Self {
        self.header.set_ra(set);
        self
    }

    /// Sets the reserved Z bit.
    pub fn set_z(&mut self, set: bool) -> &mut Self {
        self.header.set_z(set);
        self
    }

    /// Sets the AD flag marking the data as authenticated.
    pub fn set_ad(&mut self, set: bool) -> &mut Self {
        self.header.set_ad(set);
        self
    }

    /// Sets the CD flag stating that non-authenticated data is acceptable.
    pub fn set_cd(&mut self, set: bool) -> &mut Self {
        self.header.set_cd(set);
        self
    }

    /// Sets the response code.
    pub fn set_rcode(&mut self, rcode: Rcode) -> &mut Self {
        self.header.set_rcode(rcode);
        self
    }
}

/// # Sections
///
impl MessageBuilder {
    /// Returns the questions added so far.
    pub fn question(&self) -> &[Question] {
        &self.question
    }

    /// Returns the answer records added so far.
    pub fn answer(&self) -> &[Record] {
        &self.answer
    }

    /// Returns the authority records added so far.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional records added so far.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Replaces the question section.
    pub fn set_question(&mut self, question: Vec<Question>) -> &mut Self {
        self.question = question;
        self
    }

    /// Appends a question.
    ///
    /// Anything that converts into a question can be given, e.g., a tuple
    /// of a name and a record type.
    pub fn push_question(
        &mut self,
        question: impl Into<Question>,
    ) -> &mut Self {
        self.question.push(question.into());
        self
    }

    /// Replaces the answer section.
    pub fn set_answer(&mut self, answer: Vec<Record>) -> &mut Self {
        self.answer = answer;
        self
    }

    /// Appends a record to the answer section.
    pub fn push_answer(&mut self, record: Record) -> &mut Self {
        self.answer.push(record);
        self
    }

    /// Replaces the authority section.
    pub fn set_authority(&mut self, authority: Vec<Record>) -> &mut Self {
        self.authority = authority;
        self
    }

    /// Appends a record to the authority section.
    pub fn push_authority(&mut self, record: Record) -> &mut Self {
        self.authority.push(record);
        self
    }

    /// Replaces the additional section.
    pub fn set_additional(&mut self, additional: Vec<Record>) -> &mut Self {
        self.additional = additional;
        self
    }

    /// Appends a record to the additional section.
    pub fn push_additional(&mut self, record: Record) -> &mut Self {
        self.additional.push(record);
        self
    }
}

/// # Producing the Message
///
impl MessageBuilder {
    /// Returns the section counts for the current content.
    ///
    /// Fails with [`ComposeError::LongData`] if a section has more than
    /// 65535 entries.
    pub fn counts(&self) -> Result<HeaderCounts, ComposeError> {
        Ok(HeaderCounts::new(
            len_u16(self.question.len())?,
            len_u16(self.answer.len())?,
            len_u16(self.authority.len())?,
            len_u16(self.additional.len())?,
        ))
    }

    /// Returns the length of the wire-format message.
    pub fn compose_len(&self) -> Result<usize, ComposeError> {
        let mut len = HeaderSection::LEN;
        for question in &self.question {
            len += question.compose_len()?;
        }
        for record in self.records() {
            len += record.compose_len()?;
        }
        Ok(len)
    }

    /// Appends the wire-format message to `target`.
    ///
    /// If an error happens, `target` may contain a partial message.
    pub fn compose<Target>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError>
    where
        Target: OctetsBuilder + ?Sized,
        Target::AppendError: Into<ShortBuf>,
    {
        let counts = self.counts()?;
        HeaderSection::new(self.header, counts).compose(target)?;
        for question in &self.question {
            question.compose(target)?;
        }
        for record in self.records() {
            record.compose(target)?;
        }
        trace!(
            id = self.header.id(),
            qdcount = counts.qdcount(),
            ancount = counts.ancount(),
            nscount = counts.nscount(),
            arcount = counts.arcount(),
            "composed message"
        );
        Ok(())
    }

    /// Returns the wire-format message in a new vec.
    pub fn to_vec(&self) -> Result<Vec<u8>, ComposeError> {
        let mut res = Vec::with_capacity(self.compose_len()?);
        self.compose(&mut res)?;
        Ok(res)
    }

    /// Returns the wire-format message preceded by its 16 bit length.
    ///
    /// Fails with [`ComposeError::LongData`] if the message is longer than
    /// 65535 octets.
    pub fn to_stream_vec(&self) -> Result<Vec<u8>, ComposeError> {
        let len = self.compose_len()?;
        let mut res = Vec::with_capacity(len + 2);
        res.extend_from_slice(&len_u16(len)?.to_be_bytes());
        self.compose(&mut res)?;
        Ok(res)
    }

    /// Returns the wire-format message as bytes.
    #[cfg(feature = "bytes")]
    pub fn to_bytes(&self) -> Result<bytes::Bytes, ComposeError> {
        let mut res = bytes::BytesMut::with_capacity(self.compose_len()?);
        self.compose(&mut res)?;
        Ok(res.freeze())
    }

    /// Returns the message as it will look to a receiver.
    ///
    /// The message is composed and then parsed again, so names appear in
    /// the form they take after a trip across the wire.
    pub fn to_message(&self) -> Result<Message, Error> {
        Ok(Message::from_octets(self.to_vec()?)?)
    }

    /// Returns an iterator over the records of all three record sections.
    fn records(&self) -> impl Iterator<Item = &Record> {
        self.answer
            .iter()
            .chain(self.authority.iter())
            .chain(self.additional.iter())
    }
}

//============ Testing =======================================================
