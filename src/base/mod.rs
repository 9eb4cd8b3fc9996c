//! Basics.
//!
//! This module provides the types for taking apart and putting together
//! DNS messages in the wire format defined in [RFC 1035].
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format messages from other forms of representation conversion, we
//! use the term *parsing* for extracting data from a wire-format
//! representation and *composing* for producing such a representation.
//!
//! Both parsing and composing happen on buffers holding a complete DNS
//! message. This is necessary because domain names in a message may be
//! compressed by referencing other parts of the message. Parsing resolves
//! all such references, composing never creates them.
//!
//! The types [`Message`] and [`MessageBuilder`] are there to make parsing
//! and constructing DNS messages easy. A [`Message`] takes the binary data
//! of a DNS message and splits it into its header and four sections.
//! Similarly, a [`MessageBuilder`] collects the content of a message and
//! composes it into its binary form.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data arranged in
//! submodules. These are:
//!
//! * [bits] for reading integers at arbitrary bit positions,
//! * [header] for the header of DNS messages,
//! * [iana] for values from the IANA registries,
//! * [name] for domain names,
//! * [question] for questions,
//! * [record] for DNS resource records,
//! * [rdata] for the data of those records, and
//! * [wire] for the error types and composing helpers.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub use self::header::{Flags, Header, HeaderCounts, HeaderSection};
pub use self::iana::{Class, Opcode, Rcode, Rtype};
pub use self::message::Message;
pub use self::message_builder::MessageBuilder;
pub use self::question::Question;
pub use self::rdata::{Mx, RecordData, Soa};
pub use self::record::Record;
pub use self::wire::{ComposeError, ParseError};

pub mod bits;
pub mod header;
pub mod iana;
pub mod message;
pub mod message_builder;
pub mod name;
pub mod question;
pub mod rdata;
pub mod record;
pub mod wire;

mod dig_printer;
