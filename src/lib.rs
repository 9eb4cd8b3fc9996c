//! Parsing and composing DNS messages.
//!
//! This crate provides the means to turn a DNS message in the wire format
//! of [RFC 1035] into Rust data and back again. It covers the header with
//! all its flags, the question section, and the three record sections. The
//! data of NS, CNAME, PTR, SOA, and MX records is interpreted, resolving
//! any compressed domain names in it. The data of all other record types
//! is kept as is.
//!
//! Sending and receiving messages is left to the user. Everything here
//! operates on octets buffers that hold exactly one message.
//!
//! # Modules
//!
//! * [base] contains all the types for DNS data and messages.
//!
//! The most important types are re-exported at the crate root.
//!
//! # Example
//!
//! ```
//! use dnswire::{Message, MessageBuilder, Rtype};
//!
//! let mut builder = MessageBuilder::new();
//! builder.set_id(40).push_question(("www.youtube.com", Rtype::A));
//! let octets = builder.to_vec().unwrap();
//!
//! let msg = Message::from_octets(&octets).unwrap();
//! assert_eq!(msg.question()[0].qname(), "www.youtube.com");
//! ```
//!
//! # Reference of Feature Flags
//!
//! The following is the complete list of the feature flags available.
//!
//! * `bytes`: Enables producing messages as `Bytes` from the
//!   [bytes](https://github.com/tokio-rs/bytes) crate.
//! * `rand`: Enables generating random message IDs via the
//!   [rand](https://github.com/rust-random/rand) crate. This feature is
//!   enabled by default.
//! * `serde`: Enables serde serialization for questions, records, and a
//!   number of other types.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

#![allow(renamed_and_removed_lints)]
#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use core::fmt;

pub use self::base::{
    Class, ComposeError, Message, MessageBuilder, ParseError, Question,
    Rcode, Record, RecordData, Rtype,
};

pub mod base;

//------------ Error ---------------------------------------------------------

/// Any error happening while parsing or composing a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A message could not be parsed.
    Parse(ParseError),

    /// A message could not be composed.
    Compose(ComposeError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<ComposeError> for Error {
    fn from(err: ComposeError) -> Self {
        Error::Compose(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Parse(ref err) => fmt::Display::fmt(err, f),
            Error::Compose(ref err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Parse(ref err) => Some(err),
            Error::Compose(ref err) => Some(err),
        }
    }
}
