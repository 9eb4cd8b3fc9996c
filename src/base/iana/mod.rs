//! IANA Definitions for DNS.
//!
//! This module contains enums for parameters defined in IANA registries
//! that are relevant for parsing and composing the messages handled by
//! this crate.
//!
//! All types except for [`Rcode`] wrap the underlying integer, so any
//! value is representable even if it has no name here. [`Rcode`] is
//! closed: the header may only carry one of its six values.

pub use self::class::Class;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;

#[macro_use]
mod macros;

pub mod class;
pub mod opcode;
pub mod rcode;
pub mod rtype;

//------------ FromStrError --------------------------------------------------

/// A mnemonic could not be converted into a value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FromStrError;

impl core::fmt::Display for FromStrError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("unknown mnemonic")
    }
}

impl std::error::Error for FromStrError {}
