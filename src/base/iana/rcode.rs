//! DNS response codes.
//!
//! The original DNS specification in [RFC 1035] specified four bits of the
//! message header as response code. Only the six values defined there are
//! accepted by this crate: a message carrying any other value in the four
//! bits is rejected while parsing.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use crate::base::wire::ParseError;
use core::fmt;
use core::str::FromStr;

//------------ Rcode --------------------------------------------------------

/// DNS Response Codes.
///
/// The response code of a response indicates what happend on the server
/// when trying to answer the query. The code is a 4 bit value and part of
/// the header of a DNS message.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rcode {
    /// No error condition.
    ///
    /// (Otherwise known as success.)
    #[default]
    NoError,

    /// Format error.
    ///
    /// The name server was unable to interpret the query.
    FormErr,

    /// Server failure.
    ///
    /// The name server was unable to process this query due to a problem
    /// with the name server.
    ServFail,

    /// Name error.
    ///
    /// Meaningful only in responses from an authoritative name server, this
    /// code signifies that the domain name given in the query does not
    /// exist.
    NXDomain,

    /// Not implemented.
    ///
    /// The name server does not support the requested kind of query.
    NotImp,

    /// Query refused.
    ///
    /// The name server refuses to perform the operation requested by the
    /// query for policy reasons.
    Refused,
}

impl Rcode {
    /// Creates an rcode from an integer.
    ///
    /// Values outside of the six defined codes result in
    /// [`ParseError::InvalidReplyCode`]. This includes anything that does
    /// not fit into the four bits of the header field.
    pub fn from_int(value: u8) -> Result<Rcode, ParseError> {
        match value {
            0 => Ok(Rcode::NoError),
            1 => Ok(Rcode::FormErr),
            2 => Ok(Rcode::ServFail),
            3 => Ok(Rcode::NXDomain),
            4 => Ok(Rcode::NotImp),
            5 => Ok(Rcode::Refused),
            value => Err(ParseError::InvalidReplyCode(value)),
        }
    }

    /// Returns the integer value for this rcode.
    pub fn to_int(self) -> u8 {
        match self {
            Rcode::NoError => 0,
            Rcode::FormErr => 1,
            Rcode::ServFail => 2,
            Rcode::NXDomain => 3,
            Rcode::NotImp => 4,
            Rcode::Refused => 5,
        }
    }

    /// Returns the mnemonic for this value.
    pub fn to_mnemonic(self) -> &'static str {
        match self {
            Rcode::NoError => "NOERROR",
            Rcode::FormErr => "FORMERR",
            Rcode::ServFail => "SERVFAIL",
            Rcode::NXDomain => "NXDOMAIN",
            Rcode::NotImp => "NOTIMP",
            Rcode::Refused => "REFUSED",
        }
    }
}

//--- TryFrom and From

impl TryFrom<u8> for Rcode {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rcode::from_int(value)
    }
}

impl From<Rcode> for u8 {
    fn from(value: Rcode) -> u8 {
        value.to_int()
    }
}

//--- FromStr and Display

impl FromStr for Rcode {
    type Err = super::FromStrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        (0..6)
            .filter_map(|value| Rcode::from_int(value).ok())
            .find(|rcode| rcode.to_mnemonic().eq_ignore_ascii_case(s))
            .ok_or(super::FromStrError)
    }
}

impl fmt::Display for Rcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_mnemonic())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn int_conversion() {
        for value in 0..6 {
            assert_eq!(Rcode::from_int(value).unwrap().to_int(), value);
        }
        for value in 6..16 {
            assert_eq!(
                Rcode::from_int(value),
                Err(ParseError::InvalidReplyCode(value))
            );
        }
        assert_eq!(
            Rcode::from_int(0x13),
            Err(ParseError::InvalidReplyCode(0x13))
        );
        assert_eq!(
            Rcode::try_from(0xF0),
            Err(ParseError::InvalidReplyCode(0xF0))
        );
    }

    #[test]
    fn text() {
        assert_eq!("nxdomain".parse(), Ok(Rcode::NXDomain));
        assert_eq!(Rcode::ServFail.to_string(), "SERVFAIL");
        assert!("BADVERS".parse::<Rcode>().is_err());
    }
}
