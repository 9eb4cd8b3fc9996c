//! Resource Record (RR) TYPEs

//------------ Rtype ---------------------------------------------------------

int_enum! {
    /// Resource Record Types.
    ///
    /// Each resource records has a 16 bit type value indicating what kind of
    /// information is represented by the record. The set of types is open
    /// ended: any value is acceptable on the wire and values without a
    /// mnemonic are displayed as `TYPE` followed by the decimal value.
    ///
    /// Only the types for which record data is interpreted or which are
    /// commonly queried for have a constant here.
    =>
    Rtype, u16, "TYPE";

    /// A host address.
    (A => 1, "A")

    /// An authoritative name server.
    (NS => 2, "NS")

    /// The canonical name for an alias.
    (CNAME => 5, "CNAME")

    /// Marks the start of a zone of authority.
    (SOA => 6, "SOA")

    /// A domain name pointer.
    (PTR => 12, "PTR")

    /// Mail exchange.
    (MX => 15, "MX")

    /// Text strings.
    (TXT => 16, "TXT")

    /// IPv6 address.
    ///
    /// Defined in RFC 3596.
    (AAAA => 28, "AAAA")

    /// A request for all records the server has available.
    (ANY => 255, "ANY")
}

impl Rtype {
    /// Returns whether record data of this type is a single domain name.
    pub fn is_name_only(self) -> bool {
        matches!(self, Rtype::NS | Rtype::CNAME | Rtype::PTR)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn mnemonics() {
        assert_eq!(Rtype::from_str("mx"), Ok(Rtype::MX));
        assert_eq!(Rtype::from_str("TYPE65534"), Ok(Rtype::from_int(65534)));
        assert!(Rtype::from_str("TYPE").is_err());
        assert!(Rtype::from_str("BOGUS").is_err());
        assert_eq!(format!("{}", Rtype::AAAA), "AAAA");
        assert_eq!(format!("{}", Rtype::from_int(99)), "TYPE99");
        assert_eq!(format!("{:?}", Rtype::A), "Rtype::A");
    }

    #[test]
    fn name_only() {
        assert!(Rtype::NS.is_name_only());
        assert!(Rtype::PTR.is_name_only());
        assert!(!Rtype::MX.is_name_only());
        assert!(!Rtype::SOA.is_name_only());
    }
}
