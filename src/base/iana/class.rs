//! DNS CLASSes.

//------------ Class ---------------------------------------------------------

int_enum! {
    /// DNS CLASSes.
    ///
    /// The domain name space is partitioned into separate classes for
    /// different network types. In practice, only the IN class is really
    /// relevant.
    ///
    /// Classes are represented by a 16 bit value. Values without a mnemonic
    /// are displayed as `CLASS` followed by the decimal value.
    =>
    Class, u16, "CLASS";

    /// Internet (IN).
    (IN => 1, "IN")

    /// Chaosnet (CH).
    (CH => 3, "CH")

    /// Hesiod (HS).
    (HS => 4, "HS")

    /// Query class None.
    (NONE => 0xFE, "NONE")

    /// Query class * (ANY).
    (ANY => 0xFF, "*")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(format!("{}", Class::IN), "IN");
        assert_eq!(format!("{}", Class::ANY), "*");
        assert_eq!(format!("{}", Class::from_int(42)), "CLASS42");
        assert_eq!("class42".parse(), Ok(Class::from_int(42)));
    }
}
