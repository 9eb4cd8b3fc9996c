//! DNS OpCodes.

//------------ Opcode --------------------------------------------------------

int_enum! {
    /// DNS OpCodes.
    ///
    /// The opcode specifies the kind of query to be performed. It occupies
    /// four bits of the message header; values are masked to that width
    /// when written.
    =>
    Opcode, u8, "OPCODE";

    /// A standard query (0).
    (QUERY => 0, "QUERY")

    /// An inverse query (IQUERY) (1, obsolete).
    (IQUERY => 1, "IQUERY")

    /// A server status request (2).
    (STATUS => 2, "STATUS")

    /// A NOTIFY query (4), defined in RFC 1996.
    (NOTIFY => 4, "NOTIFY")

    /// An UPDATE query (5), defined in RFC 2136.
    (UPDATE => 5, "UPDATE")
}

impl Default for Opcode {
    fn default() -> Self {
        Opcode::QUERY
    }
}
