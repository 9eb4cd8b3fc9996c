use core::fmt;

use super::message::Message;
use super::record::Record;

/// Interal type for printing a message in dig style
///
/// This is only exposed to users of this library as `impl fmt::Display`.
pub(super) struct DigPrinter<'a> {
    pub msg: &'a Message,
}

impl<'a> fmt::Display for DigPrinter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = self.msg;

        // Header
        let header = msg.header();
        let counts = msg.header_counts();

        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, rcode: {}, id: {}",
            header.opcode(),
            header.rcode(),
            header.id()
        )?;
        write!(f, ";; flags: {}", header.flags())?;
        writeln!(
            f,
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            counts.qdcount(),
            counts.ancount(),
            counts.nscount(),
            counts.arcount()
        )?;

        // Question
        if !msg.question().is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for item in msg.question() {
                writeln!(f, ";{}", item)?;
            }
        }

        write_section(f, "ANSWER", msg.answer())?;
        write_section(f, "AUTHORITY", msg.authority())?;
        write_section(f, "ADDITIONAL", msg.additional())
    }
}

fn write_section(
    f: &mut impl fmt::Write,
    name: &str,
    records: &[Record],
) -> Result<(), fmt::Error> {
    if records.is_empty() {
        return Ok(());
    }
    writeln!(f, "\n;; {} SECTION:", name)?;
    for item in records {
        writeln!(f, "{}", item)?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::base::iana::{Class, Rtype};
    use crate::base::message::Message;
    use crate::base::message_builder::MessageBuilder;
    use crate::base::question::Question;
    use crate::base::rdata::RecordData;
    use crate::base::record::Record;

    #[test]
    fn dig_style() {
        let mut builder = MessageBuilder::new();
        builder
            .set_id(7)
            .set_qr(true)
            .push_question(Question::new_in("example.com", Rtype::A))
            .push_answer(Record::new(
                "example.com",
                Rtype::A,
                Class::IN,
                300,
                RecordData::Other(vec![192, 0, 2, 1]),
            ));
        let msg: Message = builder.to_message().unwrap();
        assert_eq!(
            msg.to_string(),
            ";; ->>HEADER<<- opcode: QUERY, rcode: NOERROR, id: 7\n\
             ;; flags: QR RD; QUERY: 1, ANSWER: 1, AUTHORITY: 0, \
             ADDITIONAL: 0\n\
             \n\
             ;; QUESTION SECTION:\n\
             ;example.com.\tIN\tA\n\
             \n\
             ;; ANSWER SECTION:\n\
             example.com.\t300\tIN\tA\t192.0.2.1\n"
        );
    }
}
