//! Text presentation of catalog records.
//!
//! # Responsibility
//! - Render records as `Book: {title} ({id})` lines.
//!
//! # Invariants
//! - A missing title renders as an empty string.

use crate::model::record::Record;
use std::io::{self, Write};

/// Renders one record without a trailing newline.
pub fn render(record: &Record) -> String {
    format!(
        "Book: {} ({})",
        record.title.as_deref().unwrap_or_default(),
        record.id
    )
}

/// Writes one rendered record line to `out`.
pub fn write_record(out: &mut impl Write, record: &Record) -> io::Result<()> {
    writeln!(out, "{}", render(record))
}

/// Prints one record to standard output.
pub fn display(record: &Record) -> io::Result<()> {
    write_record(&mut io::stdout().lock(), record)
}

#[cfg(test)]
mod tests {
    use super::{render, write_record};
    use crate::model::id::RecordId;
    use crate::model::record::Record;

    #[test]
    fn renders_title_and_id() {
        let record = Record::with_id(RecordId::new(2), "New Book");
        assert_eq!(render(&record), "Book: New Book (2)");
    }

    #[test]
    fn missing_title_renders_empty() {
        let record = Record::key(RecordId::new(3));
        assert_eq!(render(&record), "Book:  (3)");
    }

    #[test]
    fn write_record_appends_newline() {
        let mut out = Vec::new();
        write_record(&mut out, &Record::with_id(RecordId::new(1), "A")).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Book: A (1)\n");
    }
}
