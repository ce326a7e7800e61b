//! Delimited-table output.
//!
//! One header row ([`MetricRecord::COLUMNS`]) followed by one row per
//! record, in the order given.

use std::io;

use lexmetric_types::MetricRecord;

/// Writes records as CSV. The header is written even when `records` is
/// empty.
///
/// # Errors
///
/// Propagates I/O and serialization errors from the underlying writer.
pub fn write_csv<W: io::Write>(records: &[MetricRecord], writer: W) -> Result<(), csv::Error> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    out.write_record(MetricRecord::COLUMNS)?;
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;
    Ok(())
}

/// Renders records as a CSV string.
pub fn to_csv_string(records: &[MetricRecord]) -> Result<String, csv::Error> {
    let mut buf = Vec::new();
    write_csv(records, &mut buf)?;
    String::from_utf8(buf).map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Reads records back from CSV produced by [`write_csv`].
pub fn read_csv<R: io::Read>(reader: R) -> Result<Vec<MetricRecord>, csv::Error> {
    csv::Reader::from_reader(reader).deserialize().collect()
}
