//! Cell record BIFF2 writers.

use crate::cell::Label;
use crate::error::XlsResult;
use crate::sink::Sink;
use zerocopy::IntoBytes;

use super::records::{LabelRecordHead, NumberRecord};
use super::write_fixed_record;

/// Write NUMBER record (floating point cell)
///
/// Record type: 0x0003
pub fn write_number<S: Sink + ?Sized>(
    sink: &mut S,
    row: u16,
    col: u16,
    value: f64,
) -> XlsResult<()> {
    write_fixed_record(sink, "NUMBER", &NumberRecord::new(row, col, value))
}

/// Write LABEL record (byte string cell)
///
/// Record type: 0x0004
pub fn write_label<S: Sink + ?Sized>(
    sink: &mut S,
    row: u16,
    col: u16,
    label: Label<'_>,
) -> XlsResult<()> {
    let head = LabelRecordHead::new(row, col, label.len());
    log::trace!("LABEL: {} + {} bytes", LabelRecordHead::SIZE, label.len());

    // Header and fixed fields first; `?` keeps the payload write from
    // happening after a failed header.
    sink.write(head.as_bytes())?;
    sink.write(label.as_bytes())?;

    Ok(())
}
