//! Worksheet-level BIFF2 record writers.

use crate::error::XlsResult;
use crate::sink::Sink;

use super::records::ColWidthRecord;
use super::write_fixed_record;

/// Write COLWIDTH record
///
/// Record type: 0x0024, Length: 4
///
/// The record can describe a column range, but only single columns are
/// written: first and last column are both `col`.
pub fn write_colwidth<S: Sink + ?Sized>(sink: &mut S, col: u8, width: u16) -> XlsResult<()> {
    write_fixed_record(sink, "COLWIDTH", &ColWidthRecord::single(col, width))
}
