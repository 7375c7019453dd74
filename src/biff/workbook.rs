//! Stream delimiter BIFF2 record writers.

use crate::error::XlsResult;
use crate::sink::Sink;

use super::records::{BofRecord, EofRecord};
use super::write_fixed_record;

/// Write BOF record
///
/// Record type: 0x0009
pub fn write_bof<S: Sink + ?Sized>(sink: &mut S) -> XlsResult<()> {
    write_fixed_record(sink, "BOF", &BofRecord::worksheet())
}

/// Write EOF record
///
/// Record type: 0x000A
pub fn write_eof<S: Sink + ?Sized>(sink: &mut S) -> XlsResult<()> {
    write_fixed_record(sink, "EOF", &EofRecord::new())
}
