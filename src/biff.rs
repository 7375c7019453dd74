//! BIFF2 record writer
//!
//! This module provides functions that encode single BIFF2 (Binary Interchange
//! File Format, Excel 2.x) records and hand them straight to a [`Sink`]. Nothing
//! is buffered between calls and no function keeps state, so independent sinks
//! can be driven from independent threads.
//!
//! # BIFF Record Structure
//!
//! Each BIFF record consists of:
//! - Record type (2 bytes) - identifies the record
//! - Record length (2 bytes) - number of bytes after the header
//! - Record data (variable length)
//!
//! All integers are little-endian.
//!
//! # Record Order
//!
//! A well-formed worksheet stream is BOF, then any number of COLWIDTH, NUMBER
//! and LABEL records, then EOF. These functions do not enforce that order; see
//! [`XlsWriter`](crate::XlsWriter) for an opt-in strict mode.

use crate::cell::Label;
use crate::error::XlsResult;
use crate::sink::Sink;
use zerocopy::{Immutable, IntoBytes};

mod cells;
pub mod records;
mod workbook;
mod worksheet;

/// Encode a fixed-size record and send it to `sink` in a single write.
#[inline]
pub(crate) fn write_fixed_record<S, R>(
    sink: &mut S,
    name: &'static str,
    record: &R,
) -> XlsResult<()>
where
    S: Sink + ?Sized,
    R: IntoBytes + Immutable,
{
    let bytes = record.as_bytes();
    log::trace!("{}: {} bytes", name, bytes.len());
    sink.write(bytes)?;
    Ok(())
}

/// Write BOF (Beginning of File) record
///
/// Record type: 0x0009, Length: 4
///
/// Always declares a BIFF2 worksheet stream: `09 00 04 00 02 00 10 00`.
pub fn write_bof<S: Sink + ?Sized>(sink: &mut S) -> XlsResult<()> {
    workbook::write_bof(sink)
}

/// Write EOF (End of File) record
///
/// Record type: 0x000A, Length: 0
pub fn write_eof<S: Sink + ?Sized>(sink: &mut S) -> XlsResult<()> {
    workbook::write_eof(sink)
}

/// Write COLWIDTH record for a single column
///
/// Record type: 0x0024, Length: 4
///
/// # Arguments
///
/// * `sink` - Output sink
/// * `col` - Column index; BIFF2 can only size the first 256 columns
/// * `width` - Width in 1/256 of the width of `'0'` in the default font
pub fn write_colwidth<S: Sink + ?Sized>(sink: &mut S, col: u8, width: u16) -> XlsResult<()> {
    worksheet::write_colwidth(sink, col, width)
}

/// Write NUMBER record (floating point cell)
///
/// Record type: 0x0003, Length: 15
///
/// # Arguments
///
/// * `sink` - Output sink
/// * `row` - Row index (0-based)
/// * `col` - Column index (0-based)
/// * `value` - Cell value, stored bit-for-bit
pub fn write_number<S: Sink + ?Sized>(
    sink: &mut S,
    row: u16,
    col: u16,
    value: f64,
) -> XlsResult<()> {
    cells::write_number(sink, row, col, value)
}

/// Write LABEL record (byte string cell)
///
/// Record type: 0x0004, Length: 8 + label length
///
/// This is the only record written in two pieces: the 12 fixed bytes, then the
/// label bytes. If the second write fails the stream ends in a truncated
/// record and must be discarded.
///
/// # Arguments
///
/// * `sink` - Output sink
/// * `row` - Row index (0-based)
/// * `col` - Column index (0-based)
/// * `label` - Raw label bytes (0-255)
pub fn write_label<S: Sink + ?Sized>(
    sink: &mut S,
    row: u16,
    col: u16,
    label: Label<'_>,
) -> XlsResult<()> {
    cells::write_label(sink, row, col, label)
}
