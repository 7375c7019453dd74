//! MicroXLS - a streaming BIFF2 (.xls) writer for memory-constrained targets
//!
//! This crate writes Excel 2.x worksheets one record at a time, straight into
//! a caller-supplied [`Sink`]. There is no in-memory document model: each call
//! encodes a single record, hands it to the sink and returns, so memory use
//! does not grow with the size of the sheet.
//!
//! # Features
//!
//! - **Streaming**: records go out in exactly the order they are requested
//! - **Number and label cells**: IEEE 754 doubles and raw byte strings
//! - **Column widths**: for the first 256 columns
//! - **Pluggable output**: byte vectors, any [`std::io::Write`] through
//!   [`IoSink`], closures through [`FnSink`], or your own [`Sink`]
//! - **Optional ordering checks**: see [`OrderingPolicy::Strict`]
//!
//! # Example - Writing a worksheet to a file
//!
//! ```no_run
//! use std::fs::File;
//! use microxls::{IoSink, XlsWriter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut writer = XlsWriter::new(IoSink::new(File::create("report.xls")?));
//!
//! writer.begin()?;
//! writer.set_column_width(0, 256 * 20)?;
//! writer.add_label_cell(0, 0, "Temperature")?;
//! writer.add_number_cell(0, 1, 21.5)?;
//! writer.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Low-level record encoding
//!
//! ```
//! use microxls::biff;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut out: Vec<u8> = Vec::new();
//! biff::write_bof(&mut out)?;
//! biff::write_eof(&mut out)?;
//! assert_eq!(out, [0x09, 0x00, 0x04, 0x00, 0x02, 0x00, 0x10, 0x00, 0x0A, 0x00, 0x00, 0x00]);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! A failed call may leave a partial record in the output (a LABEL record is
//! written in two pieces). Abandon the output after any error.

/// BIFF2 record encoders
///
/// Stateless functions, one per record type, that write directly to a sink.
pub mod biff;

/// Cell values that need validation
mod cell;

/// Error types
mod error;

/// Output sink abstraction
mod sink;

/// Streaming writer handle
mod writer;

pub use cell::{Label, MAX_LABEL_LEN};
pub use error::{XlsError, XlsResult};
pub use sink::{FnSink, IoSink, Sink};
pub use writer::{DocumentState, OrderingPolicy, WriterOptions, XlsWriter};
