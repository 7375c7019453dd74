//! Streaming writer handle.
//!
//! [`XlsWriter`] wraps one [`Sink`] and exposes the five BIFF2 operations as
//! methods. It holds no cells: every call encodes one record, passes it to
//! the sink and forgets it.

use crate::biff;
use crate::cell::Label;
use crate::error::{XlsError, XlsResult};
use crate::sink::Sink;

mod options;
mod state;

pub use options::{OrderingPolicy, WriterOptions};
pub use state::DocumentState;

/// Streaming BIFF2 worksheet writer.
///
/// A writer without a sink (see [`XlsWriter::detached`] and
/// [`XlsWriter::take_sink`]) rejects every operation with
/// [`XlsError::InvalidParam`] before anything is written.
///
/// After any error, treat the output as corrupt. A LABEL record may have been
/// cut off between its header and its text.
///
/// # Examples
///
/// ```
/// use microxls::XlsWriter;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut writer = XlsWriter::new(Vec::<u8>::new());
/// writer.begin()?;
/// writer.set_column_width(2, 256 * 100)?;
/// writer.add_number_cell(0, 0, 12345.6)?;
/// writer.add_label_cell(0, 1, "Testing")?;
/// writer.finish()?;
///
/// let bytes = writer.into_sink().unwrap();
/// assert_eq!(&bytes[..8], &[0x09, 0x00, 0x04, 0x00, 0x02, 0x00, 0x10, 0x00]);
/// assert_eq!(&bytes[bytes.len() - 4..], &[0x0A, 0x00, 0x00, 0x00]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct XlsWriter<S> {
    sink: Option<S>,
    options: WriterOptions,
    state: DocumentState,
}

impl<S> XlsWriter<S> {
    /// Create a writer with no sink. Every operation fails until one is
    /// supplied through [`XlsWriter::set_sink`].
    pub fn detached() -> Self {
        Self {
            sink: None,
            options: WriterOptions::default(),
            state: DocumentState::NotBegun,
        }
    }

    /// Get a reference to the sink, if any
    pub fn sink(&self) -> Option<&S> {
        self.sink.as_ref()
    }

    /// Get a mutable reference to the sink, if any
    pub fn sink_mut(&mut self) -> Option<&mut S> {
        self.sink.as_mut()
    }

    /// Whether a sink is installed
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Remove the sink, leaving the writer detached.
    pub fn take_sink(&mut self) -> Option<S> {
        self.sink.take()
    }

    /// Install `sink`, returning the previous one. The document state carries
    /// over, so writing continues the same stream on the new sink through this
    /// same handle.
    pub fn set_sink(&mut self, sink: S) -> Option<S> {
        self.sink.replace(sink)
    }

    /// Consume the writer and return its sink
    pub fn into_sink(self) -> Option<S> {
        self.sink
    }

    /// Options this writer was built with
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Current position in the BOF ... EOF sequence
    pub fn state(&self) -> DocumentState {
        self.state
    }
}

impl<S> Default for XlsWriter<S> {
    fn default() -> Self {
        Self::detached()
    }
}

impl<S: Sink> XlsWriter<S> {
    /// Create a permissive writer over `sink`
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Create a writer over `sink` with explicit options
    pub fn with_options(sink: S, options: WriterOptions) -> Self {
        Self {
            sink: Some(sink),
            options,
            state: DocumentState::NotBegun,
        }
    }

    /// Write the BOF record that opens a BIFF2 worksheet.
    pub fn begin(&mut self) -> XlsResult<()> {
        let sink = self.prepare("begin", DocumentState::NotBegun)?;
        biff::write_bof(sink)?;
        self.state = DocumentState::Open;
        log::debug!("BIFF2 document begun");
        Ok(())
    }

    /// Set the width of column `col` in 1/256 of the width of `'0'`.
    ///
    /// Only the first 256 columns can be sized in BIFF2.
    pub fn set_column_width(&mut self, col: u8, width: u16) -> XlsResult<()> {
        let sink = self.prepare("set column width", DocumentState::Open)?;
        biff::write_colwidth(sink, col, width)
    }

    /// Add a NUMBER cell. The value is stored bit-for-bit, NaN and infinities
    /// included.
    pub fn add_number_cell(&mut self, row: u16, col: u16, value: f64) -> XlsResult<()> {
        let sink = self.prepare("add number cell", DocumentState::Open)?;
        biff::write_number(sink, row, col, value)
    }

    /// Add a LABEL cell holding `label` verbatim.
    ///
    /// Fails with [`XlsError::InvalidParam`] if `label` is longer than 255
    /// bytes; nothing is written in that case.
    pub fn add_label_cell<L>(&mut self, row: u16, col: u16, label: L) -> XlsResult<()>
    where
        L: AsRef<[u8]>,
    {
        if self.sink.is_none() {
            return Err(Self::missing_sink());
        }
        let label = Label::new(label.as_ref())?;
        let sink = self.prepare("add label cell", DocumentState::Open)?;
        biff::write_label(sink, row, col, label)
    }

    /// Write the EOF record that closes the worksheet.
    pub fn finish(&mut self) -> XlsResult<()> {
        let sink = self.prepare("finish", DocumentState::Open)?;
        biff::write_eof(sink)?;
        self.state = DocumentState::Finished;
        log::debug!("BIFF2 document finished");
        Ok(())
    }

    /// Check the sink and the call order for `operation`, returning the sink.
    fn prepare(&mut self, operation: &'static str, required: DocumentState) -> XlsResult<&mut S> {
        let Some(sink) = self.sink.as_mut() else {
            return Err(Self::missing_sink());
        };

        if self.state != required {
            if self.options.is_strict() {
                return Err(XlsError::InvalidState {
                    operation,
                    state: self.state,
                });
            }
            log::warn!("{} while document is {}", operation, self.state);
        }

        Ok(sink)
    }

    #[inline]
    fn missing_sink() -> XlsError {
        XlsError::InvalidParam("writer has no sink")
    }
}
