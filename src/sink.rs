//! Output sinks.
//!
//! A [`Sink`] is the only thing the encoder needs from the outside world: a
//! place that accepts a run of bytes and either takes all of them or reports an
//! error. Files and sockets qualify through [`IoSink`], in-memory buffers are
//! sinks as they are, and anything else can be wrapped in a [`FnSink`] or
//! implement the trait directly.

use std::io::{self, Write};

/// Destination for encoded record bytes.
///
/// Implementations must either write every byte of `bytes` or return an
/// error. A partial write that reports success corrupts the record framing.
///
/// The implementing value doubles as the per-output context: two sinks of the
/// same type are still independent outputs. `&mut S` is a sink whenever `S`
/// is, so a caller can lend a sink to a writer and keep ownership of it.
pub trait Sink {
    /// Write all of `bytes`.
    fn write(&mut self, bytes: &[u8]) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (**self).write(bytes)
    }
}

impl Sink for Vec<u8> {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a [`Sink`].
///
/// Each record goes through `write_all`, so a writer that stops accepting
/// bytes (`Ok(0)`) is reported as `ErrorKind::WriteZero`. Nothing is buffered.
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use microxls::{IoSink, XlsWriter};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut writer = XlsWriter::new(IoSink::new(File::create("out.xls")?));
/// writer.begin()?;
/// writer.finish()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: Write> IoSink<W> {
    /// Wrap `inner` as a sink
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Get a mutable reference to the underlying writer
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for IoSink<W> {
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)
    }
}

/// Adapts a closure into a [`Sink`].
///
/// The closure's captures take the place of the opaque context pointer a
/// C callback would receive. Each record reaches the closure in exactly one
/// call per sink write.
///
/// # Examples
///
/// ```
/// use microxls::{FnSink, XlsWriter};
///
/// let mut chunks: Vec<usize> = Vec::new();
/// let mut writer = XlsWriter::new(FnSink::new(|bytes: &[u8]| {
///     chunks.push(bytes.len());
///     Ok(())
/// }));
/// writer.begin().unwrap();
/// writer.finish().unwrap();
/// drop(writer);
/// assert_eq!(chunks, vec![8, 4]);
/// ```
pub struct FnSink<F> {
    func: F,
}

impl<F> FnSink<F>
where
    F: FnMut(&[u8]) -> io::Result<()>,
{
    /// Wrap `func` as a sink
    pub fn new(func: F) -> Self {
        Self { func }
    }

    /// Unwrap the closure
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> Sink for FnSink<F>
where
    F: FnMut(&[u8]) -> io::Result<()>,
{
    #[inline]
    fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        (self.func)(bytes)
    }
}

impl<F> std::fmt::Debug for FnSink<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Accepts at most `limit` bytes in total, then returns Ok(0) forever.
    struct ShortWriter {
        accepted: Vec<u8>,
        limit: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(self.limit);
            self.accepted.extend_from_slice(&buf[..n]);
            self.limit -= n;
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_vec_sink_appends() {
        let mut buf: Vec<u8> = Vec::new();
        Sink::write(&mut buf, &[1, 2]).unwrap();
        Sink::write(&mut buf, &[3]).unwrap();
        assert_eq!(buf, vec![1, 2, 3]);
    }

    #[test]
    fn test_short_write_is_reported() {
        let mut sink = IoSink::new(ShortWriter {
            accepted: Vec::new(),
            limit: 3,
        });
        let err = Sink::write(&mut sink, &[0xAA; 8]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
        assert_eq!(sink.get_ref().accepted.len(), 3);
    }

    #[test]
    fn test_io_sink_into_inner() {
        let mut sink = IoSink::new(io::Cursor::new(Vec::new()));
        Sink::write(&mut sink, b"abc").unwrap();
        assert_eq!(sink.into_inner().into_inner(), b"abc");
    }

    #[test]
    fn test_borrowed_sink_forwards() {
        let mut buf: Vec<u8> = Vec::new();
        {
            let mut borrowed = &mut buf;
            Sink::write(&mut borrowed, b"xy").unwrap();
        }
        assert_eq!(buf, b"xy");
    }

    #[test]
    fn test_fn_sink_forwards_whole_buffer() {
        let mut seen = Vec::new();
        {
            let mut sink = FnSink::new(|bytes: &[u8]| {
                seen.extend_from_slice(bytes);
                Ok(())
            });
            Sink::write(&mut sink, b"abc").unwrap();
        }
        assert_eq!(seen, b"abc");
    }

    #[test]
    fn test_fn_sink_propagates_error() {
        let mut sink =
            FnSink::new(|_: &[u8]| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));
        let err = Sink::write(&mut sink, b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
