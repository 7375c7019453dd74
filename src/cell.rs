//! Cell values that need validation before encoding.

use crate::error::{XlsError, XlsResult};

/// Longest label a BIFF2 LABEL record can carry, bounded by its 1-byte length field.
pub const MAX_LABEL_LEN: usize = u8::MAX as usize;

/// Raw label bytes of at most [`MAX_LABEL_LEN`] bytes.
///
/// The bytes are written verbatim. No charset conversion happens, and embedded
/// NUL bytes are data like any other.
///
/// # Examples
///
/// ```
/// use microxls::Label;
///
/// let label = Label::new(b"Testing").unwrap();
/// assert_eq!(label.len(), 7);
/// assert!(Label::new(&[b'x'; 256]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label<'a> {
    bytes: &'a [u8],
}

impl<'a> Label<'a> {
    /// Wrap `bytes`, rejecting anything longer than 255 bytes.
    pub fn new(bytes: &'a [u8]) -> XlsResult<Self> {
        if bytes.len() > MAX_LABEL_LEN {
            return Err(XlsError::InvalidParam("label longer than 255 bytes"));
        }
        Ok(Self { bytes })
    }

    /// Label bytes
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Value for the LABEL length field
    #[inline]
    pub fn len(&self) -> u8 {
        // Bounded by the check in `new`
        self.bytes.len() as u8
    }

    /// Whether the label has no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl AsRef<[u8]> for Label<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}

impl<'a> TryFrom<&'a [u8]> for Label<'a> {
    type Error = XlsError;

    fn try_from(bytes: &'a [u8]) -> XlsResult<Self> {
        Label::new(bytes)
    }
}

impl<'a> TryFrom<&'a str> for Label<'a> {
    type Error = XlsError;

    /// Uses the UTF-8 bytes of `s` as-is.
    fn try_from(s: &'a str) -> XlsResult<Self> {
        Label::new(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_bounds() {
        assert_eq!(Label::new(b"").unwrap().len(), 0);
        assert_eq!(Label::new(&[0u8; 255]).unwrap().len(), 255);
        assert!(matches!(
            Label::new(&[0u8; 256]),
            Err(XlsError::InvalidParam(_))
        ));
    }

    #[test]
    fn test_label_keeps_nul_bytes() {
        let label = Label::new(b"a\0b").unwrap();
        assert_eq!(label.len(), 3);
        assert_eq!(label.as_bytes(), b"a\0b");
    }

    #[test]
    fn test_label_from_str_is_utf8_bytes() {
        let label = Label::try_from("é").unwrap();
        assert_eq!(label.as_bytes(), &[0xC3, 0xA9]);
    }
}
