//! Fixed BIFF2 record layouts.
//!
//! Every struct here is `#[repr(C)]` over byte-order-aware integer types with
//! an alignment of 1, so the in-memory layout is the on-disk layout: no
//! padding, little-endian, offsets exactly as listed in each doc comment.

use zerocopy::{F64, LE, U16};
use zerocopy_derive::*;

// =============================================================================
// Record Types
// =============================================================================

/// BIFF2 record type identifiers
pub mod record_type {
    /// Beginning of file
    pub const BOF: u16 = 0x0009;
    /// End of file
    pub const EOF: u16 = 0x000A;
    /// Floating point cell
    pub const NUMBER: u16 = 0x0003;
    /// Byte string cell
    pub const LABEL: u16 = 0x0004;
    /// Column width for a column range
    pub const COLWIDTH: u16 = 0x0024;
}

/// BOF version field for BIFF2
pub const BIFF2_VERSION: u16 = 0x0002;

/// BOF substream type for a worksheet
pub const SUBSTREAM_WORKSHEET: u16 = 0x0010;

/// Cell attribute bytes. Always written as zero, which Excel may not consider
/// a valid attribute set; the correct defaults are undocumented.
pub const CELL_ATTRIBUTES: [u8; 3] = [0, 0, 0];

// =============================================================================
// Record Header
// =============================================================================

/// Common record header (4 bytes)
///
/// | Offset | Size | Field       |
/// |--------|------|-------------|
/// | 0      | 2    | record type |
/// | 2      | 2    | data length |
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct RecordHeader {
    pub record_type: U16<LE>,
    /// Number of bytes following the header
    pub length: U16<LE>,
}

impl RecordHeader {
    /// Encoded size in bytes
    pub const SIZE: usize = 4;

    /// Header for a record of type `record_type` followed by `length` bytes
    #[inline]
    pub fn new(record_type: u16, length: u16) -> Self {
        Self {
            record_type: U16::new(record_type),
            length: U16::new(length),
        }
    }

    /// Header of a record whose data part is exactly `T` minus the header.
    #[inline]
    fn for_fixed<T>(record_type: u16) -> Self {
        Self::new(record_type, (size_of::<T>() - Self::SIZE) as u16)
    }
}

// =============================================================================
// BOF (0x0009)
// =============================================================================

/// BOF record (8 bytes)
///
/// | Offset | Size | Field          |
/// |--------|------|----------------|
/// | 0      | 4    | header         |
/// | 4      | 2    | BIFF version   |
/// | 6      | 2    | substream type |
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct BofRecord {
    pub header: RecordHeader,
    pub version: U16<LE>,
    pub substream_type: U16<LE>,
}

impl BofRecord {
    /// Encoded size in bytes
    pub const SIZE: usize = 8;

    /// BIFF2 worksheet BOF
    pub fn worksheet() -> Self {
        Self {
            header: RecordHeader::for_fixed::<Self>(record_type::BOF),
            version: U16::new(BIFF2_VERSION),
            substream_type: U16::new(SUBSTREAM_WORKSHEET),
        }
    }
}

// =============================================================================
// EOF (0x000A)
// =============================================================================

/// EOF record (4 bytes, header only)
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct EofRecord {
    pub header: RecordHeader,
}

impl EofRecord {
    /// Encoded size in bytes
    pub const SIZE: usize = 4;

    /// The EOF record
    pub fn new() -> Self {
        Self {
            header: RecordHeader::for_fixed::<Self>(record_type::EOF),
        }
    }
}

impl Default for EofRecord {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// NUMBER (0x0003)
// =============================================================================

/// NUMBER record (19 bytes)
///
/// | Offset | Size | Field                 |
/// |--------|------|-----------------------|
/// | 0      | 4    | header (length = 15)  |
/// | 4      | 2    | row                   |
/// | 6      | 2    | column                |
/// | 8      | 3    | cell attributes       |
/// | 11     | 8    | IEEE 754 value        |
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct NumberRecord {
    pub header: RecordHeader,
    pub row: U16<LE>,
    pub col: U16<LE>,
    pub attributes: [u8; 3],
    pub value: F64<LE>,
}

impl NumberRecord {
    /// Encoded size in bytes
    pub const SIZE: usize = 19;

    /// Number cell at (`row`, `col`) with default attributes
    pub fn new(row: u16, col: u16, value: f64) -> Self {
        Self {
            header: RecordHeader::for_fixed::<Self>(record_type::NUMBER),
            row: U16::new(row),
            col: U16::new(col),
            attributes: CELL_ATTRIBUTES,
            // F64::new goes through to_bits, so NaN payloads survive
            value: F64::new(value),
        }
    }
}

// =============================================================================
// LABEL (0x0004)
// =============================================================================

/// Fixed leading part of a LABEL record (12 bytes). The label bytes follow.
///
/// | Offset | Size | Field                     |
/// |--------|------|---------------------------|
/// | 0      | 4    | header (length = 8 + len) |
/// | 4      | 2    | row                       |
/// | 6      | 2    | column                    |
/// | 8      | 3    | cell attributes           |
/// | 11     | 1    | label length              |
/// | 12     | len  | label bytes               |
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct LabelRecordHead {
    pub header: RecordHeader,
    pub row: U16<LE>,
    pub col: U16<LE>,
    pub attributes: [u8; 3],
    pub label_len: u8,
}

impl LabelRecordHead {
    /// Encoded size in bytes, excluding the label text
    pub const SIZE: usize = 12;

    /// Head of a label cell at (`row`, `col`) carrying `label_len` bytes of text
    pub fn new(row: u16, col: u16, label_len: u8) -> Self {
        Self {
            header: RecordHeader::new(record_type::LABEL, Self::record_length(label_len)),
            row: U16::new(row),
            col: U16::new(col),
            attributes: CELL_ATTRIBUTES,
            label_len,
        }
    }

    /// Length field for a label of `label_len` bytes: everything after the
    /// 4-byte header, i.e. the 8 fixed bytes plus the label itself.
    #[inline]
    pub const fn record_length(label_len: u8) -> u16 {
        (Self::SIZE - RecordHeader::SIZE) as u16 + label_len as u16
    }
}

// =============================================================================
// COLWIDTH (0x0024)
// =============================================================================

/// COLWIDTH record (8 bytes)
///
/// | Offset | Size | Field                           |
/// |--------|------|---------------------------------|
/// | 0      | 4    | header (length = 4)             |
/// | 4      | 1    | first column                    |
/// | 5      | 1    | last column                     |
/// | 6      | 2    | width in 1/256 of a '0' glyph   |
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
pub struct ColWidthRecord {
    pub header: RecordHeader,
    pub first_col: u8,
    pub last_col: u8,
    pub width: U16<LE>,
}

impl ColWidthRecord {
    /// Encoded size in bytes
    pub const SIZE: usize = 8;

    /// Width for the single column `col`
    pub fn single(col: u8, width: u16) -> Self {
        Self {
            header: RecordHeader::for_fixed::<Self>(record_type::COLWIDTH),
            first_col: col,
            last_col: col,
            width: U16::new(width),
        }
    }
}

// Layout sizes are part of the file format; catch drift at compile time.
const _: () = assert!(size_of::<RecordHeader>() == RecordHeader::SIZE);
const _: () = assert!(size_of::<BofRecord>() == BofRecord::SIZE);
const _: () = assert!(size_of::<EofRecord>() == EofRecord::SIZE);
const _: () = assert!(size_of::<NumberRecord>() == NumberRecord::SIZE);
const _: () = assert!(size_of::<LabelRecordHead>() == LabelRecordHead::SIZE);
const _: () = assert!(size_of::<ColWidthRecord>() == ColWidthRecord::SIZE);

#[cfg(test)]
mod tests {
    use super::*;
    use zerocopy::IntoBytes;

    #[test]
    fn test_bof_bytes() {
        assert_eq!(
            BofRecord::worksheet().as_bytes(),
            &[0x09, 0x00, 0x04, 0x00, 0x02, 0x00, 0x10, 0x00]
        );
    }

    #[test]
    fn test_eof_bytes() {
        assert_eq!(EofRecord::new().as_bytes(), &[0x0A, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn test_number_header_length_is_15() {
        let rec = NumberRecord::new(0, 0, 0.0);
        assert_eq!(rec.header.length.get(), 15);
        assert_eq!(rec.as_bytes().len(), 19);
    }

    #[test]
    fn test_number_field_offsets() {
        let rec = NumberRecord::new(0x1234, 0xABCD, 1.0);
        let bytes = rec.as_bytes();
        assert_eq!(&bytes[0..4], &[0x03, 0x00, 0x0F, 0x00]);
        assert_eq!(&bytes[4..6], &[0x34, 0x12]);
        assert_eq!(&bytes[6..8], &[0xCD, 0xAB]);
        assert_eq!(&bytes[8..11], &[0, 0, 0]);
        assert_eq!(&bytes[11..19], &1.0f64.to_le_bytes());
    }

    #[test]
    fn test_label_record_length() {
        assert_eq!(LabelRecordHead::record_length(0), 8);
        assert_eq!(LabelRecordHead::record_length(7), 15);
        assert_eq!(LabelRecordHead::record_length(255), 263);
    }

    #[test]
    fn test_colwidth_repeats_column() {
        let rec = ColWidthRecord::single(2, 256 * 100);
        assert_eq!(
            rec.as_bytes(),
            &[0x24, 0x00, 0x04, 0x00, 0x02, 0x02, 0x00, 0x64]
        );
    }
}
