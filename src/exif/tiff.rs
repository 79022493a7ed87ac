//! TIFF structure reader for the EXIF payload: byte-order header and IFD entries.
//! All offsets inside the payload are relative to the TIFF base (the byte-order
//! header), except where an absolute position has already been computed.

/// Size of one IFD entry in bytes.
pub const IFD_ENTRY_LEN: usize = 12;

/// TIFF field types recognized by the decoder.
pub const TYPE_BYTE: u16 = 1;
pub const TYPE_ASCII: u16 = 2;
pub const TYPE_SHORT: u16 = 3;
pub const TYPE_LONG: u16 = 4;
pub const TYPE_RATIONAL: u16 = 5;

/// Byte order declared by the TIFF header sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

impl Endian {
    #[inline]
    pub fn read_u16(self, data: &[u8], offset: usize) -> Option<u16> {
        let end = offset.checked_add(2)?;
        if end > data.len() {
            return None;
        }
        let bytes = &data[offset..end];
        Some(match self {
            Endian::Little => u16::from_le_bytes([bytes[0], bytes[1]]),
            Endian::Big => u16::from_be_bytes([bytes[0], bytes[1]]),
        })
    }

    #[inline]
    pub fn read_u32(self, data: &[u8], offset: usize) -> Option<u32> {
        let end = offset.checked_add(4)?;
        if end > data.len() {
            return None;
        }
        let bytes = &data[offset..end];
        Some(match self {
            Endian::Little => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            Endian::Big => u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        })
    }
}

/// Size in bytes of one value for a given TIFF field type; 0 for unrecognized types.
#[inline]
pub fn type_size(field_type: u16) -> usize {
    match field_type {
        TYPE_BYTE | TYPE_ASCII => 1,
        TYPE_SHORT => 2,
        TYPE_LONG => 4,
        TYPE_RATIONAL => 8,
        _ => 0,
    }
}

/// Read the TIFF header at `tiff_base` and return (byte order, absolute IFD0 offset).
///
/// The sentinel `II` selects little-endian; any other value selects big-endian.
/// The 2-byte magic (nominally 42) is read but not validated, matching the
/// established extractor behavior.
pub fn read_tiff_header(data: &[u8], tiff_base: usize) -> Option<(Endian, usize)> {
    let b0 = *data.get(tiff_base)?;
    let b1 = *data.get(tiff_base + 1)?;
    let bo = if b0 == b'I' && b1 == b'I' {
        Endian::Little
    } else {
        Endian::Big
    };
    let _magic = bo.read_u16(data, tiff_base + 2)?;
    let ifd_offset = bo.read_u32(data, tiff_base + 4)? as usize;
    Some((bo, tiff_base.checked_add(ifd_offset)?))
}

/// One IFD entry. `value_field` is the absolute offset of the entry's 4 value
/// bytes, which hold either the value itself (when `type_size * count <= 4`)
/// or a TIFF-base-relative offset to the out-of-line value.
#[derive(Debug, Clone, Copy)]
pub struct IfdEntry {
    pub tag: u16,
    pub field_type: u16,
    pub count: u32,
    pub value_field: usize,
}

/// Read one 12-byte IFD entry at `entry_offset`.
pub fn read_ifd_entry(bo: Endian, data: &[u8], entry_offset: usize) -> Option<IfdEntry> {
    if data.len().saturating_sub(entry_offset) < IFD_ENTRY_LEN {
        return None;
    }
    Some(IfdEntry {
        tag: bo.read_u16(data, entry_offset)?,
        field_type: bo.read_u16(data, entry_offset + 2)?,
        count: bo.read_u32(data, entry_offset + 4)?,
        value_field: entry_offset + 8,
    })
}
