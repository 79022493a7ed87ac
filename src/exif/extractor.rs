//! Entry list decoding: walks IFDs, resolves tags, builds the field map.

use super::jpeg::{find_exif_segment, is_jpeg};
use super::tags::{tag_name, TAG_EXIF_OFFSET};
use super::tiff::{read_ifd_entry, read_tiff_header, type_size, Endian, IFD_ENTRY_LEN};
use super::value::{read_value, Value};
use indexmap::IndexMap;

/// Decoded fields keyed by tag name, in directory order.
pub type FieldMap = IndexMap<&'static str, Value>;

/// Guard against sub-IFD pointer cycles in crafted inputs.
const MAX_IFD_DEPTH: usize = 4;

/// Extract the camera attribution fields from raw JPEG bytes.
///
/// Returns `None` when the bytes are not a JPEG, carry no EXIF segment, or
/// the TIFF header is truncated. A pure function of its input: calling it
/// twice on the same bytes yields the same map.
pub fn extract(data: &[u8]) -> Option<FieldMap> {
    if !is_jpeg(data) {
        return None;
    }
    let tiff_base = find_exif_segment(data)?;
    let (bo, ifd0) = read_tiff_header(data, tiff_base)?;
    log::debug!("exif segment at {}, {:?}, ifd0 at {}", tiff_base, bo, ifd0);

    let mut fields = FieldMap::new();
    parse_ifd(data, ifd0, tiff_base, bo, 0, &mut fields);
    Some(fields)
}

/// Decode one entry list into `fields`, then follow any EXIF sub-IFD pointer.
/// Sub-IFD fields are merged after the primary list, so they win on name
/// collision. Truncated entries end the walk; unrecognized tags and
/// undecodable values are dropped per entry.
fn parse_ifd(
    data: &[u8],
    ifd_offset: usize,
    tiff_base: usize,
    bo: Endian,
    depth: usize,
    fields: &mut FieldMap,
) {
    if depth > MAX_IFD_DEPTH {
        return;
    }
    let Some(num_entries) = bo.read_u16(data, ifd_offset) else {
        return;
    };

    let mut sub_ifds: Vec<usize> = Vec::new();
    for i in 0..num_entries as usize {
        let entry_offset = ifd_offset + 2 + i * IFD_ENTRY_LEN;
        let Some(entry) = read_ifd_entry(bo, data, entry_offset) else {
            break;
        };

        // Inline when the value fits in the entry's 4 value bytes, otherwise
        // the bytes hold a TIFF-base-relative offset to the value.
        let total = type_size(entry.field_type).saturating_mul(entry.count as usize);
        let value_pos = if total <= 4 {
            entry.value_field
        } else {
            match bo.read_u32(data, entry.value_field) {
                Some(off) => match tiff_base.checked_add(off as usize) {
                    Some(pos) => pos,
                    None => continue,
                },
                None => continue,
            }
        };

        let Some(name) = tag_name(entry.tag) else {
            continue;
        };
        let Some(value) = read_value(data, value_pos, entry.field_type, entry.count, bo) else {
            continue;
        };

        if entry.tag == TAG_EXIF_OFFSET {
            if let Value::Long(pointer) = &value {
                if let Some(sub) = tiff_base.checked_add(*pointer as usize) {
                    sub_ifds.push(sub);
                }
            }
        }
        fields.insert(name, value);
    }

    for sub_offset in sub_ifds {
        parse_ifd(data, sub_offset, tiff_base, bo, depth + 1, fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_jpeg_is_rejected_before_any_parsing() {
        assert_eq!(extract(b"II*\x00not a jpeg"), None);
        assert_eq!(extract(&[]), None);
    }

    #[test]
    fn jpeg_without_exif_segment_has_no_data() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x04, 0x4A, 0x46];
        assert_eq!(extract(&data), None);
    }

    #[test]
    fn cyclic_sub_ifd_pointer_terminates() {
        // IFD0 whose ExifOffset points back at IFD0 itself.
        let mut v = vec![0xFF, 0xD8, 0xFF, 0xE1];
        v.extend_from_slice(&26u16.to_be_bytes());
        v.extend_from_slice(b"Exif\0\0");
        v.extend_from_slice(&[0x49, 0x49, 0x2A, 0x00]);
        v.extend_from_slice(&8u32.to_le_bytes());
        v.extend_from_slice(&1u16.to_le_bytes());
        v.extend_from_slice(&34665u16.to_le_bytes());
        v.extend_from_slice(&4u16.to_le_bytes());
        v.extend_from_slice(&1u32.to_le_bytes());
        v.extend_from_slice(&8u32.to_le_bytes());
        let fields = extract(&v).unwrap();
        assert!(fields.contains_key("ExifOffset"));
    }
}
