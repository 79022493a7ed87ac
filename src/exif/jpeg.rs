//! JPEG container scan: SOI check and APP1 "Exif" segment location.
//! Operates on slices; no allocation.

/// JPEG SOI marker bytes (start of image).
pub const SOI: [u8; 2] = [0xFF, 0xD8];
/// APP1 marker (holds the EXIF payload).
pub const APP1_MARKER: [u8; 2] = [0xFF, 0xE1];
/// Identifier that distinguishes an EXIF APP1 from other APP1 payloads (e.g. XMP).
pub const EXIF_IDENT: &[u8; 6] = b"Exif\0\0";

/// Check the two-byte JPEG signature. Fast-reject path: nothing else is parsed when this fails.
#[inline]
pub fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == SOI[0] && data[1] == SOI[1]
}

/// Scan for the APP1 EXIF segment and return the offset just past the
/// `Exif\0\0` identifier (the TIFF base for all subsequent relative offsets).
///
/// The scan starts at offset 2 and advances by 2 on every mismatch, including
/// an APP1 marker whose identifier does not match. It deliberately does not
/// skip by the declared segment length, so it can re-synchronize on a marker
/// inside unrelated segment content. `None` means no EXIF present, which is a
/// normal case for many images, not an error.
pub fn find_exif_segment(data: &[u8]) -> Option<usize> {
    let mut offset = 2;
    while offset + 1 < data.len() {
        if data[offset] == APP1_MARKER[0] && data[offset + 1] == APP1_MARKER[1] {
            // Segment length (big-endian, includes the length field itself).
            // Read for the record; the scan does not advance by it.
            let _segment_length = (offset + 4 <= data.len())
                .then(|| u16::from_be_bytes([data[offset + 2], data[offset + 3]]));

            if data.len() >= offset + 10 && &data[offset + 4..offset + 10] == EXIF_IDENT {
                return Some(offset + 10);
            }
        }
        offset += 2;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soi_detected() {
        assert!(is_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0]));
        assert!(!is_jpeg(&[0x89, 0x50, 0x4E, 0x47]));
        assert!(!is_jpeg(&[0xFF]));
    }

    #[test]
    fn exif_segment_found() {
        let mut v = vec![0xFF, 0xD8];
        v.extend_from_slice(&APP1_MARKER);
        v.extend_from_slice(&20u16.to_be_bytes());
        v.extend_from_slice(EXIF_IDENT);
        v.extend_from_slice(&[0u8; 16]);
        assert_eq!(find_exif_segment(&v), Some(12));
    }

    #[test]
    fn app1_without_exif_ident_is_skipped() {
        // APP1 carrying something else (e.g. XMP); scan must move past it.
        let mut v = vec![0xFF, 0xD8];
        v.extend_from_slice(&APP1_MARKER);
        v.extend_from_slice(&10u16.to_be_bytes());
        v.extend_from_slice(b"http:\0");
        assert_eq!(find_exif_segment(&v), None);
    }

    #[test]
    fn resynchronizes_on_even_offsets_only() {
        // Marker at an odd offset is invisible to the 2-byte stride.
        let mut v = vec![0xFF, 0xD8, 0x00];
        v.extend_from_slice(&APP1_MARKER);
        v.extend_from_slice(&20u16.to_be_bytes());
        v.extend_from_slice(EXIF_IDENT);
        v.extend_from_slice(&[0u8; 16]);
        assert_eq!(find_exif_segment(&v), None);
    }
}
