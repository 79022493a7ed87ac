//! Tag dictionary: the fixed subset of EXIF tags used for camera attribution.

/// Pointer to the EXIF sub-IFD; its fields are merged into the same map.
pub const TAG_EXIF_OFFSET: u16 = 34665;

/// Resolve a numeric tag to its field name. Tags outside this set are
/// silently dropped by the decoder.
pub fn tag_name(tag: u16) -> Option<&'static str> {
    Some(match tag {
        // Basic image info
        271 => "Make",
        272 => "Model",

        // Lens info
        42036 => "LensModel",
        42035 => "LensMake",
        42037 => "LensSerialNumber",

        // Camera settings
        33437 => "FNumber",
        33434 => "ExposureTime",
        37386 => "FocalLength",
        41989 => "FocalLengthIn35mmFilm",
        34855 => "ISOSpeedRatings",

        34867 | 36867 => "DateTimeOriginal",

        // EXIF sub-IFD pointer
        34665 => "ExifOffset",

        // Additional camera data
        37385 => "Flash",
        37383 => "MeteringMode",
        37384 => "LightSource",
        37396 => "SubjectArea",

        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_tags_resolve() {
        assert_eq!(tag_name(271), Some("Make"));
        assert_eq!(tag_name(33434), Some("ExposureTime"));
        assert_eq!(tag_name(TAG_EXIF_OFFSET), Some("ExifOffset"));
    }

    #[test]
    fn unrecognized_tag_is_none() {
        assert_eq!(tag_name(0x0100), None);
    }
}
