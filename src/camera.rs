//! Display-oriented summary of the extracted fields, shaped for attribution
//! rendering (caller supplies the actual markup).

use crate::exif::{render_rational, FieldMap, RationalDisplay, Value};
use std::fmt;

/// Focal length, preferring the 35mm-equivalent tag when the camera wrote it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(untagged))]
pub enum FocalLength {
    In35mm(u16),
    Actual(RationalDisplay),
}

impl fmt::Display for FocalLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FocalLength::In35mm(mm) => write!(f, "{}", mm),
            FocalLength::Actual(r) => write!(f, "{}", r),
        }
    }
}

/// Camera attribution summary for one image.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CameraInfo {
    pub make: Option<String>,
    pub model: Option<String>,
    pub lens: Option<String>,
    pub aperture: Option<RationalDisplay>,
    pub shutter_speed: Option<RationalDisplay>,
    pub focal_length: Option<FocalLength>,
    pub iso: Option<u32>,
}

impl CameraInfo {
    /// Build the summary from a decoded field map.
    pub fn from_fields(fields: &FieldMap) -> Self {
        let focal_length = match fields.get("FocalLengthIn35mmFilm") {
            Some(Value::Short(mm)) => Some(FocalLength::In35mm(*mm)),
            _ => rational_field(fields, "FocalLength").map(FocalLength::Actual),
        };
        Self {
            make: string_field(fields, "Make"),
            model: string_field(fields, "Model"),
            lens: string_field(fields, "LensModel"),
            aperture: rational_field(fields, "FNumber"),
            shutter_speed: rational_field(fields, "ExposureTime"),
            focal_length,
            iso: int_field(fields, "ISOSpeedRatings"),
        }
    }

    /// Whether there is anything worth rendering: a maker or a model.
    pub fn has_attribution(&self) -> bool {
        self.make.is_some() || self.model.is_some()
    }

    /// Model with the redundant vendor prefix stripped, the display
    /// convention next to the maker name ("Canon" + "EOS R5").
    pub fn model_display(&self) -> Option<String> {
        self.model
            .as_ref()
            .map(|m| m.replacen("Canon ", "", 1).trim().to_string())
    }

    /// One-line "Make Model" attribution.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(make) = &self.make {
            parts.push(make.trim().to_string());
        }
        if let Some(model) = self.model_display() {
            parts.push(model);
        }
        parts.join(" ")
    }
}

fn string_field(fields: &FieldMap, name: &str) -> Option<String> {
    match fields.get(name) {
        Some(Value::Ascii(s)) => Some(s.clone()),
        _ => None,
    }
}

fn rational_field(fields: &FieldMap, name: &str) -> Option<RationalDisplay> {
    match fields.get(name) {
        Some(Value::Rational(n, d)) => render_rational(*n, *d),
        _ => None,
    }
}

fn int_field(fields: &FieldMap, name: &str) -> Option<u32> {
    match fields.get(name) {
        Some(Value::Short(v)) => Some(*v as u32),
        Some(Value::Shorts(v)) => v.first().map(|s| *s as u32),
        Some(Value::Long(v)) => Some(*v),
        _ => None,
    }
}
