//! # exifpeek
//!
//! Extract camera attribution metadata (maker, model, lens, aperture, shutter
//! speed, focal length, ISO) from the EXIF APP1 segment of JPEG bytes.
//!
//! The decoder is slice-based with no external parsing dependency: it scans
//! the JPEG segment structure for the EXIF payload, reads the TIFF byte-order
//! header, walks the IFD entry lists (including the EXIF sub-IFD), and decodes
//! the fixed tag subset needed for attribution display. Bytes without an EXIF
//! segment, or that are not JPEG at all, yield no data rather than an error.
//!
//! Not a general-purpose metadata library: one container variant, a closed
//! tag set, no write path, no thumbnail extraction.
//!
//! ## Example
//!
//! ```no_run
//! use exifpeek::CameraInfo;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! if let Some(fields) = exifpeek::extract(&bytes) {
//!     let info = CameraInfo::from_fields(&fields);
//!     if info.has_attribution() {
//!         println!("{}", info.summary());
//!     }
//! }
//! ```
//!
//! With the `fetch` feature, [`gallery::GalleryProcessor`] runs the full
//! per-image pipeline (HTTP fetch with one fallback retry, decode, render via
//! a caller-supplied sink) over a discovered image list, de-duplicating
//! already-processed images across rescans.

pub mod camera;
pub mod exif;
#[cfg(feature = "fetch")]
pub mod fetch;
#[cfg(feature = "fetch")]
pub mod gallery;

pub use camera::{CameraInfo, FocalLength};
pub use exif::{extract, is_jpeg, render_rational, FieldMap, RationalDisplay, Value};
