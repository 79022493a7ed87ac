//! EXIF extraction: JPEG segment scan, TIFF directory decode, typed values.

mod extractor;
mod jpeg;
mod tags;
mod tiff;
mod value;

pub use extractor::{extract, FieldMap};
pub use jpeg::{find_exif_segment, is_jpeg, APP1_MARKER, EXIF_IDENT, SOI};
pub use tags::{tag_name, TAG_EXIF_OFFSET};
pub use tiff::{
    read_ifd_entry, read_tiff_header, type_size, Endian, IfdEntry, IFD_ENTRY_LEN, TYPE_ASCII,
    TYPE_BYTE, TYPE_LONG, TYPE_RATIONAL, TYPE_SHORT,
};
pub use value::{read_value, render_rational, RationalDisplay, Value};
