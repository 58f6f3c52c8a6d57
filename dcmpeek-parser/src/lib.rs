//! Streaming DICOM header parser and value renderer.
//!
//! [`parse`] reads a DICOM Part 10 stream from the beginning, validates its
//! preamble and File Meta Information group, switches framing mode for the
//! main dataset per the discovered Transfer Syntax, and writes one
//! formatted line per element to `out` until Pixel Data, end-of-input, or
//! the configured element cap is reached.

mod error;
mod options;
mod render;
mod reader;
mod state;
mod stream;

pub use error::{Error, Result, StopReason};
pub use options::{ElementCap, ParseOptions, Summary};
pub use render::DisplayContext;

use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;
use stream::Parser;

/// Parses a DICOM header stream and writes the formatted dump to `out`.
pub fn parse<R: Read + Seek, W: Write>(source: R, out: &mut W, options: &ParseOptions) -> Result<Summary> {
    let parser = Parser::new(source, options);
    let (element_count, stop_reason) = parser.run(options, out)?;
    Ok(Summary { element_count, stop_reason })
}

/// Opens `path` and parses it, as [`parse`].
pub fn parse_file<W: Write>(path: &Path, out: &mut W, options: &ParseOptions) -> Result<Summary> {
    let file = File::open(path).map_err(|source| error::Error::FileOpen {
        path: path.to_path_buf(),
        source,
        backtrace: snafu::Backtrace::capture(),
    })?;
    parse(BufReader::new(file), out, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn explicit_vr_le_element(group: u16, element: u16, vr: &str, value: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&group.to_le_bytes());
        bytes.extend_from_slice(&element.to_le_bytes());
        bytes.extend_from_slice(vr.as_bytes());
        bytes.extend_from_slice(&(value.len() as u16).to_le_bytes());
        bytes.extend_from_slice(value);
        bytes
    }

    fn implicit_vr_le_element(group: u16, element: u16, value: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&group.to_le_bytes());
        bytes.extend_from_slice(&element.to_le_bytes());
        bytes.extend_from_slice(&(value.len() as u32).to_le_bytes());
        bytes.extend_from_slice(value);
        bytes
    }

    fn dicom_file(elements: Vec<u8>) -> Vec<u8> {
        let mut bytes = vec![0u8; 128];
        bytes.extend_from_slice(b"DICM");
        bytes.extend_from_slice(&elements);
        bytes
    }

    #[test]
    fn rejects_missing_magic() {
        let bytes = vec![0u8; 132];
        let mut out = Vec::new();
        let result = parse(Cursor::new(bytes), &mut out, &ParseOptions::default());
        assert!(matches!(result, Err(Error::BadMagic { .. })));
    }

    #[test]
    fn parses_minimal_explicit_vr_file() {
        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2.1 ");
        elements.extend(explicit_vr_le_element(0x0008, 0x0005, "CS", b"ISO_IR 100"));
        let bytes = dicom_file(elements);

        let mut out = Vec::new();
        let summary = parse(Cursor::new(bytes), &mut out, &ParseOptions::default()).unwrap();

        assert_eq!(summary.element_count, 2);
        assert_eq!(summary.stop_reason, StopReason::EndOfInput);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(0002,0010)"));
        assert!(text.contains("(0008,0005)"));
        assert!(text.contains("Explicit VR Little Endian"));
        assert!(text.contains("[Parsed 2 elements]"));
    }

    #[test]
    fn zero_max_elements_parses_nothing() {
        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2.1 ");
        elements.extend(explicit_vr_le_element(0x0008, 0x0005, "CS", b"ISO_IR 100"));
        let bytes = dicom_file(elements);

        let options = ParseOptions {
            max_elements: ElementCap::Bounded(0),
            ..ParseOptions::default()
        };
        let mut out = Vec::new();
        let summary = parse(Cursor::new(bytes), &mut out, &options).unwrap();

        assert_eq!(summary.element_count, 0);
        assert_eq!(summary.stop_reason, StopReason::ElementCap);
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("(0002,0010)"));
        assert!(text.contains("[Parsed 0 elements]"));
    }

    #[test]
    fn filtered_out_sequence_does_not_inflate_element_count() {
        let inner = explicit_vr_le_element(0x0008, 0x1030, "LO", b"STUDY A ");
        let mut item = Vec::new();
        item.extend_from_slice(&0xFFFEu16.to_le_bytes());
        item.extend_from_slice(&0xE000u16.to_le_bytes());
        item.extend_from_slice(&(inner.len() as u32).to_le_bytes());
        item.extend_from_slice(&inner);

        let mut sq = Vec::new();
        sq.extend_from_slice(&0x0008u16.to_le_bytes());
        sq.extend_from_slice(&0x1110u16.to_le_bytes());
        sq.extend_from_slice(b"SQ");
        sq.extend_from_slice(&[0, 0]);
        sq.extend_from_slice(&(item.len() as u32).to_le_bytes());
        sq.extend_from_slice(&item);

        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2.1 ");
        elements.extend(sq);
        elements.extend(explicit_vr_le_element(0x0008, 0x0005, "CS", b"ISO_IR 100"));
        let bytes = dicom_file(elements);

        // Filter only matches (0008,0005); the ReferencedStudySequence at
        // (0008,1110) and everything nested inside it is filtered out.
        let mut filter = std::collections::HashSet::new();
        filter.insert(dcmpeek_core::Tag(0x0008, 0x0005).as_u32());
        let options = ParseOptions {
            filter,
            ..ParseOptions::default()
        };

        let mut out = Vec::new();
        let summary = parse(Cursor::new(bytes), &mut out, &options).unwrap();

        // TS UID (always read) + the one displayed (0008,0005) element.
        // The filtered-out SQ and its nested element must not be counted.
        assert_eq!(summary.element_count, 2);
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("(0008,1110)"));
        assert!(!text.contains("STUDY A"));
        assert!(text.contains("(0008,0005)"));
    }

    #[test]
    fn switches_to_implicit_vr() {
        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2 ");
        elements.extend(implicit_vr_le_element(0x0010, 0x0010, b"DOE^JANE"));
        let bytes = dicom_file(elements);

        let mut out = Vec::new();
        let summary = parse(Cursor::new(bytes), &mut out, &ParseOptions::default()).unwrap();

        assert_eq!(summary.element_count, 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Implicit VR Little Endian"));
        assert!(text.contains(" PN "));
        assert!(text.contains("DOE^JANE"));
    }

    #[test]
    fn decodes_big_endian_values() {
        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2.2 ");
        // (0028,0010) US, big-endian value 0x0200 = 512
        let mut be_element = Vec::new();
        be_element.extend_from_slice(&0x0028u16.to_be_bytes());
        be_element.extend_from_slice(&0x0010u16.to_be_bytes());
        be_element.extend_from_slice(b"US");
        be_element.extend_from_slice(&2u16.to_be_bytes());
        be_element.extend_from_slice(&[0x02, 0x00]);
        elements.extend(be_element);
        let bytes = dicom_file(elements);

        let mut out = Vec::new();
        parse(Cursor::new(bytes), &mut out, &ParseOptions::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Explicit VR Big Endian"));
        assert!(text.contains(" 512"));
    }

    #[test]
    fn stops_at_pixel_data() {
        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2.1 ");
        elements.extend(explicit_vr_le_element(0x7FE0, 0x0010, "OW", &[0u8; 8]));
        elements.extend(explicit_vr_le_element(0x0008, 0x0005, "CS", b"ISO_IR 100"));
        let bytes = dicom_file(elements);

        let mut out = Vec::new();
        let summary = parse(Cursor::new(bytes), &mut out, &ParseOptions::default()).unwrap();
        assert_eq!(summary.stop_reason, StopReason::PixelData);
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("ISO_IR 100"));
    }

    #[test]
    fn parses_nested_defined_length_sequence() {
        let inner = explicit_vr_le_element(0x0008, 0x1030, "LO", b"STUDY A ");
        let mut item = Vec::new();
        item.extend_from_slice(&0xFFFEu16.to_le_bytes());
        item.extend_from_slice(&0xE000u16.to_le_bytes());
        item.extend_from_slice(&(inner.len() as u32).to_le_bytes());
        item.extend_from_slice(&inner);

        let mut sq = Vec::new();
        sq.extend_from_slice(&0x0008u16.to_le_bytes());
        sq.extend_from_slice(&0x1110u16.to_le_bytes());
        sq.extend_from_slice(b"SQ");
        sq.extend_from_slice(&[0, 0]); // reserved
        sq.extend_from_slice(&(item.len() as u32).to_le_bytes());
        sq.extend_from_slice(&item);

        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2.1 ");
        elements.extend(sq);
        let bytes = dicom_file(elements);

        let mut out = Vec::new();
        let summary = parse(Cursor::new(bytes), &mut out, &ParseOptions::default()).unwrap();
        // TS UID + the SQ row itself + the one element nested inside the Item.
        assert_eq!(summary.element_count, 3);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(0008,1110)"));
        assert!(text.contains("DEFINED LENGTH"));
        assert!(text.contains("STUDY A"));
        assert!(!text.contains("Sequence Delimitation"));
    }

    #[test]
    fn parses_undefined_length_sequence_with_two_items() {
        fn item_with(inner: &[u8]) -> Vec<u8> {
            let mut item = Vec::new();
            item.extend_from_slice(&0xFFFEu16.to_le_bytes());
            item.extend_from_slice(&0xE000u16.to_le_bytes());
            item.extend_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
            item.extend_from_slice(inner);
            item.extend_from_slice(&0xFFFEu16.to_le_bytes());
            item.extend_from_slice(&0xE00Du16.to_le_bytes());
            item.extend_from_slice(&0u32.to_le_bytes());
            item
        }

        let inner1 = explicit_vr_le_element(0x0008, 0x1030, "LO", b"A");
        let inner2 = explicit_vr_le_element(0x0008, 0x1030, "LO", b"B");

        let mut sq_body = Vec::new();
        sq_body.extend(item_with(&inner1));
        sq_body.extend(item_with(&inner2));
        sq_body.extend_from_slice(&0xFFFEu16.to_le_bytes());
        sq_body.extend_from_slice(&0xE0DDu16.to_le_bytes());
        sq_body.extend_from_slice(&0u32.to_le_bytes());

        let mut sq = Vec::new();
        sq.extend_from_slice(&0x0040u16.to_le_bytes());
        sq.extend_from_slice(&0x0275u16.to_le_bytes());
        sq.extend_from_slice(b"SQ");
        sq.extend_from_slice(&[0, 0]);
        sq.extend_from_slice(&0xFFFF_FFFFu32.to_le_bytes());
        sq.extend_from_slice(&sq_body);

        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2.1 ");
        elements.extend(sq);
        let bytes = dicom_file(elements);

        let mut out = Vec::new();
        let summary = parse(Cursor::new(bytes), &mut out, &ParseOptions::default()).unwrap();
        // TS UID + the SQ row + one element nested inside each of the two Items.
        assert_eq!(summary.element_count, 4);
        let text = String::from_utf8(out).unwrap();
        assert!(text.matches("Item DEFINED LENGTH").count() == 0);
        assert!(text.matches("Item UNDEFINED LENGTH").count() == 2);
        assert!(text.contains("Item Delimitation Item"));
        assert!(text.contains("Sequence Delimitation Item"));
    }

    #[test]
    fn respects_depth_guard() {
        // outer SQ -> item -> inner SQ -> item, with max_sq_depth = 1 so the
        // inner SQ (sequence-depth 2) exceeds the guard and is replaced by
        // a marker instead of being descended into.
        let leaf = explicit_vr_le_element(0x0008, 0x1030, "LO", b"X");
        let mut leaf_item = Vec::new();
        leaf_item.extend_from_slice(&0xFFFEu16.to_le_bytes());
        leaf_item.extend_from_slice(&0xE000u16.to_le_bytes());
        leaf_item.extend_from_slice(&(leaf.len() as u32).to_le_bytes());
        leaf_item.extend_from_slice(&leaf);

        let mut inner_sq = Vec::new();
        inner_sq.extend_from_slice(&0x0040u16.to_le_bytes());
        inner_sq.extend_from_slice(&0xA730u16.to_le_bytes());
        inner_sq.extend_from_slice(b"SQ");
        inner_sq.extend_from_slice(&[0, 0]);
        inner_sq.extend_from_slice(&(leaf_item.len() as u32).to_le_bytes());
        inner_sq.extend_from_slice(&leaf_item);

        let mut outer_item = Vec::new();
        outer_item.extend_from_slice(&0xFFFEu16.to_le_bytes());
        outer_item.extend_from_slice(&0xE000u16.to_le_bytes());
        outer_item.extend_from_slice(&(inner_sq.len() as u32).to_le_bytes());
        outer_item.extend_from_slice(&inner_sq);

        let mut outer_sq = Vec::new();
        outer_sq.extend_from_slice(&0x0008u16.to_le_bytes());
        outer_sq.extend_from_slice(&0x1110u16.to_le_bytes());
        outer_sq.extend_from_slice(b"SQ");
        outer_sq.extend_from_slice(&[0, 0]);
        outer_sq.extend_from_slice(&(outer_item.len() as u32).to_le_bytes());
        outer_sq.extend_from_slice(&outer_item);

        let mut elements = explicit_vr_le_element(0x0002, 0x0010, "UI", b"1.2.840.10008.1.2.1 ");
        elements.extend(outer_sq);
        let bytes = dicom_file(elements);

        let options = ParseOptions {
            max_sq_depth: 1,
            ..ParseOptions::default()
        };
        // Outer SQ sits at sequence-depth 1 (allowed); the inner SQ nested
        // inside its Item sits at sequence-depth 2, exceeding the guard.
        let mut out = Vec::new();
        parse(Cursor::new(bytes), &mut out, &options).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[1 ITEM ABOVE MAX SEQUENCE DEPTH]"));
    }
}
