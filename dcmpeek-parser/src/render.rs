//! The value renderer: formats an element's raw value bytes into a bounded,
//! human-readable string given its VR and the current endianness, plus the
//! table layout (column widths, framing marker lines) built on top of it.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use dcmpeek_core::{Length, Tag, VR};
use std::io::{self, Write};

/// Display-time configuration threaded through the parser: the terminal
/// width, the value column's starting offset, and whether truncation is
/// disabled. Constructed once per parse, never a hidden global.
#[derive(Debug, Clone, Copy)]
pub struct DisplayContext {
    pub terminal_width: u32,
    pub value_column_start: u32,
    pub show_full_values: bool,
}

impl DisplayContext {
    pub fn new(terminal_width: u32, value_column_start: u32, show_full_values: bool) -> Self {
        DisplayContext {
            terminal_width,
            value_column_start,
            show_full_values,
        }
    }

    /// The maximum number of characters available to render a value at the
    /// given sequence nesting depth.
    pub fn max_display_width(&self, depth: u32) -> usize {
        if self.show_full_values {
            return usize::MAX;
        }
        let indent = depth * 4;
        let budget = self.terminal_width as i64 - self.value_column_start as i64 - indent as i64 - 10;
        budget.max(20) as usize
    }
}

const TEXT_LIKE: &[VR] = &[
    VR::AE,
    VR::AS,
    VR::CS,
    VR::DA,
    VR::DS,
    VR::DT,
    VR::IS,
    VR::LO,
    VR::LT,
    VR::PN,
    VR::SH,
    VR::ST,
    VR::TM,
    VR::UC,
    VR::UI,
    VR::UR,
    VR::UT,
];

const BINARY_LIKE: &[VR] = &[VR::OB, VR::OW, VR::OD, VR::OF, VR::OL];

/// Render `bytes` (the raw value of an element with the given `vr`) into a
/// single inline string with no trailing newline, bounded by
/// `max_width` characters.
pub fn render(vr: VR, bytes: &[u8], little_endian: bool, max_width: usize) -> String {
    if bytes.is_empty() {
        return "(n/a)".to_string();
    }

    if TEXT_LIKE.contains(&vr) {
        return render_text(bytes, max_width);
    }

    match vr {
        VR::US => render_numeric(bytes, 2, little_endian, |b, le| {
            if le { LittleEndian::read_u16(b) as i64 } else { BigEndian::read_u16(b) as i64 }
        }),
        VR::UL => render_numeric(bytes, 4, little_endian, |b, le| {
            if le { LittleEndian::read_u32(b) as i64 } else { BigEndian::read_u32(b) as i64 }
        }),
        VR::SS => render_numeric(bytes, 2, little_endian, |b, le| {
            (if le { LittleEndian::read_i16(b) } else { BigEndian::read_i16(b) }) as i64
        }),
        VR::SL => render_numeric(bytes, 4, little_endian, |b, le| {
            (if le { LittleEndian::read_i32(b) } else { BigEndian::read_i32(b) }) as i64
        }),
        VR::FL => render_float(bytes, 4, little_endian, |b, le| {
            (if le { LittleEndian::read_f32(b) } else { BigEndian::read_f32(b) }) as f64
        }),
        VR::FD => render_float(bytes, 8, little_endian, |b, le| {
            if le { LittleEndian::read_f64(b) } else { BigEndian::read_f64(b) }
        }),
        VR::AT => render_at(bytes, little_endian),
        VR::SQ => "(sequence)".to_string(),
        vr if BINARY_LIKE.contains(&vr) => render_binary(bytes),
        VR::UN => render_un(bytes, max_width),
        _ => format!("(UNKNOWN VR: {} BYTES)", bytes.len()),
    }
}

fn render_text(bytes: &[u8], max_width: usize) -> String {
    let display_len = bytes.len().min(max_width);
    let mut s = String::with_capacity(display_len + 2);
    s.push('"');
    for &b in &bytes[..display_len] {
        if b == 0 {
            break;
        }
        if (32..127).contains(&b) {
            s.push(b as char);
        }
    }
    if bytes.len() > max_width {
        s.push_str("...");
    }
    s.push('"');
    s
}

fn render_numeric(bytes: &[u8], width: usize, little_endian: bool, decode: impl Fn(&[u8], bool) -> i64) -> String {
    if bytes.len() < width {
        return "(n/a)".to_string();
    }
    let value = decode(&bytes[..width], little_endian);
    let n = bytes.len() / width;
    if n > 1 {
        format!("{} [+{} more]", value, n - 1)
    } else {
        value.to_string()
    }
}

fn render_float(bytes: &[u8], width: usize, little_endian: bool, decode: impl Fn(&[u8], bool) -> f64) -> String {
    if bytes.len() < width {
        return "(n/a)".to_string();
    }
    let value = decode(&bytes[..width], little_endian);
    let n = bytes.len() / width;
    if n > 1 {
        format!("{} [+{} more]", value, n - 1)
    } else {
        value.to_string()
    }
}

fn render_at(bytes: &[u8], little_endian: bool) -> String {
    if bytes.len() < 4 {
        return "(n/a)".to_string();
    }
    let (group, element) = if little_endian {
        (LittleEndian::read_u16(&bytes[0..2]), LittleEndian::read_u16(&bytes[2..4]))
    } else {
        (BigEndian::read_u16(&bytes[0..2]), BigEndian::read_u16(&bytes[2..4]))
    };
    let n = bytes.len() / 4;
    if n > 1 {
        format!("({:04X},{:04X}) [+{} more]", group, element, n - 1)
    } else {
        format!("({:04X},{:04X})", group, element)
    }
}

fn render_binary(bytes: &[u8]) -> String {
    let show = bytes.len().min(8);
    let mut s = format!("(binary: {} bytes) ", bytes.len());
    for (i, b) in bytes[..show].iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&format!("{:02X}", b));
    }
    if bytes.len() > 8 {
        s.push_str("...");
    }
    s
}

fn render_un(bytes: &[u8], max_width: usize) -> String {
    if !bytes.is_empty() && bytes.len() < 256 {
        let sample = &bytes[..bytes.len().min(100)];
        let printable = sample
            .iter()
            .filter(|&&b| (32..127).contains(&b) || matches!(b, b'\n' | b'\r' | b'\t'))
            .count();
        if printable * 10 > sample.len() * 5 {
            let mut s = render_text(bytes, max_width);
            s.push_str(" [interpreted]");
            return s;
        }
    }
    render_binary(bytes)
}

const TAG_WIDTH: usize = 13;
const VR_WIDTH: usize = 4;
const LENGTH_WIDTH: usize = 10;
const KEYWORD_WIDTH: usize = 34;
const NAME_WIDTH: usize = 47;

fn indent(depth: u32) -> String {
    " ".repeat((depth * 2) as usize)
}

fn keyword_and_name(tag: Tag) -> (String, String) {
    let dict_keyword = dcmpeek_dict::keyword_of(tag);
    let dict_name = dcmpeek_dict::name_of(tag);

    let keyword = match (tag.is_private(), dict_keyword) {
        (true, Some(k)) => format!("[PRIVATE TAG] {}", k),
        (true, None) => "[PRIVATE TAG]".to_string(),
        (false, Some(k)) => k.to_string(),
        (false, None) => "[N/A]".to_string(),
    };
    let name = dict_name.unwrap_or("[N/A]").to_string();
    (keyword, name)
}

/// Writes the column-header line that opens the dump.
pub fn write_header(out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{:tag$} {:vr$} {:len$} {:kw$} {:name$} VALUE",
        "TAG",
        "VR",
        "LENGTH",
        "KEYWORD",
        "NAME",
        tag = TAG_WIDTH,
        vr = VR_WIDTH,
        len = LENGTH_WIDTH,
        kw = KEYWORD_WIDTH,
        name = NAME_WIDTH,
    )
}

/// Writes one element row: `TAG VR LENGTH KEYWORD NAME VALUE`, indented by
/// `depth * 2` spaces.
pub fn write_element_row(out: &mut dyn Write, depth: u32, tag: Tag, vr: VR, length: Length, value: &str) -> io::Result<()> {
    let (keyword, name) = keyword_and_name(tag);
    writeln!(
        out,
        "{}{:tag$} {:vr$} {:len$} {:kw$} {:name$} {}",
        indent(depth),
        tag.to_string(),
        vr.as_str(),
        length.to_string(),
        keyword,
        name,
        value,
        tag = TAG_WIDTH,
        vr = VR_WIDTH,
        len = LENGTH_WIDTH,
        kw = KEYWORD_WIDTH,
        name = NAME_WIDTH,
    )
}

pub fn write_pixel_data_marker(out: &mut dyn Write, tag: Tag) -> io::Result<()> {
    write_element_row(out, 0, tag, VR::OW, Length::UNDEFINED, "(pixel data - stopping)")
}

pub fn write_transfer_syntax_banner(out: &mut dyn Write, explicit_vr: bool, little_endian: bool) -> io::Result<()> {
    let banner = match (explicit_vr, little_endian) {
        (false, true) => "Implicit VR Little Endian",
        (true, true) => "Explicit VR Little Endian",
        (true, false) => "Explicit VR Big Endian",
        (false, false) => "Implicit VR Big Endian",
    };
    writeln!(out, "--- {} ---", banner)
}

pub fn write_empty_sequence(out: &mut dyn Write, depth: u32) -> io::Result<()> {
    writeln!(out, "{}(empty sequence)", indent(depth))
}

pub fn write_item_start(out: &mut dyn Write, depth: u32, length: Length) -> io::Result<()> {
    let extent = if length.is_undefined() { "UNDEFINED LENGTH" } else { "DEFINED LENGTH" };
    writeln!(
        out,
        "{}{:tag$} Item {}",
        indent(depth + 1),
        Tag::ITEM.to_string(),
        extent,
        tag = TAG_WIDTH,
    )
}

pub fn write_item_end(out: &mut dyn Write, depth: u32) -> io::Result<()> {
    writeln!(out, "{}{} Item Delimitation Item", indent(depth + 1), Tag::ITEM_DELIMITER)
}

pub fn write_sequence_delimiter(out: &mut dyn Write, depth: u32) -> io::Result<()> {
    writeln!(out, "{}{} Sequence Delimitation Item", indent(depth + 1), Tag::SEQUENCE_DELIMITER)
}

pub fn write_collapsed_marker(out: &mut dyn Write, depth: u32, count: u32) -> io::Result<()> {
    if count == 0 {
        writeln!(out, "{}[EMPTY SEQUENCE]", indent(depth))
    } else {
        writeln!(out, "{}[SEQUENCE with {} ITEM{}]", indent(depth), count, if count == 1 { "" } else { "S" })
    }
}

pub fn write_depth_exceeded_marker(out: &mut dyn Write, depth: u32, count: u32) -> io::Result<()> {
    if count == 0 {
        writeln!(out, "{}[EMPTY SEQUENCE ABOVE MAX DEPTH]", indent(depth))
    } else {
        writeln!(
            out,
            "{}[{} ITEM{} ABOVE MAX SEQUENCE DEPTH]",
            indent(depth),
            count,
            if count == 1 { "" } else { "S" }
        )
    }
}

/// Writes the trailing `[Parsed N element(s)]` footer.
pub fn write_footer(out: &mut dyn Write, element_count: u32) -> io::Result<()> {
    if element_count == 1 {
        writeln!(out, "[Parsed 1 element]")
    } else {
        writeln!(out, "[Parsed {} elements]", element_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text_with_truncation() {
        assert_eq!(render(VR::LO, b"HELLO", true, 100), "\"HELLO\"");
        assert_eq!(render(VR::LO, b"HELLOWORLD", true, 5), "\"HELLO...\"");
    }

    #[test]
    fn renders_text_stops_at_nul() {
        assert_eq!(render(VR::CS, b"ISO_IR 100\0", true, 100), "\"ISO_IR 100\"");
    }

    #[test]
    fn renders_us_little_and_big_endian() {
        assert_eq!(render(VR::US, &[0x00, 0x02], true, 100), "512");
        assert_eq!(render(VR::US, &[0x02, 0x00], false, 100), "512");
    }

    #[test]
    fn renders_us_multi_value() {
        assert_eq!(render(VR::US, &[1, 0, 2, 0, 3, 0], true, 100), "1 [+2 more]");
    }

    #[test]
    fn collapsed_marker_singularizes_one_item() {
        let mut out = Vec::new();
        write_collapsed_marker(&mut out, 0, 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[SEQUENCE with 1 ITEM]\n");

        let mut out = Vec::new();
        write_collapsed_marker(&mut out, 0, 2).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[SEQUENCE with 2 ITEMS]\n");
    }

    #[test]
    fn depth_exceeded_marker_singularizes_one_item() {
        let mut out = Vec::new();
        write_depth_exceeded_marker(&mut out, 0, 1).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[1 ITEM ABOVE MAX SEQUENCE DEPTH]\n");

        let mut out = Vec::new();
        write_depth_exceeded_marker(&mut out, 0, 3).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[3 ITEMS ABOVE MAX SEQUENCE DEPTH]\n");
    }

    #[test]
    fn renders_at() {
        assert_eq!(render(VR::AT, &[0x28, 0x00, 0x10, 0x00], true, 100), "(0028,0010)");
    }

    #[test]
    fn renders_sq_as_placeholder() {
        assert_eq!(render(VR::SQ, b"anything", true, 100), "(sequence)");
    }

    #[test]
    fn renders_binary_with_hex_octets() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let s = render(VR::OB, &bytes, true, 100);
        assert!(s.starts_with("(binary: 10 bytes) "));
        assert!(s.ends_with("..."));
    }

    #[test]
    fn renders_unknown_vr() {
        // UN with mostly non-printable bytes stays binary.
        let bytes = [0u8, 1, 2, 3, 255, 254];
        assert!(render(VR::UN, &bytes, true, 100).starts_with("(binary:"));
    }

    #[test]
    fn renders_un_as_interpreted_text() {
        let s = render(VR::UN, b"a readable private string", true, 100);
        assert!(s.ends_with("[interpreted]"));
    }

    #[test]
    fn renders_empty_as_na() {
        assert_eq!(render(VR::LO, b"", true, 100), "(n/a)");
    }

    #[test]
    fn max_display_width_has_a_floor() {
        let ctx = DisplayContext::new(40, 108, false);
        assert_eq!(ctx.max_display_width(0), 20);
        let ctx = DisplayContext::new(200, 108, false);
        assert_eq!(ctx.max_display_width(0), 200 - 108 - 10);
        let ctx = DisplayContext::new(200, 108, true);
        assert_eq!(ctx.max_display_width(0), usize::MAX);
    }
}
