//! The masked-tag table: patterns for repeating groups, where one or more
//! hex nibbles of the tag vary (e.g. overlay planes `5000`..`501E`).

use dcmpeek_core::VR;

/// One row of the masked dictionary.
///
/// `pattern` is 8 uppercase hex characters (GGGGEEEE) with `x` standing in
/// for a wildcard nibble.
pub struct MaskedEntry {
    pub pattern: &'static str,
    pub keyword: &'static str,
    pub name: &'static str,
    pub vr: VR,
}

pub static MASKED_ENTRIES: &[MaskedEntry] = &[
    MaskedEntry { pattern: "50xx0010", keyword: "OverlayRows", name: "Overlay Rows", vr: VR::US },
    MaskedEntry { pattern: "50xx0011", keyword: "OverlayColumns", name: "Overlay Columns", vr: VR::US },
    MaskedEntry { pattern: "50xx0022", keyword: "OverlayDescription", name: "Overlay Description", vr: VR::LO },
    MaskedEntry { pattern: "50xx0040", keyword: "OverlayType", name: "Overlay Type", vr: VR::CS },
    MaskedEntry { pattern: "50xx0050", keyword: "OverlayOrigin", name: "Overlay Origin", vr: VR::SS },
    MaskedEntry { pattern: "50xx0100", keyword: "OverlayBitsAllocated", name: "Overlay Bits Allocated", vr: VR::US },
    MaskedEntry { pattern: "50xx0102", keyword: "OverlayBitPosition", name: "Overlay Bit Position", vr: VR::US },
    MaskedEntry { pattern: "50xx3000", keyword: "OverlayData", name: "Overlay Data", vr: VR::OW },
    MaskedEntry { pattern: "60xx0010", keyword: "OverlayRows", name: "Overlay Rows", vr: VR::US },
    MaskedEntry { pattern: "60xx0011", keyword: "OverlayColumns", name: "Overlay Columns", vr: VR::US },
    MaskedEntry { pattern: "60xx0040", keyword: "OverlayType", name: "Overlay Type", vr: VR::CS },
    MaskedEntry { pattern: "60xx3000", keyword: "OverlayData", name: "Overlay Data", vr: VR::OW },
    MaskedEntry { pattern: "7Fxx0010", keyword: "VariablePixelData", name: "Variable Pixel Data", vr: VR::OW },
    MaskedEntry { pattern: "xxxx0000", keyword: "GroupLength", name: "Group Length", vr: VR::UL },
];

/// Whether `tag` (as `GGGGEEEE` hex digits) matches `pattern`, where every
/// non-`x` nibble of the pattern must match the corresponding nibble of the
/// tag exactly.
pub fn matches(pattern: &str, group: u16, element: u16) -> bool {
    let tag_hex = format!("{:04X}{:04X}", group, element);
    pattern
        .bytes()
        .zip(tag_hex.bytes())
        .all(|(p, t)| p == b'x' || p.eq_ignore_ascii_case(&t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_pattern_matches_any_low_byte() {
        assert!(matches("50xx0010", 0x5000, 0x0010));
        assert!(matches("50xx0010", 0x501E, 0x0010));
        assert!(!matches("50xx0010", 0x5000, 0x0011));
        assert!(!matches("50xx0010", 0x6000, 0x0010));
    }

    #[test]
    fn group_length_pattern_matches_any_tag() {
        assert!(matches("xxxx0000", 0x0008, 0x0000));
        assert!(matches("xxxx0000", 0x0010, 0x0000));
        assert!(!matches("xxxx0000", 0x0010, 0x0010));
    }
}
