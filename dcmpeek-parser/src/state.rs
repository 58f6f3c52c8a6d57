//! Mutable parser state: framing mode and the captured Transfer Syntax UID.

/// The three Transfer Syntax UIDs this reader recognizes, and the implicit
/// default for anything else.
pub fn mode_for_ts_uid(uid: Option<&str>) -> (bool, bool) {
    // (explicit_vr, little_endian)
    match uid {
        Some("1.2.840.10008.1.2") => (false, true),
        Some("1.2.840.10008.1.2.1") => (true, true),
        Some("1.2.840.10008.1.2.2") => (true, false),
        _ => (true, true),
    }
}

/// Mutable state threaded through the recursive descent: framing mode, the
/// File Meta boundary, the captured TS UID, and the running element count.
pub struct ParserState {
    pub explicit_vr: bool,
    pub little_endian: bool,
    pub in_file_meta: bool,
    pub element_count: u32,
    pub transfer_syntax_uid: Option<String>,
}

impl ParserState {
    pub fn new() -> Self {
        ParserState {
            explicit_vr: true,
            little_endian: true,
            in_file_meta: true,
            element_count: 0,
            transfer_syntax_uid: None,
        }
    }

    /// Switch from File Meta framing (always explicit VR LE) to the main
    /// dataset's framing, as determined by the captured TS UID. Only ever
    /// called once, at the meta/main-dataset boundary.
    pub fn switch_to_main_dataset(&mut self) {
        let (explicit_vr, little_endian) = mode_for_ts_uid(self.transfer_syntax_uid.as_deref());
        self.explicit_vr = explicit_vr;
        self.little_endian = little_endian;
        self.in_file_meta = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_the_three_transfer_syntaxes() {
        assert_eq!(mode_for_ts_uid(Some("1.2.840.10008.1.2")), (false, true));
        assert_eq!(mode_for_ts_uid(Some("1.2.840.10008.1.2.1")), (true, true));
        assert_eq!(mode_for_ts_uid(Some("1.2.840.10008.1.2.2")), (true, false));
    }

    #[test]
    fn defaults_to_explicit_vr_little_endian() {
        assert_eq!(mode_for_ts_uid(None), (true, true));
        assert_eq!(mode_for_ts_uid(Some("9.9.9.9")), (true, true));
    }
}
