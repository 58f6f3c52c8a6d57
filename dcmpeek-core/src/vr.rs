//! The DICOM Value Representation token.

use std::fmt;
use std::str::FromStr;

/// A two-character DICOM Value Representation.
///
/// This is the closed set of 31 VR tokens recognized by the standard's
/// explicit-VR transfer syntaxes; `from_str` rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::upper_case_acronyms)]
pub enum VR {
    AE,
    AS,
    AT,
    CS,
    DA,
    DS,
    DT,
    FD,
    FL,
    IS,
    LO,
    LT,
    OB,
    OD,
    OF,
    OL,
    OW,
    PN,
    SH,
    SL,
    SQ,
    SS,
    ST,
    TM,
    UC,
    UI,
    UL,
    UN,
    UR,
    US,
    UT,
}

impl VR {
    /// All 31 recognized VR tokens.
    pub const ALL: [VR; 31] = [
        VR::AE,
        VR::AS,
        VR::AT,
        VR::CS,
        VR::DA,
        VR::DS,
        VR::DT,
        VR::FD,
        VR::FL,
        VR::IS,
        VR::LO,
        VR::LT,
        VR::OB,
        VR::OD,
        VR::OF,
        VR::OL,
        VR::OW,
        VR::PN,
        VR::SH,
        VR::SL,
        VR::SQ,
        VR::SS,
        VR::ST,
        VR::TM,
        VR::UC,
        VR::UI,
        VR::UL,
        VR::UN,
        VR::UR,
        VR::US,
        VR::UT,
    ];

    /// Whether this VR uses the long explicit-VR header form:
    /// VR(2) + reserved(2) + length(4), as opposed to VR(2) + length(2).
    pub fn is_long_form(self) -> bool {
        matches!(
            self,
            VR::OB | VR::OD | VR::OF | VR::OL | VR::OW | VR::SQ | VR::UC | VR::UN | VR::UR | VR::UT
        )
    }

    /// The two-character string token for this VR.
    pub fn as_str(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FD => "FD",
            FL => "FL",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
        }
    }

    /// Parse a VR token straight out of a 2-byte explicit-VR field.
    pub fn from_bytes(bytes: [u8; 2]) -> Option<Self> {
        std::str::from_utf8(&bytes).ok().and_then(|s| VR::from_str(s).ok())
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The VR token did not match any of the 31 recognized values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseVRError;

impl fmt::Display for ParseVRError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("not a recognized DICOM VR token")
    }
}

impl std::error::Error for ParseVRError {}

impl FromStr for VR {
    type Err = ParseVRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use VR::*;
        Ok(match s {
            "AE" => AE,
            "AS" => AS,
            "AT" => AT,
            "CS" => CS,
            "DA" => DA,
            "DS" => DS,
            "DT" => DT,
            "FD" => FD,
            "FL" => FL,
            "IS" => IS,
            "LO" => LO,
            "LT" => LT,
            "OB" => OB,
            "OD" => OD,
            "OF" => OF,
            "OL" => OL,
            "OW" => OW,
            "PN" => PN,
            "SH" => SH,
            "SL" => SL,
            "SQ" => SQ,
            "SS" => SS,
            "ST" => ST,
            "TM" => TM,
            "UC" => UC,
            "UI" => UI,
            "UL" => UL,
            "UN" => UN,
            "UR" => UR,
            "US" => US,
            "UT" => UT,
            _ => return Err(ParseVRError),
        })
    }
}

/// Validates a raw two-character VR token the way the explicit-VR reader
/// does before trusting it for framing: both characters in `[A-Z0-9]`,
/// and the token itself a member of the 31-VR whitelist.
pub fn is_valid_vr_token(bytes: [u8; 2]) -> bool {
    bytes
        .iter()
        .all(|&b| b.is_ascii_uppercase() || b.is_ascii_digit())
        && VR::from_bytes(bytes).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_known_vrs() {
        for vr in VR::ALL {
            assert_eq!(vr.as_str().parse::<VR>().unwrap(), vr);
        }
    }

    #[test]
    fn rejects_unknown_vr() {
        assert!("ZZ".parse::<VR>().is_err());
        assert!(!is_valid_vr_token(*b"ZZ"));
    }

    #[test]
    fn rejects_lowercase_vr() {
        assert!(!is_valid_vr_token(*b"ae"));
    }

    #[test]
    fn long_form_classification() {
        assert!(VR::SQ.is_long_form());
        assert!(VR::OB.is_long_form());
        assert!(!VR::US.is_long_form());
        assert!(!VR::PN.is_long_form());
    }
}
