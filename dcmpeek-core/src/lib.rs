//! Core DICOM data types shared by the dcmpeek header reader:
//! the attribute [`Tag`], the [`VR`] token, and the [`Length`] sentinel.

mod length;
mod tag;
mod vr;

pub use length::Length;
pub use tag::{ElementNumber, GroupNumber, Tag};
pub use vr::{is_valid_vr_token, ParseVRError, VR};
