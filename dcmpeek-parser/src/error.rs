//! Error taxonomy for the stream parser.
//!
//! Only framing failures that make further reads meaningless are modeled
//! as a hard [`Error`]: a bad magic code, or an I/O failure on the
//! underlying reader itself. Value-level and mid-stream framing issues
//! (an invalid VR token, a seek past a too-large value, truncation) are not
//! failures of the `parse` call — they are recorded as a [`StopReason`] on
//! the returned [`Summary`], exactly as the reference implementation logs a
//! warning and gracefully stops rather than aborting, keeping everything
//! printed so far.

use snafu::{Backtrace, Snafu};
use std::io;
use std::path::PathBuf;

/// Errors that prevent a DICOM header parse from starting or continuing
/// at all.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
#[non_exhaustive]
pub enum Error {
    /// Could not open the input file.
    #[snafu(display("could not open {}: {}", path.display(), source))]
    FileOpen {
        path: PathBuf,
        source: io::Error,
        backtrace: Backtrace,
    },

    /// The file is shorter than the 128-byte preamble plus the 4-byte
    /// `DICM` magic code, or the magic code does not match.
    #[snafu(display("not a DICOM file: missing or invalid 'DICM' magic code"))]
    BadMagic { backtrace: Backtrace },

    /// An I/O error occurred while reading the element stream, other than
    /// a clean end-of-file.
    #[snafu(display("I/O error at offset {}: {}", position, source))]
    Io {
        position: u64,
        source: io::Error,
        backtrace: Backtrace,
    },

    /// The output sink could not be written to.
    #[snafu(display("could not write dump output: {}", source))]
    Output { source: io::Error, backtrace: Backtrace },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a parse stopped before reaching true end-of-input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Pixel Data `(7FE0,0010)` was reached.
    PixelData,
    /// `element_count` reached the configured cap.
    ElementCap,
    /// Clean end-of-input: no more elements to read.
    EndOfInput,
    /// An invalid VR token was encountered in explicit-VR mode; framing
    /// could not be trusted beyond this point.
    InvalidVr,
    /// A seek past an oversized or skipped value failed.
    SeekFailure,
}
