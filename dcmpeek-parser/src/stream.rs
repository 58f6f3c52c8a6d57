//! The stream parser: the state machine at the core of this crate.
//!
//! `parse_dataset` is the single per-element read loop, used both at the
//! top level and recursively inside every Item. `parse_sequence` drives
//! Item framing (defined/undefined length, depth guard, collapse mode) and
//! calls back into `parse_dataset` for each Item's contents.

use crate::error::{Error, Result, StopReason};
use crate::options::ParseOptions;
use crate::reader::TrackingReader;
use crate::render::{self, DisplayContext};
use crate::state::ParserState;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use dcmpeek_core::{Length, Tag, VR};
use std::io::{Read, Seek, Write};

const PREAMBLE_LEN: usize = 128;
const MAGIC: &[u8; 4] = b"DICM";
const TOO_LARGE_THRESHOLD: u64 = 1024 * 1024;
const READ_CAP: usize = 4096;

/// Internal control-flow signal: `None` means the current dataset/sequence
/// reached its own natural end; `Some` means the whole parse is done and
/// must unwind immediately, all the way up to the caller of [`crate::parse`].
type Control = Option<StopReason>;

pub struct Parser<R> {
    reader: TrackingReader<R>,
    state: ParserState,
    display: DisplayContext,
}

impl<R: Read + Seek> Parser<R> {
    pub fn new(source: R, options: &ParseOptions) -> Self {
        Parser {
            reader: TrackingReader::new(source),
            state: ParserState::new(),
            display: DisplayContext::new(options.terminal_width, options.value_column_start, options.show_full_values),
        }
    }

    pub fn run(mut self, options: &ParseOptions, out: &mut dyn Write) -> Result<(u32, StopReason)> {
        self.read_preamble_and_magic()?;
        render::write_header(out).map_err(output_error)?;

        let stop = self.parse_dataset(0, None, options, out)?;
        let reason = stop.unwrap_or(StopReason::EndOfInput);
        render::write_footer(out, self.state.element_count).map_err(output_error)?;
        Ok((self.state.element_count, reason))
    }

    fn read_preamble_and_magic(&mut self) -> Result<()> {
        let mut preamble = [0u8; PREAMBLE_LEN];
        if !self.reader.fill(&mut preamble)? {
            return Err(Error::BadMagic {
                backtrace: snafu::Backtrace::capture(),
            });
        }
        let magic = self.reader.read_array::<4>()?;
        match magic {
            Some(bytes) if &bytes == MAGIC => Ok(()),
            _ => Err(Error::BadMagic {
                backtrace: snafu::Backtrace::capture(),
            }),
        }
    }

    fn decode_u16(&self, bytes: [u8; 2]) -> u16 {
        if self.state.little_endian {
            LittleEndian::read_u16(&bytes)
        } else {
            BigEndian::read_u16(&bytes)
        }
    }

    fn decode_u32(&self, bytes: [u8; 4]) -> u32 {
        if self.state.little_endian {
            LittleEndian::read_u32(&bytes)
        } else {
            BigEndian::read_u32(&bytes)
        }
    }

    /// One level of the dataset grammar: a flat run of data elements, used
    /// for the top-level stream and for the contents of every Item.
    ///
    /// `bound`, if set, is the byte offset at which this dataset must stop
    /// (a defined-length Item). With no bound, the loop runs until true
    /// end-of-input (top level) or until it reads a tag from the reserved
    /// `FFFE` group, which it puts back before yielding to its caller (an
    /// undefined-length Item, whose end is a delimiter the *sequence* loop
    /// recognizes, not this one).
    fn parse_dataset(
        &mut self,
        depth: u32,
        bound: Option<u64>,
        options: &ParseOptions,
        out: &mut dyn Write,
    ) -> Result<Control> {
        loop {
            if options.element_cap_reached(self.state.element_count) {
                return Ok(Some(StopReason::ElementCap));
            }

            if let Some(end) = bound {
                if self.reader.pos() >= end {
                    return Ok(None);
                }
            }

            let group_bytes = match self.reader.read_array::<2>()? {
                Some(b) => b,
                None => return Ok(Some(StopReason::EndOfInput)),
            };
            let elem_bytes = match self.reader.read_array::<2>()? {
                Some(b) => b,
                None => return Ok(Some(StopReason::EndOfInput)),
            };

            let mut tag = Tag(self.decode_u16(group_bytes), self.decode_u16(elem_bytes));

            if depth == 0 && self.state.in_file_meta && tag.group() != 0x0002 {
                self.state.switch_to_main_dataset();
                tag = Tag(self.decode_u16(group_bytes), self.decode_u16(elem_bytes));
                render::write_transfer_syntax_banner(out, self.state.explicit_vr, self.state.little_endian)
                    .map_err(output_error)?;
            }

            if depth > 0 && tag.group() == 0xFFFE {
                self.reader.rewind(4)?;
                return Ok(None);
            }

            if depth == 0 && tag == Tag::PIXEL_DATA {
                render::write_pixel_data_marker(out, tag).map_err(output_error)?;
                return Ok(Some(StopReason::PixelData));
            }

            let (vr, length) = match self.read_header(tag)? {
                Some(vh) => vh,
                None => return Ok(Some(StopReason::EndOfInput)),
            };

            if vr.is_none() {
                return Ok(Some(StopReason::InvalidVr));
            }
            let vr = vr.unwrap();

            let displayed = options.filter.is_empty() || options.filter.contains(&tag.as_u32()) || tag == Tag::TRANSFER_SYNTAX_UID;

            if !displayed {
                match self.skip_element(vr, length, depth, options)? {
                    Some(stop) => return Ok(Some(stop)),
                    None => continue,
                }
            }

            if vr == VR::SQ {
                let stop = self.parse_sequence(tag, length, depth, options, out)?;
                if let Some(reason) = stop {
                    return Ok(Some(reason));
                }
                self.state.element_count += 1;
                continue;
            }

            if length.is_undefined() {
                self.emit_row(out, depth, tag, vr, length, "(undefined length - non-sequence)")?;
                self.state.element_count += 1;
                if tag == Tag::TRANSFER_SYNTAX_UID {
                    self.state.transfer_syntax_uid = None;
                }
                continue;
            }

            let len = length.get().unwrap() as u64;
            let value_text;
            if len >= TOO_LARGE_THRESHOLD {
                self.reader.skip(len)?;
                value_text = "(too large to display)".to_string();
            } else {
                let read_len = len.min(READ_CAP as u64) as usize;
                let mut buf = Vec::new();
                if buf.try_reserve_exact(read_len).is_err() {
                    self.reader.skip(len)?;
                    value_text = "(memory alloc failed)".to_string();
                } else {
                    buf = self.reader.read_upto(read_len)?;
                    if len as usize > read_len {
                        self.reader.skip(len - read_len as u64)?;
                    }
                    if tag == Tag::TRANSFER_SYNTAX_UID {
                        self.state.transfer_syntax_uid = Some(decode_uid(&buf));
                    }
                    let max_width = self.display.max_display_width(depth);
                    value_text = render::render(vr, &buf, self.state.little_endian, max_width);
                }
            }

            self.emit_row(out, depth, tag, vr, length, &value_text)?;
            self.state.element_count += 1;
        }
    }

    /// Reads the VR + length header for the element whose tag was just
    /// read. Returns `Ok(None)` on a clean stream end inside the header;
    /// an invalid explicit VR token is reported as `Ok(Some((None, _)))`.
    fn read_header(&mut self, tag: Tag) -> Result<Option<(Option<VR>, Length)>> {
        if self.state.explicit_vr {
            let vr_bytes = match self.reader.read_array::<2>()? {
                Some(b) => b,
                None => return Ok(None),
            };
            if !dcmpeek_core::is_valid_vr_token(vr_bytes) {
                tracing::warn!(tag = %tag, "invalid VR token, terminating parse");
                return Ok(Some((None, Length(0))));
            }
            let vr = VR::from_bytes(vr_bytes).expect("validated above");
            let length = if vr.is_long_form() {
                if self.reader.read_array::<2>()?.is_none() {
                    return Ok(None);
                }
                let len_bytes = match self.reader.read_array::<4>()? {
                    Some(b) => b,
                    None => return Ok(None),
                };
                Length(self.decode_u32(len_bytes))
            } else {
                let len_bytes = match self.reader.read_array::<2>()? {
                    Some(b) => b,
                    None => return Ok(None),
                };
                Length(self.decode_u16(len_bytes) as u32)
            };
            Ok(Some((Some(vr), length)))
        } else {
            let len_bytes = match self.reader.read_array::<4>()? {
                Some(b) => b,
                None => return Ok(None),
            };
            let length = Length(self.decode_u32(len_bytes));
            let vr = dcmpeek_dict::vr_of(tag).unwrap_or(VR::UN);
            Ok(Some((Some(vr), length)))
        }
    }

    /// Skips a filtered-out element while preserving byte accounting. A
    /// filtered SQ still has to be walked (it may carry undefined-length
    /// framing, which can't be skipped by byte count alone).
    /// Skips a filtered-out element, advancing the stream past it without
    /// rendering or counting anything underneath. A defined-length SQ is
    /// skipped by byte count directly; an undefined-length SQ has no
    /// length to skip by, so its extent is found via the silent
    /// Item-Counting walk (`count_items`), which never touches
    /// `element_count` or `out`.
    fn skip_element(&mut self, vr: VR, length: Length, _depth: u32, _options: &ParseOptions) -> Result<Option<StopReason>> {
        if vr == VR::SQ {
            if let Some(len) = length.get() {
                self.reader.skip(len as u64)?;
            } else {
                self.count_items(length)?;
            }
            return Ok(None);
        }
        if let Some(len) = length.get() {
            self.reader.skip(len as u64)?;
        }
        Ok(None)
    }

    /// Drives Item framing for a Sequence element: depth guard, collapse
    /// mode, and normal recursive descent. Always emits the SQ's own
    /// element row; a filtered-out SQ never reaches this function (see
    /// `skip_element`), which skips it by byte count instead.
    fn parse_sequence(
        &mut self,
        sq_tag: Tag,
        length: Length,
        depth: u32,
        options: &ParseOptions,
        out: &mut dyn Write,
    ) -> Result<Control> {
        let seq_start = self.reader.pos();

        if depth + 1 > options.max_sq_depth {
            let count = self.count_items(length)?;
            render::write_depth_exceeded_marker(out, depth, count).map_err(output_error)?;
            return Ok(None);
        }

        if options.collapse_sequences {
            let count = self.count_items(length)?;
            render::write_collapsed_marker(out, depth, count).map_err(output_error)?;
            return Ok(None);
        }

        self.emit_row(out, depth, sq_tag, VR::SQ, length, "(sequence)")?;

        if let Some(0) = length.get() {
            render::write_empty_sequence(out, depth).map_err(output_error)?;
            return Ok(None);
        }

        if length.is_undefined() {
            loop {
                let tag_bytes = match self.read_tag_raw()? {
                    Some(t) => t,
                    None => return Ok(Some(StopReason::EndOfInput)),
                };
                if tag_bytes == Tag::SEQUENCE_DELIMITER {
                    self.skip_reserved_length()?;
                    render::write_sequence_delimiter(out, depth).map_err(output_error)?;
                    return Ok(None);
                }
                if tag_bytes != Tag::ITEM {
                    self.reader.rewind(4)?;
                    return Ok(None);
                }
                if let Some(reason) = self.parse_item(depth, options, out)? {
                    return Ok(Some(reason));
                }
            }
        } else {
            let seq_end = seq_start + length.get().unwrap() as u64;
            while self.reader.pos() < seq_end {
                let tag_bytes = match self.read_tag_raw()? {
                    Some(t) => t,
                    None => return Ok(Some(StopReason::EndOfInput)),
                };
                if tag_bytes != Tag::ITEM {
                    self.reader.rewind(4)?;
                    break;
                }
                if let Some(reason) = self.parse_item(depth, options, out)? {
                    return Ok(Some(reason));
                }
            }
            if self.reader.pos() != seq_end {
                self.reader.seek_to(seq_end)?;
            }
            Ok(None)
        }
    }

    /// Parses one Item: its start-line, its recursive dataset contents,
    /// and (for undefined-length Items) its delimiter.
    fn parse_item(&mut self, depth: u32, options: &ParseOptions, out: &mut dyn Write) -> Result<Option<StopReason>> {
        let len_bytes = match self.reader.read_array::<4>()? {
            Some(b) => b,
            None => return Ok(Some(StopReason::EndOfInput)),
        };
        let item_length = Length(self.decode_u32(len_bytes));
        let item_start = self.reader.pos();

        render::write_item_start(out, depth, item_length).map_err(output_error)?;

        let bound = item_length.get().map(|l| item_start + l as u64);
        if let Some(reason) = self.parse_dataset(depth + 1, bound, options, out)? {
            return Ok(Some(reason));
        }

        if item_length.is_undefined() {
            let tag_bytes = match self.read_tag_raw()? {
                Some(t) => t,
                None => return Ok(Some(StopReason::EndOfInput)),
            };
            if tag_bytes == Tag::ITEM_DELIMITER {
                self.skip_reserved_length()?;
                render::write_item_end(out, depth).map_err(output_error)?;
            } else {
                self.reader.rewind(4)?;
            }
        } else {
            let item_end = item_start + item_length.get().unwrap() as u64;
            if self.reader.pos() != item_end {
                self.reader.seek_to(item_end)?;
            }
        }

        Ok(None)
    }

    /// The Item-Counting subroutine (§4.1.2): fast-forwards through a
    /// sequence without emitting output, descending only into
    /// undefined-length nested sequences (a defined length alone is enough
    /// to skip anything else).
    fn count_items(&mut self, length: Length) -> Result<u32> {
        let start = self.reader.pos();
        let mut count = 0u32;

        if let Some(0) = length.get() {
            return Ok(0);
        }

        if length.is_undefined() {
            loop {
                let tag_bytes = match self.read_tag_raw()? {
                    Some(t) => t,
                    None => return Ok(count),
                };
                if tag_bytes == Tag::SEQUENCE_DELIMITER {
                    self.skip_reserved_length()?;
                    return Ok(count);
                }
                if tag_bytes != Tag::ITEM {
                    self.reader.rewind(4)?;
                    return Ok(count);
                }
                self.count_item_body()?;
                count += 1;
            }
        } else {
            let end = start + length.get().unwrap() as u64;
            while self.reader.pos() < end {
                let tag_bytes = match self.read_tag_raw()? {
                    Some(t) => t,
                    None => return Ok(count),
                };
                if tag_bytes != Tag::ITEM {
                    self.reader.rewind(4)?;
                    break;
                }
                self.count_item_body()?;
                count += 1;
            }
            if self.reader.pos() != end {
                self.reader.seek_to(end)?;
            }
            Ok(count)
        }
    }

    fn count_item_body(&mut self) -> Result<()> {
        let len_bytes = match self.reader.read_array::<4>()? {
            Some(b) => b,
            None => return Ok(()),
        };
        let item_length = Length(self.decode_u32(len_bytes));
        let item_start = self.reader.pos();

        if let Some(len) = item_length.get() {
            self.reader.seek_to(item_start + len as u64)?;
            return Ok(());
        }

        // Undefined-length item: scan its elements, recursing into nested
        // undefined-length SQs, until the item delimiter.
        loop {
            let tag_bytes = match self.read_tag_raw()? {
                Some(t) => t,
                None => return Ok(()),
            };
            if tag_bytes == Tag::ITEM_DELIMITER {
                self.skip_reserved_length()?;
                return Ok(());
            }
            if tag_bytes.group() == 0xFFFE {
                self.reader.rewind(4)?;
                return Ok(());
            }
            let (vr, elem_length) = match self.read_header(tag_bytes)? {
                Some((Some(vr), l)) => (vr, l),
                _ => return Ok(()),
            };
            if vr == VR::SQ {
                self.count_items(elem_length)?;
            } else if let Some(len) = elem_length.get() {
                self.reader.skip(len as u64)?;
            }
        }
    }

    fn read_tag_raw(&mut self) -> Result<Option<Tag>> {
        let group_bytes = match self.reader.read_array::<2>()? {
            Some(b) => b,
            None => return Ok(None),
        };
        let elem_bytes = match self.reader.read_array::<2>()? {
            Some(b) => b,
            None => return Ok(None),
        };
        Ok(Some(Tag(self.decode_u16(group_bytes), self.decode_u16(elem_bytes))))
    }

    fn skip_reserved_length(&mut self) -> Result<()> {
        self.reader.read_array::<4>()?;
        Ok(())
    }

    fn emit_row(&mut self, out: &mut dyn Write, depth: u32, tag: Tag, vr: VR, length: Length, value: &str) -> Result<()> {
        render::write_element_row(out, depth, tag, vr, length, value).map_err(output_error)
    }
}

fn decode_uid(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.trim_end_matches(['\0', ' ']).to_string()
}

fn output_error(source: std::io::Error) -> Error {
    Error::Output {
        source,
        backtrace: snafu::Backtrace::capture(),
    }
}
