//! A position-tracking reader over the input stream.
//!
//! The parser does its own byte accounting rather than repeatedly asking
//! the underlying stream `stream_position()`, since not every `Read + Seek`
//! implementation makes that cheap.

use crate::error::{self, Error, Result};
use snafu::ResultExt;
use std::io::{Read, Seek, SeekFrom};

pub struct TrackingReader<R> {
    inner: R,
    pos: u64,
}

impl<R: Read + Seek> TrackingReader<R> {
    pub fn new(inner: R) -> Self {
        TrackingReader { inner, pos: 0 }
    }

    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Fills `buf` completely, or returns `Ok(false)` if the stream ran out
    /// partway through (clean EOF or mid-header truncation are the same
    /// case here: a normal place for the stream to end).
    pub fn fill(&mut self, buf: &mut [u8]) -> Result<bool> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => return Ok(false),
                Ok(n) => {
                    filled += n;
                    self.pos += n as u64;
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Io {
                        position: self.pos,
                        source,
                        backtrace: snafu::Backtrace::capture(),
                    })
                }
            }
        }
        Ok(true)
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<Option<[u8; N]>> {
        let mut buf = [0u8; N];
        if self.fill(&mut buf)? {
            Ok(Some(buf))
        } else {
            Ok(None)
        }
    }

    /// Reads up to `len` bytes, returning fewer if the stream runs out.
    /// Used for element value bodies, where running short is rendered
    /// rather than treated as an error.
    pub fn read_upto(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        let mut filled = 0;
        while filled < len {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => {
                    filled += n;
                    self.pos += n as u64;
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(source) => {
                    return Err(Error::Io {
                        position: self.pos,
                        source,
                        backtrace: snafu::Backtrace::capture(),
                    })
                }
            }
        }
        buf.truncate(filled);
        Ok(buf)
    }

    /// Seeks forward by `delta` bytes relative to the current position.
    pub fn skip(&mut self, delta: u64) -> Result<()> {
        self.seek_to(self.pos + delta)
    }

    /// Seeks back by `delta` bytes. Used to put back a tag read
    /// speculatively by the dataset loop so the sequence loop can read it
    /// itself.
    pub fn rewind(&mut self, delta: u64) -> Result<()> {
        self.seek_to(self.pos.saturating_sub(delta))
    }

    pub fn seek_to(&mut self, target: u64) -> Result<()> {
        let new_pos = self
            .inner
            .seek(SeekFrom::Start(target))
            .context(error::IoSnafu { position: self.pos })?;
        self.pos = new_pos;
        Ok(())
    }
}
