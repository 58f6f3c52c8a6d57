//! Builds a [`dcmpeek_parser::ParseOptions`] from CLI-shaped knobs and runs
//! the parser against a file or stream.

use dcmpeek_parser::{parse, parse_file, ElementCap, ParseOptions, Summary};
use std::collections::HashSet;
use std::io::{Read, Seek, Write};
use std::path::Path;

pub use dcmpeek_parser::{Error, Result};

/// Maximum number of tags accepted by a `-f` filter, matching the CLI
/// surface's stated bound.
pub const MAX_FILTER_TAGS: usize = 100;

/// The CLI-facing set of knobs, translated 1:1 from the `-n`/`--all`/`-d`/
/// `-c`/`-v`/`-f` flags into a [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct DumpOptions {
    max_elements: Option<u32>,
    collapse_sequences: bool,
    max_sq_depth: u32,
    show_full_values: bool,
    filter: HashSet<u32>,
    width: u32,
}

impl Default for DumpOptions {
    fn default() -> Self {
        let defaults = ParseOptions::default();
        DumpOptions {
            max_elements: Some(250),
            collapse_sequences: false,
            max_sq_depth: defaults.max_sq_depth,
            show_full_values: false,
            filter: HashSet::new(),
            width: defaults.terminal_width,
        }
    }
}

impl DumpOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_elements(&mut self, n: u32) -> &mut Self {
        self.max_elements = Some(n);
        self
    }

    pub fn unbounded(&mut self) -> &mut Self {
        self.max_elements = None;
        self
    }

    pub fn collapse_sequences(&mut self, collapse: bool) -> &mut Self {
        self.collapse_sequences = collapse;
        self
    }

    pub fn max_sq_depth(&mut self, depth: u32) -> &mut Self {
        self.max_sq_depth = depth;
        self
    }

    pub fn show_full_values(&mut self, show: bool) -> &mut Self {
        self.show_full_values = show;
        self
    }

    pub fn width(&mut self, width: u32) -> &mut Self {
        self.width = width;
        self
    }

    pub fn filter(&mut self, tags: HashSet<u32>) -> &mut Self {
        self.filter = tags;
        self
    }

    fn to_parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_elements: match self.max_elements {
                Some(n) => ElementCap::Bounded(n),
                None => ElementCap::Unbounded,
            },
            collapse_sequences: self.collapse_sequences,
            max_sq_depth: self.max_sq_depth,
            show_full_values: self.show_full_values,
            filter: self.filter.clone(),
            terminal_width: self.width,
            value_column_start: 108,
        }
    }

    pub fn dump_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<Summary> {
        parse_file(path, out, &self.to_parse_options())
    }

    pub fn dump<R: Read + Seek, W: Write>(&self, source: R, out: &mut W) -> Result<Summary> {
        parse(source, out, &self.to_parse_options())
    }
}

/// Parses a `-f` filter argument: 8-hex-digit tag values separated by `;`
/// or `,`, e.g. `00100010,00080005`.
pub fn parse_filter(arg: &str) -> std::result::Result<HashSet<u32>, String> {
    let mut tags = HashSet::new();
    for token in arg.split([';', ',']) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let value = u32::from_str_radix(token, 16).map_err(|_| format!("invalid tag: {}", token))?;
        tags.insert(value);
        if tags.len() > MAX_FILTER_TAGS {
            return Err(format!("filter accepts at most {} tags", MAX_FILTER_TAGS));
        }
    }
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_semicolon_and_comma_separated_tags() {
        let tags = parse_filter("00100010;00080005,7FE00010").unwrap();
        assert_eq!(tags.len(), 3);
        assert!(tags.contains(&0x0010_0010));
        assert!(tags.contains(&0x7FE0_0010));
    }

    #[test]
    fn rejects_too_many_tags() {
        let arg = (0..101).map(|i| format!("{:08X}", i)).collect::<Vec<_>>().join(",");
        assert!(parse_filter(&arg).is_err());
    }
}
