//! Parse-time configuration and the summary handed back once a parse ends.

use crate::error::StopReason;
use std::collections::HashSet;

/// Element-count cap. `Unbounded` corresponds to CLI `--all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementCap {
    Bounded(u32),
    Unbounded,
}

impl ElementCap {
    fn is_reached(self, count: u32) -> bool {
        match self {
            ElementCap::Bounded(n) => count >= n,
            ElementCap::Unbounded => false,
        }
    }
}

/// Everything the CLI can tune about a parse. Matches the flags in the
/// external CLI surface one-to-one.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub max_elements: ElementCap,
    pub collapse_sequences: bool,
    pub max_sq_depth: u32,
    pub show_full_values: bool,
    pub filter: HashSet<u32>,
    pub terminal_width: u32,
    pub value_column_start: u32,
}

impl ParseOptions {
    pub(crate) fn element_cap_reached(&self, count: u32) -> bool {
        self.max_elements.is_reached(count)
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_elements: ElementCap::Bounded(250),
            collapse_sequences: false,
            max_sq_depth: 5,
            show_full_values: false,
            filter: HashSet::new(),
            terminal_width: 90,
            value_column_start: 108,
        }
    }
}

/// What a completed `parse` call found out, beyond the printed output
/// itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub element_count: u32,
    pub stop_reason: StopReason,
}
