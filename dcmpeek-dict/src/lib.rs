//! The standard DICOM data element dictionary: `tag → {name, VR, keyword}`.
//!
//! This is a pure, total lookup with no dependency on parser state. A miss
//! against the exact table falls back to the masked (repeating-group)
//! table; a miss against both yields `None` and callers default VR to
//! [`dcmpeek_core::VR::UN`].

mod entries;
mod masked;

use dcmpeek_core::{Tag, VR};
use entries::{Entry, ENTRIES};
use masked::{matches, MaskedEntry, MASKED_ENTRIES};
use once_cell::sync::Lazy;
use std::collections::HashMap;

static BY_TAG: Lazy<HashMap<Tag, &'static Entry>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(ENTRIES.len());
    for entry in ENTRIES {
        map.insert(entry.tag, entry);
    }
    map
});

fn lookup(tag: Tag) -> Option<DictEntryRef> {
    if let Some(entry) = BY_TAG.get(&tag) {
        return Some(DictEntryRef {
            keyword: entry.keyword,
            name: entry.name,
            vr: entry.vr,
        });
    }
    lookup_masked(tag)
}

fn lookup_masked(tag: Tag) -> Option<DictEntryRef> {
    MASKED_ENTRIES
        .iter()
        .find(|m: &&MaskedEntry| matches(m.pattern, tag.group(), tag.element()))
        .map(|m| DictEntryRef {
            keyword: m.keyword,
            name: m.name,
            vr: m.vr,
        })
}

struct DictEntryRef {
    keyword: &'static str,
    name: &'static str,
    vr: VR,
}

/// The descriptive attribute name for `tag` (e.g. `"Patient's Name"`), or
/// `None` if the tag is not in the dictionary.
pub fn name_of(tag: Tag) -> Option<&'static str> {
    lookup(tag).map(|e| e.name)
}

/// The VR declared by the dictionary for `tag`, or `None` if the tag is
/// not in the dictionary. Callers in implicit-VR mode should default to
/// [`VR::UN`] on a miss.
pub fn vr_of(tag: Tag) -> Option<VR> {
    lookup(tag).map(|e| e.vr)
}

/// The DICOM keyword for `tag` (e.g. `"PatientName"`), or `None` if the
/// tag is not in the dictionary.
pub fn keyword_of(tag: Tag) -> Option<&'static str> {
    lookup(tag).map(|e| e.keyword)
}
