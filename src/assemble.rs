//! Section assembler and copy-tag resolver.
//!
//! Walks the classified blocks in document order, renders each through the
//! mode's renderer, resolves copy-tag references against the entries rendered
//! so far, and tracks which of the two output sections each result belongs to.

use crate::model::{Block, SectionSlot, SectionState};
use crate::render::Renderer;
use indexmap::IndexMap;

/// Ordered rendered output, each item tagged with its section slot.
pub type Assembled<T> = Vec<(SectionSlot, T)>;

/// Render all blocks in document order.
///
/// Every rendered entry is stored in the lookup table under its key (last
/// write wins). A tag named `copy_tag` whose content matches an
/// already-rendered key splices that prior rendering immediately ahead of the
/// current block, in the same slot; unknown keys contribute nothing. Only
/// entries rendered earlier in this pass are visible, so references are
/// backward-looking by construction.
pub fn assemble<R: Renderer>(blocks: &[Block], renderer: &R, copy_tag: &str) -> Assembled<R::Output> {
    let mut state = SectionState::Unset;
    let mut lookup: IndexMap<String, R::Output> = IndexMap::new();
    let mut out: Assembled<R::Output> = Vec::new();

    for block in blocks {
        let spliced: Vec<R::Output> = block
            .doc
            .tags
            .iter()
            .filter(|tag| tag.name == copy_tag)
            .filter_map(|tag| lookup.get(tag.content.trim()).cloned())
            .collect();

        let (slot, rendered) = match &block.key {
            None => {
                let slot = state.on_heading();
                (slot, renderer.heading(&block.doc))
            }
            Some(key) => {
                let rendered = renderer.entry(key, &block.doc, &block.code);
                lookup.insert(key.clone(), rendered.clone());
                (state.slot(), rendered)
            }
        };

        for item in spliced {
            out.push((slot, item));
        }
        out.push((slot, rendered));
    }

    out
}

/// The two RST output buffers, partitioned by slot in document order.
#[derive(Debug, Default)]
pub struct Sections {
    pub first: String,
    pub others: String,
}

impl Sections {
    pub fn from_assembled(items: Assembled<String>) -> Self {
        let mut sections = Sections::default();
        for (slot, text) in items {
            match slot {
                SectionSlot::First => sections.first.push_str(&text),
                SectionSlot::Other => sections.others.push_str(&text),
            }
        }
        sections
    }
}

/// Record-mode output: document order, the slot split does not apply.
pub fn into_records<T>(items: Assembled<T>) -> Vec<T> {
    items.into_iter().map(|(_, item)| item).collect()
}
