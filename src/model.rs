//! Data model for extracted configuration documentation — notation-agnostic.

/// One `@name content` annotation from a doc comment, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub content: String,
}

/// Structured result of parsing one raw `/** ... */` comment.
#[derive(Debug, Clone, Default)]
pub struct DocComment {
    /// First line(s) of the comment, up to the first blank line.
    pub summary: String,
    /// Remaining prose, possibly multi-paragraph. Tag lines are excluded.
    pub description: String,
    /// Ordered tag list.
    pub tags: Vec<Tag>,
}

impl DocComment {
    /// Summary and description as one prose body, blank-line separated.
    pub fn text(&self) -> String {
        if self.description.is_empty() {
            self.summary.clone()
        } else if self.summary.is_empty() {
            self.description.clone()
        } else {
            format!("{}\n\n{}", self.summary, self.description)
        }
    }
}

/// One comment-plus-optional-code unit from the declaration region.
///
/// `key` is present iff the block documents a concrete config entry;
/// blocks without a key are section headings.
#[derive(Debug, Clone)]
pub struct Block {
    pub key: Option<String>,
    pub doc: DocComment,
    /// Raw entry literal following the comment; empty for headings.
    pub code: String,
}

/// Structured record handed to the template-style renderer (asciidoc mode).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRecord {
    pub summary: String,
    pub description: String,
    pub section_header: bool,
    pub code: Option<String>,
}

/// Which of the two output buffers a rendered block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionSlot {
    First,
    Other,
}

/// First-section tracking state.
///
/// Monotonic: `Unset → First → Other`, never back. The first heading seen
/// moves the state to `First` (and itself lands in the first section); every
/// later heading moves it to `Other`. Entries inherit the current state,
/// with `Unset` mapping to the other-sections slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    #[default]
    Unset,
    First,
    Other,
}

impl SectionState {
    /// Apply a heading transition and return the slot the heading lands in.
    pub fn on_heading(&mut self) -> SectionSlot {
        *self = match self {
            SectionState::Unset => SectionState::First,
            _ => SectionState::Other,
        };
        self.slot()
    }

    /// Slot for a block rendered under the current state.
    pub fn slot(self) -> SectionSlot {
        match self {
            SectionState::First => SectionSlot::First,
            _ => SectionSlot::Other,
        }
    }
}
