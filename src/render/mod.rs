//! Renderer module — pluggable terminal step of the extraction pipeline.
//!
//! Both output modes share one extraction and assembly core; the renderer
//! decides what a rendered block *is* (literal RST text, or a structured
//! record for template-style serialization).

pub mod asciidoc;
pub mod rst;

use crate::model::DocComment;

/// Renders one classified block into the mode's output unit.
pub trait Renderer {
    type Output: Clone;

    /// Render a section heading block.
    fn heading(&self, doc: &DocComment) -> Self::Output;

    /// Render a documented config entry block.
    fn entry(&self, key: &str, doc: &DocComment, code: &str) -> Self::Output;
}
