//! Extraction front end: region isolation, block splitting, classification
//! and doc-comment parsing.

pub mod classify;
pub mod docblock;
pub mod split;

use crate::model::Block;
use anyhow::Result;
use docblock::CommentParser;

/// Extract all documented blocks from a sample config source text.
///
/// Fails only when the declaration region boundaries are missing; malformed
/// individual blocks are reported as warnings and processed best-effort.
pub fn parse_source(source: &str, parser: &dyn CommentParser) -> Result<Vec<Block>> {
    let region = split::declaration_region(source)?;
    let (_leading, fragments) = split::split_blocks(region);

    let mut blocks = Vec::new();
    for fragment in fragments {
        if fragment.trim().is_empty() {
            continue;
        }
        let raw = format!("{}{}", split::COMMENT_OPEN, fragment);
        let parts = classify::split_comment(&raw);
        let key = classify::entry_key(&parts.code);
        let doc = parser.parse(&parts.comment);
        blocks.push(Block {
            key,
            doc,
            code: parts.code,
        });
    }

    Ok(blocks)
}
