//! Block classifier — separates a raw block into comment and code parts and
//! detects whether it documents a config entry or a bare section heading.

use regex::Regex;
use std::sync::LazyLock;

/// Comment-close token separating the doc comment from the entry literal.
pub const COMMENT_CLOSE: &str = " */";

// Single-quoted key anchored at line start, e.g. `'trusted_domains' => [...`
static RE_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^'([^']*)'").unwrap());

/// A raw block split into its comment and trailing code portion.
#[derive(Debug)]
pub struct SplitBlock {
    /// Doc comment including the closing ` */`.
    pub comment: String,
    /// Everything after the comment-close token; empty for headings.
    pub code: String,
}

/// Split a raw block (starting with `/**`) at the first comment-close token.
///
/// Exactly two parts are expected. Any other count means the source block is
/// malformed; the condition is reported via a warning and the block is
/// processed best-effort with the first part as the comment.
pub fn split_comment(raw: &str) -> SplitBlock {
    let parts: Vec<&str> = raw.split(COMMENT_CLOSE).collect();

    if parts.len() != 2 {
        log::warn!(
            "uncommon part count ({}) after comment split in block: {:?}",
            parts.len(),
            raw
        );
    }

    match parts.as_slice() {
        [comment, code] => SplitBlock {
            comment: format!("{}{}", comment, COMMENT_CLOSE),
            code: (*code).to_string(),
        },
        [comment, ..] => SplitBlock {
            comment: format!("{}{}", comment, COMMENT_CLOSE),
            code: String::new(),
        },
        [] => SplitBlock {
            comment: String::new(),
            code: String::new(),
        },
    }
}

/// Find the config key documented by a block, if any.
///
/// Zero matches means the block is a section heading. More than one match is
/// malformed input: reported via a warning, first match wins.
pub fn entry_key(code: &str) -> Option<String> {
    let mut matches = RE_KEY.captures_iter(code);
    let first = matches.next()?;
    let extra = matches.count();
    if extra > 0 {
        log::warn!(
            "uncommon key match count ({}) in block code: {:?}",
            extra + 1,
            code
        );
    }
    Some(first[1].to_string())
}
