//! reStructuredText renderer — literal text per block, merged into an
//! existing document by the placeholder merge.

use crate::model::DocComment;
use crate::render::Renderer;

/// Inline code span delimiter in RST.
const CODE_SPAN: &str = "``";

pub struct RstRenderer;

impl Renderer for RstRenderer {
    type Output = String;

    fn heading(&self, doc: &DocComment) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&doc.summary);
        out.push('\n');
        out.push_str(&"-".repeat(doc.summary.len()));
        out.push_str("\n\n");
        if !doc.description.trim().is_empty() {
            out.push_str(&doc.description);
            out.push_str("\n\n");
        }
        out
    }

    fn entry(&self, _key: &str, doc: &DocComment, code: &str) -> String {
        let mut out = String::new();
        // literal block with the entry's array text, one tab per line
        out.push_str("\n::\n\n");
        for line in code.trim().lines() {
            out.push('\t');
            out.push_str(line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&escape_rst(&doc.text()));
        out.push('\n');
        out
    }
}

/// Double every backslash, but only outside ``inline code`` spans.
///
/// Splitting on the double-backtick marker yields alternating outside/inside
/// segments; even indices are outside the spans and get escaped, odd indices
/// are inside and stay untouched. Rejoining with the marker restores the
/// span structure. Text without any marker is escaped as a whole.
pub fn escape_rst(text: &str) -> String {
    if !text.contains(CODE_SPAN) {
        return text.replace('\\', "\\\\");
    }

    text.split(CODE_SPAN)
        .enumerate()
        .map(|(i, part)| {
            if i % 2 == 0 {
                part.replace('\\', "\\\\")
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(CODE_SPAN)
}
