//! AsciiDoc renderer — structured records plus the template-style
//! serialization that turns the record sequence into the final document.

use crate::model::{DocComment, DocRecord};
use crate::render::Renderer;
use regex::Regex;
use std::sync::LazyLock;

// Leading bullet-list indentation, stripped so list markers sit at column zero
static RE_BULLET: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^[ \t]+-").unwrap());

// RST warning admonition, rewritten into the AsciiDoc inline form
static RE_WARNING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\. warning::\s*").unwrap());

// Fixed four-space code indentation from the source nesting
static RE_CODE_INDENT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^ {4}").unwrap());

pub struct AsciiDocRenderer;

impl Renderer for AsciiDocRenderer {
    type Output = DocRecord;

    fn heading(&self, doc: &DocComment) -> DocRecord {
        DocRecord {
            summary: doc.summary.trim().to_string(),
            description: filter_description(&doc.description),
            section_header: true,
            code: None,
        }
    }

    fn entry(&self, _key: &str, doc: &DocComment, code: &str) -> DocRecord {
        DocRecord {
            summary: doc.summary.trim().to_string(),
            description: filter_description(&doc.description),
            section_header: false,
            code: Some(filter_code(code)),
        }
    }
}

/// Description transforms for the AsciiDoc notation:
/// bullet de-indentation, warning-callout rewriting, double-backtick inline
/// code to single backticks, tabs collapsed to single spaces.
fn filter_description(text: &str) -> String {
    let text = text.trim();
    let text = RE_BULLET.replace_all(text, "-");
    let text = RE_WARNING.replace_all(&text, "WARNING: ");
    let text = text.replace("``", "`");
    text.replace('\t', " ")
}

/// Strip the fixed leading indentation from every code line; internal
/// indentation is preserved.
fn filter_code(code: &str) -> String {
    RE_CODE_INDENT.replace_all(code.trim(), "").to_string()
}

/// Serialize the ordered record sequence into one AsciiDoc document.
pub fn render_document(records: &[DocRecord]) -> String {
    let mut out = String::new();

    for record in records {
        if record.section_header {
            out.push_str(&format!("== {}\n\n", record.summary));
        } else {
            out.push_str(&format!("=== {}\n\n", record.summary));
        }

        if !record.description.is_empty() {
            out.push_str(&record.description);
            out.push_str("\n\n");
        }

        if let Some(ref code) = record.code {
            if !code.is_empty() {
                out.push_str("[source,php]\n----\n");
                out.push_str(code);
                out.push_str("\n----\n\n");
            }
        }
    }

    out
}
