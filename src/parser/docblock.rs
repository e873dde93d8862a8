//! Doc-comment parsing — pluggable so the extraction core stays
//! notation-agnostic.

use crate::model::{DocComment, Tag};

/// Turns one raw `/** ... */` comment into its structured form.
///
/// The extraction pipeline only depends on this trait; the concrete comment
/// grammar lives entirely behind it.
pub trait CommentParser {
    fn parse(&self, raw: &str) -> DocComment;
}

/// Default parser for phpdoc-style comments.
///
/// Summary is the first run of non-blank lines, description the remaining
/// prose, and `@name content` lines become ordered tags. Lines following a
/// tag that are not themselves tags fold into that tag's content.
pub struct PhpdocParser;

impl CommentParser for PhpdocParser {
    fn parse(&self, raw: &str) -> DocComment {
        let lines = strip_comment_frame(raw);

        let mut prose: Vec<String> = Vec::new();
        let mut tags: Vec<Tag> = Vec::new();

        for line in lines {
            if let Some(rest) = line.trim_start().strip_prefix('@') {
                let mut split = rest.splitn(2, char::is_whitespace);
                let name = split.next().unwrap_or("").to_string();
                let content = split.next().unwrap_or("").trim().to_string();
                tags.push(Tag { name, content });
            } else if let Some(tag) = tags.last_mut() {
                // tag content continuation
                let cont = line.trim();
                if !cont.is_empty() {
                    if !tag.content.is_empty() {
                        tag.content.push('\n');
                    }
                    tag.content.push_str(cont);
                }
            } else {
                prose.push(line);
            }
        }

        let (summary, description) = split_prose(&prose);

        DocComment {
            summary,
            description,
            tags,
        }
    }
}

/// Remove the `/** ... */` frame and the per-line ` * ` prefix.
///
/// Content after the prefix is kept verbatim, so embedded tabs and list
/// indentation survive for the renderers to deal with.
fn strip_comment_frame(raw: &str) -> Vec<String> {
    let body = raw.trim();
    let body = body.strip_prefix("/**").unwrap_or(body);
    let body = body.strip_suffix("*/").unwrap_or(body);

    body.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            match trimmed.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest).to_string(),
                None => trimmed.to_string(),
            }
        })
        .collect()
}

/// Split prose lines into (summary, description) at the first blank line.
fn split_prose(lines: &[String]) -> (String, String) {
    let mut iter = lines.iter().skip_while(|l| l.trim().is_empty()).peekable();

    let mut summary_lines: Vec<&str> = Vec::new();
    while let Some(line) = iter.peek() {
        if line.trim().is_empty() {
            break;
        }
        summary_lines.push(iter.next().map(String::as_str).unwrap_or(""));
    }

    let description_lines: Vec<&str> = iter
        .skip_while(|l| l.trim().is_empty())
        .map(String::as_str)
        .collect();

    let summary = summary_lines.join("\n").trim_end().to_string();
    let description = description_lines.join("\n").trim_end().to_string();
    (summary, description)
}
