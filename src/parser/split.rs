//! Lexical block splitter — isolates the config declaration region and cuts
//! it into raw comment blocks.

use anyhow::{anyhow, Result};

/// Comment-open token blocks are split on.
pub const COMMENT_OPEN: &str = "/**";

/// Recognized declaration boundary token pairs, tried in order.
const BOUNDARY_TOKENS: &[(&str, &str)] = &[("$CONFIG = array(", ");"), ("$CONFIG = [", "];")];

/// Extract the text strictly between the declaration opening token and the
/// last occurrence of its closing token.
///
/// Fails if no recognized opening token is present, or the paired closing
/// token never appears after it.
pub fn declaration_region(source: &str) -> Result<&str> {
    for (open, close) in BOUNDARY_TOKENS {
        let Some(start) = source.find(open) else {
            continue;
        };
        let body = &source[start + open.len()..];
        let end = body
            .rfind(close)
            .ok_or_else(|| anyhow!("missing declaration closing token `{}`", close))?;
        return Ok(&body[..end]);
    }
    Err(anyhow!(
        "missing declaration opening token (`{}` or `{}`)",
        BOUNDARY_TOKENS[0].0,
        BOUNDARY_TOKENS[1].0
    ))
}

/// Split the declaration region at every comment-open token.
///
/// Returns the leading fragment (text before the first `/**`, kept so the
/// split is lossless) and the ordered fragments that followed each token,
/// *without* the token itself. Blank fragments are kept here and skipped by
/// the caller.
pub fn split_blocks(region: &str) -> (&str, Vec<&str>) {
    let mut parts = region.split(COMMENT_OPEN);
    // split() always yields at least one element
    let leading = parts.next().unwrap_or("");
    (leading, parts.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<?php\n$CONFIG = array(\n/**\n * One\n */\n'a' => 1,\n/**\n * Two\n */\n);\n";

    #[test]
    fn region_between_tokens() {
        let region = declaration_region(SAMPLE).unwrap();
        assert!(region.starts_with('\n'));
        assert!(region.contains("'a' => 1,"));
        assert!(!region.contains("$CONFIG"));
        assert!(!region.contains(");"));
    }

    #[test]
    fn region_short_array_syntax() {
        let source = "<?php\n$CONFIG = [\n/**\n * One\n */\n'a' => 1,\n];\n";
        let region = declaration_region(source).unwrap();
        assert!(region.contains("'a' => 1,"));
    }

    #[test]
    fn region_uses_last_closing_token() {
        let source = "$CONFIG = array(\n'a' => array(1),\n);\n// trailing\n";
        // inner `);` of the nested array must not end the region early
        let region = declaration_region(source).unwrap();
        assert!(region.contains("'a' => array(1),"));
    }

    #[test]
    fn missing_open_token_fails() {
        let err = declaration_region("no config here").unwrap_err();
        assert!(err.to_string().contains("opening token"));
    }

    #[test]
    fn missing_close_token_fails() {
        let err = declaration_region("$CONFIG = array(\n'a' => 1,\n").unwrap_err();
        assert!(err.to_string().contains("closing token"));
    }

    #[test]
    fn split_reassembles_losslessly() {
        let region = declaration_region(SAMPLE).unwrap();
        let (leading, fragments) = split_blocks(region);
        let mut rebuilt = leading.to_string();
        for fragment in &fragments {
            rebuilt.push_str(COMMENT_OPEN);
            rebuilt.push_str(fragment);
        }
        assert_eq!(rebuilt, region);
    }

    #[test]
    fn split_counts_blocks() {
        let region = declaration_region(SAMPLE).unwrap();
        let (_, fragments) = split_blocks(region);
        assert_eq!(fragments.len(), 2);
    }
}
