//! String utilities for markup output.
//!
//! This module provides:
//! - HTML escaping for text content and attribute values
//! - Slug generation for element ids derived from labels

use std::borrow::Cow;

/// Escapes a string for use as HTML text content or a quoted attribute value.
///
/// Replaces `&`, `<`, `>`, `"` and `'` with their entity forms. Returns the
/// input unchanged (borrowed) when nothing needs escaping.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut escaped = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

/// Converts a label into a lowercase, dash-separated identifier fragment.
///
/// Non-alphanumeric runs collapse into a single dash; leading and trailing
/// dashes are dropped. An input without any alphanumeric characters yields
/// `"item"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "item".to_string()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_special_chars() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_borrows_clean_input() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("  API / Reference!  "), "api-reference");
        assert_eq!(slugify("v2.0"), "v2-0");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("---"), "item");
        assert_eq!(slugify(""), "item");
    }
}
