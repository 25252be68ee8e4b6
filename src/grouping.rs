//! Tag classification tables.
//!
//! Provides both arrays (for iteration) and `HashSets` (for O(1) lookup).
//! The sets are only defaults: the engine reads them through [`Grouping`],
//! which callers can replace via [`Options`](crate::Options).

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Tags that produce a paragraph break when serialized.
pub static BLOCK_TAGS: [&str; 41] = [
    "address", "article", "aside", "blockquote", "body", "caption", "center", "dd", "details",
    "dialog", "dir", "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form",
    "h1", "h2", "h3", "h4", "h5", "h6", "header", "hgroup", "hr", "li", "main", "menu", "nav",
    "ol", "p", "pre", "section", "summary", "table", "tr", "ul", "br",
];

/// Void elements: the builder closes them as soon as they open.
pub static AUTOCLOSE_TAGS: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Low-value markup whose score is demoted, along with everything inside it.
pub static BAD_TAGS: [&str; 14] = [
    "aside", "button", "dialog", "footer", "form", "header", "input", "label", "menu", "nav",
    "option", "select", "sup", "textarea",
];

/// Tags whose text counts as hyperlink content.
pub static HYPERLINK_TAGS: [&str; 1] = ["a"];

/// Tags whose text never reaches the tree.
pub static SKIP_TAGS: [&str; 10] = [
    "head", "iframe", "noscript", "object", "script", "style", "svg", "template", "title",
    "math",
];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// `AUTOCLOSE_TAGS` as a `HashSet`
pub static AUTOCLOSE_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| AUTOCLOSE_TAGS.into_iter().collect());

/// `BAD_TAGS` as a `HashSet`
pub static BAD_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BAD_TAGS.into_iter().collect());

/// `HYPERLINK_TAGS` as a `HashSet`
pub static HYPERLINK_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HYPERLINK_TAGS.into_iter().collect());

/// `SKIP_TAGS` as a `HashSet`
pub static SKIP_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SKIP_TAGS.into_iter().collect());

/// Tag classification supplied to the builder and the serializer.
///
/// Tag names are compared in lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    /// Tags wrapped in blank lines on serialization.
    pub block: HashSet<String>,
    /// Tags closed immediately after opening.
    pub autoclose: HashSet<String>,
    /// Tags flagged as low-value content.
    pub bad: HashSet<String>,
    /// Tags flagged as hyperlinks.
    pub hyperlink: HashSet<String>,
    /// Tags whose text content is dropped.
    pub skip: HashSet<String>,
}

impl Grouping {
    #[must_use]
    pub fn is_block(&self, tag: &str) -> bool {
        self.block.contains(tag)
    }

    #[must_use]
    pub fn is_autoclose(&self, tag: &str) -> bool {
        self.autoclose.contains(tag)
    }

    #[must_use]
    pub fn is_bad(&self, tag: &str) -> bool {
        self.bad.contains(tag)
    }

    #[must_use]
    pub fn is_hyperlink(&self, tag: &str) -> bool {
        self.hyperlink.contains(tag)
    }

    #[must_use]
    pub fn is_skipped(&self, tag: &str) -> bool {
        self.skip.contains(tag)
    }
}

fn owned(set: &HashSet<&'static str>) -> HashSet<String> {
    set.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Grouping {
    fn default() -> Self {
        Self {
            block: owned(&BLOCK_TAG_SET),
            autoclose: owned(&AUTOCLOSE_TAG_SET),
            bad: owned(&BAD_TAG_SET),
            hyperlink: owned(&HYPERLINK_TAG_SET),
            skip: owned(&SKIP_TAG_SET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_sets_match_lists() {
        assert_eq!(BLOCK_TAG_SET.len(), BLOCK_TAGS.len());
        assert_eq!(AUTOCLOSE_TAG_SET.len(), AUTOCLOSE_TAGS.len());
        assert_eq!(BAD_TAG_SET.len(), BAD_TAGS.len());
        assert_eq!(SKIP_TAG_SET.len(), SKIP_TAGS.len());
    }

    #[test]
    fn test_default_grouping() {
        let grouping = Grouping::default();
        assert!(grouping.is_block("p"));
        assert!(grouping.is_block("div"));
        assert!(!grouping.is_block("span"));
        assert!(grouping.is_autoclose("br"));
        assert!(grouping.is_autoclose("img"));
        assert!(!grouping.is_autoclose("p"));
        assert!(grouping.is_bad("nav"));
        assert!(grouping.is_hyperlink("a"));
        assert!(grouping.is_skipped("script"));
    }

    #[test]
    fn test_grouping_can_be_customized() {
        let mut grouping = Grouping::default();
        grouping.block.insert("span".to_string());
        grouping.bad.remove("header");

        assert!(grouping.is_block("span"));
        assert!(!grouping.is_bad("header"));
    }
}
