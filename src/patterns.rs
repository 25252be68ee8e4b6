//! Compiled regex patterns for classification and text cleanup.
//!
//! All patterns are compiled once using `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Low-Value Markup Patterns
// =============================================================================

/// Matches class/id names indicating navigation elements.
///
/// `nav` only matches as a whole token or at a token edge, so layout
/// containers like `in-page-nav-container` are left alone.
pub static NAVIGATION_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(^nav$|^nav[-_]|[-_]nav$|navbar|navigation|top[-_]?nav|main[-_]?menu|site[-_]?nav|\bmenu\b|site[-_]?footer|site[-_]?header|breadcrumbs?|\bsidebar\b)",
    )
    .expect("NAVIGATION_CLASS regex")
});

/// Matches class/id names indicating advertisement elements.
pub static ADVERTISEMENT_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^(ad|ads|advert|advertisement|sponsor|sponsored|promo)$|^ad[-_]|[-_]ad$|\badvert)")
        .expect("ADVERTISEMENT_CLASS regex")
});

/// Matches class/id names indicating boilerplate widgets.
pub static BOILERPLATE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(\bcomments?\b|shar(?:e|ing)[-_]|social|related|recommend(?:ed)?|\bfooter\b|copyright|disclaimer|more[-_]?from|you[-_]?may[-_]?like|taboola|outbrain|cookie[-_]?(?:consent|notice|banner)|\bsubscribe\b|newsletter|trending|popular|most[-_]?read|tag[-_]?cloud|\bwidget\b)",
    )
    .expect("BOILERPLATE_CLASS regex")
});

/// Whether a `class` or `id` value marks low-value markup.
#[must_use]
pub fn is_low_value(value: &str) -> bool {
    value.split_whitespace().any(|token| {
        NAVIGATION_CLASS.is_match(token)
            || ADVERTISEMENT_CLASS.is_match(token)
            || BOILERPLATE_CLASS.is_match(token)
    })
}

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches runs of horizontal whitespace.
pub static HORIZONTAL_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\r\x0C]+").expect("HORIZONTAL_WHITESPACE regex")
});

/// Matches leading/trailing whitespace on lines.
pub static LINE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]+|[ \t]+$").expect("LINE_WHITESPACE regex")
});

/// Matches multiple consecutive newlines.
pub static MULTIPLE_NEWLINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n{3,}").expect("MULTIPLE_NEWLINES regex")
});
