//! Configuration options for content extraction.
//!
//! The `Options` struct carries the three tuning constants used by the
//! scoring and pruning formulas, the tag classification tables, and the
//! pipeline switches.

use crate::grouping::Grouping;

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_readability::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     reject_cutoff: 10.0,
///     prune: false,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Factor applied to the density score of low-value ("bad") containers.
    ///
    /// Must be below 1.0 to demote; it suppresses without zeroing.
    ///
    /// Default: `0.1`
    pub bad_multiplier: f64,

    /// Density score below which a container becomes a rejection candidate.
    ///
    /// Default: `20.0`
    pub reject_cutoff: f64,

    /// A container whose tag count exceeds `score * reject_multiplier` is
    /// also a rejection candidate (too much markup for its text).
    ///
    /// Default: `1.5`
    pub reject_multiplier: f64,

    /// Tag classification tables (block, auto-close, bad, hyperlink, skip).
    pub grouping: Grouping,

    /// Flag containers as low-value when their `class` or `id` looks like
    /// navigation, ads, or other boilerplate.
    ///
    /// Default: `true`
    pub classify_attributes: bool,

    /// Run the pruning sweep over the selected candidate before serializing.
    ///
    /// Default: `true`
    pub prune: bool,

    /// Maximum element nesting materialized from HTML.
    ///
    /// Deeper elements are flattened into a single text unit.
    ///
    /// Default: `256`
    pub max_tree_depth: usize,

    /// Minimum text length (characters) before a warning is recorded.
    ///
    /// Default: `0`
    pub min_extracted_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bad_multiplier: 0.1,
            reject_cutoff: 20.0,
            reject_multiplier: 1.5,
            grouping: Grouping::default(),
            classify_attributes: true,
            prune: true,
            max_tree_depth: 256,
            min_extracted_len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!((opts.bad_multiplier - 0.1).abs() < f64::EPSILON);
        assert!((opts.reject_cutoff - 20.0).abs() < f64::EPSILON);
        assert!((opts.reject_multiplier - 1.5).abs() < f64::EPSILON);
        assert!(opts.bad_multiplier < 1.0);
        assert!(opts.classify_attributes);
        assert!(opts.prune);
        assert_eq!(opts.max_tree_depth, 256);
        assert_eq!(opts.min_extracted_len, 0);
        assert!(opts.grouping.is_block("p"));
    }

    #[test]
    fn test_custom_thresholds() {
        let opts = Options {
            bad_multiplier: 0.5,
            reject_cutoff: 5.0,
            max_tree_depth: 32,
            ..Options::default()
        };

        assert!((opts.bad_multiplier - 0.5).abs() < f64::EPSILON);
        assert!((opts.reject_cutoff - 5.0).abs() < f64::EPSILON);
        assert!((opts.reject_multiplier - 1.5).abs() < f64::EPSILON);
        assert_eq!(opts.max_tree_depth, 32);
    }

    #[test]
    fn test_boolean_options_can_be_toggled() {
        let opts = Options {
            classify_attributes: false,
            prune: false,
            ..Options::default()
        };

        assert!(!opts.classify_attributes);
        assert!(!opts.prune);
    }
}
