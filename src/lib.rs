//! # rs-readability
//!
//! Reader-mode main content detection.
//!
//! Given a tree of element and text nodes, this library finds the subtree
//! that most likely holds the article body by text density, prunes the
//! low-density parts of it, and serializes what is left as plain text with
//! paragraph breaks.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_readability::extract;
//!
//! let html = r#"<html><body>
//!   <nav><a href="/">Home</a><a href="/about">About</a></nav>
//!   <article><p>Main content here, long enough to win.</p><p>More of it.</p></article>
//! </body></html>"#;
//!
//! let result = extract(html)?;
//! println!("{}", result.content_text);
//! # Ok::<(), rs_readability::Error>(())
//! ```
//!
//! ## Working on a tree directly
//!
//! ```rust
//! use rs_readability::compute::select;
//! use rs_readability::tree::{Tree, Variety};
//! use rs_readability::Options;
//!
//! let options = Options::default();
//! let mut tree = Tree::new();
//! let body = tree.create_container("body", Variety::NORMAL);
//! let p = tree.create_container("p", Variety::NORMAL);
//! let text = tree.create_text("Some article text.", false);
//! tree.append_child(body, p)?;
//! tree.append_child(p, text)?;
//!
//! let best = select(&mut tree, body, &options);
//! assert_eq!(best.node(), Some(body));
//! # Ok::<(), rs_readability::Error>(())
//! ```

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Arena-backed node tree, text containment and serialization.
pub mod tree;

/// Statistics aggregation, density scoring and candidate selection.
pub mod compute;

/// What-if pruning of low-density subtrees.
pub mod prune;

/// Tag classification tables.
pub mod grouping;

/// Stack-based tree builder.
pub mod builder;

/// Tag event stream coupling.
pub mod events;

/// HTML front end built on `dom_query`.
pub mod html;

// Public API - re-exports
pub use builder::{Builder, Document};
pub use error::{Error, Result};
pub use extract::{extract_document, normalize_text};
pub use options::Options;
pub use result::{CandidateStats, ExtractResult};

/// Extracts main content from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use rs_readability::extract;
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let result = extract(html)?;
/// assert_eq!(result.content_text, "Content");
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts main content from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use rs_readability::{extract_with_options, Options};
///
/// let html = "<html><body><article><p>Content</p></article></body></html>";
/// let options = Options {
///     prune: false,
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// # Ok::<(), rs_readability::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}
