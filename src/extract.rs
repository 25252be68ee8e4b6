//! End-to-end extraction pipeline.
//!
//! parse → build → aggregate with a candidate register → prune the winner
//! → serialize → normalize whitespace.

use tracing::debug;

use crate::builder::Document;
use crate::compute::select;
use crate::error::{Error, Result};
use crate::html;
use crate::options::Options;
use crate::patterns::{HORIZONTAL_WHITESPACE, LINE_WHITESPACE, MULTIPLE_NEWLINES};
use crate::prune::prune;
use crate::result::{CandidateStats, ExtractResult};

/// Parse `html` and extract its main content.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    debug!(html_len = html.len(), "starting content extraction");
    let document = html::parse(html, options)?;
    extract_document(document, options)
}

/// Extract the main content of an already-built document.
///
/// Fails with [`Error::NoContent`] when the document has no container to
/// select, which only happens for an empty tree.
pub fn extract_document(mut document: Document, options: &Options) -> Result<ExtractResult> {
    let tree = &mut document.tree;
    let candidate = select(tree, document.root, options);
    let Some(node) = candidate.node() else {
        return Err(Error::NoContent);
    };

    let stats = CandidateStats::capture(tree, node);
    debug!(
        node = %node,
        tag = %stats.tag,
        sum = stats.sum,
        score = stats.score,
        "selected candidate"
    );

    let pruned = if options.prune {
        prune(tree, node, options)
    } else {
        0
    };

    let content_text = normalize_text(&tree.to_text(node, &options.grouping));

    let mut warnings = Vec::new();
    if content_text.is_empty() {
        warnings.push("selected container holds no text".to_string());
    }
    let len = content_text.chars().count();
    if len < options.min_extracted_len {
        warnings.push(format!(
            "extracted text is {len} chars, below the minimum of {}",
            options.min_extracted_len
        ));
    }

    debug!(pruned, content_len = len, warnings = warnings.len(), "extraction complete");

    Ok(ExtractResult {
        content_text,
        candidate: Some(stats),
        pruned,
        warnings,
    })
}

/// Tidy serialized text: collapse horizontal whitespace, trim every line,
/// and keep at most one blank line between paragraphs.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    let text = HORIZONTAL_WHITESPACE.replace_all(text, " ");
    let text = LINE_WHITESPACE.replace_all(&text, "");
    let text = MULTIPLE_NEWLINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}
