//! HTML front end.
//!
//! Parses markup with `dom_query` and replays the resulting DOM as a
//! [`TagEvent`] stream, the same shape a streaming tokenizer would produce.

use dom_query::{Document as HtmlDocument, NodeRef};
use tracing::debug;

use crate::builder::{Builder, Document};
use crate::error::Result;
use crate::events::{feed_all, TagEvent};
use crate::options::Options;

/// Parse HTML into a scored-tree [`Document`].
pub fn parse(html: &str, options: &Options) -> Result<Document> {
    let events = tokenize(html, options);
    debug!(events = events.len(), "replaying html events");

    let mut builder = Builder::new(options);
    feed_all(&mut builder, &events)?;
    Ok(builder.finish())
}

/// Parse HTML and flatten the DOM below `<html>` into tag events.
///
/// Elements nested deeper than `options.max_tree_depth` are not replayed as
/// tags; their text is emitted as one text event instead.
#[must_use]
pub fn tokenize(html: &str, options: &Options) -> Vec<TagEvent> {
    let document = HtmlDocument::from(html);
    let mut events = Vec::new();

    let root = document.select("html");
    if let Some(node) = root.nodes().first() {
        walk(node, 0, options, &mut events);
    }
    events
}

fn walk(node: &NodeRef, depth: usize, options: &Options, events: &mut Vec<TagEvent>) {
    if node.is_text() {
        events.push(TagEvent::Text(node.text().to_string()));
        return;
    }
    if !node.is_element() {
        return;
    }
    let Some(name) = node.node_name() else {
        return;
    };
    let name = name.to_ascii_lowercase();

    if depth >= options.max_tree_depth {
        if !options.grouping.is_skipped(&name) {
            events.push(TagEvent::Text(node.text().to_string()));
        }
        return;
    }

    let attrs = node
        .attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect();
    // Void elements get their end tag from the event coupling.
    let void = options.grouping.is_autoclose(&name);
    events.push(TagEvent::StartTag {
        name: name.clone(),
        attrs,
        self_closing: false,
    });

    let mut child = node.first_child();
    while let Some(current) = child {
        walk(&current, depth + 1, options, events);
        child = current.next_sibling();
    }

    if !void {
        events.push(TagEvent::EndTag { name });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_balanced_stream() {
        let options = Options::default();
        let events = tokenize("<p>Hello <b>world</b><br></p>", &options);

        let starts = events
            .iter()
            .filter(|e| matches!(e, TagEvent::StartTag { .. }))
            .count();
        let ends = events
            .iter()
            .filter(|e| matches!(e, TagEvent::EndTag { .. }))
            .count();
        // html, head, body, p, b, br open; br has no end tag.
        assert_eq!(starts, 6);
        assert_eq!(ends, 5);
        assert!(events.contains(&TagEvent::Text("world".to_string())));
    }

    #[test]
    fn test_parse_skips_head_and_scripts() {
        let options = Options::default();
        let html = "<html><head><title>Title</title><style>p{}</style></head>\
                    <body><p>Body text</p><script>alert(1)</script></body></html>";

        match parse(html, &options) {
            Ok(doc) => {
                let text = doc.text(&options);
                assert!(text.contains("Body text"));
                assert!(!text.contains("Title"));
                assert!(!text.contains("alert"));
                assert!(!text.contains("p{}"));
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn test_parse_records_attributes() {
        let options = Options::default();
        let html = r#"<body><div id="main" class="story">Text</div></body>"#;

        match parse(html, &options) {
            Ok(doc) => {
                let tree = &doc.tree;
                let html_node = tree.children(doc.root)[0];
                let body = tree.last_child(html_node).unwrap_or(html_node);
                assert_eq!(tree.tag(body), Some("body"));
                let div = tree.children(body)[0];
                let attrs = tree
                    .node(div)
                    .as_container()
                    .map(|c| c.attributes().to_vec())
                    .unwrap_or_default();
                assert!(attrs.contains(&("id".to_string(), "main".to_string())));
                assert!(attrs.contains(&("class".to_string(), "story".to_string())));
            }
            Err(err) => panic!("expected Ok(_), got Err({err:?})"),
        }
    }

    #[test]
    fn test_depth_limit_flattens_text() {
        let options = Options {
            max_tree_depth: 3,
            ..Options::default()
        };
        let html = "<body><div><div><div><p>deep <b>text</b></p></div></div></div></body>";
        let events = tokenize(html, &options);

        assert!(!events
            .iter()
            .any(|e| matches!(e, TagEvent::StartTag { name, .. } if name == "p")));
        assert!(events.contains(&TagEvent::Text("deep text".to_string())));
    }
}
