//! Coupling between a tag event stream and the [`Builder`].
//!
//! Tokenizers report void and self-closing elements with a start tag only
//! (or with a stray end tag). This layer makes sure every opened container
//! is closed exactly once before handing events to the builder.

use crate::builder::Builder;
use crate::error::Result;

/// One structural token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    StartTag {
        name: String,
        attrs: Vec<(String, String)>,
        self_closing: bool,
    },
    EndTag {
        name: String,
    },
    Text(String),
}

/// Forward one event to the builder.
///
/// Start tags that are self-closing or in the auto-close set are closed
/// right away; end tags for auto-close tags are then ignored.
pub fn feed(builder: &mut Builder<'_>, event: &TagEvent) -> Result<()> {
    let grouping = &builder.options().grouping;
    match event {
        TagEvent::StartTag {
            name,
            attrs,
            self_closing,
        } => {
            let autoclose = *self_closing || grouping.is_autoclose(&name.to_ascii_lowercase());
            builder.open_tag(name)?;
            for (attr, value) in attrs {
                builder.attribute(attr, value);
            }
            if autoclose {
                builder.close_tag(name)?;
            }
            Ok(())
        }
        TagEvent::EndTag { name } => {
            if grouping.is_autoclose(&name.to_ascii_lowercase()) {
                return Ok(());
            }
            builder.close_tag(name)
        }
        TagEvent::Text(content) => builder.text(content),
    }
}

/// Forward a whole event stream to the builder.
pub fn feed_all<'e>(
    builder: &mut Builder<'_>,
    events: impl IntoIterator<Item = &'e TagEvent>,
) -> Result<()> {
    for event in events {
        feed(builder, event)?;
    }
    Ok(())
}
