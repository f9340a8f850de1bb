//! A single tag evaluation: its own attributes plus the body callback.
//!
//! The host parses the tag markup and hands this crate a
//! [`TagInvocation`]: the full tag name, the attributes written on the
//! tag, and, for container tags, a callback that renders the tag's
//! body content when asked. Tag handlers never see template source;
//! attribute extraction is the host's job.

use std::fmt;

use crate::attributes::Attributes;
use crate::error::{TagError, TagResult};

/// Deferred rendering of a tag's body content.
///
/// Supplied by the host; a conditional tag invokes it only on the
/// expanding branch, and at most once per evaluation. Any `FnMut`
/// closure returning [`TagResult<String>`] is a `TagBody`.
pub trait TagBody {
    /// Render the body content into the output string.
    fn expand(&mut self) -> TagResult<String>;
}

impl<F> TagBody for F
where
    F: FnMut() -> TagResult<String>,
{
    fn expand(&mut self) -> TagResult<String> {
        self()
    }
}

/// One evaluation of a snippet parameter tag.
///
/// Carries its own attribute map, distinct from the snippet frame's
/// parameters: `name="animal"` here says *which* parameter to read,
/// while `animal="elephant"` lives on the frame in the
/// [`RenderContext`](crate::context::RenderContext).
pub struct TagInvocation<'a> {
    tag: String,
    attributes: Attributes,
    body: Option<&'a mut dyn TagBody>,
}

impl<'a> TagInvocation<'a> {
    /// Create an invocation of the named tag with no attributes or body.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            body: None,
        }
    }

    /// Builder-style attribute entry.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Replace the invocation's whole attribute map.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Attach the host's body callback.
    pub fn with_body(mut self, body: &'a mut dyn TagBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Full tag name, e.g. `snippet:if_var`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The attributes written on this tag.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Read one of the tag's own attributes.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// Read a required attribute.
    ///
    /// Fails with [`TagError::MissingAttribute`] when the attribute is
    /// absent or empty, naming both the attribute and the tag. Every
    /// tag in this crate calls this for `name` before any frame lookup.
    pub fn require_attr(&self, key: &str) -> TagResult<String> {
        match self.attributes.get(key) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(TagError::MissingAttribute {
                tag: self.tag.clone(),
                attribute: key.to_string(),
            }),
        }
    }

    /// Render the tag's body content.
    ///
    /// A bodiless invocation (self-closing tag) expands to the empty
    /// string.
    pub fn expand(&mut self) -> TagResult<String> {
        match self.body.as_mut() {
            Some(body) => body.expand(),
            None => Ok(String::new()),
        }
    }
}

impl fmt::Debug for TagInvocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagInvocation")
            .field("tag", &self.tag)
            .field("attributes", &self.attributes)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}
