//! Render-time inclusion context: the frame stack tags evaluate against.
//!
//! The host engine renders a page by recursively rendering template
//! inclusions; each active inclusion is one [`Frame`] on the stack. A
//! snippet inclusion shows up as a frame named `"snippet"` whose
//! attributes are the parameters supplied at the inclusion site:
//!
//! ```text
//! page "Home"                 Frame { name: "page", .. }
//!   └── snippet "animal_info" Frame { name: "snippet", animal="elephant" }
//!         └── snippet "badge" Frame { name: "snippet", animal="zebra" }
//! ```
//!
//! The stack is owned by the host and borrowed per tag evaluation;
//! nothing in this crate mutates it while a tag runs. Frame selection
//! is innermost-first: evaluated from within `"badge"` above, a lookup
//! for `animal` sees `zebra`; the nearest enclosing snippet wins.

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;

/// Frame name the host assigns to snippet inclusions.
pub const SNIPPET_FRAME: &str = "snippet";

/// One active template inclusion.
///
/// Created by the host when an inclusion begins rendering and destroyed
/// when that render completes. The `name` identifies the kind of
/// inclusion (`"snippet"`, `"page"`, …); the attributes are the
/// parameters supplied where it was included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    name: String,
    attributes: Attributes,
}

impl Frame {
    /// Create a frame for an inclusion kind, with no parameters yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Attributes::new(),
        }
    }

    /// Builder-style parameter entry.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Replace the frame's whole attribute map.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Kind of inclusion this frame records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameters supplied at the inclusion site.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Read one parameter. Absent key reads as `None`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }
}

/// The ordered stack of active inclusion frames for one render.
///
/// Outermost frame first; the host pushes a frame when an inclusion
/// starts rendering and pops it when the render completes. Tags receive
/// the context as an explicit parameter; there is no global or
/// thread-local stack to reach into.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    frames: Vec<Frame>,
}

impl RenderContext {
    /// Create a context with no active inclusions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`push_frame`](Self::push_frame).
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.push_frame(frame);
        self
    }

    /// Record that an inclusion started rendering.
    pub fn push_frame(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Record that the innermost inclusion finished rendering.
    pub fn pop_frame(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// The active frames, outermost first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of active inclusion frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Find the nearest enclosing frame with the given name, scanning
    /// from the innermost frame outwards.
    ///
    /// `None` is the valid "no such scope" state, e.g. a tag evaluated
    /// outside any snippet inclusion; callers degrade rather than fail.
    pub fn innermost(&self, name: &str) -> Option<&Frame> {
        self.frames.iter().rev().find(|frame| frame.name() == name)
    }

    /// The nearest enclosing snippet frame, if any.
    pub fn snippet_frame(&self) -> Option<&Frame> {
        self.innermost(SNIPPET_FRAME)
    }
}
