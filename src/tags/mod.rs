//! Snippet parameter tag plugins.
//!
//! This module provides the tag infrastructure and the three built-in
//! tags that let a snippet read the parameters passed to it at its
//! inclusion site:
//!
//! 1. **[`SnippetTag`]** trait: core trait for all tag implementations
//! 2. **[`TagRegistry`]**: name-keyed registry the host dispatches through
//! 3. **Built-ins**: [`IfVarTag`], [`UnlessVarTag`], [`VarTag`]
//!
//! # Example
//!
//! ```rust
//! use snippet_params::prelude::*;
//!
//! let registry = TagRegistry::with_builtins();
//! let context = RenderContext::new()
//!     .with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", "elephant"));
//!
//! let mut invocation = TagInvocation::new("snippet:var").with_attr("name", "animal");
//! let output = registry.render(&mut invocation, &context).unwrap();
//! assert_eq!(output, "elephant");
//! ```
//!
//! # Creating Custom Tags
//!
//! Implement [`SnippetTag`] and register the value:
//!
//! ```rust
//! use snippet_params::prelude::*;
//!
//! #[derive(Debug, Default)]
//! struct ShoutVar;
//!
//! impl SnippetTag for ShoutVar {
//!     fn name(&self) -> &'static str {
//!         "snippet:shout_var"
//!     }
//!
//!     fn description(&self) -> &'static str {
//!         "Outputs a snippet parameter in upper case"
//!     }
//!
//!     fn render(
//!         &self,
//!         invocation: &mut TagInvocation<'_>,
//!         context: &RenderContext,
//!     ) -> TagResult<String> {
//!         let name = invocation.require_attr("name")?;
//!         let value = context.snippet_frame().and_then(|f| f.attr(&name));
//!         Ok(value.unwrap_or_default().to_uppercase())
//!     }
//! }
//!
//! let mut registry = TagRegistry::with_builtins();
//! registry.register(ShoutVar);
//! ```

mod condition;
mod if_var;
mod unless_var;
mod var;

pub use if_var::IfVarTag;
pub use unless_var::UnlessVarTag;
pub use var::VarTag;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::context::RenderContext;
use crate::error::{TagError, TagResult};
use crate::invocation::TagInvocation;

// ============================================================================
// Tag Trait
// ============================================================================

/// Trait that all snippet parameter tags implement.
///
/// A tag is a stateless evaluator: [`render`](Self::render) is a pure
/// function of the invocation's attributes and the borrowed frame
/// stack, producing the tag's output string. Implementations are
/// `Send + Sync` so a host may share one registry across render
/// threads.
pub trait SnippetTag: Send + Sync + fmt::Debug {
    /// Full tag name the registry dispatches on, e.g. `snippet:if_var`.
    fn name(&self) -> &'static str;

    /// One-line description for host help output.
    fn description(&self) -> &'static str;

    /// Evaluate one invocation of this tag against the current
    /// inclusion stack.
    fn render(
        &self,
        invocation: &mut TagInvocation<'_>,
        context: &RenderContext,
    ) -> TagResult<String>;

    /// Usage examples in template markup, for host help output.
    fn examples(&self) -> Vec<&'static str> {
        vec![]
    }

    /// The attributes this tag understands.
    fn attributes(&self) -> Vec<TagAttrInfo> {
        vec![]
    }
}

// ============================================================================
// Attribute Metadata
// ============================================================================

/// Documentation for one attribute a tag understands.
#[derive(Debug, Clone)]
pub struct TagAttrInfo {
    /// Attribute name as written in template markup
    pub name: &'static str,
    /// Attribute description
    pub description: &'static str,
    /// Whether the tag fails without it
    pub required: bool,
}

impl TagAttrInfo {
    /// Create a new optional attribute description.
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
        }
    }

    /// Mark the attribute as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

// ============================================================================
// Tag Registry
// ============================================================================

/// Registry of snippet tags, dispatched by full tag name.
#[derive(Debug, Default)]
pub struct TagRegistry {
    tags: HashMap<String, Arc<dyn SnippetTag>>,
}

impl TagRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the three built-in tags installed.
    ///
    /// This is the extension's activation surface: a host that wants
    /// parameterized snippets calls this once and routes
    /// `snippet:if_var`, `snippet:unless_var` and `snippet:var`
    /// invocations through [`render`](Self::render).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(IfVarTag::new());
        registry.register(UnlessVarTag::new());
        registry.register(VarTag::new());
        registry
    }

    /// Register a tag under its own name, replacing any previous
    /// registration for that name.
    pub fn register<T: SnippetTag + 'static>(&mut self, tag: T) {
        self.tags.insert(tag.name().to_string(), Arc::new(tag));
    }

    /// Get a tag by full name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn SnippetTag>> {
        self.tags.get(name).cloned()
    }

    /// List all registered tag names.
    pub fn list(&self) -> Vec<&str> {
        self.tags.keys().map(String::as_str).collect()
    }

    /// Render one tag invocation, dispatching on its tag name.
    pub fn render(
        &self,
        invocation: &mut TagInvocation<'_>,
        context: &RenderContext,
    ) -> TagResult<String> {
        let tag = self
            .get(invocation.tag())
            .ok_or_else(|| TagError::UnknownTag(invocation.tag().to_string()))?;

        trace!(
            tag = invocation.tag(),
            depth = context.depth(),
            "rendering snippet tag"
        );
        tag.render(invocation, context)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
