//! # Snippet Params - Parameterized Snippet Tags for CMS Templates
//!
//! Snippet Params lets a reusable template fragment (a "snippet") read
//! parameters passed at its inclusion site. A page includes the same snippet
//! several times with different attributes, and the snippet's markup adapts
//! through three tags: `if_var`, `unless_var`, and `var`.
//!
//! ## Core Concepts
//!
//! - **Snippet**: A reusable template fragment included from pages or other snippets
//! - **Frame**: One entry in the render-time inclusion stack, carrying the
//!   attributes of the element that opened it
//! - **Render context**: The stack of frames active at the point a tag fires
//! - **Tags**: `if_var` / `unless_var` gate their body on a parameter;
//!   `var` emits a parameter's value
//! - **Registry**: Name-to-implementation map the host template engine
//!   dispatches through
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  Host Template Engine                    │
//! │        (parses markup, maintains the frame stack)        │
//! └─────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                       TagRegistry                        │
//! │              (dispatch by qualified tag name)            │
//! └─────────────────────────────────────────────────────────┘
//!          │                  │                  │
//!          ▼                  ▼                  ▼
//! ┌───────────────┐  ┌───────────────┐  ┌───────────────┐
//! │   IfVarTag    │  │ UnlessVarTag  │  │    VarTag     │
//! └───────────────┘  └───────────────┘  └───────────────┘
//!          │                  │                  │
//!          └──────────────────┼──────────────────┘
//!                             ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                      RenderContext                       │
//! │        (innermost-first lookup of snippet frames)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust
//! use snippet_params::prelude::*;
//!
//! fn main() -> TagResult<()> {
//!     // The host engine is rendering a snippet that was included with
//!     // animal="elephant".
//!     let context = RenderContext::new()
//!         .with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", "elephant"));
//!
//!     let registry = TagRegistry::with_builtins();
//!
//!     let mut invocation = TagInvocation::new("snippet:var").with_attr("name", "animal");
//!     let rendered = registry.render(&mut invocation, &context)?;
//!     assert_eq!(rendered, "elephant");
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Re-export commonly used items in prelude
pub mod prelude {
    //! Convenient re-exports of commonly used types and traits.
    //!
    //! This prelude provides quick access to the most commonly needed types:
    //!
    //! - **Context**: Frames and the render-time frame stack
    //! - **Invocation**: Tag call sites and lazy body expansion
    //! - **Tags**: The tag trait, registry, and built-in tags
    //! - **Errors**: Error handling types
    //!
    //! # Example
    //!
    //! ```rust
    //! use snippet_params::prelude::*;
    //!
    //! let context = RenderContext::new()
    //!     .with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", "elephant"));
    //! let registry = TagRegistry::with_builtins();
    //!
    //! let mut invocation = TagInvocation::new("snippet:if_var").with_attr("name", "animal");
    //! assert_eq!(registry.render(&mut invocation, &context).unwrap(), "");
    //! ```

    // Attributes
    pub use crate::attributes::{is_truthy, Attributes};

    // Render context
    pub use crate::context::{Frame, RenderContext, SNIPPET_FRAME};

    // Error handling
    pub use crate::error::{TagError, TagResult};

    // Invocations
    pub use crate::invocation::{TagBody, TagInvocation};

    // Tag system
    pub use crate::tags::{
        IfVarTag, SnippetTag, TagAttrInfo, TagRegistry, UnlessVarTag, VarTag,
    };
}

// ============================================================================
// Core Modules
// ============================================================================

/// Tag attribute collections and value truthiness.
///
/// Attributes are the `name="value"` pairs on a tag or inclusion element.
/// Insertion order is preserved so diagnostics and serialized forms read
/// the way the author wrote them.
pub mod attributes;

/// The render-time inclusion stack.
///
/// This module provides [`RenderContext`](context::RenderContext), the stack of
/// [`Frame`](context::Frame)s the host engine maintains while expanding nested
/// inclusions, and the innermost-first lookup the tags resolve parameters with.
pub mod context;

/// Error types and result aliases for tag rendering.
///
/// This module provides the main [`TagError`](error::TagError) enum covering
/// usage errors (missing attributes, malformed patterns), dispatch misses,
/// and body expansion failures.
pub mod error;

/// Tag call sites and lazy body expansion.
///
/// A [`TagInvocation`](invocation::TagInvocation) carries the attributes
/// written on one tag occurrence plus an optional body callback, so
/// conditional tags can skip the body without paying to render it.
pub mod invocation;

// ============================================================================
// Tags
// ============================================================================

/// The tag trait, registry, and built-in tag implementations.
///
/// Hosts dispatch through [`TagRegistry`](tags::TagRegistry); custom tags
/// implement [`SnippetTag`](tags::SnippetTag) and register alongside the
/// built-ins.
pub mod tags;

// ============================================================================
// Version Information
// ============================================================================

/// Returns the current version of the crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
