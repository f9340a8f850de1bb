//! Inverted Conditional Render Tag
//!
//! Renders its body only when the named parameter is absent.

use crate::context::RenderContext;
use crate::error::TagResult;
use crate::invocation::TagInvocation;

use super::condition::parameter_is_set;
use super::{SnippetTag, TagAttrInfo};

/// Inverted conditional-render tag: expands its body only when the
/// named parameter is *not* set on the nearest enclosing snippet frame.
#[derive(Debug, Clone, Default)]
pub struct UnlessVarTag;

impl UnlessVarTag {
    /// Create a new UnlessVarTag instance.
    pub fn new() -> Self {
        Self
    }
}

impl SnippetTag for UnlessVarTag {
    fn name(&self) -> &'static str {
        "snippet:unless_var"
    }

    fn description(&self) -> &'static str {
        "The opposite of the if_var tag: renders the containing elements only if the parameter is absent"
    }

    fn render(
        &self,
        invocation: &mut TagInvocation<'_>,
        context: &RenderContext,
    ) -> TagResult<String> {
        if parameter_is_set(invocation, context)? {
            Ok(String::new())
        } else {
            invocation.expand()
        }
    }

    fn examples(&self) -> Vec<&'static str> {
        vec![r#"<unless_var name="animal">No animal was given.</unless_var>"#]
    }

    fn attributes(&self) -> Vec<TagAttrInfo> {
        vec![
            TagAttrInfo::new("name", "Snippet parameter to test").required(),
            TagAttrInfo::new(
                "matches",
                "Regular expression the whole parameter value must match",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Frame, SNIPPET_FRAME};
    use crate::error::TagError;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn test_expands_body_when_parameter_is_absent() {
        let tag = UnlessVarTag::new();
        let context = RenderContext::new().with_frame(Frame::new(SNIPPET_FRAME));

        let mut body = || -> TagResult<String> { Ok("fallback content".to_string()) };
        let mut invocation = TagInvocation::new("snippet:unless_var")
            .with_attr("name", "animal")
            .with_body(&mut body);

        assert_eq!(tag.render(&mut invocation, &context).unwrap(), "fallback content");
    }

    #[test]
    fn test_skips_body_when_parameter_is_set() {
        let tag = UnlessVarTag::new();
        let context = RenderContext::new()
            .with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", "elephant"));

        let calls = Cell::new(0u32);
        let mut body = || -> TagResult<String> {
            calls.set(calls.get() + 1);
            Ok("never rendered".to_string())
        };
        let mut invocation = TagInvocation::new("snippet:unless_var")
            .with_attr("name", "animal")
            .with_body(&mut body);

        assert_eq!(tag.render(&mut invocation, &context).unwrap(), "");
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_invalid_pattern_is_an_error_not_an_expansion() {
        let tag = UnlessVarTag::new();
        let context = RenderContext::new().with_frame(Frame::new(SNIPPET_FRAME));

        // A broken pattern must never read as "condition false" and
        // silently render the body.
        let mut invocation = TagInvocation::new("snippet:unless_var")
            .with_attr("name", "animal")
            .with_attr("matches", "(unclosed");
        assert!(matches!(
            tag.render(&mut invocation, &context),
            Err(TagError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_pattern_invalid_only_before_anchoring_still_errors() {
        let tag = UnlessVarTag::new();
        let context = RenderContext::new()
            .with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", "elephant"));

        // ")(" compiles once wrapped in the anchor group, where it
        // would read as a non-match and render the body.
        let calls = Cell::new(0u32);
        let mut body = || -> TagResult<String> {
            calls.set(calls.get() + 1);
            Ok("never rendered".to_string())
        };
        let mut invocation = TagInvocation::new("snippet:unless_var")
            .with_attr("name", "animal")
            .with_attr("matches", ")(")
            .with_body(&mut body);

        assert!(matches!(
            tag.render(&mut invocation, &context),
            Err(TagError::InvalidPattern { .. })
        ));
        assert_eq!(calls.get(), 0);
    }
}
