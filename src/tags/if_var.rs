//! Conditional Render Tag
//!
//! Renders its body only when the snippet was called with the named
//! parameter.

use crate::context::RenderContext;
use crate::error::TagResult;
use crate::invocation::TagInvocation;

use super::condition::parameter_is_set;
use super::{SnippetTag, TagAttrInfo};

/// Conditional-render tag: expands its body only when the named
/// parameter is set on the nearest enclosing snippet frame.
#[derive(Debug, Clone, Default)]
pub struct IfVarTag;

impl IfVarTag {
    /// Create a new IfVarTag instance.
    pub fn new() -> Self {
        Self
    }
}

impl SnippetTag for IfVarTag {
    fn name(&self) -> &'static str {
        "snippet:if_var"
    }

    fn description(&self) -> &'static str {
        "Renders the containing elements only if the snippet was called with a certain parameter"
    }

    fn render(
        &self,
        invocation: &mut TagInvocation<'_>,
        context: &RenderContext,
    ) -> TagResult<String> {
        if parameter_is_set(invocation, context)? {
            invocation.expand()
        } else {
            Ok(String::new())
        }
    }

    fn examples(&self) -> Vec<&'static str> {
        vec![
            r#"In page "Home":           <snippet name="animal_info" animal="elephant" />"#,
            r#"In snippet "animal_info": <if_var name="animal">...</if_var>"#,
            r#"With a pattern:           <if_var name="animal" matches="ele.*">...</if_var>"#,
        ]
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
