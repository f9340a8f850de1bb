//! Parameter Emission Tag
//!
//! Renders the value of a parameter passed to the snippet.

use tracing::debug;

use crate::context::{Frame, RenderContext};
use crate::error::TagResult;
use crate::invocation::TagInvocation;

use super::{SnippetTag, TagAttrInfo};

/// Emission tag: renders the value of the named parameter from the
/// nearest enclosing snippet frame.
///
/// When the parameter is missing the tag renders an inline diagnostic
/// naming the parameter, so a misspelled attribute shows up in the page
/// output instead of vanishing. Authors who want silence instead can
/// pass `missing="ignore"`.
#[derive(Debug, Clone, Default)]
pub struct VarTag;

impl VarTag {
    /// Create a new VarTag instance.
    pub fn new() -> Self {
        Self
    }
}

impl SnippetTag for VarTag {
    fn name(&self) -> &'static str {
        "snippet:var"
    }

    fn description(&self) -> &'static str {
        "Renders the value of a parameter passed to the snippet"
    }

    fn render(
        &self,
        invocation: &mut TagInvocation<'_>,
        context: &RenderContext,
    ) -> TagResult<String> {
        let name = invocation.require_attr("name")?;
        let frame = context.snippet_frame();

        match frame.and_then(|f| f.attr(&name)) {
            Some(value) => Ok(value.to_string()),
            None if invocation.attr("missing") == Some("ignore") => Ok(String::new()),
            None => {
                debug!(
                    parameter = %name,
                    in_snippet = frame.is_some(),
                    "snippet parameter not found"
                );
                Ok(missing_diagnostic(&name, frame))
            }
        }
    }

    fn examples(&self) -> Vec<&'static str> {
        vec![
            r#"<var name="animal" />"#,
            r#"<var name="animal" missing="ignore" />"#,
        ]
    }

    fn attributes(&self) -> Vec<TagAttrInfo> {
        vec![
            TagAttrInfo::new("name", "Snippet parameter to render").required(),
            TagAttrInfo::new("missing", r#"Set to "ignore" to render nothing when the parameter is absent"#),
        ]
    }
}

/// Builds the inline text emitted when the parameter cannot be found.
/// The wording shifts with how much we know about the call site.
fn missing_diagnostic(name: &str, frame: Option<&Frame>) -> String {
    match frame {
        Some(f) => match f.attr("name") {
            Some(snippet) => {
                format!("Could not find parameter '{name}' in snippet '{snippet}'.")
            }
            None => format!("Could not find parameter '{name}' in the current snippet."),
        },
        None => format!("Could not find parameter '{name}': no enclosing snippet."),
    }
}
