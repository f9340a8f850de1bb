//! Shared condition evaluation for `if_var` / `unless_var`.

use regex::Regex;

use crate::attributes::is_truthy;
use crate::context::RenderContext;
use crate::error::{TagError, TagResult};
use crate::invocation::TagInvocation;

/// Decide whether the parameter named by the invocation is set.
///
/// Requires `name` first (usage errors win over everything else), then
/// reads the parameter off the nearest enclosing snippet frame. With a
/// `matches` attribute the parameter counts as set only when it exists
/// and the full-string-anchored pattern matches it; the pattern is
/// compiled whenever present, so a syntax error surfaces even for an
/// absent parameter. Without `matches`, plain truthiness applies.
pub(crate) fn parameter_is_set(
    invocation: &TagInvocation<'_>,
    context: &RenderContext,
) -> TagResult<bool> {
    let name = invocation.require_attr("name")?;
    let value = context.snippet_frame().and_then(|frame| frame.attr(&name));

    match invocation.attr("matches") {
        Some(pattern) => {
            let re = anchored(pattern)?;
            Ok(value.is_some_and(|v| re.is_match(v)))
        }
        None => Ok(value.is_some_and(is_truthy)),
    }
}

/// Compile a user-supplied pattern anchored to the full string.
///
/// Wrapped as `^(?:pattern)$`; the non-capturing group keeps
/// alternations anchored (`a|b` would otherwise read as `^a` or `b$`).
/// The pattern is validated exactly as written first: wrapping can turn
/// a syntax error into something that compiles (`)(` reads as
/// `^(?:)()$` once wrapped) and hide the failure behind an ordinary
/// match result.
fn anchored(pattern: &str) -> TagResult<Regex> {
    Regex::new(pattern).map_err(|source| TagError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;
    Regex::new(&format!("^(?:{pattern})$")).map_err(|source| TagError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Frame, SNIPPET_FRAME};

    fn elephant_context() -> RenderContext {
        RenderContext::new()
            .with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", "elephant"))
    }

    #[test]
    fn test_present_parameter_is_set() {
        let invocation = TagInvocation::new("snippet:if_var").with_attr("name", "animal");
        assert!(parameter_is_set(&invocation, &elephant_context()).unwrap());
    }

    #[test]
    fn test_absent_parameter_is_not_set() {
        let invocation = TagInvocation::new("snippet:if_var").with_attr("name", "color");
        assert!(!parameter_is_set(&invocation, &elephant_context()).unwrap());
    }

    #[test]
    fn test_no_snippet_frame_reads_as_not_set() {
        let invocation = TagInvocation::new("snippet:if_var").with_attr("name", "animal");
        assert!(!parameter_is_set(&invocation, &RenderContext::new()).unwrap());
    }

    #[test]
    fn test_blank_and_false_values_are_not_set() {
        for value in ["", "   ", "false", "False"] {
            let context = RenderContext::new()
                .with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", value));
            let invocation = TagInvocation::new("snippet:if_var").with_attr("name", "animal");
            assert!(
                !parameter_is_set(&invocation, &context).unwrap(),
                "value {value:?} should not count as set"
            );
        }
    }

    #[test]
    fn test_matches_is_anchored_to_the_full_string() {
        let context = elephant_context();

        let full = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", ".le(?:ph|f)ant");
        assert!(parameter_is_set(&full, &context).unwrap());

        // A substring match is not enough
        let partial = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", "eleph");
        assert!(!parameter_is_set(&partial, &context).unwrap());

        let other = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", "^zebra$");
        assert!(!parameter_is_set(&other, &context).unwrap());
    }

    #[test]
    fn test_alternations_stay_anchored() {
        let invocation = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", "zebra|elephant");
        assert!(parameter_is_set(&invocation, &elephant_context()).unwrap());

        // "elephant" ends with "ant"; naive `^zebra|ant$` would match it
        let loose = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", "zebra|ant");
        assert!(!parameter_is_set(&loose, &elephant_context()).unwrap());
    }

    #[test]
    fn test_matches_treats_empty_value_as_matchable_text() {
        let context =
            RenderContext::new().with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", ""));
        let invocation = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", ".*");
        assert!(parameter_is_set(&invocation, &context).unwrap());
    }

    #[test]
    fn test_invalid_pattern_is_an_error_not_a_non_match() {
        let invocation = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", "(unclosed");
        assert!(matches!(
            parameter_is_set(&invocation, &elephant_context()),
            Err(TagError::InvalidPattern { ref pattern, .. }) if pattern == "(unclosed"
        ));
    }

    #[test]
    fn test_invalid_pattern_errors_even_when_parameter_absent() {
        let invocation = TagInvocation::new("snippet:if_var")
            .with_attr("name", "color")
            .with_attr("matches", "(unclosed");
        assert!(matches!(
            parameter_is_set(&invocation, &elephant_context()),
            Err(TagError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_wrapping_cannot_mask_an_invalid_pattern() {
        // ")(" fails to compile as written even though the anchored
        // form "^(?:)()$" compiles and matches the empty string.
        let invocation = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", ")(");
        assert!(matches!(
            parameter_is_set(&invocation, &elephant_context()),
            Err(TagError::InvalidPattern { ref pattern, .. }) if pattern == ")("
        ));

        let empty_value =
            RenderContext::new().with_frame(Frame::new(SNIPPET_FRAME).with_attr("animal", ""));
        let invocation = TagInvocation::new("snippet:if_var")
            .with_attr("name", "animal")
            .with_attr("matches", ")(");
        assert!(matches!(
            parameter_is_set(&invocation, &empty_value),
            Err(TagError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_missing_name_fails_before_any_lookup() {
        let invocation = TagInvocation::new("snippet:if_var").with_attr("matches", "(unclosed");
        assert!(matches!(
            parameter_is_set(&invocation, &elephant_context()),
            Err(TagError::MissingAttribute { .. })
        ));
    }
}
