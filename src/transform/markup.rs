//! Form control tags in JSP markup.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `<input>`, `<select>`, `<textarea>` and their `aui:` taglib forms.
///
/// Scriptlets and nested taglib calls such as `<portlet:namespace />` may
/// appear inside attribute values and do not end the tag.
static FORM_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<(aui:)?(?:input|select|textarea)\b(?:<%.*?%>|<[a-z-]+:[^>]*>|[^>])*>")
        .unwrap()
});

/// Rewrite each form control tag. `rewrite` receives the whole tag and
/// whether it is an `aui:` taglib tag, and returns `None` to keep it.
pub fn rewrite_form_tags<F>(content: &str, rewrite: F) -> String
where
    F: Fn(&str, bool) -> Option<String>,
{
    FORM_TAG
        .replace_all(content, |caps: &Captures| {
            rewrite(&caps[0], caps.get(1).is_some()).unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(content: &str) -> Vec<(String, bool)> {
        FORM_TAG
            .captures_iter(content)
            .map(|caps| (caps[0].to_owned(), caps.get(1).is_some()))
            .collect()
    }

    #[test]
    fn test_form_tags() {
        let jsp = r#"<input type="text" /><aui:select name="s"></aui:select><textarea rows="2"></textarea><inputs>"#;
        assert_eq!(
            tags(jsp),
            vec![
                (r#"<input type="text" />"#.to_owned(), false),
                (r#"<aui:select name="s">"#.to_owned(), true),
                (r#"<textarea rows="2">"#.to_owned(), false),
            ]
        );
    }

    #[test]
    fn test_nested_scriptlets_do_not_end_tag() {
        let jsp = r#"<input name="<portlet:namespace />q" value="<%= a > b %>" />"#;
        assert_eq!(tags(jsp), vec![(jsp.to_owned(), false)]);
    }
}
