//! Replace the legacy field classes carried by form controls.
//!
//! AlloyUI 1.x styled controls with `field-input-*` classes (what is left
//! of `aui-field-input-*` once the prefix is dropped). AlloyUI 2 uses a
//! single `field` class. Markup only.

use super::class::map_class_list;
use super::markup::rewrite_form_tags;
use super::{Transform, TransformError};
use crate::core::FileType;
use regex::{Captures, Regex};
use std::sync::LazyLock;

const FIELD_CLASSES: &[&str] = &[
    "field-input",
    "field-input-choice",
    "field-input-select",
    "field-input-text",
    "field-input-textarea",
];

const FIELD_CLASS: &str = "field";

static INPUT_CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s(?:class|cssClass|inputCssClass)\s*=\s*)(?:'([^']*)'|"([^"]*)")"#).unwrap()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceInputCssClass;

impl Transform for ReplaceInputCssClass {
    fn name(&self) -> &'static str {
        "replace-input-css-class"
    }

    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError> {
        if !context.is_markup() {
            return Ok(content.to_owned());
        }

        Ok(rewrite_form_tags(content, |tag, _| {
            let rewritten = INPUT_CLASS_ATTRIBUTE.replace_all(tag, |caps: &Captures| {
                let (quote, value) = match caps.get(2) {
                    Some(value) => ('\'', value.as_str()),
                    None => ('"', &caps[3]),
                };
                match map_class_list(value, &field_class) {
                    Some(value) => format!("{}{quote}{value}{quote}", &caps[1]),
                    None => caps[0].to_owned(),
                }
            });
            (rewritten != tag).then(|| rewritten.into_owned())
        }))
    }
}

fn field_class(class: &str) -> Option<String> {
    FIELD_CLASSES
        .contains(&class)
        .then(|| FIELD_CLASS.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str, context: FileType) -> String {
        ReplaceInputCssClass.process(content, context).unwrap()
    }

    #[test]
    fn test_plain_input() {
        let jsp = r#"<input class="field-input field-input-text" type="text" name="q" />"#;
        assert_eq!(
            run(jsp, FileType::Jsp),
            r#"<input class="field" type="text" name="q" />"#
        );
    }

    #[test]
    fn test_taglib_input() {
        let jsp = r#"<aui:input cssClass="lfr-input field-input-choice" name="agree" type="checkbox" />"#;
        assert_eq!(
            run(jsp, FileType::Jspf),
            r#"<aui:input cssClass="lfr-input field" name="agree" type="checkbox" />"#
        );
    }

    #[test]
    fn test_outside_form_tags_untouched() {
        let jsp = r#"<div class="field-input"><select class='field-input-select'></select></div>"#;
        assert_eq!(
            run(jsp, FileType::Jsp),
            r#"<div class="field-input"><select class='field'></select></div>"#
        );
    }

    #[test]
    fn test_non_markup_untouched() {
        let js = r#"'<input class="field-input" />'"#;
        assert_eq!(run(js, FileType::Css), js);
    }

    #[test]
    fn test_idempotent() {
        let jsp = r#"<textarea class="field-input-textarea field"></textarea>"#;
        let once = run(jsp, FileType::Jsp);
        assert_eq!(once, r#"<textarea class="field"></textarea>"#);
        assert_eq!(run(&once, FileType::Jsp), once);
    }
}
