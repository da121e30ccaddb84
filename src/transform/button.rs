//! Replace AlloyUI 1.x button classes with their `btn` equivalents.

use super::class::rewrite_classes;
use super::{Transform, TransformError};
use crate::core::FileType;

const BUTTON_CLASSES: &[(&str, &str)] = &[
    ("button-input", "btn"),
    ("button-input-cancel", "btn btn-link"),
    ("button-input-submit", "btn btn-primary"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceSelectorButton;

impl Transform for ReplaceSelectorButton {
    fn name(&self) -> &'static str {
        "replace-selector-button"
    }

    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError> {
        Ok(rewrite_classes(content, context, button_classes))
    }
}

fn button_classes(class: &str) -> Option<String> {
    BUTTON_CLASSES
        .iter()
        .find(|(old, _)| *old == class)
        .map(|(_, new)| (*new).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str, context: FileType) -> String {
        ReplaceSelectorButton.process(content, context).unwrap()
    }

    #[test]
    fn test_selectors() {
        let js = "A.all('.button-input-submit, .button-input').on('click', fn);";
        assert_eq!(
            run(js, FileType::Css),
            "A.all('.btn.btn-primary, .btn').on('click', fn);"
        );
    }

    #[test]
    fn test_markup_collapses_duplicates() {
        let jsp = r#"<input class="button-input button-input-submit" type="submit" />"#;
        assert_eq!(
            run(jsp, FileType::Jsp),
            r#"<input class="btn btn-primary" type="submit" />"#
        );
    }

    #[test]
    fn test_prefixed_class_not_matched() {
        let css = ".aui-button-input { }";
        assert_eq!(run(css, FileType::Css), css);
    }

    #[test]
    fn test_idempotent() {
        let jsp = r##"<a class="button-input-cancel" href="#">Cancel</a>"##;
        let once = run(jsp, FileType::Jsp);
        assert_eq!(once, r##"<a class="btn btn-link" href="#">Cancel</a>"##);
        assert_eq!(run(&once, FileType::Jsp), once);
    }
}
