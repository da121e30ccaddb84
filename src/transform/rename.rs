//! Rename AlloyUI 1.x helper, state and layout classes.
//!
//! Runs after the `aui-` prefix is gone, so the table holds bare names.
//! Width helpers map to the closest twelve column grid span.

use super::class::rewrite_classes;
use super::{Transform, TransformError};
use crate::core::FileType;

const RENAMED_CLASSES: &[(&str, &str)] = &[
    ("helper-clearfix", "clearfix"),
    ("helper-hidden", "hide"),
    ("helper-hidden-accessible", "hide-accessible"),
    ("helper-unselectable", "unselectable"),
    ("state-active", "active"),
    ("state-disabled", "disabled"),
    ("state-error", "error"),
    ("w10", "span1"),
    ("w15", "span2"),
    ("w20", "span2"),
    ("w25", "span3"),
    ("w30", "span4"),
    ("w33", "span4"),
    ("w35", "span4"),
    ("w40", "span5"),
    ("w45", "span5"),
    ("w50", "span6"),
    ("w55", "span7"),
    ("w60", "span7"),
    ("w65", "span8"),
    ("w66", "span8"),
    ("w70", "span8"),
    ("w75", "span9"),
    ("w80", "span10"),
    ("w85", "span10"),
    ("w90", "span11"),
    ("w95", "span11"),
    ("w100", "span12"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RenameCssClasses;

impl Transform for RenameCssClasses {
    fn name(&self) -> &'static str {
        "rename-css-classes"
    }

    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError> {
        Ok(rewrite_classes(content, context, renamed))
    }
}

fn renamed(class: &str) -> Option<String> {
    RENAMED_CLASSES
        .iter()
        .find(|(old, _)| *old == class)
        .map(|(_, new)| (*new).to_owned())
}
