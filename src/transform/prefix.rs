//! Drop the `aui-` prefix from CSS classes.
//!
//! AlloyUI 2 ships its styles without the prefix. Module names such as
//! `'aui-base'` are not class references and are left alone.

use super::class::rewrite_classes;
use super::{Transform, TransformError};
use crate::core::FileType;

const PREFIX: &str = "aui-";

#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveAuiCssPrefix;

impl Transform for RemoveAuiCssPrefix {
    fn name(&self) -> &'static str {
        "remove-aui-css-prefix"
    }

    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError> {
        Ok(rewrite_classes(content, context, strip_prefix))
    }
}

fn strip_prefix(class: &str) -> Option<String> {
    class
        .strip_prefix(PREFIX)
        .filter(|rest| !rest.is_empty())
        .map(str::to_owned)
}
