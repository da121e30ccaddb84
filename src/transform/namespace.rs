//! Prefix plain form field names with the portlet namespace.
//!
//! Portlet requests only see parameters carrying the portlet namespace.
//! `aui:` taglib fields add it themselves, plain HTML fields need
//! `<portlet:namespace />` in front of their literal `name`. Markup only.

use regex::Regex;
use std::sync::LazyLock;

use super::markup::rewrite_form_tags;
use super::{Transform, TransformError};
use crate::core::FileType;

const NAMESPACE_TAG: &str = "<portlet:namespace />";

static NAME_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\sname\s*=\s*)(?:'([^']*)'|"([^"]*)")"#).unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct AddNamespaceInput;

impl Transform for AddNamespaceInput {
    fn name(&self) -> &'static str {
        "add-namespace-input"
    }

    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError> {
        if !context.is_markup() {
            return Ok(content.to_owned());
        }

        Ok(rewrite_form_tags(content, |tag, is_taglib| {
            if is_taglib {
                return None;
            }
            let caps = NAME_ATTRIBUTE.captures(tag)?;
            let (quote, value) = match caps.get(2) {
                Some(value) => ('\'', value),
                None => ('"', caps.get(3)?),
            };
            if !is_literal_name(value.as_str()) {
                return None;
            }

            let attribute = caps.get(0)?;
            Some(format!(
                "{}{}{quote}{NAMESPACE_TAG}{}{quote}{}",
                &tag[..attribute.start()],
                &caps[1],
                value.as_str(),
                &tag[attribute.end()..],
            ))
        }))
    }
}

/// A name made only of identifier characters, `.`, `[` and `]`.
fn is_literal_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '[' | ']'))
}
