//! Turn `handler:` in button configs into `on: {click: ...}`.
//!
//! AlloyUI 2 buttons take event listeners through `on`. Only properties
//! inside a `buttons: [...]` array are rewritten. The handler value is a
//! `function (...) {...}` expression or a dotted name, optionally called
//! (`A.bind(fn, this)`).

use regex::Regex;
use std::sync::LazyLock;

use super::scan::matching_close;
use super::{Transform, TransformError};
use crate::core::FileType;

static BUTTONS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bbuttons\s*:\s*\[").unwrap());

static HANDLER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bhandler\s*:\s*").unwrap());

static FUNCTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^function\b").unwrap());

static CALLEE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][\w$]*(?:\s*\.\s*[A-Za-z_$][\w$]*)*").unwrap()
});

#[derive(Debug, Clone, Copy, Default)]
pub struct ChangeHandlerToOnClick;

impl Transform for ChangeHandlerToOnClick {
    fn name(&self) -> &'static str {
        "change-handler-to-on-click"
    }

    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError> {
        if context == FileType::Unknown {
            return Ok(content.to_owned());
        }

        rewrite_span(content, 0, content.len())
    }
}

/// Rewrite button handlers within `from..to`. Handler values are rewritten
/// too, since a handler body may build its own buttons.
fn rewrite_span(content: &str, from: usize, to: usize) -> Result<String, TransformError> {
    let mut out = String::with_capacity(to - from);
    let mut last = from;
    let mut pos = from;

    while let Some(buttons) = BUTTONS.find_at(content, pos).filter(|b| b.end() <= to) {
        let open = buttons.end() - 1;
        let close = matching_close(content, open)?;
        pos = close + 1;

        let mut cursor = open + 1;
        while let Some(handler) = HANDLER.find_at(content, cursor).filter(|h| h.end() <= close) {
            cursor = handler.end();
            let Some(value_end) = handler_value_end(content, handler.end(), close)? else {
                continue;
            };

            out.push_str(&content[last..handler.start()]);
            out.push_str("on: {click: ");
            out.push_str(&rewrite_span(content, handler.end(), value_end)?);
            out.push('}');
            last = value_end;
            cursor = value_end;
        }
    }

    out.push_str(&content[last..to]);
    Ok(out)
}

/// End offset (exclusive) of the handler value starting at `start`, or
/// `None` when the value is not a shape this rule understands.
fn handler_value_end(
    content: &str,
    start: usize,
    limit: usize,
) -> Result<Option<usize>, TransformError> {
    let rest = &content[start..limit];

    if FUNCTION.is_match(rest) {
        let Some(brace) = rest.find('{') else {
            return Ok(None);
        };
        return matching_close(content, start + brace).map(|close| Some(close + 1));
    }

    let Some(callee) = CALLEE.find(rest) else {
        return Ok(None);
    };
    let after = start + callee.end();
    let tail = &content[after..limit];
    let trimmed = tail.trim_start();

    if trimmed.starts_with('(') {
        let paren = after + (tail.len() - trimmed.len());
        return matching_close(content, paren).map(|close| Some(close + 1));
    }

    Ok(Some(after))
}
