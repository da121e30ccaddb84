//! Replace `A.Dialog` with `A.Modal`.
//!
//! When the constructor receives an object literal, its top-level `title`
//! becomes `headerContent` and its `buttons` array moves into the footer
//! toolbar.

use regex::Regex;
use std::sync::LazyLock;

use super::scan::{is_top_level, matching_close};
use super::{Transform, TransformError};
use crate::core::FileType;

static NEW_DIALOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bnew\s+A\.Dialog\s*\(").unwrap());

static TITLE_KEY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\btitle\s*:").unwrap());

static BUTTONS_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bbuttons\s*:\s*\[").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplaceAuiDialog;

impl Transform for ReplaceAuiDialog {
    fn name(&self) -> &'static str {
        "replace-aui-dialog"
    }

    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError> {
        if context == FileType::Unknown {
            return Ok(content.to_owned());
        }

        rewrite_span(content, 0, content.len())
    }
}

/// Rewrite every dialog constructed within `from..to`.
///
/// Offsets stay relative to the whole file so errors report real lines.
fn rewrite_span(content: &str, from: usize, to: usize) -> Result<String, TransformError> {
    let mut out = String::with_capacity(to - from);
    let mut last = from;
    let mut pos = from;

    while let Some(dialog) = NEW_DIALOG.find_at(content, pos).filter(|d| d.end() <= to) {
        out.push_str(&content[last..dialog.start()]);
        out.push_str("new A.Modal(");
        last = dialog.end();
        pos = dialog.end();

        let rest = &content[dialog.end()..to];
        let trimmed = rest.trim_start();
        if !trimmed.starts_with('{') {
            continue;
        }

        let open = dialog.end() + (rest.len() - trimmed.len());
        let close = matching_close(content, open)?;
        out.push_str(&content[last..open]);
        out.push_str(&rewrite_config(content, open, close)?);
        last = close + 1;
        pos = last;
    }

    out.push_str(&content[last..to]);
    Ok(out)
}

/// Rewrite the object literal spanning `open..=close`, including any
/// dialogs nested inside it.
fn rewrite_config(content: &str, open: usize, close: usize) -> Result<String, TransformError> {
    let config = &content[..=close];
    let mut edits: Vec<(usize, usize, Option<usize>)> = Vec::new();

    for title in TITLE_KEY.find_iter(config) {
        if title.start() > open && is_top_level(content, open, title.start()) {
            edits.push((title.start(), title.end(), None));
        }
    }

    for buttons in BUTTONS_KEY.find_iter(config) {
        if buttons.start() > open && is_top_level(content, open, buttons.start()) {
            let bracket = buttons.end() - 1;
            let end = matching_close(content, bracket)? + 1;
            edits.push((buttons.start(), end, Some(bracket)));
        }
    }

    edits.sort_by_key(|&(start, _, _)| start);

    let mut out = String::with_capacity(close + 1 - open + 32);
    let mut last = open;
    for (start, end, array) in edits {
        if start < last {
            continue;
        }
        out.push_str(&rewrite_span(content, last, start)?);
        match array {
            Some(bracket) => {
                let array = rewrite_span(content, bracket, end)?;
                out.push_str(&format!("toolbars: {{footer: {array}}}"));
            }
            None => out.push_str("headerContent:"),
        }
        last = end;
    }
    out.push_str(&rewrite_span(content, last, close + 1)?);

    Ok(out)
}
