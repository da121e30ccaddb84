//! Replace AlloyUI modules that were removed or renamed in AlloyUI 2.
//!
//! Module names are only looked for where modules are loaded:
//!
//! - the string arguments of `.use(...)` before the callback
//! - `requires: [...]` arrays of module definitions
//! - `use="..."` attributes such as `<aui:script use="a,b">`
//!
//! Inside those spans, a quoted literal holding one name or a comma
//! separated list has each deprecated name swapped for its successor.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::scan::matching_close;
use super::{Transform, TransformError};
use crate::core::FileType;

/// Deprecated module and its successor.
const DEPRECATED_MODULES: &[(&str, &str)] = &[
    ("aui-autocomplete", "aui-autocomplete-deprecated"),
    ("aui-delayed-task", "aui-delayed-task-deprecated"),
    ("aui-dialog", "liferay-util-window"),
    ("aui-dialog-iframe", "aui-dialog-iframe-deprecated"),
    ("aui-io-plugin", "aui-io-plugin-deprecated"),
    ("aui-live-search", "aui-live-search-deprecated"),
    ("aui-loading-mask", "aui-loading-mask-deprecated"),
    ("aui-nested-list", "aui-sortable-list"),
    ("aui-overlay-context", "aui-overlay-context-deprecated"),
    ("aui-overlay-context-panel", "aui-overlay-context-panel-deprecated"),
    ("aui-overlay-manager", "aui-overlay-manager-deprecated"),
    ("aui-overlay-mask", "aui-overlay-mask-deprecated"),
    ("aui-panel", "aui-panel-deprecated"),
    ("aui-resize", "aui-resize-deprecated"),
    ("aui-textboxlist", "aui-textboxlist-deprecated"),
];

static MODULE_LIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"'([\w-]+(?:\s*,\s*[\w-]+)*)'|"([\w-]+(?:\s*,\s*[\w-]+)*)""#).unwrap()
});

static MODULE_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w-]+").unwrap());

static USE_CALL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.use\s*\(").unwrap());

static REQUIRES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\brequires\s*:\s*\[").unwrap());

static USE_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\buse\s*=\s*(?:'[^']*'|"[^"]*")"#).unwrap());

/// Start of the `use` callback. Module names come before it.
static CALLBACK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bfunction\b|=>").unwrap());

#[derive(Debug, Clone, Copy, Default)]
pub struct HandleDeprecatedModules;

impl Transform for HandleDeprecatedModules {
    fn name(&self) -> &'static str {
        "handle-deprecated-modules"
    }

    fn process(&self, content: &str, context: FileType) -> Result<String, TransformError> {
        if context == FileType::Unknown {
            return Ok(content.to_owned());
        }

        let mut out = String::with_capacity(content.len());
        let mut last = 0;
        for (start, end) in module_spans(content)? {
            if start < last {
                continue;
            }
            out.push_str(&content[last..start]);
            out.push_str(&rename_modules(&content[start..end]));
            last = end;
        }
        out.push_str(&content[last..]);

        Ok(out)
    }
}

/// Byte ranges that may hold module names, sorted by start.
fn module_spans(content: &str) -> Result<Vec<(usize, usize)>, TransformError> {
    let mut spans = Vec::new();

    for call in USE_CALL.find_iter(content) {
        let open = call.end() - 1;
        let close = matching_close(content, open)?;
        let end = CALLBACK
            .find_at(content, open + 1)
            .map_or(close, |callback| callback.start().min(close));
        spans.push((open + 1, end));
    }

    for requires in REQUIRES.find_iter(content) {
        let open = requires.end() - 1;
        spans.push((open + 1, matching_close(content, open)?));
    }

    for attribute in USE_ATTRIBUTE.find_iter(content) {
        spans.push((attribute.start(), attribute.end()));
    }

    spans.sort_unstable();
    Ok(spans)
}

fn rename_modules(span: &str) -> String {
    MODULE_LIST
        .replace_all(span, |caps: &Captures| {
            let (quote, list) = match caps.get(1) {
                Some(list) => ('\'', list.as_str()),
                None => ('"', &caps[2]),
            };
            let list = MODULE_NAME.replace_all(list, |name: &Captures| {
                successor(&name[0]).unwrap_or(&name[0]).to_owned()
            });
            format!("{quote}{list}{quote}")
        })
        .into_owned()
}

fn successor(module: &str) -> Option<&'static str> {
    DEPRECATED_MODULES
        .iter()
        .find(|(old, _)| *old == module)
        .map(|&(_, new)| new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(content: &str, context: FileType) -> String {
        HandleDeprecatedModules.process(content, context).unwrap()
    }

    #[test]
    fn test_use_arguments() {
        let js = "AUI().use('aui-base', 'aui-dialog', \"aui-io-plugin\", function(A) {});";
        assert_eq!(
            run(js, FileType::Css),
            "AUI().use('aui-base', 'liferay-util-window', \"aui-io-plugin-deprecated\", function(A) {});"
        );
    }

    #[test]
    fn test_comma_separated_use_attribute() {
        let jsp = r#"<aui:script use="aui-base, aui-loading-mask,aui-panel">"#;
        assert_eq!(
            run(jsp, FileType::Jsp),
            r#"<aui:script use="aui-base, aui-loading-mask-deprecated,aui-panel-deprecated">"#
        );
    }

    #[test]
    fn test_exact_names_only() {
        let js = "A.use('aui-dialog-iframe', 'aui-panel-foo', 'my aui-dialog');";
        assert_eq!(
            run(js, FileType::Css),
            "A.use('aui-dialog-iframe-deprecated', 'aui-panel-foo', 'my aui-dialog');"
        );
    }

    #[test]
    fn test_literals_outside_module_contexts_untouched() {
        let js = r#"var name = 'aui-dialog';
var mask = '<div class="aui-loading-mask"></div>';
AUI().use('aui-dialog', function(A) {
    A.one('#x').setData('aui-panel');
});"#;
        assert_eq!(
            run(js, FileType::Css),
            r#"var name = 'aui-dialog';
var mask = '<div class="aui-loading-mask"></div>';
AUI().use('liferay-util-window', function(A) {
    A.one('#x').setData('aui-panel');
});"#
        );
    }

    #[test]
    fn test_arrow_callback_ends_module_list() {
        let js = "YUI().use('aui-panel', A => A.use(\"aui-resize\"), 'aui-dialog');";
        assert_eq!(
            run(js, FileType::Css),
            "YUI().use('aui-panel-deprecated', A => A.use(\"aui-resize-deprecated\"), 'aui-dialog');"
        );
    }

    #[test]
    fn test_unbalanced_use_call() {
        assert_eq!(
            HandleDeprecatedModules.process("A.use('aui-dialog', function(A) {", FileType::Css),
            Err(TransformError::Unbalanced { open: '(', line: 1 })
        );
    }

    #[test]
    fn test_idempotent() {
        let js = "requires: ['aui-overlay-manager', 'aui-nested-list']";
        let once = run(js, FileType::Css);
        assert_eq!(
            once,
            "requires: ['aui-overlay-manager-deprecated', 'aui-sortable-list']"
        );
        assert_eq!(run(&once, FileType::Css), once);
    }

    #[test]
    fn test_unknown_context_untouched() {
        assert_eq!(run("'aui-dialog'", FileType::Unknown), "'aui-dialog'");
    }
}
