//! Class-name rewriting shared by the class based rules.
//!
//! A class map turns one old class into a space separated list of new
//! classes, or `None` to keep it. The map is applied in three places:
//!
//! - selectors (`.old`) anywhere in the text
//! - string literals handed to `addClass`-style calls or assigned to
//!   `cssClass` / `iconClass` / `className` in scripts
//! - class-bearing attributes, in markup only

use regex::{Captures, Regex};
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

use crate::core::FileType;

static SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(-?[_a-zA-Z][_a-zA-Z0-9-]*)").unwrap());

static CLASS_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b((?:add|remove|has|toggle|replace)Class\s*\()([^()]*)(\))").unwrap()
});

static CLASS_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"\b((?:cssClass|iconClass)\s*:\s*|className\s*[:=]\s*)(?:'([^'\\\n]*)'|"([^"\\\n]*)")"#,
    )
    .unwrap()
});

static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'([^'\\\n]*)'|"([^"\\\n]*)""#).unwrap());

static CLASS_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(\s(?:class|cssClass|iconCssClass|inputCssClass|wrapperCssClass)\s*=\s*)(?:'([^']*)'|"([^"]*)")"#,
    )
    .unwrap()
});

/// Scriptlets and EL expressions are opaque, everything else splits on whitespace.
static CLASS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<%.*?%>|\$\{.*?\}|\S+").unwrap());

/// Apply `map` to every class reference in `content`.
pub fn rewrite_classes<F>(content: &str, context: FileType, map: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if context == FileType::Unknown {
        return content.to_owned();
    }

    let content = rewrite_selectors(content, &map);
    let content = rewrite_script_literals(&content, &map);

    if context.is_markup() {
        rewrite_attributes(&content, &map)
    } else {
        content
    }
}

/// `.old` selectors become `.new1.new2`.
fn rewrite_selectors<F>(content: &str, map: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    SELECTOR
        .replace_all(content, |caps: &Captures| match map(&caps[1]) {
            Some(classes) => classes
                .split_whitespace()
                .map(|class| format!(".{class}"))
                .collect(),
            None => caps[0].to_owned(),
        })
        .into_owned()
}

fn rewrite_script_literals<F>(content: &str, map: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let content = CLASS_CALL.replace_all(content, |caps: &Captures| {
        let args = STRING_LITERAL.replace_all(&caps[2], |lit: &Captures| {
            rewrite_quoted(lit, map).unwrap_or_else(|| lit[0].to_owned())
        });
        format!("{}{}{}", &caps[1], args, &caps[3])
    });

    CLASS_PROPERTY
        .replace_all(&content, |caps: &Captures| {
            match rewrite_quoted_at(caps, 2, map) {
                Some(literal) => format!("{}{literal}", &caps[1]),
                None => caps[0].to_owned(),
            }
        })
        .into_owned()
}

fn rewrite_attributes<F>(content: &str, map: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    CLASS_ATTRIBUTE
        .replace_all(content, |caps: &Captures| {
            match rewrite_quoted_at(caps, 2, map) {
                Some(value) => format!("{}{value}", &caps[1]),
                None => caps[0].to_owned(),
            }
        })
        .into_owned()
}

/// Rewrite a literal matched by `STRING_LITERAL`.
fn rewrite_quoted<F>(caps: &Captures, map: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    rewrite_quoted_at(caps, 1, map)
}

/// Rewrite a literal whose single-quoted body is group `first` and whose
/// double-quoted body is group `first + 1`. Returns the literal with quotes.
fn rewrite_quoted_at<F>(caps: &Captures, first: usize, map: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let (quote, body) = match caps.get(first) {
        Some(body) => ('\'', body.as_str()),
        None => ('"', caps.get(first + 1)?.as_str()),
    };
    map_class_list(body, map).map(|list| format!("{quote}{list}{quote}"))
}

/// Map each plain class in a whitespace separated list.
///
/// Returns `None` when nothing was mapped. When something was, repeated
/// classes are dropped (first occurrence wins) and the original spacing is
/// kept around surviving tokens. Expressions pass through untouched.
pub fn map_class_list<F>(list: &str, map: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(list.len());
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut changed = false;
    let mut last = 0;

    for token in CLASS_TOKEN.find_iter(list) {
        let gap = &list[last..token.start()];
        last = token.end();

        if !is_plain_class(token.as_str()) {
            out.push_str(gap);
            out.push_str(token.as_str());
            continue;
        }

        let replacement = map(token.as_str());
        changed |= replacement.is_some();

        let mut gap = Some(gap);
        let classes = replacement.as_deref().unwrap_or(token.as_str());
        for class in classes.split_whitespace() {
            if seen.insert(class.to_owned()) {
                out.push_str(gap.take().unwrap_or(" "));
                out.push_str(class);
            }
        }
    }

    out.push_str(&list[last..]);
    changed.then_some(out)
}

fn is_plain_class(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo(class: &str) -> Option<String> {
        match class {
            "old" => Some("new".into()),
            "pair" => Some("one two".into()),
            _ => None,
        }
    }

    #[test]
    fn test_selectors_everywhere() {
        let css = ".old > .keep, a.pair:hover { color: red; }";
        assert_eq!(
            rewrite_classes(css, FileType::Css, demo),
            ".new > .keep, a.one.two:hover { color: red; }"
        );
    }

    #[test]
    fn test_script_class_calls() {
        let js = "node.addClass('old'); node.replaceClass(\"keep old\", 'pair'); x.add('old');";
        assert_eq!(
            rewrite_classes(js, FileType::Css, demo),
            "node.addClass('new'); node.replaceClass(\"keep new\", 'one two'); x.add('old');"
        );
    }

    #[test]
    fn test_script_class_properties() {
        let js = "{cssClass: 'old', iconClass: \"pair\", label: 'old'}; el.className = 'old';";
        assert_eq!(
            rewrite_classes(js, FileType::Css, demo),
            "{cssClass: 'new', iconClass: \"one two\", label: 'old'}; el.className = 'new';"
        );
    }

    #[test]
    fn test_attributes_only_in_markup() {
        let html = r#"<div class="keep old"><aui:button cssClass='pair' /></div>"#;
        assert_eq!(
            rewrite_classes(html, FileType::Jsp, demo),
            r#"<div class="keep new"><aui:button cssClass='one two' /></div>"#
        );
        assert_eq!(rewrite_classes(html, FileType::Css, demo), html);
    }

    #[test]
    fn test_attribute_name_must_stand_alone() {
        let html = r#"<div data-class="old"></div>"#;
        assert_eq!(rewrite_classes(html, FileType::Jspf, demo), html);
    }

    #[test]
    fn test_unknown_context_untouched() {
        let text = ".old { } addClass('old')";
        assert_eq!(rewrite_classes(text, FileType::Unknown, demo), text);
    }

    #[test]
    fn test_map_class_list_keeps_expressions() {
        assert_eq!(
            map_class_list("old <%= cssClass %> ${extra}", &demo).as_deref(),
            Some("new <%= cssClass %> ${extra}")
        );
    }

    #[test]
    fn test_map_class_list_dedupes_when_changed() {
        assert_eq!(map_class_list("new old", &demo).as_deref(), Some("new"));
        assert_eq!(map_class_list("keep  keep", &demo), None);
    }
}
