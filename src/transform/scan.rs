//! Bracket matching over script text.
//!
//! String literals (`'`, `"`, `` ` ``) and `//`, `/* */` comments are
//! skipped. Template literal substitutions and regex literals are not
//! understood.

use std::ops::ControlFlow;

use super::TransformError;

/// Index of the bracket closing the one at `open`.
///
/// `open` must point at `(`, `[` or `{`.
pub fn matching_close(src: &str, open: usize) -> Result<usize, TransformError> {
    let mut expected: Vec<u8> = Vec::new();
    let mut close = None;

    walk(src.as_bytes(), open, |i, b| {
        match b {
            b'(' | b'[' | b'{' => expected.push(closing(b)),
            b')' | b']' | b'}' => {
                if expected.pop() != Some(b) {
                    return ControlFlow::Break(());
                }
                if expected.is_empty() {
                    close = Some(i);
                    return ControlFlow::Break(());
                }
            }
            _ => {}
        }
        ControlFlow::Continue(())
    });

    close.ok_or_else(|| unbalanced(src, open))
}

/// Whether `pos` sits directly inside the bracket at `open`, outside any
/// nested bracket, string or comment.
pub fn is_top_level(src: &str, open: usize, pos: usize) -> bool {
    let mut depth = 0usize;
    let mut top_level = false;

    walk(src.as_bytes(), open + 1, |i, b| {
        if i >= pos {
            top_level = i == pos && depth == 0;
            return ControlFlow::Break(());
        }
        match b {
            b'(' | b'[' | b'{' => depth += 1,
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
        ControlFlow::Continue(())
    });

    top_level
}

/// Visit every byte outside strings and comments, starting at `start`.
fn walk(bytes: &[u8], start: usize, mut visit: impl FnMut(usize, u8) -> ControlFlow<()>) {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            quote @ (b'\'' | b'"' | b'`') => i = skip_string(bytes, i, quote),
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_until(bytes, i + 2, b"\n"),
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_until(bytes, i + 2, b"*/"),
            b => {
                if visit(i, b).is_break() {
                    return;
                }
            }
        }
        i += 1;
    }
}

/// Index of the closing quote, or the end of input.
fn skip_string(bytes: &[u8], open: usize, quote: u8) -> usize {
    let mut i = open + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Index of the last byte of `end`, or the end of input.
fn skip_until(bytes: &[u8], from: usize, end: &[u8]) -> usize {
    bytes
        .get(from..)
        .and_then(|rest| rest.windows(end.len()).position(|w| w == end))
        .map_or(bytes.len(), |p| from + p + end.len() - 1)
}

const fn closing(open: u8) -> u8 {
    match open {
        b'(' => b')',
        b'[' => b']',
        _ => b'}',
    }
}

fn unbalanced(src: &str, open: usize) -> TransformError {
    TransformError::Unbalanced {
        open: char::from(src.as_bytes()[open]),
        line: line_of(src, open),
    }
}

/// 1-based line number of a byte offset.
pub fn line_of(src: &str, offset: usize) -> usize {
    src.as_bytes()[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_close_nested() {
        let src = "f({a: [1, 2], b: {c: 3}}) + 1";
        assert_eq!(matching_close(src, 1), Ok(24));
        assert_eq!(matching_close(src, 2), Ok(23));
        assert_eq!(&src[6..matching_close(src, 6).unwrap() + 1], "[1, 2]");
    }

    #[test]
    fn test_matching_close_skips_strings_and_comments() {
        let src = r#"{ a: '}', b: "]\"}", c: `)`, // }
 d: /* } */ 1 }"#;
        assert_eq!(matching_close(src, 0), Ok(src.len() - 1));
    }

    #[test]
    fn test_matching_close_unterminated() {
        let src = "x\ny = {\n a: [1, 2\n}";
        assert_eq!(
            matching_close(src, 6),
            Err(TransformError::Unbalanced { open: '{', line: 2 })
        );
    }

    #[test]
    fn test_matching_close_mismatched() {
        assert_eq!(
            matching_close("(]", 0),
            Err(TransformError::Unbalanced { open: '(', line: 1 })
        );
    }

    #[test]
    fn test_is_top_level() {
        let src = "{title: 'x', body: {title: 'y'}, s: 'title'}";
        let outer = src.find("title").unwrap();
        let inner = src.rfind("{title").unwrap() + 1;
        let quoted = src.rfind("title").unwrap();

        assert!(is_top_level(src, 0, outer));
        assert!(!is_top_level(src, 0, inner));
        assert!(!is_top_level(src, 0, quoted));
    }

    #[test]
    fn test_line_of() {
        let src = "a\nb\nc";
        assert_eq!(line_of(src, 0), 1);
        assert_eq!(line_of(src, 2), 2);
        assert_eq!(line_of(src, 4), 3);
    }
}
