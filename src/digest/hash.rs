//! Content hashing using blake3.
//!
//! Used only as a fast equality check between the text read from disk and
//! the text produced by a pipeline. Not a security boundary.

/// A 256-bit content hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Create a new ContentHash from raw bytes.
    #[inline]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Hash a piece of text.
    pub fn of(content: &str) -> Self {
        Self::new(*blake3::hash(content.as_bytes()).as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_equality() {
        let a = ContentHash::of(".aui-helper-hidden { display: none; }");
        let b = ContentHash::of(".aui-helper-hidden { display: none; }");
        let c = ContentHash::of(".hide { display: none; }");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_content_hash_empty_text() {
        assert_eq!(ContentHash::of(""), ContentHash::of(""));
        assert_ne!(ContentHash::of(""), ContentHash::of(" "));
    }
}
