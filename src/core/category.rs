//! File type classification.

/// Semantic file type a transformer can branch on.
///
/// Derived purely from the file extension. `Css` doubles as the context
/// for `.js` files, so rules should read it as "not markup" rather than
/// "stylesheet".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    /// Stylesheets and scripts (`.css`, `.js`)
    Css,
    /// JSP pages (`.jsp`)
    Jsp,
    /// JSP fragments (`.jspf`)
    Jspf,
    /// Anything else
    Unknown,
}

/// Extension to file type table. `js` maps to `Css` on purpose.
const FILE_TYPES: &[(&str, FileType)] = &[
    ("css", FileType::Css),
    ("js", FileType::Css),
    ("jsp", FileType::Jsp),
    ("jspf", FileType::Jspf),
];

impl FileType {
    /// Classify an extension (case-insensitive, without the leading dot).
    ///
    /// Total: unmatched extensions yield `Unknown`.
    pub fn classify(extension: &str) -> Self {
        FILE_TYPES
            .iter()
            .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
            .map_or(Self::Unknown, |&(_, kind)| kind)
    }

    /// JSP pages and fragments carry HTML markup with attributes.
    #[inline]
    pub fn is_markup(self) -> bool {
        matches!(self, Self::Jsp | Self::Jspf)
    }
}
