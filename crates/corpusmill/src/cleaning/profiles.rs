//! # Cleaning Profiles
//!
//! The two corpus families use divergent rule sets, so they are kept as
//! separate named profiles rather than merged; each corpus preset selects
//! exactly one.

use once_cell::sync::Lazy;

use crate::cleaning::Cleaner;

/// First line of the Austen ebook body; everything before it is front matter.
pub const GUTENBERG_START_MARKER: &str = "THE WORKS OF JANE AUSTEN";

/// Gutenberg footer line; everything from it onward is license boilerplate.
pub const GUTENBERG_END_MARKER: &str =
    "End of the Project Gutenberg EBook of The Complete Works of Jane Austen";

static RST_DOCUMENT: Lazy<Cleaner> = Lazy::new(|| {
    Cleaner::from_rules(&[
        // Preamble metadata fields and their indented continuation lines;
        // a field may be the last line of the text, with no newline.
        (
            r"(?m)^(?:Author|Status|Type|Content-Type|Created|Post-History|Version|Last-Modified):.*(?:\n|\z)(?:[ \t]+\S.*(?:\n|\z))*",
            "",
        ),
        // Image/figure directive blocks, through the next non-indented line
        // or the end of the text.
        (
            r"(?m)^\.\. (?:image|figure)::.*(?:\n|\z)(?:[ \t]+.*(?:\n|\z)|[ \t]*\n)*",
            "",
        ),
        // Bare literal-block markers.
        (r"(?m)^::[ \t]*$\n?", ""),
        // Emacs local-variables footer, through its end marker.
        (
            r"(?s)\n\.\.[ \t]*\n[ \t]+Local Variables:.*?End:[ \t]*\n?",
            "\n",
        ),
        // Copyright section heading and its following paragraph. Bounded at
        // the next blank line, not end-of-text: the same rules run over
        // per-document text and over a concatenated multi-document blob, and
        // one document's copyright section must not swallow its successors.
        (r"(?m)^Copyright\n=+\n(?:[ \t]*\n)*(?:[ \t]*\S.*\n?)*", ""),
        // Collapse leading blank-line runs to a single newline.
        (r"\A(?:[ \t]*\n){2,}", "\n"),
        // Collapse trailing blank-line runs to a single newline.
        (r"(?:[ \t]*\n){2,}[ \t]*\z", "\n"),
    ])
    .expect("static cleaning rules must compile")
});

static GUTENBERG_EBOOK: Lazy<Cleaner> = Lazy::new(|| {
    let start = regex::escape(GUTENBERG_START_MARKER);
    let end = regex::escape(GUTENBERG_END_MARKER);
    Cleaner::from_rules(&[
        // Everything before the body start marker is Gutenberg front matter.
        (format!(r"(?s)\A.*?{start}").as_str(), GUTENBERG_START_MARKER),
        // Everything from the license footer onward.
        (format!(r"(?s){end}.*\z").as_str(), ""),
        // Collapse leading blank-line runs to a single newline.
        (r"\A(?:[ \t]*\n){2,}", "\n"),
        // Collapse trailing blank-line runs to a single newline.
        (r"(?:[ \t]*\n){2,}[ \t]*\z", "\n"),
    ])
    .expect("static cleaning rules must compile")
});

/// Rules for RST-style specification documents (PEP corpora).
///
/// Strips preamble metadata fields, image/figure directives, literal-block
/// markers, the local-variables footer, and copyright sections, then
/// collapses blank-line runs at both ends of the text. Every rule is bounded
/// within a document, so the profile behaves the same whether applied per
/// document or to a concatenated blob.
pub fn rst_document() -> Cleaner {
    RST_DOCUMENT.clone()
}

/// Rules for Project Gutenberg ebooks (Austen corpus).
///
/// Cuts the text down to the window between the start and end markers, then
/// collapses blank-line runs at both ends.
pub fn gutenberg_ebook() -> Cleaner {
    GUTENBERG_EBOOK.clone()
}
