//! Input preprocessing
//!
//! Netscape exports lean on `<DT>` and `<p>` tags that are conventionally
//! left unclosed. Fed to an HTML5 parser as-is, those open tags swallow the
//! entries that follow them, turning siblings into descendants and hiding
//! the real list structure. Stripping the tags before the parse keeps every
//! entry a direct child of its `<DL>`, so the extractor can rely on sibling
//! order alone.

/// Layout-only tags removed before parsing, in every case variant.
///
/// `</dt>` is not stripped: the format never closes definition terms, and
/// a stray close tag does not disturb the tree shape.
const STRIPPED_TAGS: &[&str] = &[
    "<p>", "<P>", "</p>", "</P>",
    "<dt>", "<dT>", "<Dt>", "<DT>",
];

/// Remove layout-only tags by literal substring replacement.
///
/// This is a textual pass, not a structural one: the listed substrings are
/// removed wherever they occur, including inside attribute values or plain
/// text. Real exports never put them there.
pub fn strip_layout_tags(html: &str) -> String {
    let mut content = html.to_owned();
    for tag in STRIPPED_TAGS {
        content = content.replace(tag, "");
    }
    content
}
