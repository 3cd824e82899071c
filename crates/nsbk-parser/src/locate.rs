//! Root list discovery
//!
//! A well-formed export keeps its top-level entries in a single `<DL>`
//! directly under `<BODY>`. Exports in the wild sometimes wrap that list in
//! extra markup, so when the body has no direct `<DL>` child the whole
//! document is searched for the first one.

use markup5ever_rcdom::Handle;

use crate::dom::element_name;

/// Find the root `<DL>` element holding the top-level bookmark entries.
///
/// Primary rule: the first `<DL>` that is a direct child of `<BODY>`.
/// Fallback: the first `<DL>` anywhere in the document, depth-first.
/// `None` means the export has no bookmark list at all; callers treat that
/// as an empty result, not a failure.
pub(crate) fn find_root_list(document: &Handle) -> Option<Handle> {
    if let Some(body) = find_element(document, "body") {
        for child in body.children.borrow().iter() {
            if element_name(child) == Some("dl") {
                return Some(child.clone());
            }
        }
    }
    find_element(document, "dl")
}

/// Depth-first search for the first element with the given lowercase tag.
fn find_element(node: &Handle, tag: &str) -> Option<Handle> {
    if element_name(node) == Some(tag) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}
