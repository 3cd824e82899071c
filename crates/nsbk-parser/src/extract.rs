//! Tree extraction, the core walk
//!
//! A `<DL>` list expresses folder membership by sibling adjacency rather
//! than containment: a folder is an `<H3>` heading whose `<DL>` of children
//! follows it as the next element sibling. The walk scans one list left to
//! right, classifies each element child, and pairs headings with their list
//! via lookahead before recursing.

use markup5ever_rcdom::Handle;

use crate::ParseError;
use crate::dom::{attribute, element_name, node_text};
use crate::model::BookmarkItem;

/// Extract the ordered entries of one `<DL>` element.
///
/// Output order equals source document order. A failure while extracting a
/// nested folder aborts the whole walk; no partial list is returned.
pub(crate) fn extract_items(list: &Handle) -> Result<Vec<BookmarkItem>, ParseError> {
    let mut items = Vec::new();
    let children = list.children.borrow();
    let mut idx = 0;

    while idx < children.len() {
        let child = &children[idx];
        idx += 1;

        let Some(tag) = element_name(child) else {
            continue; // text and comment nodes between entries
        };

        match tag {
            "a" => items.push(bookmark_item(child)),
            // Attributes on a separator rule carry no meaning
            "hr" => items.push(BookmarkItem::Separator),
            "h3" => {
                let name = node_text(child);
                let mut folder_children = Vec::new();

                // The folder's list is the next element sibling, if that
                // sibling is a <DL> at all. Any other element leaves the
                // folder empty and stays in the scan.
                if let Some((list_idx, sibling)) = next_element(&children, idx) {
                    if element_name(sibling) == Some("dl") {
                        folder_children =
                            extract_items(sibling).map_err(|source| ParseError::Structure {
                                folder: name.clone(),
                                source: Box::new(source),
                            })?;
                        // Consumed as children; do not rescan as a sibling.
                        idx = list_idx + 1;
                    }
                }

                items.push(BookmarkItem::Folder {
                    name,
                    id: attribute(child, "id"),
                    add_date: attribute(child, "add_date"),
                    last_modified: attribute(child, "last_modified"),
                    children: folder_children,
                });
            }
            // Anything else contributes no entry and does not stop the scan.
            _ => {}
        }
    }

    Ok(items)
}

/// Build a bookmark entry from an `<A>` element.
fn bookmark_item(link: &Handle) -> BookmarkItem {
    BookmarkItem::Bookmark {
        name: node_text(link),
        href: attribute(link, "href"),
        tags: attribute(link, "tags"),
        id: attribute(link, "id"),
        add_date: attribute(link, "add_date"),
        last_modified: attribute(link, "last_modified"),
        icon: attribute(link, "icon"),
        icon_uri: attribute(link, "icon_uri"),
    }
}

/// First element node at or after `start`, with its position.
fn next_element(children: &[Handle], start: usize) -> Option<(usize, &Handle)> {
    children[start..]
        .iter()
        .enumerate()
        .find(|(_, node)| element_name(node).is_some())
        .map(|(offset, node)| (start + offset, node))
}
