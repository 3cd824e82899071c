//! Bookmark data model
//!
//! The three shapes a Netscape export can hold (link, folder heading,
//! separator rule) map onto the three variants of [`BookmarkItem`]. Using a
//! sum type keeps illegal combinations unrepresentable: a separator cannot
//! carry an href, a bookmark cannot carry children.

use serde::{Deserialize, Serialize};

/// A single entry in a bookmark hierarchy.
///
/// Serializes with an inline `"type"` discriminant. Attribute-backed fields
/// are plain strings where the empty string means "absent": the export
/// format gives no way to tell a missing attribute from an empty one, so
/// the model does not pretend to. The serializer omits empty fields and
/// empty child lists entirely; they never appear as `""`, `null`, or `[]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookmarkItem {
    /// A link entry (`<A>`)
    Bookmark {
        name: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        href: String,
        /// Comma-separated tag list, passed through verbatim (never split)
        #[serde(default, skip_serializing_if = "String::is_empty")]
        tags: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        id: String,
        /// Opaque date string, preserved exactly as exported
        #[serde(default, skip_serializing_if = "String::is_empty")]
        add_date: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        last_modified: String,
        /// Embedded icon data, usually a `data:` URI
        #[serde(default, skip_serializing_if = "String::is_empty")]
        icon: String,
        /// External icon URL
        #[serde(default, skip_serializing_if = "String::is_empty")]
        icon_uri: String,
    },
    /// A folder heading (`<H3>`) together with its nested entries
    Folder {
        name: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        id: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        add_date: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        last_modified: String,
        /// Child entries in document order; empty for an empty folder
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<BookmarkItem>,
    },
    /// A horizontal-rule separator (`<HR>`); carries no data
    Separator,
}
