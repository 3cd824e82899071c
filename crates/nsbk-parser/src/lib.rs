//! Netscape bookmark file parsing
//!
//! Converts the legacy `NETSCAPE-Bookmark-file-1` export format into a
//! typed hierarchy of bookmarks, folders, and separators. The format is
//! permissive HTML that leaves `<DT>` entries unclosed and pairs every
//! folder heading with the *sibling* `<DL>` after it, so the pipeline is:
//! strip layout-only tags, parse leniently with html5ever, locate the root
//! `<DL>`, then walk it into [`BookmarkItem`]s.
//!
//! ```
//! let items = nsbk_parser::parse(
//!     r#"<DL><DT><A HREF="https://example.com">Example</A></DL>"#,
//! )?;
//! assert_eq!(items.len(), 1);
//! # Ok::<(), nsbk_parser::ParseError>(())
//! ```

mod dom;
mod extract;
mod locate;
mod model;
mod preprocess;

pub use model::BookmarkItem;
pub use preprocess::strip_layout_tags;

use std::io::{self, Read};

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::RcDom;

/// Errors that terminate a conversion run.
///
/// Absence of bookmarks is not among them: a document with no root list
/// parses successfully to an empty result.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input byte stream could not be read to the end
    #[error("failed to read input")]
    InputRead(#[source] io::Error),

    /// The document builder rejected the preprocessed text
    #[error("failed to parse HTML content")]
    DocumentParse(#[source] io::Error),

    /// Extraction of a nested folder failed; no partial output is kept
    #[error("parsing children for folder '{folder}'")]
    Structure {
        folder: String,
        source: Box<ParseError>,
    },
}

/// Parse a bookmark document into its top-level entries.
///
/// Entries come back in document order. A document without any bookmark
/// list is a legitimate empty export: the result is `Ok` with an empty
/// vector, not an error.
pub fn parse(html: &str) -> Result<Vec<BookmarkItem>, ParseError> {
    let stripped = preprocess::strip_layout_tags(html);

    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut stripped.as_bytes())
        .map_err(ParseError::DocumentParse)?;

    let Some(root) = locate::find_root_list(&dom.document) else {
        tracing::debug!("no root <dl> element, treating as an empty export");
        return Ok(Vec::new());
    };

    let items = extract::extract_items(&root)?;
    tracing::debug!("extracted {} top-level items", items.len());
    Ok(items)
}

/// Read an entire byte stream and parse it as a bookmark document.
///
/// The input is buffered in full before any processing; exports are small,
/// human-curated data. Invalid UTF-8 degrades to replacement characters
/// rather than failing the run.
pub fn parse_from_reader(mut reader: impl Read) -> Result<Vec<BookmarkItem>, ParseError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(ParseError::InputRead)?;
    parse(&String::from_utf8_lossy(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_and_str_paths_agree() {
        let html = r#"<DL><DT><A HREF="https://example.com">Example</A></DL>"#;
        let from_str = parse(html).unwrap();
        let from_reader = parse_from_reader(html.as_bytes()).unwrap();
        assert_eq!(from_str, from_reader);
    }

    #[test]
    fn test_invalid_utf8_is_decoded_leniently() {
        let mut bytes = b"<DL><DT><A HREF=\"https://example.com\">Ex".to_vec();
        bytes.push(0xFF); // stray byte, not valid UTF-8
        bytes.extend_from_slice(b"ample</A></DL>");

        let items = parse_from_reader(bytes.as_slice()).unwrap();
        assert_eq!(items.len(), 1);
        let BookmarkItem::Bookmark { name, .. } = &items[0] else {
            panic!("expected a bookmark");
        };
        assert_eq!(name, "Ex\u{FFFD}ample");
    }

    #[test]
    fn test_read_failures_surface_as_input_errors() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk unplugged"))
            }
        }

        let err = parse_from_reader(FailingReader).unwrap_err();
        assert!(matches!(err, ParseError::InputRead(_)));
    }
}
