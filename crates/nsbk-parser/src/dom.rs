//! Minimal node access layer over the parsed document
//!
//! The walk needs four capabilities from the document builder's node type:
//! element tag name, attribute lookup, child iteration, and descendant
//! text. The first, second, and fourth live here; child iteration is the
//! `children` vector on the node itself. Keeping the `NodeData` matching
//! in one place lets the extraction logic read in terms of the bookmark
//! format rather than the parser library.

use markup5ever_rcdom::{Handle, NodeData};

/// Tag name of an element node, or `None` for text, comments, and other
/// non-element nodes. html5ever lowercases HTML tag names during tree
/// construction, so comparisons against lowercase literals are exact.
pub(crate) fn element_name(node: &Handle) -> Option<&str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// Attribute value by lowercase name; empty when the attribute is absent.
///
/// Attribute names are already case-normalized by html5ever, the value is
/// returned verbatim. An absent attribute and an empty one are the same
/// thing to the bookmark model, so both come back as `""`.
pub(crate) fn attribute(node: &Handle, name: &str) -> String {
    if let NodeData::Element { attrs, .. } = &node.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == name {
                return attr.value.to_string();
            }
        }
    }
    String::new()
}

/// Concatenated text of all descendant text nodes in document order,
/// trimmed at both ends.
pub(crate) fn node_text(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text.trim().to_owned()
}

fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        NodeData::Element { .. } => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use html5ever::parse_document;
    use html5ever::tendril::TendrilSink;
    use markup5ever_rcdom::RcDom;

    fn first_named(node: &Handle, tag: &str) -> Option<Handle> {
        if element_name(node) == Some(tag) {
            return Some(node.clone());
        }
        for child in node.children.borrow().iter() {
            if let Some(found) = first_named(child, tag) {
                return Some(found);
            }
        }
        None
    }

    fn parse_doc(html: &str) -> Handle {
        parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .expect("in-memory parse cannot fail")
            .document
    }

    #[test]
    fn test_element_names_are_lowercased() {
        let doc = parse_doc(r#"<A HREF="https://example.com">x</A>"#);
        assert!(first_named(&doc, "a").is_some());
        assert!(first_named(&doc, "A").is_none());
    }

    #[test]
    fn test_non_elements_have_no_name() {
        let doc = parse_doc("plain text");
        assert_eq!(element_name(&doc), None); // document node
    }

    #[test]
    fn test_attribute_names_are_case_normalized() {
        let doc = parse_doc(r#"<a HREF="https://example.com" ADD_DATE="123">x</a>"#);
        let link = first_named(&doc, "a").unwrap();
        assert_eq!(attribute(&link, "href"), "https://example.com");
        assert_eq!(attribute(&link, "add_date"), "123");
    }

    #[test]
    fn test_absent_attribute_is_empty() {
        let doc = parse_doc("<a>x</a>");
        let link = first_named(&doc, "a").unwrap();
        assert_eq!(attribute(&link, "href"), "");
    }

    #[test]
    fn test_node_text_spans_nested_markup() {
        let doc = parse_doc("<h3>  Reading <em>list</em> 2024  </h3>");
        let heading = first_named(&doc, "h3").unwrap();
        assert_eq!(node_text(&heading), "Reading list 2024");
    }

    #[test]
    fn test_node_text_skips_comments() {
        let doc = parse_doc("<h3>Before<!-- noise -->After</h3>");
        let heading = first_named(&doc, "h3").unwrap();
        assert_eq!(node_text(&heading), "BeforeAfter");
    }
}
