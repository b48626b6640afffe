//! SVG serialization back to XML.

use crate::ast::*;

/// Serialize a Document to an SVG string.
///
/// Attributes are written in lexically sorted key order; elements with no
/// children self-close. Namespace declarations are ordinary attributes on
/// the element that carried them in the source, so nested descendants rely
/// on inherited scope rather than redeclaring.
pub fn serialize(doc: &Document) -> String {
    let mut out = String::new();

    if let Some(ref decl) = doc.xml_declaration {
        out.push_str("<?xml version=\"");
        out.push_str(&decl.version);
        out.push('"');
        if let Some(ref enc) = decl.encoding {
            out.push_str(" encoding=\"");
            out.push_str(enc);
            out.push('"');
        }
        if let Some(standalone) = decl.standalone {
            out.push_str(" standalone=\"");
            out.push_str(if standalone { "yes" } else { "no" });
            out.push('"');
        }
        out.push_str("?>\n");
    }

    if let Some(ref dt) = doc.doctype {
        out.push_str("<!DOCTYPE ");
        out.push_str(dt);
        out.push_str(">\n");
    }

    serialize_element(&mut out, &doc.root);
    out
}

fn serialize_element(out: &mut String, elem: &Element) {
    out.push('<');
    out.push_str(&elem.name.full_name());

    let mut attrs: Vec<_> = elem.attributes.iter().collect();
    attrs.sort_by(|a, b| a.name.full_name().cmp(&b.name.full_name()));

    for attr in attrs {
        out.push(' ');
        out.push_str(&attr.name.full_name());
        out.push_str("=\"");
        push_escaped_attr(out, &attr.value);
        out.push('"');
    }

    if elem.children.is_empty() {
        out.push_str(" />");
    } else {
        out.push('>');
        for child in &elem.children {
            serialize_node(out, child);
        }
        out.push_str("</");
        out.push_str(&elem.name.full_name());
        out.push('>');
    }
}

fn serialize_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(elem) => serialize_element(out, elem),
        Node::Text(text) => push_escaped_text(out, text),
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::CData(data) => {
            out.push_str("<![CDATA[");
            out.push_str(data);
            out.push_str("]]>");
        }
        Node::ProcessingInstruction { target, content } => {
            out.push_str("<?");
            out.push_str(target);
            if let Some(c) = content {
                out.push(' ');
                out.push_str(c);
            }
            out.push_str("?>");
        }
    }
}

fn push_escaped_attr(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn push_escaped_text(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_svg;

    #[test]
    fn test_serialize_sorts_attributes() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect y="2" x="1" width="3" /></svg>"#;
        let doc = parse_svg(svg).unwrap();
        let out = serialize(&doc);
        assert!(out.contains(r#"<rect width="3" x="1" y="2" />"#));
    }

    #[test]
    fn test_serialize_self_closes_empty() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><g></g></svg>"#;
        let doc = parse_svg(svg).unwrap();
        let out = serialize(&doc);
        assert!(out.contains("<g />"));
    }

    #[test]
    fn test_serialize_keeps_declaration_and_text() {
        let svg = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"><text>a &amp; b</text></svg>";
        let doc = parse_svg(svg).unwrap();
        let out = serialize(&doc);
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(out.contains("<text>a &amp; b</text>"));
    }
}
