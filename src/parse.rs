//! SVG parsing from XML.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::ast::*;
use crate::error::CleanError;

/// Parse an SVG string into a Document.
///
/// Malformed XML fails here, before any rewrite pass runs. Text nodes
/// (including inter-element whitespace) are kept verbatim.
pub fn parse_svg(svg: &str) -> Result<Document, CleanError> {
    let mut reader = Reader::from_str(svg);

    let mut xml_declaration = None;
    let mut doctype = None;
    let mut root: Option<Element> = None;
    // Open elements, innermost last
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Decl(decl) => {
                xml_declaration = Some(XmlDeclaration {
                    version: String::from_utf8_lossy(decl.version()?.as_ref()).into_owned(),
                    encoding: decl
                        .encoding()
                        .transpose()
                        .ok()
                        .flatten()
                        .map(|e| String::from_utf8_lossy(e.as_ref()).into_owned()),
                    standalone: decl.standalone().transpose().ok().flatten().map(|s| {
                        let s = String::from_utf8_lossy(s.as_ref());
                        s == "yes"
                    }),
                });
            }
            Event::DocType(dt) => {
                doctype = Some(String::from_utf8_lossy(&dt).into_owned());
            }
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(CleanError::InvalidSvg("Multiple root elements".into()));
                }
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let elem = element_from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(elem)),
                    None if root.is_none() => root = Some(elem),
                    None => return Err(CleanError::InvalidSvg("Multiple root elements".into())),
                }
            }
            Event::End(_) => {
                let elem = stack
                    .pop()
                    .ok_or_else(|| CleanError::InvalidSvg("Unbalanced closing tag".into()))?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(Node::Element(elem)),
                    None => root = Some(elem),
                }
            }
            Event::Text(text) => {
                // Text before/after the root element is insignificant
                if let Some(parent) = stack.last_mut() {
                    let text = text.unescape()?;
                    parent.children.push(Node::Text(text.into_owned()));
                }
            }
            Event::Comment(comment) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(Node::Comment(String::from_utf8_lossy(&comment).into_owned()));
                }
            }
            Event::CData(cdata) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .children
                        .push(Node::CData(String::from_utf8_lossy(&cdata).into_owned()));
                }
            }
            Event::PI(pi) => {
                if let Some(parent) = stack.last_mut() {
                    let content = String::from_utf8_lossy(&pi).into_owned();
                    let (target, rest) = content
                        .split_once(char::is_whitespace)
                        .map(|(t, r)| (t.to_string(), Some(r.to_string())))
                        .unwrap_or((content, None));
                    parent.children.push(Node::ProcessingInstruction {
                        target,
                        content: rest,
                    });
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(CleanError::InvalidSvg("Unexpected end of file".into()));
    }
    let root = root.ok_or_else(|| CleanError::InvalidSvg("No root element found".into()))?;

    Ok(Document {
        xml_declaration,
        doctype,
        root,
    })
}

fn element_from_start(start: &BytesStart) -> Result<Element, CleanError> {
    let name_bytes = start.name();
    let name = std::str::from_utf8(name_bytes.as_ref())?;

    let mut element = Element {
        name: QName::parse(name),
        attributes: Vec::new(),
        children: Vec::new(),
    };

    for attr in start.attributes() {
        let attr = attr.map_err(|e| CleanError::InvalidSvg(format!("Invalid attribute: {}", e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        element.attributes.push(Attribute {
            name: QName::parse(key),
            value: value.into_owned(),
        });
    }

    Ok(element)
}
