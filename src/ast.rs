//! The SVG document tree.

use crate::error::CleanError;

/// A complete SVG document.
#[derive(Debug, Clone)]
pub struct Document {
    /// XML declaration (e.g., `<?xml version="1.0" encoding="UTF-8"?>`)
    pub xml_declaration: Option<XmlDeclaration>,
    /// DOCTYPE declaration
    pub doctype: Option<String>,
    /// The root SVG element
    pub root: Element,
}

/// XML declaration attributes.
#[derive(Debug, Clone)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<bool>,
}

/// An SVG/XML element: tag name, attributes, child nodes.
///
/// An element owns its children outright, so tree mutation only ever goes
/// through `&mut` during traversal.
#[derive(Debug, Clone)]
pub struct Element {
    pub name: QName,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// A qualified name (possibly with namespace prefix).
///
/// Prefixes are kept exactly as written in the source, so namespace
/// declarations stay on the element that declared them and descendants rely
/// on inherited scope.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    /// Namespace prefix (e.g., "svg", "xlink")
    pub prefix: Option<String>,
    /// Local name (e.g., "rect", "href")
    pub local: String,
}

impl QName {
    pub fn new(local: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: local.into(),
        }
    }

    /// Parse a qualified name from a string like "prefix:local" or just "local".
    pub fn parse(s: &str) -> Self {
        match s.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix.to_string()),
                local: local.to_string(),
            },
            None => Self::new(s),
        }
    }

    /// Compare against a full name ("prefix:local" or "local") without allocating.
    pub fn matches(&self, name: &str) -> bool {
        match &self.prefix {
            Some(p) => name
                .strip_prefix(p.as_str())
                .and_then(|rest| rest.strip_prefix(':'))
                .is_some_and(|rest| rest == self.local),
            None => name == self.local,
        }
    }

    /// The full name as a string.
    pub fn full_name(&self) -> String {
        match &self.prefix {
            Some(p) => format!("{}:{}", p, self.local),
            None => self.local.clone(),
        }
    }
}

/// An attribute on an element.
#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: QName::parse(&name),
            value: value.into(),
        }
    }
}

/// A node in the document tree.
///
/// Text (including inter-element whitespace) is preserved verbatim; the
/// cleaner rewrites attributes, not content.
#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
    ProcessingInstruction {
        target: String,
        content: Option<String>,
    },
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: QName::new(name),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by exact (full) name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name.matches(name))
            .map(|a| a.value.as_str())
    }

    /// Set an attribute value, replacing any existing attribute of that name.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        if let Some(attr) = self.attributes.iter_mut().find(|a| a.name.matches(name)) {
            attr.value = value.into();
        } else {
            self.attributes.push(Attribute::new(name, value));
        }
    }

    /// Remove an attribute by exact name. No-op if the element doesn't have it.
    pub fn remove_attr(&mut self, name: &str) {
        self.attributes.retain(|a| !a.name.matches(name));
    }

    /// Check if this element has a specific local (namespace-stripped) name.
    pub fn is(&self, name: &str) -> bool {
        self.name.local == name
    }

    /// Iterate over child elements only (skip text, comments, etc.).
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Iterate over child elements mutably.
    pub fn child_elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }
}

impl Document {
    /// Visit every element depth-first, root first, children in document order.
    pub fn for_each_element_mut(&mut self, mut f: impl FnMut(&mut Element)) {
        fn visit(elem: &mut Element, f: &mut impl FnMut(&mut Element)) {
            f(elem);
            for child in elem.child_elements_mut() {
                visit(child, f);
            }
        }
        visit(&mut self.root, &mut f);
    }

    /// Fallible traversal: stops at the first error and propagates it.
    pub fn try_for_each_element_mut(
        &mut self,
        mut f: impl FnMut(&mut Element) -> Result<(), CleanError>,
    ) -> Result<(), CleanError> {
        fn visit(
            elem: &mut Element,
            f: &mut impl FnMut(&mut Element) -> Result<(), CleanError>,
        ) -> Result<(), CleanError> {
            f(elem)?;
            for child in elem.child_elements_mut() {
                visit(child, f)?;
            }
            Ok(())
        }
        visit(&mut self.root, &mut f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qname_matches() {
        assert!(QName::parse("x").matches("x"));
        assert!(QName::parse("xlink:href").matches("xlink:href"));
        assert!(!QName::parse("xlink:href").matches("href"));
        assert!(!QName::parse("href").matches("xlink:href"));
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut elem = Element::new("rect");
        elem.set_attr("x", "1");
        elem.set_attr("x", "2");
        assert_eq!(elem.attributes.len(), 1);
        assert_eq!(elem.get_attr("x"), Some("2"));
    }

    #[test]
    fn test_traversal_order() {
        let mut doc = Document {
            xml_declaration: None,
            doctype: None,
            root: Element::new("svg"),
        };
        let mut g = Element::new("g");
        g.children.push(Node::Element(Element::new("rect")));
        doc.root.children.push(Node::Element(g));
        doc.root.children.push(Node::Element(Element::new("circle")));

        let mut seen = Vec::new();
        doc.for_each_element_mut(|e| seen.push(e.name.local.clone()));
        assert_eq!(seen, ["svg", "g", "rect", "circle"]);
    }
}
