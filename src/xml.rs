//! Minimal markup tree and an indenting serializer.
//!
//! Nodes of the document model append [`Element`]s to a parent, and the
//! finished tree is written out by [`to_string`]. Values are escaped but
//! otherwise passed through verbatim.

use crate::{
    constants::XML_DECLARATION,
    error::{Error, Result},
};
use std::{fmt::Write, str::FromStr};

/// A single markup element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Sets an attribute, replacing the value in place if the key already exists.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a new child element and returns it for further population.
    pub fn sub_element(&mut self, name: impl Into<String>) -> &mut Element {
        self.children.push(Element::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// First direct child with the given name.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn find_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }
}

/// Indentation unit used per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

impl FromStr for Indent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("tab") {
            return Ok(Indent::Tab);
        }
        s.parse::<usize>()
            .map(Indent::Spaces)
            .map_err(|_| Error::IndentParseError(s.to_string()))
    }
}

/// Output options for [`to_string`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XmlStyle {
    pub indent: Indent,
    pub declaration: bool,
}

impl Default for XmlStyle {
    fn default() -> Self {
        Self { indent: Indent::Tab, declaration: true }
    }
}

/// Serializes `root` as indented markup terminated by a newline.
pub fn to_string(root: &Element, style: &XmlStyle) -> String {
    let mut out = String::new();
    if style.declaration {
        out.push_str(XML_DECLARATION);
        out.push('\n');
    }
    write_element(&mut out, root, &style.indent.unit(), 0);
    out
}

fn write_element(out: &mut String, element: &Element, unit: &str, depth: usize) {
    let pad = unit.repeat(depth);
    out.push_str(&pad);
    out.push('<');
    out.push_str(&element.name);
    for (key, value) in &element.attributes {
        // Writing into a String cannot fail.
        let _ = write!(out, " {}=\"{}\"", key, escape_attribute(value));
    }

    let has_text = element.text.as_deref().is_some_and(|t| !t.is_empty());
    if element.children.is_empty() && !has_text {
        out.push_str("/>\n");
        return;
    }
    out.push('>');

    if let Some(text) = element.text.as_deref() {
        out.push_str(&escape_text(text));
    }

    if element.children.is_empty() {
        let _ = writeln!(out, "</{}>", element.name);
        return;
    }

    out.push('\n');
    for child in &element.children {
        write_element(out, child, unit, depth + 1);
    }
    let _ = writeln!(out, "{}</{}>", pad, element.name);
}

fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\n' => escaped.push_str("&#10;"),
            '\r' => escaped.push_str("&#13;"),
            '\t' => escaped.push_str("&#09;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
