//! Minimal XML assembly for package parts
//!
//! Parts are small and written in one go, so they are built as strings
//! and handed to the zip writer whole. Elements follow each other without
//! indentation, the way Excel writes them.

use std::borrow::Cow;
use std::fmt::Display;

use quick_xml::escape::partial_escape;

/// Declaration at the top of every part
pub(crate) const XML_DECLARATION: &str =
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

/// Attribute list: name and value, written in order
pub(crate) type Attributes<'a> = &'a [(&'a str, &'a dyn Display)];

/// Escape text content: `&`, `<` and `>`
pub(crate) fn escape_data(data: &str) -> Cow<'_, str> {
    partial_escape(data)
}

/// Escape an attribute value: text escapes plus `"`
pub(crate) fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = partial_escape(value);
    if escaped.contains('"') {
        Cow::Owned(escaped.replace('"', "&quot;"))
    } else {
        escaped
    }
}

/// String-backed XML writer
#[derive(Debug)]
pub(crate) struct XmlWriter {
    buf: String,
}

impl XmlWriter {
    /// Start a part with the XML declaration
    pub(crate) fn new() -> Self {
        let mut buf = String::with_capacity(4096);
        buf.push_str(XML_DECLARATION);
        Self { buf }
    }

    /// `<tag a="1">`
    pub(crate) fn start_tag(&mut self, tag: &str, attributes: Attributes<'_>) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.push_attributes(attributes);
        self.buf.push('>');
    }

    /// `</tag>`
    pub(crate) fn end_tag(&mut self, tag: &str) {
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    /// `<tag a="1"/>`
    pub(crate) fn empty_tag(&mut self, tag: &str, attributes: Attributes<'_>) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.push_attributes(attributes);
        self.buf.push_str("/>");
    }

    /// `<tag a="1">data</tag>`
    pub(crate) fn data_element(&mut self, tag: &str, data: &str, attributes: Attributes<'_>) {
        self.start_tag(tag, attributes);
        self.buf.push_str(&escape_data(data));
        self.end_tag(tag);
    }

    /// The finished document
    pub(crate) fn into_string(self) -> String {
        self.buf
    }

    fn push_attributes(&mut self, attributes: Attributes<'_>) {
        for (name, value) in attributes {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_attribute(&value.to_string()));
            self.buf.push('"');
        }
    }
}
