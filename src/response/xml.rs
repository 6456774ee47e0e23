// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Minimal XML walker built on `quick-xml`.

use std::collections::HashMap;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ParseError;

/// An element collected from a controller document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    attributes: HashMap<String, String>,
    text: String,
}

impl XmlElement {
    /// Returns an attribute value, if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Returns an attribute value or `default` when absent.
    #[must_use]
    pub fn attr_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attr(name).unwrap_or(default)
    }

    /// Returns the element's direct text content (empty for `<a/>`).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, ParseError> {
        let mut attributes = HashMap::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.insert(key, value);
        }
        Ok(Self {
            attributes,
            text: String::new(),
        })
    }
}

/// Walks a whole document and collects every element named `name`.
///
/// The entire document is validated even after matches are found: a
/// mismatched or missing end tag, a second root element, stray text outside
/// the root, or an empty document are all errors.
///
/// # Errors
///
/// Returns `ParseError::Xml` for errors reported by the reader and
/// `ParseError::Malformed` for structural problems it does not report.
///
/// # Examples
///
/// ```
/// use nice_blinds::response::collect_elements;
///
/// let xml = r#"<list><group num="1" enabled="1"/><group num="2"/></list>"#;
/// let groups = collect_elements(xml, "group").unwrap();
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].attr("num"), Some("1"));
/// assert_eq!(groups[1].attr("enabled"), None);
///
/// assert!(collect_elements("<list><group></list>", "group").is_err());
/// ```
pub fn collect_elements(xml: &str, name: &str) -> Result<Vec<XmlElement>, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut elements = Vec::new();
    // One entry per open element: the index of its collected record, if any.
    let mut open: Vec<Option<usize>> = Vec::new();
    let mut root_seen = false;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                check_root(&mut root_seen, open.is_empty())?;
                let slot = if start.local_name().as_ref() == name.as_bytes() {
                    elements.push(XmlElement::from_start(&start)?);
                    Some(elements.len() - 1)
                } else {
                    None
                };
                open.push(slot);
            }
            Event::Empty(start) => {
                check_root(&mut root_seen, open.is_empty())?;
                if start.local_name().as_ref() == name.as_bytes() {
                    elements.push(XmlElement::from_start(&start)?);
                }
            }
            Event::End(_) => {
                if open.pop().is_none() {
                    return Err(ParseError::Malformed("unexpected end tag".to_string()));
                }
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                push_text(&mut elements, &open, &text)?;
            }
            Event::CData(data) => {
                let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                push_text(&mut elements, &open, &text)?;
            }
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) | Event::Comment(_) => {}
        }
    }

    if !open.is_empty() {
        return Err(ParseError::Malformed(format!(
            "{} unclosed element(s) at end of document",
            open.len()
        )));
    }
    if !root_seen {
        return Err(ParseError::Malformed("no root element".to_string()));
    }

    Ok(elements)
}

fn check_root(root_seen: &mut bool, at_top_level: bool) -> Result<(), ParseError> {
    if at_top_level {
        if *root_seen {
            return Err(ParseError::Malformed(
                "junk after document element".to_string(),
            ));
        }
        *root_seen = true;
    }
    Ok(())
}

fn push_text(
    elements: &mut [XmlElement],
    open: &[Option<usize>],
    text: &str,
) -> Result<(), ParseError> {
    match open.last() {
        None if !text.trim().is_empty() => Err(ParseError::Malformed(
            "text outside of the root element".to_string(),
        )),
        Some(Some(index)) => {
            elements[*index].text.push_str(text);
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_nested_and_empty_forms() {
        let xml = r#"<?xml version="1.0"?>
            <root>
              <devices>
                <device adr="1" ept="01"/>
                <device adr="2" ept="02"></device>
              </devices>
            </root>"#;
        let devices = collect_elements(xml, "device").unwrap();
        assert_eq!(devices.len(), 2);
        assert_eq!(devices[1].attr("adr"), Some("2"));
    }

    #[test]
    fn collects_text() {
        let elements = collect_elements("<r><result>1</result></r>", "result").unwrap();
        assert_eq!(elements[0].text(), "1");

        let elements = collect_elements("<r><result/></r>", "result").unwrap();
        assert_eq!(elements[0].text(), "");
    }

    #[test]
    fn unescapes_attributes() {
        let elements = collect_elements(r#"<r><group desc="Up &amp; Down"/></r>"#, "group")
            .unwrap();
        assert_eq!(elements[0].attr("desc"), Some("Up & Down"));
    }

    #[test]
    fn root_element_can_match() {
        let elements = collect_elements("<result>0</result>", "result").unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].text(), "0");
    }

    #[test]
    fn rejects_mismatched_end_tag() {
        assert!(matches!(
            collect_elements("<a><b></a></b>", "b"),
            Err(ParseError::Xml(_))
        ));
    }

    #[test]
    fn rejects_unclosed_element() {
        assert!(matches!(
            collect_elements("<a><b>", "b"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_empty_document() {
        assert!(matches!(
            collect_elements("", "b"),
            Err(ParseError::Malformed(_))
        ));
        assert!(matches!(
            collect_elements("just text", "b"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn rejects_second_root() {
        assert!(matches!(
            collect_elements("<a/><a/>", "a"),
            Err(ParseError::Malformed(_))
        ));
    }

    #[test]
    fn attr_or_default() {
        let elements = collect_elements(r#"<r><device sta="02"/></r>"#, "device").unwrap();
        assert_eq!(elements[0].attr_or("sta", "00"), "02");
        assert_eq!(elements[0].attr_or("pos", "255"), "255");
    }
}
