//! Markup fragment parsing via quick-xml.
//!
//! Used for untrusted SVG fragments supplied through the icon map. The
//! input is wrapped in a synthetic root so a fragment with multiple
//! top-level nodes parses as one document.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::node::{Attrs, Element, Node};

/// Error parsing a markup fragment.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FragmentError {
    /// XML parsing error.
    #[error("XML parse error")]
    XmlParse(#[from] quick_xml::Error),

    /// Encoding error during XML parsing.
    #[error("encoding error")]
    Encoding(#[from] quick_xml::encoding::EncodingError),
}

/// Synthetic wrapper element so fragments parse as one document.
const WRAPPER_TAG: &str = "gfmc-fragment";

/// Parse a markup fragment into a list of top-level nodes.
///
/// # Errors
///
/// Returns an error if the fragment is not well-formed XML. Callers on the
/// sanitization path treat that as an empty fragment.
pub fn parse_fragment(input: &str) -> Result<Vec<Node>, FragmentError> {
    let wrapped = format!("<{WRAPPER_TAG}>{input}</{WRAPPER_TAG}>");
    let mut reader = Reader::from_str(&wrapped);
    reader.config_mut().trim_text(false);

    let mut root = Element::new(WRAPPER_TAG);
    parse_children(&mut reader, &mut root)?;
    Ok(root.children)
}

fn parse_children<R: BufRead>(
    reader: &mut Reader<R>,
    parent: &mut Element,
) -> Result<(), FragmentError> {
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let mut child = element_from_start(reader, &e);
                parse_children(reader, &mut child)?;
                parent.children.push(Node::Element(child));
            }
            Event::Empty(e) => {
                let child = element_from_start(reader, &e);
                parent.children.push(Node::Element(child));
            }
            Event::Text(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                parent.children.push(Node::Text(text));
            }
            Event::GeneralRef(e) => {
                let entity = reader.decoder().decode(&e)?.into_owned();
                parent.children.push(Node::Text(decode_entity(&entity)));
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                parent.children.push(Node::Text(text));
            }
            Event::Comment(e) => {
                let text = reader.decoder().decode(&e)?.into_owned();
                parent.children.push(Node::Comment(text));
            }
            Event::End(_) | Event::Eof => return Ok(()),
            Event::Decl(_) | Event::PI(_) | Event::DocType(_) => {}
        }
        buf.clear();
    }
}

fn element_from_start<R: BufRead>(reader: &Reader<R>, e: &BytesStart) -> Element {
    let tag = reader.decoder().decode(e.name().as_ref()).map_or_else(
        |_| String::from_utf8_lossy(e.name().as_ref()).into_owned(),
        std::borrow::Cow::into_owned,
    );

    let mut attrs = Attrs::new();
    for attr in e.attributes().flatten() {
        let key = reader.decoder().decode(attr.key.as_ref()).map_or_else(
            |_| String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            std::borrow::Cow::into_owned,
        );
        let value = attr.unescape_value().map_or_else(
            |_| String::from_utf8_lossy(&attr.value).into_owned(),
            std::borrow::Cow::into_owned,
        );
        attrs.set(key, value);
    }

    Element {
        tag,
        attrs,
        children: Vec::new(),
    }
}

/// Decode the common named entities; anything else round-trips verbatim.
fn decode_entity(entity: &str) -> String {
    match entity {
        "lt" => "<".to_owned(),
        "gt" => ">".to_owned(),
        "amp" => "&".to_owned(),
        "quot" => "\"".to_owned(),
        "apos" => "'".to_owned(),
        other => format!("&{other};"),
    }
}
