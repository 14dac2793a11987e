//! Streaming capture of the `<front>` element.
//!
//! Articles can be large; the metadata we need sits in the front matter
//! before the body. The scan here is incremental: events are consumed
//! until the front element closes and the rest of the input is never
//! read, so the body is neither parsed nor held in memory.

use std::borrow::Cow;

use indexmap::IndexMap;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};

use crate::error::CiteError;

const FRONT_TAG: &[u8] = b"front";

/// Scan `xml` for the article's `<front>` element and return its markup,
/// or `Ok(None)` when the document has none.
///
/// Namespace declarations on still-open ancestor elements are copied onto
/// the captured root, so a fragment that uses prefixed attributes (nxml
/// declares `xmlns:xlink` on `<article>`) stays parseable on its own.
pub fn capture_front(xml: &str) -> Result<Option<String>, CiteError> {
    let mut reader = Reader::from_str(xml);
    // One entry per open ancestor element: its xmlns declarations.
    let mut scopes: Vec<Vec<(String, Vec<u8>)>> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if start.local_name().as_ref() == FRONT_TAG {
                    return capture_subtree(&mut reader, &start, &scopes).map(Some);
                }
                scopes.push(xmlns_declarations(&start)?);
            }
            Event::Empty(start) if start.local_name().as_ref() == FRONT_TAG => {
                let mut writer = Writer::new(Vec::new());
                writer.write_event(Event::Empty(inherit_xmlns(&start, &scopes)?))?;
                return Ok(Some(String::from_utf8(writer.into_inner())?));
            }
            Event::End(_) => {
                scopes.pop();
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Re-serialize events from the front start tag through its matching end
/// tag, then stop consuming input.
fn capture_subtree(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
    scopes: &[Vec<(String, Vec<u8>)>],
) -> Result<String, CiteError> {
    let mut writer = Writer::new(Vec::new());
    writer.write_event(Event::Start(inherit_xmlns(start, scopes)?))?;

    let mut depth = 1usize;
    loop {
        let event = reader.read_event()?;
        match event {
            Event::Start(_) => depth += 1,
            Event::End(_) => depth -= 1,
            Event::Eof => return Err(CiteError::UnclosedFront),
            _ => {}
        }
        writer.write_event(event)?;
        if depth == 0 {
            return Ok(String::from_utf8(writer.into_inner())?);
        }
    }
}

/// The `xmlns` and `xmlns:*` attributes of a start tag, values kept in
/// their raw escaped form.
fn xmlns_declarations(start: &BytesStart) -> Result<Vec<(String, Vec<u8>)>, CiteError> {
    let mut declarations = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = attr.key.as_ref();
        if key == b"xmlns" || key.starts_with(b"xmlns:") {
            declarations.push((
                String::from_utf8_lossy(key).into_owned(),
                attr.value.into_owned(),
            ));
        }
    }
    Ok(declarations)
}

/// Rebuild a start tag with its own attributes plus the namespace
/// declarations inherited from open ancestors. Inner declarations shadow
/// outer ones, and a declaration the element carries itself is not
/// duplicated.
fn inherit_xmlns(
    start: &BytesStart,
    scopes: &[Vec<(String, Vec<u8>)>],
) -> Result<BytesStart<'static>, CiteError> {
    let mut inherited: IndexMap<String, Vec<u8>> = IndexMap::new();
    for scope in scopes {
        for (key, value) in scope {
            inherited.insert(key.clone(), value.clone());
        }
    }

    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut tag = BytesStart::new(name);
    for attr in start.attributes() {
        let attr = attr?;
        inherited.shift_remove(String::from_utf8_lossy(attr.key.as_ref()).as_ref());
        tag.push_attribute(attr);
    }
    for (key, value) in &inherited {
        tag.push_attribute(Attribute {
            key: QName(key.as_bytes()),
            value: Cow::from(value.as_slice()),
        });
    }
    Ok(tag)
}
