use std::path::PathBuf;
use std::string::FromUtf8Error;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Errors surfaced while turning one article document into a citation line.
///
/// Only [`CiteError::MissingFront`] is recoverable when processing a batch;
/// every other variant means the input could not be read or parsed at all.
/// A field that merely matches nothing is not an error and never reaches
/// this type.
#[derive(Debug, Error)]
pub enum CiteError {
    #[error("no <front> found in {}", .0.display())]
    MissingFront(PathBuf),

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XML attribute: {0}")]
    Attr(#[from] AttrError),

    #[error("unexpected end of input inside <front>")]
    UnclosedFront,

    #[error("captured front matter is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),

    #[error("front matter failed to parse: {0}")]
    Dom(#[from] roxmltree::Error),

    #[error("invalid locator `{locator}`: {message}")]
    Locator { locator: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
