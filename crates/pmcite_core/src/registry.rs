//! Per-field extraction, formatting, and separator tables.
//!
//! Each table is a set of per-field overrides over a shared fallback,
//! resolved with an explicit lookup-or-default step. The tables are built
//! once and never mutated.

use indexmap::IndexMap;
use roxmltree::Node;

use crate::fields::FieldLabel;
use crate::name::{join_names, PersonName};
use crate::text::normalized_text;

/// How a matched node becomes a display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor {
    /// Normalized subtree text.
    Text,
    /// `given-names surname`, read from a `<name>` element.
    FullName,
    /// `surname initials`. An available alternative to
    /// [`Extractor::FullName`] for the author field; not wired into the
    /// default tables.
    ShortName,
}

impl Extractor {
    pub fn extract(self, node: Node) -> String {
        match self {
            Extractor::Text => normalized_text(node),
            Extractor::FullName => PersonName::from_node(node).full(),
            Extractor::ShortName => PersonName::from_node(node).short(),
        }
    }
}

/// How a field's extracted values collapse into one rendered segment.
///
/// An empty value list always formats to the empty string: decorations
/// are never applied to nothing, so an absent field contributes nothing
/// but its separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    /// Space-join the values.
    Join,
    /// Space-join, then wrap in the literal prefix and suffix.
    Wrap {
        prefix: &'static str,
        suffix: &'static str,
    },
    /// Comma-separated list with `and` before the final name.
    NameList,
}

impl Formatter {
    pub fn format(self, values: &[String]) -> String {
        if values.is_empty() {
            return String::new();
        }
        match self {
            Formatter::Join => values.join(" "),
            Formatter::Wrap { prefix, suffix } => {
                format!("{}{}{}", prefix, values.join(" "), suffix)
            }
            Formatter::NameList => join_names(values),
        }
    }
}

/// Per-field overrides with a shared fallback; lookup never fails.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    overrides: IndexMap<FieldLabel, T>,
    default: T,
}

impl<T> Registry<T> {
    pub fn new(default: T) -> Self {
        Registry {
            overrides: IndexMap::new(),
            default,
        }
    }

    pub fn with(mut self, label: FieldLabel, value: T) -> Self {
        self.overrides.insert(label, value);
        self
    }

    pub fn get(&self, label: FieldLabel) -> &T {
        self.overrides.get(&label).unwrap_or(&self.default)
    }
}

/// Default extractor table: plain text everywhere, full names for authors.
pub fn extractors() -> Registry<Extractor> {
    Registry::new(Extractor::Text).with(FieldLabel::Author, Extractor::FullName)
}

/// Default formatter table.
pub fn formatters() -> Registry<Formatter> {
    Registry::new(Formatter::Join)
        .with(FieldLabel::Author, Formatter::NameList)
        .with(
            FieldLabel::Year,
            Formatter::Wrap {
                prefix: "(",
                suffix: ")",
            },
        )
        .with(
            FieldLabel::Issue,
            Formatter::Wrap {
                prefix: "(",
                suffix: ")",
            },
        )
        .with(
            FieldLabel::Doi,
            Formatter::Wrap {
                prefix: "doi:",
                suffix: "",
            },
        )
        .with(
            FieldLabel::Pmcid,
            Formatter::Wrap {
                prefix: "(PMCID: PMC",
                suffix: ")",
            },
        )
}

/// Default separator table. The volume separator is empty so the issue's
/// own parenthesis follows it immediately.
pub fn separators() -> Registry<&'static str> {
    Registry::new(" ")
        .with(FieldLabel::Title, ". ")
        .with(FieldLabel::Volume, "")
}
