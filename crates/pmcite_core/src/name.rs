//! Contributor name extraction and list joining.

use roxmltree::Node;

use crate::text::normalized_text;

/// A contributor name split into its given parts and surname, as read from
/// a `<name>` element with `<surname>` and `<given-names>` children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    /// Given-name parts, one per `<given-names>` element, in document order.
    pub given: Vec<String>,
    /// Surname parts joined with spaces.
    pub surname: String,
}

impl PersonName {
    pub fn from_node(node: Node) -> Self {
        let mut given = Vec::new();
        let mut surnames = Vec::new();
        for child in node.children() {
            if !child.is_element() {
                continue;
            }
            match child.tag_name().name() {
                "given-names" => given.push(normalized_text(child)),
                "surname" => surnames.push(normalized_text(child)),
                _ => {}
            }
        }
        PersonName {
            given,
            surname: surnames.join(" "),
        }
    }

    /// `given-names surname`, e.g. `John Smith`.
    ///
    /// The template is literal: a name without given parts renders with a
    /// leading space.
    pub fn full(&self) -> String {
        format!("{} {}", self.given.join(" "), self.surname)
    }

    /// `surname initials`, e.g. `Smith JP`: the first character of every
    /// whitespace-separated given-name token, run together.
    pub fn short(&self) -> String {
        let given = self.given.join(" ");
        let initials: String = given
            .split_whitespace()
            .filter_map(|token| token.chars().next())
            .collect();
        format!("{} {}", self.surname, initials)
    }
}

/// Join rendered names into one segment: none is empty, one stands alone,
/// two or more are comma-separated with `and` before the last.
pub fn join_names(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {}", rest.join(", "), last),
    }
}
