//! The field table: which fields to extract, and in what order.

use std::fmt;

/// Bibliographic fields extracted from the front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLabel {
    Author,
    Year,
    Title,
    Journal,
    Volume,
    Issue,
    Doi,
    Pmcid,
}

impl FieldLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldLabel::Author => "author",
            FieldLabel::Year => "year",
            FieldLabel::Title => "title",
            FieldLabel::Journal => "journal",
            FieldLabel::Volume => "volume",
            FieldLabel::Issue => "issue",
            FieldLabel::Doi => "doi",
            FieldLabel::Pmcid => "pmcid",
        }
    }
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field to extract: its label and the location path that finds its
/// nodes under the front-matter element.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub label: FieldLabel,
    pub locator: &'static str,
}

/// The citation layout. Order is significant: it fixes the order of the
/// rendered segments, and the separator table assumes it. A `[1]`
/// predicate restricts a step to its first match.
pub const FIELD_SPECS: &[FieldSpec] = &[
    FieldSpec {
        label: FieldLabel::Author,
        locator: r#"article-meta/contrib-group/contrib[@contrib-type="author"]/name"#,
    },
    FieldSpec {
        label: FieldLabel::Year,
        locator: r#"article-meta/pub-date[@pub-type="collection"][1]/year[1]"#,
    },
    FieldSpec {
        label: FieldLabel::Title,
        locator: r#"article-meta/title-group[1]/article-title[1]"#,
    },
    FieldSpec {
        label: FieldLabel::Journal,
        locator: r#"journal-meta/journal-id[@journal-id-type="nlm-ta"][1]"#,
    },
    FieldSpec {
        label: FieldLabel::Volume,
        locator: r#"article-meta/volume[1]"#,
    },
    FieldSpec {
        label: FieldLabel::Issue,
        locator: r#"article-meta/issue[1]"#,
    },
    FieldSpec {
        label: FieldLabel::Doi,
        locator: r#"article-meta/article-id[@pub-id-type="doi"][1]"#,
    },
    FieldSpec {
        label: FieldLabel::Pmcid,
        locator: r#"article-meta/article-id[@pub-id-type="pmc"][1]"#,
    },
];
