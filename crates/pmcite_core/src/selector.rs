//! Location paths over the front-matter tree.
//!
//! Locators in the field table look like
//! `article-meta/article-id[@pub-id-type="doi"][1]`: element names
//! separated by `/`, each optionally narrowed by attribute-equality
//! predicates and a 1-based position. Matching starts at the children of
//! the context node and descends one step per path segment.

use roxmltree::Node;

use crate::error::CiteError;

/// A parsed location path.
#[derive(Debug, Clone)]
pub struct Selector {
    steps: Vec<Step>,
}

/// One path segment: an element name plus its predicates, applied in
/// written order.
#[derive(Debug, Clone)]
struct Step {
    name: String,
    preds: Vec<Pred>,
}

#[derive(Debug, Clone)]
enum Pred {
    /// `[@name="value"]`: keep nodes whose attribute equals the literal.
    Attr { name: String, value: String },
    /// `[n]`: keep the nth node (1-based) of those matched so far,
    /// counted per context node.
    Nth(usize),
}

impl Selector {
    pub fn parse(expr: &str) -> Result<Self, CiteError> {
        let mut steps = Vec::new();
        for segment in split_segments(expr) {
            steps.push(Step::parse(segment, expr)?);
        }
        Ok(Selector { steps })
    }

    /// All nodes under `context` satisfying the path, in document order.
    /// Zero matches is normal and yields an empty vector.
    pub fn select<'a, 'input>(&self, context: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
        let mut current = vec![context];
        for step in &self.steps {
            let mut next = Vec::new();
            for node in &current {
                let mut matched: Vec<Node> = node
                    .children()
                    .filter(|c| c.is_element() && c.tag_name().name() == step.name)
                    .collect();
                for pred in &step.preds {
                    matched = pred.apply(matched);
                }
                next.extend(matched);
            }
            current = next;
        }
        current
    }
}

impl Step {
    fn parse(segment: &str, expr: &str) -> Result<Self, CiteError> {
        let (name, mut rest) = match segment.find('[') {
            Some(at) => (&segment[..at], &segment[at..]),
            None => (segment, ""),
        };
        if name.is_empty() {
            return Err(locator_error(expr, "step is missing an element name"));
        }

        let mut preds = Vec::new();
        while !rest.is_empty() {
            let close = rest
                .find(']')
                .ok_or_else(|| locator_error(expr, "unterminated `[`"))?;
            preds.push(Pred::parse(&rest[1..close], expr)?);
            rest = &rest[close + 1..];
            if !rest.is_empty() && !rest.starts_with('[') {
                return Err(locator_error(expr, format!("unexpected `{rest}` after predicate")));
            }
        }

        Ok(Step {
            name: name.to_string(),
            preds,
        })
    }
}

impl Pred {
    fn parse(body: &str, expr: &str) -> Result<Self, CiteError> {
        if let Some(attr) = body.strip_prefix('@') {
            let eq = attr
                .find('=')
                .ok_or_else(|| locator_error(expr, "attribute predicate is missing `=`"))?;
            let name = &attr[..eq];
            if name.is_empty() {
                return Err(locator_error(expr, "attribute predicate is missing a name"));
            }
            let value = unquote(&attr[eq + 1..])
                .ok_or_else(|| locator_error(expr, "attribute value must be quoted"))?;
            return Ok(Pred::Attr {
                name: name.to_string(),
                value: value.to_string(),
            });
        }

        match body.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(Pred::Nth(n)),
            _ => Err(locator_error(
                expr,
                format!("predicate `[{body}]` is neither an attribute test nor a position"),
            )),
        }
    }

    fn apply<'a, 'input>(&self, nodes: Vec<Node<'a, 'input>>) -> Vec<Node<'a, 'input>> {
        match self {
            Pred::Attr { name, value } => nodes
                .into_iter()
                .filter(|n| n.attribute(name.as_str()) == Some(value.as_str()))
                .collect(),
            Pred::Nth(n) => nodes.into_iter().nth(n - 1).into_iter().collect(),
        }
    }
}

/// Split a path on `/`, leaving separators inside quoted attribute values
/// alone.
fn split_segments(expr: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    for (at, c) in expr.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '/' => {
                    segments.push(&expr[start..at]);
                    start = at + 1;
                }
                _ => {}
            },
        }
    }
    segments.push(&expr[start..]);
    segments
}

fn unquote(value: &str) -> Option<&str> {
    let inner = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')));
    inner
}

fn locator_error(expr: &str, message: impl Into<String>) -> CiteError {
    CiteError::Locator {
        locator: expr.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn texts(doc: &Document, expr: &str) -> Vec<String> {
        let selector = Selector::parse(expr).unwrap();
        selector
            .select(doc.root_element())
            .iter()
            .map(|n| n.text().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn plain_path_matches_in_document_order() {
        let doc = Document::parse("<r><a><b>1</b><b>2</b></a><a><b>3</b></a></r>").unwrap();
        assert_eq!(texts(&doc, "a/b"), ["1", "2", "3"]);
    }

    #[test]
    fn attribute_predicate_filters() {
        let doc =
            Document::parse(r#"<r><id type="doi">x</id><id type="pmc">y</id></r>"#).unwrap();
        assert_eq!(texts(&doc, r#"id[@type="doi"]"#), ["x"]);
        assert_eq!(texts(&doc, r#"id[@type="issn"]"#), Vec::<String>::new());
    }

    #[test]
    fn position_predicate_is_per_context_node() {
        let doc = Document::parse("<r><a><b>1</b><b>2</b></a><a><b>3</b></a></r>").unwrap();
        assert_eq!(texts(&doc, "a/b[1]"), ["1", "3"]);
        assert_eq!(texts(&doc, "a[1]/b"), ["1", "2"]);
    }

    #[test]
    fn predicates_apply_in_order() {
        let doc = Document::parse(
            r#"<r><c t="x">1</c><c t="y">2</c><c t="y">3</c></r>"#,
        )
        .unwrap();
        assert_eq!(texts(&doc, r#"c[@t="y"][1]"#), ["2"]);
    }

    #[test]
    fn missing_path_matches_nothing() {
        let doc = Document::parse("<r><a/></r>").unwrap();
        assert!(texts(&doc, "a/b/c").is_empty());
    }

    #[test]
    fn malformed_locators_are_rejected() {
        assert!(Selector::parse("a//b").is_err());
        assert!(Selector::parse("a[").is_err());
        assert!(Selector::parse("a[@t]").is_err());
        assert!(Selector::parse("a[@t=x]").is_err());
        assert!(Selector::parse("a[0]").is_err());
    }
}
