//! End-to-end citation assembly over inline article fixtures.

use pmcite_core::Assembler;

fn article(front_children: &str) -> String {
    format!("<article><front>{front_children}</front><body><p>body text</p></body></article>")
}

fn cite(xml: &str) -> Option<String> {
    Assembler::new().unwrap().cite(xml).unwrap()
}

const FULL_FRONT: &str = r#"
    <journal-meta><journal-id journal-id-type="nlm-ta">J</journal-id></journal-meta>
    <article-meta>
        <title-group><article-title>A Title</article-title></title-group>
        <contrib-group>
            <contrib contrib-type="author">
                <name><surname>Smith</surname><given-names>John</given-names></name>
            </contrib>
        </contrib-group>
        <pub-date pub-type="collection"><year>2020</year></pub-date>
        <volume>12</volume>
        <issue>3</issue>
        <article-id pub-id-type="doi">10.1/x</article-id>
        <article-id pub-id-type="pmc">123</article-id>
    </article-meta>
"#;

#[test]
fn full_front_renders_every_field() {
    let citation = cite(&article(FULL_FRONT)).unwrap();
    assert_eq!(
        citation,
        "John Smith (2020) A Title. J 12(3) doi:10.1/x (PMCID: PMC123) "
    );
}

#[test]
fn two_authors_join_with_and() {
    let front = r#"
        <journal-meta><journal-id journal-id-type="nlm-ta">J</journal-id></journal-meta>
        <article-meta>
            <title-group><article-title>A Title</article-title></title-group>
            <contrib-group>
                <contrib contrib-type="author">
                    <name><surname>Doe</surname><given-names>Jane</given-names></name>
                </contrib>
                <contrib contrib-type="author">
                    <name><surname>Smith</surname><given-names>John</given-names></name>
                </contrib>
            </contrib-group>
            <pub-date pub-type="collection"><year>2020</year></pub-date>
            <volume>12</volume>
            <issue>3</issue>
            <article-id pub-id-type="doi">10.1/x</article-id>
            <article-id pub-id-type="pmc">123</article-id>
        </article-meta>
    "#;
    let citation = cite(&article(front)).unwrap();
    assert_eq!(
        citation,
        "Jane Doe and John Smith (2020) A Title. J 12(3) doi:10.1/x (PMCID: PMC123) "
    );
}

#[test]
fn absent_journal_leaves_its_separator_in_place() {
    let front = r#"
        <article-meta>
            <title-group><article-title>A Title</article-title></title-group>
            <contrib-group>
                <contrib contrib-type="author">
                    <name><surname>Smith</surname><given-names>John</given-names></name>
                </contrib>
            </contrib-group>
            <pub-date pub-type="collection"><year>2020</year></pub-date>
            <volume>12</volume>
            <issue>3</issue>
            <article-id pub-id-type="doi">10.1/x</article-id>
            <article-id pub-id-type="pmc">123</article-id>
        </article-meta>
    "#;
    let citation = cite(&article(front)).unwrap();
    // The journal segment is empty but its separator still lands between
    // the title's ". " and the volume, leaving a double space.
    assert_eq!(
        citation,
        "John Smith (2020) A Title.  12(3) doi:10.1/x (PMCID: PMC123) "
    );
}

#[test]
fn author_alone_renders_separators_for_everything_else() {
    let front = r#"
        <article-meta>
            <contrib-group>
                <contrib contrib-type="author">
                    <name><surname>Smith</surname><given-names>John</given-names></name>
                </contrib>
            </contrib-group>
        </article-meta>
    "#;
    let citation = cite(&article(front)).unwrap();
    assert_eq!(citation, "John Smith  .     ");
}

#[test]
fn title_markup_normalizes_to_plain_text() {
    let front = r#"
        <article-meta>
            <title-group><article-title>A
                <italic>Good</italic>   Title</article-title></title-group>
        </article-meta>
    "#;
    let citation = cite(&article(front)).unwrap();
    assert!(citation.contains("A Good Title. "));
}

#[test]
fn year_honors_the_pub_date_type() {
    let front = r#"
        <article-meta>
            <pub-date pub-type="epub"><year>1999</year></pub-date>
            <pub-date pub-type="collection"><year>2020</year></pub-date>
        </article-meta>
    "#;
    let citation = cite(&article(front)).unwrap();
    assert!(citation.contains("(2020)"));
    assert!(!citation.contains("1999"));
}

#[test]
fn repeated_fields_keep_only_the_first_match() {
    let front = r#"
        <article-meta>
            <volume>12</volume>
            <volume>13</volume>
        </article-meta>
    "#;
    let citation = cite(&article(front)).unwrap();
    assert!(citation.contains("12"));
    assert!(!citation.contains("13"));
}

#[test]
fn document_without_front_yields_no_citation() {
    assert_eq!(cite("<article><body><p>text</p></body></article>"), None);
}

#[test]
fn body_is_never_parsed_once_front_is_closed() {
    let xml = format!(
        "<article><front>{FULL_FRONT}</front><body><p>unterminated"
    );
    let citation = cite(&xml).unwrap();
    assert_eq!(
        citation,
        "John Smith (2020) A Title. J 12(3) doi:10.1/x (PMCID: PMC123) "
    );
}
