//! Citation extraction from PubMed Central article XML.
//!
//! Scans an `.nxml` article document for its `<front>` section, pulls the
//! bibliographic fields out of it (authors, year, title, journal, volume,
//! issue, DOI, PMC id), and renders them as a single citation line. The
//! scan is streaming: once the front matter closes, the rest of the
//! document is never read.
//!
//! # Example
//!
//! ```rust
//! use pmcite_core::Assembler;
//!
//! let xml = r#"<article><front>
//!   <journal-meta><journal-id journal-id-type="nlm-ta">J</journal-id></journal-meta>
//!   <article-meta>
//!     <title-group><article-title>A Title</article-title></title-group>
//!     <contrib-group>
//!       <contrib contrib-type="author">
//!         <name><surname>Smith</surname><given-names>John</given-names></name>
//!       </contrib>
//!     </contrib-group>
//!     <pub-date pub-type="collection"><year>2020</year></pub-date>
//!     <volume>12</volume>
//!     <issue>3</issue>
//!     <article-id pub-id-type="doi">10.1/x</article-id>
//!     <article-id pub-id-type="pmc">123</article-id>
//!   </article-meta>
//! </front><body/></article>"#;
//!
//! let assembler = Assembler::new().unwrap();
//! let citation = assembler.cite(xml).unwrap().unwrap();
//! assert_eq!(
//!     citation,
//!     "John Smith (2020) A Title. J 12(3) doi:10.1/x (PMCID: PMC123) "
//! );
//! ```

pub mod assembler;
pub mod error;
pub mod fields;
pub mod front;
pub mod name;
pub mod registry;
pub mod selector;
pub mod text;

pub use assembler::Assembler;
pub use error::CiteError;
pub use fields::{FieldLabel, FieldSpec, FIELD_SPECS};
pub use front::capture_front;
pub use name::{join_names, PersonName};
pub use registry::{Extractor, Formatter, Registry};
pub use selector::Selector;
pub use text::normalized_text;
