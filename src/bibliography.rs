//! Reference list generation from cited links.
//!
//! Citations are found by walking the structured document, not by looking
//! at rendered markup. Only links carrying the citation marker count.

use chrono::{Local, NaiveDate};

use crate::error::{Error, Result};
use crate::model::{Bibliography, Block, Document, Reference};
use crate::parser::unescape_html;

/// A cited link found in a document.
///
/// Label and URL are the visible text and target, with markup escapes undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationRef {
    /// Index of the block holding the link
    pub block: usize,

    /// Visible label
    pub label: String,

    /// Target URL
    pub url: String,
}

/// Collect cited links in document order.
///
/// Blocks are scanned top to bottom and spans left to right. Cover pages and
/// previously generated bibliographies are not scanned.
pub fn collect_citations(doc: &Document) -> Vec<CitationRef> {
    doc.iter()
        .enumerate()
        .filter(|(_, block)| !matches!(block, Block::Bibliography(_) | Block::CoverPage(_)))
        .flat_map(|(index, block)| {
            block
                .links()
                .into_iter()
                .filter(|link| link.citation)
                .map(move |link| CitationRef {
                    block: index,
                    label: unescape_html(&link.label),
                    url: unescape_html(&link.url),
                })
        })
        .collect()
}

/// Generate a bibliography stamped with today's local date.
///
/// See [`generate_bibliography_on`].
pub fn generate_bibliography(doc: &mut Document) -> Result<Bibliography> {
    generate_bibliography_on(doc, Local::now().date_naive())
}

/// Generate a bibliography and append it to the document.
///
/// Returns [`Error::NoCitations`] and leaves the document untouched when it
/// has no cited links. Repeated calls append another bibliography each time.
pub fn generate_bibliography_on(doc: &mut Document, accessed: NaiveDate) -> Result<Bibliography> {
    let citations = collect_citations(doc);
    if citations.is_empty() {
        log::info!("no citation links found; bibliography not generated");
        return Err(Error::NoCitations);
    }

    let bibliography = Bibliography {
        references: citations
            .into_iter()
            .enumerate()
            .map(|(i, citation)| Reference {
                index: i + 1,
                label: citation.label,
                url: citation.url,
                accessed,
            })
            .collect(),
    };

    if doc.bibliographies().next().is_some() {
        log::debug!("document already has a bibliography; appending another");
    }
    log::info!("generated bibliography with {} references", bibliography.len());

    doc.push(Block::Bibliography(bibliography.clone()));
    Ok(bibliography)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoverPage, Inline, Link};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_no_citations_leaves_document() {
        let mut doc = Document::from_blocks(vec![
            Block::text("nothing here"),
            Block::paragraph(vec![Inline::Link(Link::plain("nav", "/"))]),
        ]);
        let before = doc.clone();

        let err = generate_bibliography_on(&mut doc, date()).unwrap_err();
        assert!(matches!(err, Error::NoCitations));
        assert!(err.is_advisory());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_numbered_in_document_order() {
        let mut doc = Document::from_blocks(vec![
            Block::heading(2, vec![Inline::link("first", "u1")]),
            Block::paragraph(vec![
                Inline::link("second", "u2"),
                Inline::text(" and "),
                Inline::Italic(vec![Inline::link("third", "u3")]),
            ]),
        ]);

        let bib = generate_bibliography_on(&mut doc, date()).unwrap();
        let entries: Vec<_> = bib
            .references
            .iter()
            .map(|r| (r.index, r.label.as_str(), r.url.as_str()))
            .collect();
        assert_eq!(entries, vec![(1, "first", "u1"), (2, "second", "u2"), (3, "third", "u3")]);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.blocks.last(), Some(&Block::Bibliography(bib)));
    }

    #[test]
    fn test_repeat_appends_again() {
        let mut doc = Document::from_blocks(vec![Block::paragraph(vec![Inline::link("a", "b")])]);
        generate_bibliography_on(&mut doc, date()).unwrap();
        let second = generate_bibliography_on(&mut doc, date()).unwrap();

        assert_eq!(second.len(), 1);
        assert_eq!(doc.bibliographies().count(), 2);
    }

    #[test]
    fn test_cover_page_not_scanned() {
        let mut doc = Document::from_blocks(vec![Block::paragraph(vec![Inline::link("a", "b")])]);
        doc.insert_cover_page(CoverPage::new().with_title("[x](y)"));

        let citations = collect_citations(&doc);
        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].block, 1);
    }

    #[test]
    fn test_reference_fields_are_unescaped() {
        let mut doc = Document::from_blocks(vec![Block::paragraph(vec![Inline::link(
            "R&amp;D &lt;notes&gt;",
            "http://e.x/?a=1&amp;b=2",
        )])]);

        let bib = generate_bibliography_on(&mut doc, date()).unwrap();
        assert_eq!(bib.references[0].label, "R&D <notes>");
        assert_eq!(bib.references[0].url, "http://e.x/?a=1&b=2");
    }
}
