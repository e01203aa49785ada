//! Decorators and link annotations.

use richtext_babel::{convert, MarkDef};

#[test]
fn test_link_mark_references_definition() {
    let doc = convert("<a href='http://x.test'>Link</a>");
    assert_eq!(doc.blocks.len(), 1);
    let block = &doc.blocks[0];
    let span = &block.children[0];
    assert_eq!(span.text, "Link");
    assert_eq!(span.marks.len(), 1);

    match block.mark_def(&span.marks[0]) {
        Some(MarkDef::Link { href, .. }) => assert_eq!(href, "http://x.test"),
        None => panic!("span mark has no definition"),
    }
}

#[test]
fn test_anchor_without_href_adds_no_mark() {
    let doc = convert("<a name='top'>Anchor");
    let block = &doc.blocks[0];
    assert!(block.mark_defs.is_empty());
    assert!(block.children[0].marks.is_empty());
}

#[test]
fn test_duplicate_href_keeps_first_value() {
    let doc = convert("<p><a href='' href='http://x.test'>t</a></p>");
    let block = &doc.blocks[0];
    assert!(block.mark_defs.is_empty());
    assert!(block.children[0].marks.is_empty());

    let doc = convert("<p><a href='/first' href='/second'>t</a></p>");
    match &doc.blocks[0].mark_defs[0] {
        MarkDef::Link { href, .. } => assert_eq!(href, "/first"),
    }
}

#[test]
fn test_link_inside_bold() {
    let doc = convert("<p><b>see <a href='/docs'>docs</a></b> now</p>");
    let block = &doc.blocks[0];
    let key = block.mark_defs[0].key().to_string();
    assert_eq!(block.children[0].marks, vec!["strong"]);
    assert_eq!(block.children[1].marks, vec!["strong".to_string(), key]);
    assert!(block.children[2].marks.is_empty());
}

#[test]
fn test_two_links_in_one_block() {
    let doc = convert("<p><a href='/a'>a</a> and <a href='/b'>b</a></p>");
    let block = &doc.blocks[0];
    assert_eq!(block.mark_defs.len(), 2);
    let hrefs: Vec<_> = block
        .children
        .iter()
        .filter(|s| !s.marks.is_empty())
        .map(|s| match block.mark_def(&s.marks[0]) {
            Some(MarkDef::Link { href, .. }) => href.as_str(),
            None => "",
        })
        .collect();
    assert_eq!(hrefs, vec!["/a", "/b"]);
}

#[test]
fn test_link_href_entities_are_decoded() {
    let doc = convert(r#"<p><a href="/search?q=rust&amp;page=2">results</a></p>"#);
    match &doc.blocks[0].mark_defs[0] {
        MarkDef::Link { href, .. } => assert_eq!(href, "/search?q=rust&page=2"),
    }
}

#[test]
fn test_unclosed_bold_runs_to_end_of_document() {
    let doc = convert("<p><b>bold</p><p>still bold</p>");
    assert!(doc
        .blocks
        .iter()
        .all(|b| b.children.iter().all(|s| s.has_mark("strong"))));
}

#[test]
fn test_italic_aliases() {
    let doc = convert("<p><i>a</i><em>b</em></p>");
    assert!(doc.blocks[0].children.iter().all(|s| s.marks == vec!["em"]));
}

#[test]
fn test_link_definition_dropped_with_empty_block() {
    let doc = convert("<p><a href='/x'> </a></p><p>text</p>");
    assert_eq!(doc.blocks.len(), 1);
    assert!(doc.blocks[0].mark_defs.is_empty());
}

#[test]
fn test_link_spanning_block_boundary_loses_definition() {
    // the definition belongs to the first block; the mark stays active
    let doc = convert("<p><a href='/x'>one</p><p>two</a></p>");
    assert_eq!(doc.blocks[0].mark_defs.len(), 1);
    assert!(doc.blocks[1].mark_defs.is_empty());
    assert_eq!(doc.blocks[1].children[0].marks.len(), 1);
}
