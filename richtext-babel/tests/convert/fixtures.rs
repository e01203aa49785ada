//! Whole-document conversion of a realistic CMS export.

use richtext_babel::{convert, BlockStyle, Conversion, ListKind, MarkDef};
use std::fs;
use std::path::PathBuf;

fn load_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

fn blog_post() -> Conversion {
    convert(&load_fixture("blog_post.html"))
}

#[test]
fn test_blog_post_block_outline() {
    let doc = blog_post();
    let outline: Vec<_> = doc
        .blocks
        .iter()
        .map(|b| (b.style, b.list_item, b.level))
        .collect();

    let normal = (BlockStyle::Normal, None, None);
    let bullet = (BlockStyle::Normal, Some(ListKind::Bullet), Some(1));
    let number = (BlockStyle::Normal, Some(ListKind::Number), Some(1));
    assert_eq!(
        outline,
        vec![
            (BlockStyle::H2, None, None),
            normal,
            normal,
            bullet,
            bullet,
            bullet,
            (BlockStyle::H3, None, None),
            number,
            number,
            (BlockStyle::Blockquote, None, None),
            normal,
        ]
    );
}

#[test]
fn test_blog_post_text() {
    let doc = blog_post();
    assert_eq!(doc.blocks[0].text(), "Why we moved to static builds");
    assert_eq!(
        doc.blocks[1].text(),
        "Last year our site ran on a CMS that rendered every page on request.\n\
         It worked, but it was slow \u{2014} and it went down at the worst moments."
    );
    assert_eq!(doc.blocks[4].text(), "move to a hosted platform");
    assert_eq!(
        doc.blocks[10].text(),
        "Thanks for reading!\n\u{a9} 2024 The Team"
    );
}

#[test]
fn test_blog_post_marks() {
    let doc = blog_post();
    assert_eq!(doc.blocks[0].children[1].marks, vec!["em"]);
    assert_eq!(doc.blocks[4].children[1].marks, vec!["strong"]);

    let links = &doc.blocks[8];
    assert_eq!(
        links.mark_defs,
        vec![MarkDef::Link {
            key: links.children[1].marks[0].clone(),
            href: "https://example.test/redirects?from=old&to=new".to_string(),
        }]
    );
    assert_eq!(links.children[1].text, "our redirect notes");
}

#[test]
fn test_blog_post_images() {
    let doc = blog_post();
    assert_eq!(doc.images.len(), 1);
    assert_eq!(
        doc.images[0].src,
        "https://cdn.example.test/images/dashboard.png"
    );
    assert_eq!(doc.images[0].alt, "Old dashboard");
}

#[test]
fn test_blog_post_has_no_blank_blocks() {
    let doc = blog_post();
    assert!(doc.blocks.iter().all(|b| b.has_content()));
}
