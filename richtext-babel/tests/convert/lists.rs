//! List kind and nesting level tracking.

use richtext_babel::{convert, BlockStyle, ListKind};

#[test]
fn test_bullet_list() {
    let doc = convert("<ul><li>A</li><li>B</li></ul>");
    assert_eq!(doc.blocks.len(), 2);
    for (block, text) in doc.blocks.iter().zip(["A", "B"]) {
        assert_eq!(block.list_item, Some(ListKind::Bullet));
        assert_eq!(block.level, Some(1));
        assert_eq!(block.children.len(), 1);
        assert_eq!(block.children[0].text, text);
    }
}

#[test]
fn test_ordered_list() {
    let doc = convert("<ol><li>first</li><li>second</li></ol>");
    assert!(doc
        .blocks
        .iter()
        .all(|b| b.list_item == Some(ListKind::Number) && b.level == Some(1)));
}

#[test]
fn test_nested_lists_increase_level() {
    let html = "<ul>\n  <li>top</li>\n  <ul>\n    <li>inner</li>\n  </ul>\n  <li>back</li>\n</ul>";
    let doc = convert(html);
    let levels: Vec<_> = doc
        .blocks
        .iter()
        .map(|b| (b.text(), b.level))
        .collect();
    assert_eq!(
        levels,
        vec![
            ("top".to_string(), Some(1)),
            ("inner".to_string(), Some(2)),
            ("back".to_string(), Some(1)),
        ]
    );
}

#[test]
fn test_inner_list_kind_sticks_until_outermost_list_closes() {
    // only depth is tracked, so the outer list's kind is not restored
    let doc = convert("<ol><ul><li>x</li></ul><li>y</li></ol>");
    assert_eq!(doc.blocks[0].list_item, Some(ListKind::Bullet));
    assert_eq!(doc.blocks[1].list_item, Some(ListKind::Bullet));
    assert_eq!(doc.blocks[1].level, Some(1));
}

#[test]
fn test_list_item_with_paragraph_inside() {
    // the paragraph closes first and takes the text as a plain block
    let doc = convert("<ul><li><p>para item</p></li></ul>");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].style, BlockStyle::Normal);
    assert_eq!(doc.blocks[0].list_item, None);
}

#[test]
fn test_unclosed_list_items() {
    let doc = convert("<ul><li>one<li>two</ul>");
    // "one" is flushed as normal when the next item opens; "two" when the list closes
    assert_eq!(doc.blocks.len(), 2);
    assert!(doc.blocks.iter().all(|b| b.list_item.is_none()));
}

#[test]
fn test_stray_list_close_does_not_underflow() {
    let doc = convert("</ul></ol><ul><li>ok</li></ul>");
    assert_eq!(doc.blocks[0].level, Some(1));
}

#[test]
fn test_text_after_list_is_not_a_list_item() {
    let doc = convert("<ul><li>item</li></ul><p>after</p>");
    assert_eq!(doc.blocks[1].list_item, None);
    assert_eq!(doc.blocks[1].level, None);
}
