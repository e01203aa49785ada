//! Character references in text and attributes.

use richtext_babel::convert;

fn text_of(html: &str) -> String {
    convert(html).blocks.iter().map(|b| b.text()).collect()
}

#[test]
fn test_nbsp_between_words() {
    assert_eq!(text_of("A&nbsp;B"), "A\u{a0}B");
}

#[test]
fn test_numeric_references() {
    assert_eq!(text_of("&#169; 2024"), "© 2024");
    assert_eq!(text_of("&#xA9;&#XA9;"), "©©");
    assert_eq!(text_of("caf&#233;"), "café");
}

#[test]
fn test_typographic_references() {
    assert_eq!(
        text_of("&ldquo;quoted&rdquo; &mdash; it&rsquo;s &hellip;"),
        "\u{201c}quoted\u{201d} \u{2014} it\u{2019}s \u{2026}"
    );
}

#[test]
fn test_escaped_markup_stays_text() {
    let doc = convert("<p>&lt;b&gt;not bold&lt;/b&gt; &amp; more</p>");
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].text(), "<b>not bold</b> & more");
    assert!(doc.blocks[0].children.iter().all(|s| s.marks.is_empty()));
}

#[test]
fn test_unknown_named_reference_is_literal() {
    assert_eq!(text_of("a &foo; b"), "a &foo; b");
}

#[test]
fn test_invalid_numeric_reference_is_literal() {
    assert_eq!(text_of("x&#xD800;y"), "x&#xD800;y");
    assert_eq!(text_of("x&#99999999999;y"), "x&#99999999999;y");
    assert_eq!(text_of("x&#x110000;y"), "x&#x110000;y");
}

#[test]
fn test_unterminated_or_bare_ampersand_is_text() {
    assert_eq!(text_of("AT&T"), "AT&T");
    assert_eq!(text_of("fish & chips"), "fish & chips");
    assert_eq!(text_of("R&D &foo bar"), "R&D &foo bar");
    assert_eq!(text_of("x&#169 y"), "x&#169 y");
}

#[test]
fn test_known_names_decode_without_semicolon() {
    assert_eq!(text_of("&nbsp no semicolon"), "\u{a0} no semicolon");
    assert_eq!(text_of("A&nbsp B"), "A\u{a0} B");
    assert_eq!(text_of("Tom &amp Jerry"), "Tom & Jerry");
    assert_eq!(text_of("&copy 2024"), "\u{a9} 2024");
    assert_eq!(text_of("&nbspx"), "&nbspx");
}

#[test]
fn test_reference_spans_carry_active_marks() {
    let doc = convert("<p><b>a&amp;b</b></p>");
    let spans = &doc.blocks[0].children;
    assert_eq!(spans.len(), 3);
    assert!(spans.iter().all(|s| s.has_mark("strong")));
    assert_eq!(spans[1].text, "&");
}

#[test]
fn test_attribute_values_are_decoded() {
    let doc = convert(r#"<img src="/img?id=1&amp;size=large" alt="Tom &amp; Jerry&#33;">"#);
    assert_eq!(doc.images[0].src, "/img?id=1&size=large");
    assert_eq!(doc.images[0].alt, "Tom & Jerry!");
}
