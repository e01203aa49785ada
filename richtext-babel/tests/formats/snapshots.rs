//! Rendered output of each format for known input.

use insta::assert_snapshot;
use richtext_babel::formats::text::to_text;
use richtext_babel::formats::treeviz::to_treeviz_str;
use richtext_babel::{convert, FormatRegistry};
use std::collections::HashMap;

const SAMPLE: &str = r#"<h2>Title</h2><p>Read <b>the <a href="http://x.test">docs</a></b></p><img src="http://i.test/a.jpg" alt="pic">"#;

#[test]
fn test_treeviz_sample() {
    let out = to_treeviz_str(&convert(SAMPLE));
    assert_snapshot!(out, @r#"
    ⧉ Document (2 blocks, 1 image)
    ├─ § h2: Title
    │ └─ ◦ "Title"
    ├─ ¶ normal: Read the docs
    │ ├─ ⊕ block0005 → http://x.test
    │ ├─ ◦ "Read "
    │ ├─ ◦ "the " [strong]
    │ └─ ◦ "docs" [strong, block0005]
    └─ ▣ http://i.test/a.jpg (pic)
    "#);
}

#[test]
fn test_treeviz_lists_and_quotes() {
    let out = to_treeviz_str(&convert(
        "<ol><li>one</li><ul><li>two</li></ul></ol><blockquote>q</blockquote>",
    ));
    assert_snapshot!(out, @r#"
    ⧉ Document (3 blocks, 0 images)
    ├─ • number 1: one
    │ └─ ◦ "one"
    ├─ • bullet 2: two
    │ └─ ◦ "two"
    └─ ❝ blockquote: q
      └─ ◦ "q"
    "#);
}

#[test]
fn test_text_sample() {
    let out = to_text(&convert(SAMPLE).blocks);
    assert_snapshot!(out, @r"
    ## Title

    Read the docs
    ");
}

#[test]
fn test_compact_json_blocks() {
    let registry = FormatRegistry::default();
    let options: HashMap<String, String> = [("pretty", "false"), ("images", "false")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    let out = registry
        .serialize_with_options(&convert("<p>Hi</p>"), "json", &options)
        .unwrap();
    assert_snapshot!(out, @r#"[{"_type":"block","_key":"block0002","style":"normal","markDefs":[],"children":[{"_type":"span","_key":"block0001","text":"Hi","marks":[]}]}]"#);
}

#[test]
fn test_pretty_json_document() {
    let registry = FormatRegistry::default();
    let out = registry
        .serialize(&convert("<h1>T</h1><img src='a.png'>"), "json")
        .unwrap();
    assert_snapshot!(out, @r#"
    {
      "blocks": [
        {
          "_type": "block",
          "_key": "block0002",
          "style": "h1",
          "markDefs": [],
          "children": [
            {
              "_type": "span",
              "_key": "block0001",
              "text": "T",
              "marks": []
            }
          ]
        }
      ],
      "images": [
        {
          "src": "a.png",
          "alt": ""
        }
      ]
    }
    "#);
}
