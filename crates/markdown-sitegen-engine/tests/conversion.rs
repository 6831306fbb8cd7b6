use markdown_sitegen_engine::{
    BlockType, HtmlNode, MarkdownError, RenderOptions, Span, classify, convert_document,
    extract_title, segment, tokenize,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn to_html(md: &str) -> String {
    convert_document(md).unwrap().render().unwrap()
}

#[test]
fn plain_text_round_trips_as_one_span() {
    assert_eq!(
        tokenize("plain text").unwrap(),
        vec![Span::Text("plain text".into())]
    );
}

#[test]
fn bold_only() {
    assert_eq!(tokenize("**bold**").unwrap(), vec![Span::Bold("bold".into())]);
}

#[test]
fn code_between_text() {
    assert_eq!(
        tokenize("a `code` b").unwrap(),
        vec![
            Span::Text("a ".into()),
            Span::Code("code".into()),
            Span::Text(" b".into()),
        ]
    );
}

#[test]
fn image_only() {
    let spans = tokenize("![alt](u.png)").unwrap();
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].content(), "alt");
    assert_eq!(spans[0].target(), Some("u.png"));
}

#[rstest]
#[case("broken `code", "`")]
#[case("half **bold", "**")]
#[case("snake_case word", "_")]
fn unmatched_delimiter_is_malformed(#[case] text: &str, #[case] delimiter: &str) {
    match tokenize(text) {
        Err(MarkdownError::MalformedInline { delimiter: d, text: t }) => {
            assert_eq!(d, delimiter);
            assert_eq!(t, text);
        }
        other => panic!("expected MalformedInline, got {other:?}"),
    }
}

#[rstest]
#[case("1. a\n2. b", BlockType::OrderedList)]
#[case("1. a\n3. b", BlockType::Paragraph)]
#[case("# h", BlockType::Heading)]
#[case("```\nx\n```", BlockType::Code)]
#[case("> q", BlockType::Quote)]
#[case("- u", BlockType::UnorderedList)]
#[case("anything else", BlockType::Paragraph)]
fn classify_examples(#[case] block: &str, #[case] expected: BlockType) {
    assert_eq!(classify(block), expected);
}

#[rstest]
#[case("")]
#[case("a\n\nb")]
#[case("\n\n\n  x  \n\n\n\ny\nz\n\n")]
#[case("# Title\n\n\n\n- a\n- b\n\n   \n")]
fn segment_has_no_blank_blocks_and_is_stable(#[case] md: &str) {
    let blocks = segment(md);
    assert!(blocks.iter().all(|b| !b.trim().is_empty()));

    let joined = blocks.join("\n\n");
    let again = segment(&joined);
    assert_eq!(blocks.len(), again.len());
    assert_eq!(blocks, again);
}

#[test]
fn title_then_body() {
    insta::assert_snapshot!(
        to_html("# Title\n\nBody text"),
        @"<div><h1>Title</h1><p>Body text</p></div>"
    );
}

#[test]
fn paragraphs() {
    let md = "
This is **bolded** paragraph
text in a p
tag here

This is another paragraph with _italic_ text and `code` here

";
    insta::assert_snapshot!(
        to_html(md),
        @"<div><p>This is <b>bolded</b> paragraph text in a p tag here</p><p>This is another paragraph with <i>italic</i> text and <code>code</code> here</p></div>"
    );
}

#[test]
fn lists() {
    let md = "
- Item 1 **bold**
- Item 2 `code`

1. First item _italic_
2. Second item
";
    insta::assert_snapshot!(
        to_html(md),
        @"<div><ul><li>Item 1 <b>bold</b></li><li>Item 2 <code>code</code></li></ul><ol><li>First item <i>italic</i></li><li>Second item</li></ol></div>"
    );
}

#[test]
fn headings() {
    let md = "
# Heading 1

Some text

## Heading 2 _italic_

### Heading 3
";
    insta::assert_snapshot!(
        to_html(md),
        @"<div><h1>Heading 1</h1><p>Some text</p><h2>Heading 2 <i>italic</i></h2><h3>Heading 3</h3></div>"
    );
}

#[test]
fn codeblock() {
    let md = "
```
This is text that _should_ remain
the **same** even with inline stuff
```
";
    assert_eq!(
        to_html(md),
        "<div><pre><code>This is text that _should_ remain\nthe **same** even with inline stuff</code></pre></div>"
    );
}

#[test]
fn blockquote_keeps_line_breaks() {
    let md = "
> This is a quote.
> It has **bold** text.

Another paragraph.
";
    assert_eq!(
        to_html(md),
        "<div><blockquote>This is a quote.\nIt has <b>bold</b> text.</blockquote><p>Another paragraph.</p></div>"
    );
}

#[test]
fn multi_line_heading_renders_first_line_only() {
    insta::assert_snapshot!(
        to_html("# First\nSecond"),
        @"<div><h1>First</h1></div>"
    );
}

#[test]
fn malformed_block_fails_whole_document() {
    assert!(matches!(
        convert_document("# ok\n\nbad `tick"),
        Err(MarkdownError::MalformedInline { .. })
    ));
}

#[test]
fn escaping_is_opt_in() {
    let tree = convert_document("a < b & [x](q?x=\"2\")").unwrap();
    assert_eq!(
        tree.render().unwrap(),
        "<div><p>a < b & <a href=\"q?x=\"2\"\">x</a></p></div>"
    );
    assert_eq!(
        tree.render_with(&RenderOptions::escaped()).unwrap(),
        "<div><p>a &lt; b &amp; <a href=\"q?x=&quot;2&quot;\">x</a></p></div>"
    );
}

#[test]
fn title_extraction() {
    assert_eq!(extract_title("intro\n\n  # The Title  \n").unwrap(), "The Title");
    assert_eq!(
        extract_title("no heading here"),
        Err(MarkdownError::NoTitleFound)
    );
}

#[test]
fn tree_shape() {
    let tree = convert_document("para\n\n- item").unwrap();
    assert_eq!(
        tree,
        HtmlNode::parent(
            "div",
            vec![
                HtmlNode::parent("p", vec![HtmlNode::text("para")]),
                HtmlNode::parent(
                    "ul",
                    vec![HtmlNode::parent("li", vec![HtmlNode::text("item")])]
                ),
            ]
        )
    );
}
