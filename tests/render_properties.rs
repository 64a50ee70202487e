//! End-to-end markup rendering checks over the public `render` API.
//!
//! Each test pins an exact HTML string so formatting regressions surface
//! as readable diffs.

use thomas::render::render;

#[test]
fn bold_paragraph_renders_strong() {
    assert_eq!(
        render("**bold**").to_html(),
        "<p><strong>bold</strong></p>"
    );
}

#[test]
fn fenced_code_keeps_language_and_content() {
    let html = render("```js\nconst a=1;\n```").to_html();
    assert_eq!(
        html,
        "<pre><code class=\"language-js\">const a=1;</code></pre>"
    );
}

#[test]
fn fence_without_language_defaults_to_plaintext() {
    let html = render("```\nplain\n```").to_html();
    assert_eq!(
        html,
        "<pre><code class=\"language-plaintext\">plain</code></pre>"
    );
}

#[test]
fn numbered_lines_form_an_ordered_list() {
    assert_eq!(
        render("1. a\n2. b").to_html(),
        "<ol><li class=\"numbered\">a</li><li class=\"numbered\">b</li></ol>"
    );
}

#[test]
fn bullet_lines_form_an_unordered_list() {
    assert_eq!(
        render("• first\n- second").to_html(),
        "<ul><li>first</li><li>second</li></ul>"
    );
}

#[test]
fn blank_line_splits_paragraphs() {
    assert_eq!(
        render("line1\n\nline2").to_html(),
        "<p>line1</p><p>line2</p>"
    );
}

#[test]
fn single_newline_becomes_a_line_break() {
    assert_eq!(render("line1\nline2").to_html(), "<p>line1<br>line2</p>");
}

#[test]
fn headings_render_by_level() {
    assert_eq!(render("# Title").to_html(), "<h1>Title</h1>");
    assert_eq!(render("## Title").to_html(), "<h2>Title</h2>");
    assert_eq!(render("### Title").to_html(), "<h3>Title</h3>");
}

#[test]
fn markup_characters_in_text_are_escaped() {
    assert_eq!(
        render("a <script> tag & \"quotes\"").to_html(),
        "<p>a &lt;script&gt; tag &amp; &quot;quotes&quot;</p>"
    );
}

#[test]
fn code_content_is_escaped_but_not_styled() {
    assert_eq!(
        render("```html\n<b>&</b>\n```").to_html(),
        "<pre><code class=\"language-html\">&lt;b&gt;&amp;&lt;/b&gt;</code></pre>"
    );
}

#[test]
fn inline_code_wins_over_emphasis() {
    assert_eq!(
        render("`**not bold**`").to_html(),
        "<p><code>**not bold**</code></p>"
    );
}

#[test]
fn mixed_reply_renders_every_block_kind() {
    let text = "### Plan\nDo this **now**:\n1. install\n2. run\n```sh\ncargo run\n```";
    let html = render(text).to_html();
    assert_eq!(
        html,
        "<h3>Plan</h3>\
         <p>Do this <strong>now</strong>:</p>\
         <ol><li class=\"numbered\">install</li><li class=\"numbered\">run</li></ol>\
         <pre><code class=\"language-sh\">cargo run</code></pre>"
    );
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render("").to_html(), "");
    assert!(render("").is_empty());
}
