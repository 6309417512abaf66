//! Degenerate-input behavior: the parser must accept anything and degrade
//! along the documented fallback rules, never erroring.

use premark::{parse, parse_with_options, to_xml, Element, Node, ParseOptions};

fn text(s: &str) -> Node {
    Node::from(s)
}

fn element(e: Element) -> Node {
    Node::from(e)
}

#[test]
fn test_unmatched_closing_bracket_discards_pending_text() {
    assert_eq!(parse("a>b"), vec![text("b")]);
    assert_eq!(parse(">"), Vec::<Node>::new());
    assert_eq!(parse(">>>after"), vec![text("after")]);
    assert_eq!(
        parse_with_options("a>b", ParseOptions::trimmed()),
        vec![text("b")]
    );
}

#[test]
fn test_unterminated_element_stays_in_tree() {
    // The element was appended when its bracket was seen; only its would-be
    // children are lost to the top level.
    assert_eq!(
        parse("a<b"),
        vec![element(Element::new("a")), text("b")]
    );
}

#[test]
fn test_trailing_text_after_unterminated_tag_goes_to_root() {
    let got = parse("wrap<inner<deep> tail");
    assert_eq!(
        got,
        vec![
            element(
                Element::new("wrap")
                    .with_child(Element::new("inner").with_child("deep"))
            ),
            text(" tail"),
        ]
    );
}

#[test]
fn test_bare_opening_bracket_yields_empty_tag() {
    let got = parse("<x>");
    assert_eq!(got, vec![element(Element::new("").with_child("x"))]);
    assert_eq!(to_xml(&got), "<>x</>");
}

#[test]
fn test_extra_closing_brackets_after_balanced_content() {
    let got = parse("e<x>> tail");
    // The second `>` finds nothing open: it and its (empty) buffer vanish.
    assert_eq!(
        got,
        vec![element(Element::new("e").with_child("x")), text(" tail")]
    );
}

#[test]
fn test_escaped_open_bracket_never_opens() {
    assert_eq!(parse("x\\<y"), vec![text("x<y")]);
}

#[test]
fn test_escaped_close_bracket_never_closes() {
    let got = parse("e<a \\> b>");
    assert_eq!(got, vec![element(Element::new("e").with_child("a > b"))]);
}

#[test]
fn test_backslash_before_ordinary_char_is_preserved() {
    assert_eq!(parse("path\\to\\file"), vec![text("path\\to\\file")]);
}

#[test]
fn test_escape_consumes_following_char() {
    // `\e` is consumed as a pair, so the `e` cannot become part of some later
    // bracket transition; the `<` after it still opens an element normally.
    assert_eq!(
        parse("\\e<x>"),
        vec![element(Element::new("\\e").with_child("x"))]
    );
}

#[test]
fn test_trailing_backslash_dropped() {
    assert_eq!(parse("end\\"), vec![text("end")]);
    assert_eq!(parse("\\"), Vec::<Node>::new());
}

#[test]
fn test_unterminated_quote_in_signature() {
    // The lone quote swallows the rest of the signature buffer; recognition
    // still produces a (degenerate) tag and parsing continues.
    let got = parse(r#"e a="1<x>"#);
    assert_eq!(got, vec![element(Element::new("1").with_child("x"))]);
}

#[test]
fn test_missing_equals_absorbed_into_tag() {
    // `type warn` has no `=`, so `warn` is the tag and `type` joins the
    // remainder.
    let got = parse("type warn<x>");
    assert_eq!(
        got,
        vec![text("type "), element(Element::new("warn").with_child("x"))]
    );
}

#[test]
fn test_escaped_brackets_inside_quoted_value() {
    // Quotes only matter to the backward signature scan; a bracket inside a
    // value must still be escaped or it drives the forward scan.
    let got = parse(r#"e msg="a \<b\>"<x>"#);
    let el = got[0].as_element().unwrap();
    assert_eq!(el.tag, "e");
    assert_eq!(el.attr("msg"), Some("a <b>"));
    assert_eq!(el.children, vec![text("x")]);
}

#[test]
fn test_unescaped_bracket_inside_value_still_opens() {
    // Without the escape, the `<` inside the would-be value opens an element
    // mid-signature; the unterminated quote then degrades the tag.
    let got = parse(r#"e msg="a <b>"#);
    assert_eq!(got, vec![element(Element::new("a").with_child("b"))]);
}

#[test]
fn test_whitespace_only_document_under_trim() {
    assert!(parse_with_options(" \t\n ", ParseOptions::trimmed()).is_empty());
    assert_eq!(parse(" \t\n "), vec![text(" \t\n ")]);
}

#[test]
fn test_trim_drops_whitespace_remainder() {
    let got = parse_with_options("  deco<x>", ParseOptions::trimmed());
    assert_eq!(got, vec![element(Element::new("deco").with_child("x"))]);
}

#[test]
fn test_trim_applies_inside_elements() {
    let got = parse_with_options("e<   >", ParseOptions::trimmed());
    assert_eq!(got, vec![element(Element::new("e"))]);
    assert_eq!(to_xml(&got), "<e/>");
}

#[test]
fn test_empty_attribute_value() {
    let got = parse(r#"e a=""<>"#);
    let el = got[0].as_element().unwrap();
    assert_eq!(el.attr("a"), Some(""));
    assert_eq!(to_xml(&got), r#"<e a=""/>"#);
}

#[test]
fn test_deep_nesting_unwinds_cleanly() {
    let mut source = String::new();
    for _ in 0..64 {
        source.push_str("d<");
    }
    source.push('x');
    for _ in 0..64 {
        source.push('>');
    }
    let got = parse(&source);
    assert_eq!(got.len(), 1);
    let mut current = got[0].as_element().unwrap();
    for _ in 0..63 {
        assert_eq!(current.tag, "d");
        current = current.children[0].as_element().unwrap();
    }
    assert_eq!(current.children, vec![text("x")]);
}
