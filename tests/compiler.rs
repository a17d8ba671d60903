//! End-to-end compilation tests
//!
//! Whole documents go through `peml::compile`; outputs are checked with inline snapshots.

use peml::ir::render;
use peml::transforms::standard::BUILDING;
use peml::{compile, CompileError, LexError};

#[test]
fn test_single_text() {
    let html = compile(r#"ADD TEXT "Hello, World""#).unwrap();
    insta::assert_snapshot!(html, @"<html><body><span>Hello, World</span></body></html>");
}

#[test]
fn test_text_line_break() {
    let html = compile(r#"ADD TEXT "a\nb""#).unwrap();
    insta::assert_snapshot!(html, @"<html><body><span>a<br/>b</span></body></html>");
}

#[test]
fn test_modifiers_nest_outward() {
    let source = "ADD TEXT \"hi\"\nWITH BOLD TEXT\nWITH ITALIC TEXT";
    let html = compile(source).unwrap();
    insta::assert_snapshot!(html, @"<html><body><span><i><b>hi</b></i></span></body></html>");
}

#[test]
fn test_title_and_subtitle() {
    let source = "ADD TITLE \"x\"\nADD SUBTITLE \"y\"";
    let html = compile(source).unwrap();
    insta::assert_snapshot!(html, @"<html><body><span><h1>x</h1><h2>y</h2></span></body></html>");
}

#[test]
fn test_image_uri_is_verbatim() {
    let html = compile(r#"ADD IMAGE FROM "http://x/y.png""#).unwrap();
    insta::assert_snapshot!(html, @r#"<html><body><span><img src="http://x/y.png"/></span></body></html>"#);
}

#[test]
fn test_two_paragraphs() {
    let source = "ADD TEXT \"one\"\n\tADD TEXT \"two\"";
    let html = compile(source).unwrap();
    assert_eq!(html.matches("<span>").count(), 2);
    insta::assert_snapshot!(html, @"<html><body><span>one</span><span>two</span></body></html>");
}

#[test]
fn test_paragraph_modifiers_and_element_modifiers() {
    let source = [
        "WITH LINK TO \"https://example.com\"",
        "ADD TITLE \"Links\"",
        "WITH ITALIC TEXT",
        "ADD TEXT \"plain & simple\"",
        "\tADD TEXT \"gone\"",
        "WITH STRIKETHROUGH",
    ]
    .join("\n");
    let html = compile(&source).unwrap();
    insta::assert_snapshot!(html, @r#"<html><body><a href="https://example.com"><span><i><h1>Links</h1></i>plain &amp; simple</span></a><span><s>gone</s></span></body></html>"#);
}

#[test]
fn test_escaping_happens_once() {
    let html = compile(r#"ADD TEXT "&amp; <tag>""#).unwrap();
    insta::assert_snapshot!(html, @"<html><body><span>&amp;amp; &lt;tag&gt;</span></body></html>");
}

#[test]
fn test_braces_in_content_are_plain_text() {
    let html = compile(r#"ADD TEXT "{elements} {src}""#).unwrap();
    insta::assert_snapshot!(html, @"<html><body><span>{elements} {src}</span></body></html>");
}

#[test]
fn test_crlf_line_endings() {
    let html = compile("ADD TEXT \"a\"\r\n\tADD TEXT \"b\"\r\n").unwrap();
    insta::assert_snapshot!(html, @"<html><body><span>a</span><span>b</span></body></html>");
}

#[test]
fn test_lone_carriage_return_ends_a_line() {
    let html = compile("ADD TEXT \"a\"\rWITH BOLD TEXT\r\tADD TEXT \"b\"").unwrap();
    insta::assert_snapshot!(html, @"<html><body><span><b>a</b></span><span>b</span></body></html>");
}

#[test]
fn test_extra_whitespace_is_not_ignored() {
    assert!(matches!(
        compile("ADD  TEXT \"x\""),
        Err(CompileError::UnknownStatement(_))
    ));
    assert!(matches!(
        compile("ADD TEXT \"x\"\nWITH BOLD TEXT "),
        Err(CompileError::UnknownModifier(_))
    ));
}

#[test]
fn test_unknown_statement_yields_no_output() {
    let source = "ADD TEXT \"ok\"\nFOO BAR \"baz\"";
    match compile(source) {
        Err(CompileError::UnknownStatement(statement)) => {
            assert_eq!(statement.to_string(), r#"FOO BAR "baz""#);
        }
        other => panic!("expected unknown statement, got {:?}", other),
    }
}

#[test]
fn test_unknown_modifier() {
    let result = compile("ADD TEXT \"ok\"\nWITH UNDERLINE");
    assert!(matches!(result, Err(CompileError::UnknownModifier(_))));
}

#[test]
fn test_lex_errors_report_line() {
    assert_eq!(
        compile("ADD TEXT \"ok\"\n\tADD TEXT \"broken"),
        Err(CompileError::Lex {
            line: 2,
            source: LexError::UnterminatedString,
        })
    );
    assert_eq!(
        compile(r#"ADD TEXT "\a""#),
        Err(CompileError::Lex {
            line: 1,
            source: LexError::InvalidEscape('a'),
        })
    );
}

#[test]
fn test_rendering_ir_twice_is_identical() {
    let elements = BUILDING
        .run("ADD TEXT \"hi\"\nWITH BOLD TEXT\nWITH LINK TO \"/\"\n\tADD DESK".to_string())
        .unwrap();
    for element in &elements {
        assert_eq!(render(element).unwrap(), render(element).unwrap());
    }
}
