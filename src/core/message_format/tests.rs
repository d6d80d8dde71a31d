use pretty_assertions::assert_eq;

use super::*;

fn err(input: &str) -> MessageFormatError {
    match canonicalize(input) {
        Err(e) => e,
        Ok(printed) => panic!("expected {:?} to fail, printed {:?}", input, printed),
    }
}

#[test]
fn test_plain_text_is_unchanged() {
    assert_eq!(canonicalize("Hello, world!").unwrap(), "Hello, world!");
    assert_eq!(canonicalize("").unwrap(), "");
}

#[test]
fn test_simple_argument() {
    assert_eq!(canonicalize("Hello, {name}!").unwrap(), "Hello, {name}!");
    assert_eq!(canonicalize("Hello, {  name }!").unwrap(), "Hello, {name}!");
}

#[test]
fn test_formatted_arguments() {
    assert_eq!(canonicalize("{n,number}").unwrap(), "{n, number}");
    assert_eq!(
        canonicalize("{d , date ,  short }").unwrap(),
        "{d, date, short}"
    );
    assert_eq!(
        canonicalize("{price, number, ::currency/EUR}").unwrap(),
        "{price, number, ::currency/EUR}"
    );
}

#[test]
fn test_plural_with_offset_and_exact_match() {
    insta::assert_snapshot!(
        canonicalize("{n,plural,offset:1 =0{none} one{# friend} other{# friends}}").unwrap(),
        @"{n, plural, offset:1 =0 {none} one {# friend} other {# friends}}"
    );
}

#[test]
fn test_selectordinal() {
    assert_eq!(
        canonicalize("{pos, selectordinal, one {#st} two {#nd} other {#th}}").unwrap(),
        "{pos, selectordinal, one {#st} two {#nd} other {#th}}"
    );
}

#[test]
fn test_nested_select_in_plural() {
    insta::assert_snapshot!(
        canonicalize("{g,select,male{{n,plural,one{He has # item}other{He has # items}}}other{They}}")
            .unwrap(),
        @"{g, select, male {{n, plural, one {He has # item} other {He has # items}}} other {They}}"
    );
}

#[test]
fn test_pound_outside_plural_is_text() {
    assert_eq!(canonicalize("Issue #42").unwrap(), "Issue #42");
}

#[test]
fn test_escapes_round_trip() {
    assert_eq!(canonicalize(r"Use \{braces\}").unwrap(), r"Use \{braces\}");
    assert_eq!(canonicalize(r"back\\slash").unwrap(), r"back\\slash");
    assert_eq!(canonicalize(r"ABC").unwrap(), "ABC");
    assert_eq!(
        canonicalize(r"{n, plural, other {\# is #}}").unwrap(),
        r"{n, plural, other {\# is #}}"
    );
}

#[test]
fn test_parse_builds_ast() {
    let message = parse("Hi {name}").unwrap();
    assert_eq!(
        message.elements,
        vec![
            Element::Literal("Hi ".to_string()),
            Element::Argument("name".to_string()),
        ]
    );
}

#[test]
fn test_unbalanced_braces_are_errors() {
    let open = err("Hello {name");
    assert_eq!(
        open.message,
        "Expected \",\" or \"}\" but end of input found."
    );
    assert_eq!(open.offset, 11);

    let close = err("Hello name}");
    assert_eq!(close.message, "Expected \"{\" or text but \"}\" found.");
    assert_eq!((close.line, close.column), (1, 11));
}

#[test]
fn test_empty_argument_is_error() {
    assert_eq!(
        err("{}").message,
        "Expected argument name but \"}\" found."
    );
}

#[test]
fn test_unknown_argument_type_is_error() {
    let e = err("{n, currency}");
    assert!(e.message.starts_with("Expected \"number\""));
    assert_eq!(e.column, 5);
}

#[test]
fn test_invalid_escape_is_error() {
    let e = err(r"It\'s");
    assert!(e.message.ends_with("but \"'\" found."));
    assert_eq!(e.offset, 3);
}

#[test]
fn test_duplicate_selector_is_error() {
    let e = err("{n, plural, one {a} one {b}}");
    assert_eq!(e.message, "Duplicate option selector \"one\".");
}

#[test]
fn test_missing_options_is_error() {
    let e = err("{n, select, }");
    assert_eq!(
        e.message,
        "Expected at least one option but \"}\" found."
    );
}

#[test]
fn test_error_position_on_later_line() {
    let e = err("first line\nsecond {");
    assert_eq!((e.line, e.column), (2, 9));
    assert_eq!(
        e.to_string(),
        "Expected argument name but end of input found. (line 2, column 9)"
    );
}
