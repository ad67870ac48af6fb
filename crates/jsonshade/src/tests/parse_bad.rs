use alloc::string::ToString;

use crate::{EscapeError, ParseError, ParseErrorKind, Parser};

fn parse_err(src: &str) -> ParseError {
    Parser::new().parse(src).unwrap_err()
}

#[test]
fn empty_input() {
    assert_eq!(parse_err("").kind(), ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(parse_err("   ").kind(), ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn unterminated_object() {
    assert_eq!(parse_err("{").kind(), ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(
        parse_err(r#"{"a":1"#).kind(),
        ParseErrorKind::UnexpectedEndOfInput
    );
}

#[test]
fn unterminated_array() {
    assert_eq!(parse_err("[1,2,").kind(), ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(parse_err("[1,2").kind(), ParseErrorKind::UnexpectedEndOfInput);
}

#[test]
fn junk_after_a_complete_value() {
    let err = parse_err(r#"{ "a": 1 } junk"#);
    assert_eq!(err.kind(), ParseErrorKind::JunkAfterInput);
}

#[test]
fn malformed_literals() {
    assert_eq!(parse_err("nul").kind(), ParseErrorKind::BadToken);
    assert_eq!(parse_err("tru").kind(), ParseErrorKind::BadToken);
    assert_eq!(parse_err("fals ").kind(), ParseErrorKind::BadToken);
}

#[test]
fn unterminated_strings() {
    assert_eq!(parse_err(r#""abc"#).kind(), ParseErrorKind::MissingQuotes);
    // The escape consumes the would-be closing quote.
    assert_eq!(parse_err("\"abc\\\"").kind(), ParseErrorKind::MissingQuotes);
    assert_eq!(parse_err("\"abc\\").kind(), ParseErrorKind::MissingQuotes);
}

#[test]
fn missing_separators() {
    assert_eq!(parse_err("[1 2]").kind(), ParseErrorKind::MissingComma);
    assert_eq!(
        parse_err(r#"{"a":1 "b":2}"#).kind(),
        ParseErrorKind::MissingComma
    );
    assert_eq!(parse_err(r#"{"a" 1}"#).kind(), ParseErrorKind::MissingColon);
}

#[test]
fn non_string_key() {
    assert_eq!(parse_err("{1:2}").kind(), ParseErrorKind::MissingKey);
    assert_eq!(parse_err("{,}").kind(), ParseErrorKind::MissingKey);
}

#[test]
fn digit_free_numbers() {
    assert_eq!(parse_err("-").kind(), ParseErrorKind::MissingDigits);
    assert_eq!(parse_err("1.").kind(), ParseErrorKind::MissingDigits);
    assert_eq!(parse_err("1e").kind(), ParseErrorKind::MissingDigits);
    assert_eq!(parse_err("-.5").kind(), ParseErrorKind::MissingDigits);
    assert_eq!(parse_err("2e+").kind(), ParseErrorKind::MissingDigits);
}

#[test]
fn unexpected_first_byte() {
    assert_eq!(parse_err("@").kind(), ParseErrorKind::SyntaxError('@'));
    assert_eq!(parse_err("[1,:]").kind(), ParseErrorKind::SyntaxError(':'));
}

#[test]
fn invalid_key_escape_fails_at_object_close() {
    let err = parse_err(r#"{"\uD800":1}"#);
    assert_eq!(
        err.kind(),
        ParseErrorKind::Escape(EscapeError::CannotEncodeSurrogateHalf)
    );
}

#[test]
fn errors_carry_line_and_column() {
    let err = parse_err("[\n1,\n x]");
    assert_eq!(err.line(), 3);
    assert_eq!(err.column(), 2);
    assert_eq!(err.to_string(), "unexpected character 'x' at 3:2");
}

#[test]
fn failed_parse_does_not_poison_the_parser() {
    let mut parser = Parser::new();
    assert!(parser.parse("[1,").is_err());
    assert_eq!(parser.parse("[1,2]").unwrap().to_json(), "[1,2]");
}
