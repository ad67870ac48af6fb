use alloc::boxed::Box;
use alloc::ffi::CString;
use alloc::string::String;
use alloc::vec::Vec;

use crate::{Bytes, LoadError, Parser};

crate::load_struct! {
    #[derive(Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }
}

crate::load_struct! {
    #[derive(Debug, PartialEq)]
    struct Point3 {
        x: i32,
        y: i32,
        z: i32 = 0,
    }
}

crate::load_struct! {
    #[derive(Debug, PartialEq)]
    struct Record {
        name: String,
        tags: Vec<i64>,
        note: Option<String>,
    }
}

crate::load_struct! {
    #[derive(Debug, PartialEq)]
    struct Nested {
        origin: Point,
        target: Box<Point>,
    }
}

crate::load_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Separator {
        Comma = ",",
        Newline = "\n",
        Space,
    }
}

fn load<T: for<'a> crate::Load<'a>>(src: &str) -> Result<T, LoadError> {
    Parser::new().parse(src).unwrap().load()
}

#[test]
fn struct_by_field_name() {
    assert_eq!(
        load::<Point>(r#"{"x":100,"y":200}"#).unwrap(),
        Point { x: 100, y: 200 }
    );
}

#[test]
fn field_order_in_the_input_does_not_matter() {
    assert_eq!(
        load::<Point3>(r#"{"z":300,"x":100,"y":200}"#).unwrap(),
        Point3 {
            x: 100,
            y: 200,
            z: 300
        }
    );
}

#[test]
fn defaulted_field_fills_in_when_absent() {
    assert_eq!(
        load::<Point3>(r#"{"x":1,"y":2}"#).unwrap(),
        Point3 { x: 1, y: 2, z: 0 }
    );
}

#[test]
fn missing_required_field() {
    assert_eq!(
        load::<Point>(r#"{"x":1}"#).unwrap_err(),
        LoadError::MissingField("y")
    );
}

#[test]
fn unrecognised_fields_are_ignored() {
    assert_eq!(
        load::<Point>(r#"{"x":1,"huh":[{}],"y":2}"#).unwrap(),
        Point { x: 1, y: 2 }
    );
}

#[test]
fn optional_field_reads_null_or_absent_as_none() {
    let with_note = load::<Record>(r#"{"name":"a","tags":[],"note":"hi"}"#).unwrap();
    assert_eq!(with_note.note.as_deref(), Some("hi"));

    let null_note = load::<Record>(r#"{"name":"a","tags":[],"note":null}"#).unwrap();
    assert_eq!(null_note.note, None);

    let absent_note = load::<Record>(r#"{"name":"a","tags":[1,2]}"#).unwrap();
    assert_eq!(absent_note.note, None);
    assert_eq!(absent_note.tags, [1, 2]);
}

#[test]
fn struct_from_positional_tuple() {
    assert_eq!(load::<Point>("[1,2]").unwrap(), Point { x: 1, y: 2 });
    // A trailing defaulted field may be omitted.
    assert_eq!(load::<Point3>("[1,2]").unwrap(), Point3 { x: 1, y: 2, z: 0 });
    assert_eq!(
        load::<Point>("[1]").unwrap_err(),
        LoadError::TupleSizeMismatch
    );
}

#[test]
fn nested_structs_and_boxes() {
    let nested = load::<Nested>(r#"{"origin":{"x":0,"y":0},"target":{"x":3,"y":4}}"#).unwrap();
    assert_eq!(nested.origin, Point { x: 0, y: 0 });
    assert_eq!(*nested.target, Point { x: 3, y: 4 });
}

#[test]
fn enum_by_variant_name_or_override() {
    assert_eq!(load::<Separator>(r#""Space""#).unwrap(), Separator::Space);
    assert_eq!(load::<Separator>(r#"",""#).unwrap(), Separator::Comma);
    // The escaped form decodes before matching.
    assert_eq!(load::<Separator>(r#""\n""#).unwrap(), Separator::Newline);
    assert_eq!(
        load::<Separator>(r#""Tab""#).unwrap_err(),
        LoadError::UnknownEnumValue(String::from("Tab"))
    );
    assert_eq!(load::<Separator>("3").unwrap_err(), LoadError::TypeMismatch);
}

#[test]
fn integer_slices() {
    assert_eq!(load::<Vec<i32>>("[1, -2, 3]").unwrap(), [1, -2, 3]);
    assert_eq!(load::<Vec<u8>>("[0,255]").unwrap(), [0, 255]);
}

#[test]
fn fixed_length_arrays() {
    assert_eq!(load::<[i32; 3]>("[7,8,9]").unwrap(), [7, 8, 9]);
    assert_eq!(
        load::<[i32; 3]>("[7,8]").unwrap_err(),
        LoadError::ArraySizeMismatch {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn numbers_from_strings() {
    assert_eq!(load::<i32>(r#""42""#).unwrap(), 42);
    // Unicode escapes decode before the digits parse.
    assert_eq!(load::<i32>("\"\\u0031\\u0032\"").unwrap(), 12);
    assert_eq!(load::<f64>(r#""2.5""#).unwrap(), 2.5);
}

#[test]
fn numeric_failures() {
    assert_eq!(load::<u8>("300").unwrap_err(), LoadError::Overflow);
    assert_eq!(load::<i64>("-9223372036854775809").unwrap_err(), LoadError::Overflow);
    assert_eq!(load::<i32>(r#""abc""#).unwrap_err(), LoadError::InvalidCharacter);
    assert_eq!(load::<i32>("1.5").unwrap_err(), LoadError::InvalidCharacter);
    assert_eq!(load::<i32>("true").unwrap_err(), LoadError::TypeMismatch);
}

#[test]
fn floats_accept_every_number_shape() {
    assert_eq!(load::<f64>("-0").unwrap(), 0.0);
    assert_eq!(load::<f64>("1e5").unwrap(), 1e5);
    assert_eq!(load::<f32>("2.5").unwrap(), 2.5);
}

#[test]
fn booleans_are_strict() {
    assert!(load::<bool>("true").unwrap());
    assert_eq!(load::<bool>("1").unwrap_err(), LoadError::TypeMismatch);
}

#[test]
fn strings_decode_their_escapes() {
    assert_eq!(load::<String>(r#""plain""#).unwrap(), "plain");
    assert_eq!(load::<String>(r#""a\nb""#).unwrap(), "a\nb");
    assert_eq!(load::<String>("17").unwrap_err(), LoadError::TypeMismatch);
}

#[test]
fn boxed_str_matches_string_semantics() {
    assert_eq!(&*load::<Box<str>>(r#""plain""#).unwrap(), "plain");
    assert_eq!(&*load::<Box<str>>(r#""a\nb""#).unwrap(), "a\nb");
    assert_eq!(
        load::<Box<str>>("17").unwrap_err(),
        LoadError::TypeMismatch
    );
}

#[test]
fn byte_buffers() {
    assert_eq!(load::<Bytes>(r#""abc""#).unwrap(), Bytes(Vec::from(*b"abc")));
    assert_eq!(
        load::<Bytes>("\"a\\u0000b\"").unwrap(),
        Bytes(alloc::vec![b'a', 0, b'b'])
    );
    assert_eq!(load::<Bytes>("[104,105]").unwrap(), Bytes(Vec::from(*b"hi")));
    assert_eq!(load::<Bytes>("5").unwrap_err(), LoadError::TypeMismatch);
}

#[test]
fn nul_terminated_strings() {
    let c = load::<CString>(r#""hello""#).unwrap();
    assert_eq!(c.as_bytes_with_nul(), b"hello\0");
    assert_eq!(
        load::<CString>("\"he\\u0000llo\"").unwrap_err(),
        LoadError::InvalidCharacter
    );
}

#[test]
fn optional_root() {
    assert_eq!(load::<Option<i32>>("null").unwrap(), None);
    assert_eq!(load::<Option<i32>>("5").unwrap(), Some(5));
}

#[test]
fn vector_from_a_multi_stream() {
    let mut parser = Parser::new();
    let doc = parser.parse_multi("1 2 3").unwrap();
    assert_eq!(doc.load::<Vec<i32>>().unwrap(), [1, 2, 3]);
}

#[test]
fn struct_from_a_multi_stream_is_positional() {
    let mut parser = Parser::new();
    let doc = parser.parse_multi("4, 5").unwrap();
    assert_eq!(doc.load::<Point>().unwrap(), Point { x: 4, y: 5 });
}

#[test]
fn escape_errors_surface_during_load() {
    assert!(matches!(
        load::<String>(r#""\uDC00""#).unwrap_err(),
        LoadError::Escape(_)
    ));
}
