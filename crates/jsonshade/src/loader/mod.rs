//! The typed loader: schema-directed projection of node trees onto domain
//! types.
//!
//! [`Load`] is implemented for the primitive and container shapes of the
//! mapping table (booleans, integers, floats, optionals, fixed-length
//! arrays, vectors, strings, byte buffers, boxes); user structs and enums
//! derive their projections with [`load_struct!`](crate::load_struct) and
//! [`load_enum!`](crate::load_enum). Struct fields resolve against the
//! object's shared class through its name→index map, so each field lookup is
//! one hash probe regardless of object width.
//!
//! Cleanup on failure is ordinary `Drop`: a projection that errors part-way
//! releases whatever it had built and nothing else.

mod error;
mod macros;

pub use error::LoadError;

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::ffi::CString;
use alloc::string::String;
use alloc::vec::Vec;
use core::num::IntErrorKind;

use crate::document::Document;
use crate::escape;
use crate::node::Node;

/// A type that can be loaded from a parsed node tree.
///
/// Implementations are provided for the standard shapes; use
/// [`load_struct!`](crate::load_struct) and
/// [`load_enum!`](crate::load_enum) for domain types.
///
/// # Examples
///
/// ```
/// use jsonshade::Parser;
///
/// let mut parser = Parser::new();
/// let doc = parser.parse("[1, -2, 3]").unwrap();
/// let values: Vec<i32> = doc.load().unwrap();
/// assert_eq!(values, [1, -2, 3]);
/// ```
pub trait Load<'a>: Sized {
    /// Projects `node` onto `Self`.
    ///
    /// # Errors
    ///
    /// See [`LoadError`] for the conditions each shape can report.
    fn load(doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError>;

    /// Called for a struct field whose name is absent from the input
    /// object. The default reports [`LoadError::MissingField`]; optional
    /// shapes override it to produce their empty value.
    fn absent(field: &'static str) -> Result<Self, LoadError> {
        Err(LoadError::MissingField(field))
    }
}

/// Digits of a numeric target: the raw slice of a number node, or the
/// decoded text of any string flavour.
fn numeric_text<'a>(node: &Node<'a>) -> Result<Cow<'a, str>, LoadError> {
    match *node {
        Node::Number(s) | Node::SafeString(s) | Node::WildString(s) => Ok(Cow::Borrowed(s)),
        Node::JsonString(s) => Ok(Cow::Owned(escape::unescape(s)?)),
        _ => Err(LoadError::TypeMismatch),
    }
}

fn int_error(e: &core::num::ParseIntError) -> LoadError {
    match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => LoadError::Overflow,
        _ => LoadError::InvalidCharacter,
    }
}

impl<'a> Load<'a> for bool {
    fn load(_doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        node.as_bool().ok_or(LoadError::TypeMismatch)
    }
}

macro_rules! load_integer {
    ($($ty:ty)*) => {$(
        impl<'a> Load<'a> for $ty {
            fn load(_doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
                numeric_text(node)?.parse().map_err(|e| int_error(&e))
            }
        }
    )*};
}

load_integer!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize);

macro_rules! load_float {
    ($($ty:ty)*) => {$(
        impl<'a> Load<'a> for $ty {
            fn load(_doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
                numeric_text(node)?
                    .parse()
                    .map_err(|_| LoadError::InvalidCharacter)
            }
        }
    )*};
}

load_float!(f32 f64);

impl<'a, T: Load<'a>> Load<'a> for Option<T> {
    fn load(doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        if node.is_null() {
            Ok(None)
        } else {
            T::load(doc, node).map(Some)
        }
    }

    fn absent(_field: &'static str) -> Result<Self, LoadError> {
        Ok(None)
    }
}

impl<'a, T: Load<'a>> Load<'a> for Box<T> {
    fn load(doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        T::load(doc, node).map(Box::new)
    }
}

impl<'a> Load<'a> for String {
    fn load(_doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        match node.text() {
            Some(text) => Ok(text?.into_owned()),
            None => Err(LoadError::TypeMismatch),
        }
    }
}

// The blanket `Box<T>` projection cannot cover `str` (it is unsized), so
// the string shape gets its own boxed form.
impl<'a> Load<'a> for Box<str> {
    fn load(doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        String::load(doc, node).map(String::into_boxed_str)
    }
}

impl<'a, T: Load<'a>> Load<'a> for Vec<T> {
    fn load(doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        let nodes = match node {
            Node::Array(span) | Node::Multi(span) => doc.nodes(*span),
            _ => return Err(LoadError::TypeMismatch),
        };
        let mut out = Vec::with_capacity(nodes.len());
        for n in nodes {
            out.push(T::load(doc, n)?);
        }
        Ok(out)
    }
}

impl<'a, T: Load<'a>, const N: usize> Load<'a> for [T; N] {
    fn load(doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        let nodes = match node {
            Node::Array(span) | Node::Multi(span) => doc.nodes(*span),
            _ => return Err(LoadError::TypeMismatch),
        };
        if nodes.len() != N {
            return Err(LoadError::ArraySizeMismatch {
                expected: N,
                found: nodes.len(),
            });
        }
        let mut out = Vec::with_capacity(N);
        for n in nodes {
            out.push(T::load(doc, n)?);
        }
        out.try_into().map_err(|_| LoadError::ArraySizeMismatch {
            expected: N,
            found: N,
        })
    }
}

/// A byte buffer target.
///
/// Accepts any string flavour (copied verbatim, or unescaped for
/// [`Node::JsonString`]) as well as an array or multi of byte-sized
/// numbers. A newtype rather than `Vec<u8>` so the element-wise `Vec<T>`
/// projection stays available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl<'a> Load<'a> for Bytes {
    fn load(doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        match *node {
            Node::SafeString(s) | Node::WildString(s) => Ok(Self(s.as_bytes().to_vec())),
            Node::JsonString(s) => Ok(Self(escape::unescape(s)?.into_bytes())),
            Node::Array(_) | Node::Multi(_) => Vec::<u8>::load(doc, node).map(Self),
            _ => Err(LoadError::TypeMismatch),
        }
    }
}

impl<'a> Load<'a> for CString {
    fn load(_doc: &Document<'a>, node: &Node<'a>) -> Result<Self, LoadError> {
        match node.text() {
            Some(text) => {
                Self::new(text?.into_owned()).map_err(|_| LoadError::InvalidCharacter)
            }
            None => Err(LoadError::TypeMismatch),
        }
    }
}
