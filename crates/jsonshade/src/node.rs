//! Node records and assembly spans.

use alloc::borrow::Cow;
use alloc::rc::Rc;

use crate::escape::{self, EscapeError};
use crate::shadow::ObjectClass;

/// An index range into a [`Document`](crate::Document)'s assembly.
///
/// Spans address nodes by offset and length rather than by pointer, so
/// growing the assembly while it is under construction never invalidates
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub(crate) start: usize,
    pub(crate) len: usize,
}

impl Span {
    pub(crate) fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Number of nodes covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` for the span of `[]`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// One record in the assembly buffer.
///
/// Scalar variants borrow the input text verbatim; composite variants carry
/// a [`Span`] into the owning document. The three string flavours record
/// what emission and decoding may assume:
///
/// - [`SafeString`](Node::SafeString) contains no backslash and can be
///   copied without decoding;
/// - [`JsonString`](Node::JsonString) contains at least one escape and must
///   be run through [`unescape`](crate::unescape) to obtain its decoded
///   form;
/// - [`WildString`](Node::WildString) holds arbitrary caller-supplied text
///   that is escaped on output.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<'a> {
    /// The `null` literal.
    Null,
    /// `true` or `false`.
    Boolean(bool),
    /// An unconverted number, validated against the JSON grammar only.
    Number(&'a str),
    /// A string slice with no escapes.
    SafeString(&'a str),
    /// A string slice containing at least one backslash escape.
    JsonString(&'a str),
    /// Raw text supplied by a caller, escaped when formatted.
    WildString(&'a str),
    /// An array; the span covers its elements.
    Array(Span),
    /// An object; the span's first node is the [`Class`](Node::Class), the
    /// rest are field values in class order.
    Object(Span),
    /// Shared key-set descriptor. Only ever the first node of an object
    /// span.
    Class(Rc<ObjectClass>),
    /// A sequence of concatenated top-level values.
    Multi(Span),
}

impl<'a> Node<'a> {
    /// Returns `true` if the node is [`Null`](Node::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The boolean payload, if this is a [`Boolean`](Node::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The raw text of a [`Number`](Node::Number) node.
    #[must_use]
    pub fn number_text(&self) -> Option<&'a str> {
        match self {
            Self::Number(s) => Some(s),
            _ => None,
        }
    }

    /// The decoded text of any string flavour.
    ///
    /// Safe and wild strings borrow the underlying slice;
    /// [`JsonString`](Node::JsonString) is unescaped into an owned string,
    /// which can fail on semantically invalid escapes. Non-string nodes
    /// return `None`.
    pub fn text(&self) -> Option<Result<Cow<'a, str>, EscapeError>> {
        match *self {
            Self::SafeString(s) | Self::WildString(s) => Some(Ok(Cow::Borrowed(s))),
            Self::JsonString(s) => Some(escape::unescape(s).map(Cow::Owned)),
            _ => None,
        }
    }
}
