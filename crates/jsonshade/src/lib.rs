//! Zero-copy JSON parsing with shared *shadow classes*.
//!
//! `jsonshade` parses JSON into a flat assembly of lightweight [`Node`]
//! records that borrow the input text. The distinguishing feature is the
//! [`ShadowTrie`]: object key sequences are interned across a whole document
//! *and across successive parses by the same [`Parser`]*, so every object
//! with the same ordered key set shares one [`ObjectClass`] descriptor
//! carrying a name→index map. Documents made of repetitive records (logs,
//! change feeds, CDC payloads) pay for each distinct key set exactly once.
//!
//! A second subsystem, the [`Load`] trait with its [`load_struct!`] and
//! [`load_enum!`] macros, projects node trees onto strongly-typed domain
//! values, resolving struct fields through the shared class's index map.
//!
//! # Examples
//!
//! ```
//! use jsonshade::Parser;
//!
//! let mut parser = Parser::new();
//! let doc = parser.parse(r#"{"user":"andy","visits":3}"#).unwrap();
//! assert_eq!(doc.to_json(), r#"{"user":"andy","visits":3}"#);
//!
//! // A second record with the same key set reuses the interned class.
//! let doc2 = parser.parse(r#"{"user":"smoo","visits":9}"#).unwrap();
//! let a = doc.object_class(doc.root()).unwrap();
//! let b = doc2.object_class(doc2.root()).unwrap();
//! assert!(std::rc::Rc::ptr_eq(a, b));
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod document;
mod escape;
mod node;
mod scanner;
mod shadow;

mod loader;
mod parser;

pub use document::Document;
pub use escape::{needs_escape, unescape, unescaped_len, write_escaped, EscapeError};
pub use loader::{Bytes, Load, LoadError};
pub use node::{Node, Span};
pub use parser::{ParseError, ParseErrorKind, Parser};
pub use shadow::{ObjectClass, ShadowTrie};

#[cfg(test)]
mod tests;
