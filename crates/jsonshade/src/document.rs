//! The assembly buffer: a parsed document as a flat vector of nodes.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::escape;
use crate::loader::{Load, LoadError};
use crate::node::{Node, Span};
use crate::shadow::ObjectClass;

/// A parsed tree, laid out as one contiguous node vector.
///
/// Children of each composite value occupy a contiguous block, appended in
/// post-order as the parser completed them; the root is written last, into
/// the reserved slot at index 0. Scalar nodes borrow from the input text and
/// object classes are shared with the parser's trie through `Rc`, so a
/// document stays usable after its parser moves on to other inputs.
///
/// # Examples
///
/// ```
/// let mut parser = jsonshade::Parser::new();
/// let doc = parser.parse(r#"{"tags":[1,2,3]}"#).unwrap();
/// let values = doc.object_values(doc.root()).unwrap();
/// assert_eq!(values.len(), 1);
/// assert_eq!(doc.to_json(), r#"{"tags":[1,2,3]}"#);
/// ```
#[derive(Debug, Clone)]
pub struct Document<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Document<'a> {
    pub(crate) fn new(nodes: Vec<Node<'a>>) -> Self {
        debug_assert!(!nodes.is_empty(), "assembly is never empty");
        Self { nodes }
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &Node<'a> {
        &self.nodes[0]
    }

    /// The nodes covered by `span`.
    #[must_use]
    pub fn nodes(&self, span: Span) -> &[Node<'a>] {
        &self.nodes[span.start..span.start + span.len]
    }

    /// Total number of assembled nodes, root slot included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The shared class of an [`Object`](Node::Object) node.
    ///
    /// Returns `None` for any other variant.
    #[must_use]
    pub fn object_class<'n>(&'n self, node: &Node<'a>) -> Option<&'n Rc<ObjectClass>> {
        match node {
            Node::Object(span) => match self.nodes(*span).first() {
                Some(Node::Class(class)) => Some(class),
                _ => None,
            },
            _ => None,
        }
    }

    /// The field values of an [`Object`](Node::Object) node, in class
    /// order.
    ///
    /// Returns `None` for any other variant.
    #[must_use]
    pub fn object_values<'n>(&'n self, node: &Node<'a>) -> Option<&'n [Node<'a>]> {
        match node {
            Node::Object(span) => Some(&self.nodes(*span)[1..]),
            _ => None,
        }
    }

    /// Loads the root node into `T`.
    ///
    /// # Errors
    ///
    /// Whatever `T`'s projection reports; see [`LoadError`].
    pub fn load<T: Load<'a>>(&self) -> Result<T, LoadError> {
        T::load(self, self.root())
    }

    /// Writes the canonical JSON rendering of `node`.
    ///
    /// No whitespace is emitted; safe and json strings are re-emitted
    /// verbatim (escapes intact), wild strings are escaped, objects render
    /// their raw key names in class order, and each value of a
    /// [`Multi`](Node::Multi) is terminated by a newline.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_node<W: fmt::Write>(&self, node: &Node<'a>, w: &mut W) -> fmt::Result {
        match node {
            Node::Null => w.write_str("null"),
            Node::Boolean(b) => w.write_str(if *b { "true" } else { "false" }),
            Node::Number(s) => w.write_str(s),
            Node::SafeString(s) | Node::JsonString(s) => {
                w.write_char('"')?;
                w.write_str(s)?;
                w.write_char('"')
            }
            Node::WildString(s) => {
                w.write_char('"')?;
                escape::write_escaped(s, w)?;
                w.write_char('"')
            }
            Node::Array(span) => {
                w.write_char('[')?;
                for (i, v) in self.nodes(*span).iter().enumerate() {
                    if i > 0 {
                        w.write_char(',')?;
                    }
                    self.write_node(v, w)?;
                }
                w.write_char(']')
            }
            Node::Object(span) => {
                let slots = self.nodes(*span);
                let Some(Node::Class(class)) = slots.first() else {
                    debug_assert!(false, "object span must start with its class");
                    return Ok(());
                };
                w.write_char('{')?;
                for (i, (name, v)) in class.names().zip(&slots[1..]).enumerate() {
                    if i > 0 {
                        w.write_char(',')?;
                    }
                    w.write_char('"')?;
                    w.write_str(name)?;
                    w.write_str("\":")?;
                    self.write_node(v, w)?;
                }
                w.write_char('}')
            }
            Node::Class(_) => {
                debug_assert!(false, "class node outside an object span");
                Ok(())
            }
            Node::Multi(span) => {
                for v in self.nodes(*span) {
                    self.write_node(v, w)?;
                    w.write_char('\n')?;
                }
                Ok(())
            }
        }
    }

    /// The canonical JSON rendering of the whole document.
    #[must_use]
    pub fn to_json(&self) -> String {
        let mut out = String::new();
        self.write_node(self.root(), &mut out)
            .expect("writing to a String cannot fail");
        out
    }
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_node(self.root(), f)
    }
}
