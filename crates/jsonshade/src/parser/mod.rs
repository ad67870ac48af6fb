//! The recursive-descent parser and its assembly construction.
//!
//! A [`Parser`] is reusable: it owns the shadow trie, which accumulates
//! interned key sequences across every parse it performs, and remembers the
//! high-water assembly size so later parses pre-size their node vector in
//! one allocation.
//!
//! During a parse, each composite value accumulates its children in a
//! per-recursion-depth scratch vector; when the composite closes, the block
//! is appended to the assembly in one move and the composite node records
//! the resulting span. Spans are indices, so assembly growth never
//! invalidates previously recorded composites. Slot 0 is reserved up front
//! and receives the root node last.

mod error;

pub use error::{ParseError, ParseErrorKind};

use alloc::vec::Vec;
use core::mem;

use crate::document::Document;
use crate::node::{Node, Span};
use crate::scanner::Scanner;
use crate::shadow::ShadowTrie;

/// A reusable JSON parser with interned object classes.
///
/// # Examples
///
/// ```
/// use jsonshade::{Node, Parser};
///
/// let mut parser = Parser::new();
/// let doc = parser.parse("[1,2,3]").unwrap();
/// let Node::Array(span) = doc.root() else { panic!() };
/// assert_eq!(span.len(), 3);
/// ```
#[derive(Debug)]
pub struct Parser {
    shadow: ShadowTrie,
    assembly_capacity: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

enum Mode {
    Single,
    Multi,
}

impl Parser {
    /// Creates a parser with an empty shadow trie.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shadow: ShadowTrie::new(),
            assembly_capacity: 0,
        }
    }

    /// Parses a single JSON value.
    ///
    /// The returned [`Document`] borrows `src` and shares object classes
    /// with this parser's trie; it remains valid after further parses.
    ///
    /// # Errors
    ///
    /// Any [`ParseErrorKind`], located at the position the grammar gave up.
    /// Trailing non-whitespace content is
    /// [`JunkAfterInput`](ParseErrorKind::JunkAfterInput).
    pub fn parse<'a>(&mut self, src: &'a str) -> Result<Document<'a>, ParseError> {
        self.run(src, Mode::Single)
    }

    /// Parses a stream of concatenated top-level values into a
    /// [`Multi`](Node::Multi) root.
    ///
    /// Values may be separated by whitespace, a comma, or both, and one
    /// leading or trailing comma is tolerated. This accepts JSON Lines and
    /// comma-joined log streams alike; it is deliberately wider than JSON
    /// proper. An empty input yields an empty multi.
    ///
    /// # Errors
    ///
    /// Same kinds as [`parse`](Parser::parse), minus `JunkAfterInput`.
    pub fn parse_multi<'a>(&mut self, src: &'a str) -> Result<Document<'a>, ParseError> {
        self.run(src, Mode::Multi)
    }

    /// The trie of interned key sequences, for diagnostics.
    #[must_use]
    pub fn shadow(&self) -> &ShadowTrie {
        &self.shadow
    }

    fn run<'a>(&mut self, src: &'a str, mode: Mode) -> Result<Document<'a>, ParseError> {
        let mut asm = Assembler {
            scanner: Scanner::new(src),
            shadow: &mut self.shadow,
            assembly: Vec::with_capacity(self.assembly_capacity.max(1)),
            scratch: Vec::new(),
        };
        let outcome = match mode {
            Mode::Single => asm.document(),
            Mode::Multi => asm.multi_document(),
        };
        match outcome {
            Ok(()) => {
                self.assembly_capacity = self.assembly_capacity.max(asm.assembly.len());
                Ok(Document::new(asm.assembly))
            }
            Err(kind) => Err(ParseError {
                kind,
                line: asm.scanner.line(),
                column: asm.scanner.col(),
            }),
        }
    }
}

type Parsed<T> = Result<T, ParseErrorKind>;

/// Per-parse state: the cursor, the assembly under construction, and the
/// scratch stack indexed by recursion depth.
struct Assembler<'p, 'a> {
    scanner: Scanner<'a>,
    shadow: &'p mut ShadowTrie,
    assembly: Vec<Node<'a>>,
    scratch: Vec<Vec<Node<'a>>>,
}

impl<'a> Assembler<'_, 'a> {
    fn document(&mut self) -> Parsed<()> {
        self.assembly.push(Node::Null); // root slot
        self.scanner.skip_space();
        let root = self.value(0)?;
        self.scanner.skip_space();
        if !self.scanner.eof() {
            return Err(ParseErrorKind::JunkAfterInput);
        }
        self.assembly[0] = root;
        Ok(())
    }

    fn multi_document(&mut self) -> Parsed<()> {
        self.assembly.push(Node::Null); // root slot
        let mut items = self.take_scratch(0);
        self.scanner.skip_space();
        if self.scanner.peek() == Some(b',') {
            self.scanner.bump();
            self.scanner.skip_space();
        }
        while !self.scanner.eof() {
            items.push(self.value(1)?);
            self.scanner.skip_space();
            if self.scanner.peek() == Some(b',') {
                self.scanner.bump();
                self.scanner.skip_space();
            }
        }
        let span = self.commit(&mut items);
        self.restore_scratch(0, items);
        self.assembly[0] = Node::Multi(span);
        Ok(())
    }

    fn value(&mut self, depth: usize) -> Parsed<Node<'a>> {
        match self.scanner.peek() {
            None => Err(ParseErrorKind::UnexpectedEndOfInput),
            Some(b'n') => self.literal("null", Node::Null),
            Some(b't') => self.literal("true", Node::Boolean(true)),
            Some(b'f') => self.literal("false", Node::Boolean(false)),
            Some(b'"') => {
                self.scanner.bump();
                let (text, safe) = self.string_body()?;
                Ok(if safe {
                    Node::SafeString(text)
                } else {
                    Node::JsonString(text)
                })
            }
            Some(b'-' | b'0'..=b'9') => self.number(),
            Some(b'[') => {
                self.scanner.bump();
                self.array(depth)
            }
            Some(b'{') => {
                self.scanner.bump();
                self.object(depth)
            }
            Some(_) => {
                let c = self
                    .scanner
                    .peek_char()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(ParseErrorKind::SyntaxError(c))
            }
        }
    }

    fn literal(&mut self, lit: &str, node: Node<'a>) -> Parsed<Node<'a>> {
        if self.scanner.check_literal(lit) {
            Ok(node)
        } else {
            Err(ParseErrorKind::BadToken)
        }
    }

    /// Scans a string body after its opening quote, structurally only: a
    /// backslash consumes the next byte whatever it is and clears the
    /// `safe` flag. The returned slice excludes both quotes.
    fn string_body(&mut self) -> Parsed<(&'a str, bool)> {
        self.scanner.set_mark();
        let mut safe = true;
        loop {
            match self.scanner.peek() {
                None => return Err(ParseErrorKind::MissingQuotes),
                Some(b'"') => break,
                Some(b'\\') => {
                    safe = false;
                    self.scanner.bump();
                    if self.scanner.next().is_none() {
                        return Err(ParseErrorKind::MissingQuotes);
                    }
                }
                Some(_) => self.scanner.bump(),
            }
        }
        let text = self.scanner.take_marked();
        self.scanner.bump(); // closing quote
        Ok((text, safe))
    }

    fn number(&mut self) -> Parsed<Node<'a>> {
        self.scanner.set_mark();
        if self.scanner.peek() == Some(b'-') {
            self.scanner.bump();
        }
        if self.scanner.skip_digits() == 0 {
            return Err(ParseErrorKind::MissingDigits);
        }
        if self.scanner.peek() == Some(b'.') {
            self.scanner.bump();
            if self.scanner.skip_digits() == 0 {
                return Err(ParseErrorKind::MissingDigits);
            }
        }
        if let Some(b'e' | b'E') = self.scanner.peek() {
            self.scanner.bump();
            if let Some(b'+' | b'-') = self.scanner.peek() {
                self.scanner.bump();
            }
            if self.scanner.skip_digits() == 0 {
                return Err(ParseErrorKind::MissingDigits);
            }
        }
        Ok(Node::Number(self.scanner.take_marked()))
    }

    fn array(&mut self, depth: usize) -> Parsed<Node<'a>> {
        let mut items = self.take_scratch(depth);
        self.scanner.skip_space();
        if self.scanner.peek() == Some(b']') {
            self.scanner.bump();
        } else {
            loop {
                let value = self.value(depth + 1)?;
                items.push(value);
                self.scanner.skip_space();
                match self.scanner.next() {
                    Some(b',') => self.scanner.skip_space(),
                    Some(b']') => break,
                    Some(_) => return Err(ParseErrorKind::MissingComma),
                    None => return Err(ParseErrorKind::UnexpectedEndOfInput),
                }
            }
        }
        let span = self.commit(&mut items);
        self.restore_scratch(depth, items);
        Ok(Node::Array(span))
    }

    fn object(&mut self, depth: usize) -> Parsed<Node<'a>> {
        let mut walk = self.shadow.start_walk();
        let mut items = self.take_scratch(depth);
        items.push(Node::Null); // class slot, patched at close
        self.scanner.skip_space();
        if self.scanner.peek() == Some(b'}') {
            self.scanner.bump();
        } else {
            loop {
                match self.scanner.peek() {
                    None => return Err(ParseErrorKind::UnexpectedEndOfInput),
                    Some(b'"') => self.scanner.bump(),
                    Some(_) => return Err(ParseErrorKind::MissingKey),
                }
                let (key, _) = self.string_body()?;
                walk = self.shadow.descend(walk, key);
                self.scanner.skip_space();
                match self.scanner.next() {
                    Some(b':') => {}
                    Some(_) => return Err(ParseErrorKind::MissingColon),
                    None => return Err(ParseErrorKind::UnexpectedEndOfInput),
                }
                self.scanner.skip_space();
                let value = self.value(depth + 1)?;
                items.push(value);
                self.scanner.skip_space();
                match self.scanner.next() {
                    Some(b',') => self.scanner.skip_space(),
                    Some(b'}') => break,
                    Some(_) => return Err(ParseErrorKind::MissingComma),
                    None => return Err(ParseErrorKind::UnexpectedEndOfInput),
                }
            }
        }
        items[0] = Node::Class(self.shadow.class_of(walk)?);
        let span = self.commit(&mut items);
        self.restore_scratch(depth, items);
        Ok(Node::Object(span))
    }

    /// Appends a completed composite's children to the assembly en bloc,
    /// leaving `items` empty with its capacity intact.
    fn commit(&mut self, items: &mut Vec<Node<'a>>) -> Span {
        let start = self.assembly.len();
        let len = items.len();
        self.assembly.append(items);
        Span::new(start, len)
    }

    fn take_scratch(&mut self, depth: usize) -> Vec<Node<'a>> {
        if depth >= self.scratch.len() {
            self.scratch.resize_with(depth + 1, Vec::new);
        }
        mem::take(&mut self.scratch[depth])
    }

    fn restore_scratch(&mut self, depth: usize, items: Vec<Node<'a>>) {
        self.scratch[depth] = items;
    }
}
