//! The shadow-class trie: interned object key sequences.
//!
//! Most JSON documents use a small number of distinct key sequences repeated
//! across many objects (log records, change feeds, CDC payloads). The trie
//! memoises each ordered key sequence the parser encounters, so every object
//! with the same shape shares a single [`ObjectClass`] descriptor — and with
//! it a single name→index map allocation. The trie persists for the lifetime
//! of its parser, so the sharing extends across successive parses.
//!
//! Following strict-ownership practice the trie is an arena of nodes keyed
//! by integer index: children are owned through each node's child map,
//! parent links are plain indices used only when materialising a class.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::escape::{self, EscapeError};

/// Arena sentinel: the root has no parent and no ordinal.
const NONE: u32 = u32::MAX;

/// The shared, indexed descriptor for one ordered key sequence.
///
/// Immutable after construction. Two objects parsed by the same [`Parser`]
/// with the same ordered key sequence share one `Rc<ObjectClass>`, so class
/// identity is `Rc` pointer identity.
///
/// [`Parser`]: crate::Parser
#[derive(Debug, PartialEq, Eq)]
pub struct ObjectClass {
    /// Key text exactly as it appeared in the source, escapes included.
    names: Vec<Box<str>>,
    /// Decoded form of each name, parallel to `names`.
    unescaped_names: Vec<Box<str>>,
    /// Decoded name → ordinal position in the key sequence.
    index_map: HashMap<Box<str>, u32>,
}

impl ObjectClass {
    /// Number of keys in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` for the class of `{}`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Raw key names in sequence order, escapes intact.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.names.iter().map(AsRef::as_ref)
    }

    /// Decoded key names in sequence order.
    pub fn unescaped_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.unescaped_names.iter().map(AsRef::as_ref)
    }

    /// Ordinal of the field whose *decoded* name is `name`.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<u32> {
        self.index_map.get(name).copied()
    }
}

#[derive(Debug)]
struct TrieNode {
    /// Arena index of the parent; `NONE` for the root.
    parent: u32,
    /// Position of this node's key within the walked sequence; `NONE` for
    /// the root, whose sequence is empty.
    ordinal: u32,
    /// Owned copy of the raw key text.
    name: Box<str>,
    /// Next key → arena index of the child.
    children: HashMap<Box<str>, u32>,
    /// Saturating walk counter, for diagnostics.
    usage: u32,
    /// Materialised on the first `class_of` call for this node.
    class: Option<Rc<ObjectClass>>,
}

/// Persistent trie of object key sequences, keyed by (parent, next key).
#[derive(Debug)]
pub struct ShadowTrie {
    nodes: Vec<TrieNode>,
}

impl ShadowTrie {
    pub(crate) fn new() -> Self {
        Self {
            nodes: alloc::vec![TrieNode {
                parent: NONE,
                ordinal: NONE,
                name: Box::default(),
                children: HashMap::new(),
                usage: 0,
                class: None,
            }],
        }
    }

    /// Number of interned trie nodes, the root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Begins a walk at the root, counting the visit.
    pub(crate) fn start_walk(&mut self) -> u32 {
        self.touch(0);
        0
    }

    /// Steps from `from` to the child for `key`, interning it on first
    /// sight. The child's ordinal is the length of the sequence walked so
    /// far.
    pub(crate) fn descend(&mut self, from: u32, key: &str) -> u32 {
        if let Some(child) = self.nodes[from as usize].children.get(key).copied() {
            self.touch(child);
            return child;
        }
        let id = self.nodes.len() as u32;
        let ordinal = self.size(from);
        self.nodes.push(TrieNode {
            parent: from,
            ordinal,
            name: key.into(),
            children: HashMap::new(),
            usage: 1,
            class: None,
        });
        self.nodes[from as usize].children.insert(key.into(), id);
        id
    }

    /// The [`ObjectClass`] for the key sequence ending at `id`, materialised
    /// on first use.
    ///
    /// Construction walks the parent links to recover the sequence, decodes
    /// each name, and indexes the decoded forms; a key whose escapes are
    /// semantically invalid surfaces here, not during the structural scan.
    pub(crate) fn class_of(&mut self, id: u32) -> Result<Rc<ObjectClass>, EscapeError> {
        if let Some(class) = &self.nodes[id as usize].class {
            return Ok(Rc::clone(class));
        }

        let count = self.size(id) as usize;
        let mut names: Vec<Box<str>> = alloc::vec![Box::default(); count];
        let mut cur = id;
        while self.nodes[cur as usize].ordinal != NONE {
            let node = &self.nodes[cur as usize];
            names[node.ordinal as usize] = node.name.clone();
            cur = node.parent;
        }

        let mut unescaped_names = Vec::with_capacity(count);
        for name in &names {
            if name.contains('\\') {
                unescaped_names.push(escape::unescape(name)?.into_boxed_str());
            } else {
                unescaped_names.push(name.clone());
            }
        }

        let mut index_map = HashMap::with_capacity(count);
        for (i, name) in unescaped_names.iter().enumerate() {
            index_map.insert(name.clone(), i as u32);
        }

        let class = Rc::new(ObjectClass {
            names,
            unescaped_names,
            index_map,
        });
        self.nodes[id as usize].class = Some(Rc::clone(&class));
        Ok(class)
    }

    /// Walk count of a node, for tests and debug walkers.
    pub(crate) fn usage_of(&self, id: u32) -> u32 {
        self.nodes[id as usize].usage
    }

    fn touch(&mut self, id: u32) {
        let usage = &mut self.nodes[id as usize].usage;
        *usage = usage.saturating_add(1);
    }

    /// Keys walked to reach `id`: 0 for the root, ordinal + 1 otherwise.
    fn size(&self, id: u32) -> u32 {
        let ordinal = self.nodes[id as usize].ordinal;
        if ordinal == NONE {
            0
        } else {
            ordinal + 1
        }
    }
}
