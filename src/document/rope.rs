//! Rope text storage.
//!
//! A [`Rope`] is a binary tree whose leaves hold short chunks of text. Every
//! internal node owns exactly two children and caches the codepoint length
//! of its left subtree (its *weight*), its total length and its depth, so
//! length queries are O(1) and indexing is O(depth).
//!
//! Ownership runs strictly from parent to child through `Box`; nodes carry no
//! back-references. Traversals that need to come back up (the chunk iterator)
//! keep an explicit stack instead.
//!
//! All offsets are codepoint offsets, never byte offsets.
//!
//! # Example
//!
//! ```
//! use vincent::document::rope::Rope;
//!
//! let mut rope = Rope::build("Hi This is a rope. ");
//! rope.insert(19, "I like to move it.").unwrap();
//! assert_eq!(rope.to_string(), "Hi This is a rope. I like to move it.");
//!
//! rope.delete_range(0, 3).unwrap();
//! assert_eq!(rope.char_at(0).unwrap(), 'T');
//! ```

use std::fmt;

use crate::error::{EditorError, Result};

/// Maximum number of codepoints stored in a single leaf.
pub const MAX_CHUNK_LEN: usize = 64;

/// Extra depth tolerated above twice the ideal depth before a rebuild.
const DEPTH_SLACK: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Leaf {
        text: String,
        len: usize,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        weight: usize,
        len: usize,
        depth: usize,
    },
}

/// Byte index of the `n`th codepoint of `text` (or `text.len()` past the end).
fn byte_offset(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(i, _)| i)
}

impl Node {
    fn empty() -> Self {
        Node::Leaf {
            text: String::new(),
            len: 0,
        }
    }

    fn len(&self) -> usize {
        match self {
            Node::Leaf { len, .. } | Node::Internal { len, .. } => *len,
        }
    }

    fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { depth, .. } => *depth,
        }
    }

    fn build(text: &str) -> Self {
        Self::build_counted(text, text.chars().count())
    }

    fn build_counted(text: &str, len: usize) -> Self {
        if len <= MAX_CHUNK_LEN {
            return Node::Leaf {
                text: text.to_string(),
                len,
            };
        }

        let half = len / 2;
        let (left, right) = text.split_at(byte_offset(text, half));
        Node::join(
            Self::build_counted(left, half),
            Self::build_counted(right, len - half),
        )
    }

    /// Joins two subtrees under a new internal node. Empty operands are elided.
    fn join(left: Node, right: Node) -> Self {
        if left.len() == 0 {
            return right;
        }
        if right.len() == 0 {
            return left;
        }

        let weight = left.len();
        let len = weight + right.len();
        let depth = 1 + left.depth().max(right.depth());
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            weight,
            len,
            depth,
        }
    }

    /// Splits at codepoint `at`, which must be `<= self.len()`.
    fn split(self, at: usize) -> (Node, Node) {
        match self {
            Node::Leaf { mut text, len } => {
                if at == 0 {
                    return (Node::empty(), Node::Leaf { text, len });
                }
                if at >= len {
                    return (Node::Leaf { text, len }, Node::empty());
                }
                let right = text.split_off(byte_offset(&text, at));
                (
                    Node::Leaf { text, len: at },
                    Node::Leaf {
                        text: right,
                        len: len - at,
                    },
                )
            }
            Node::Internal {
                left,
                right,
                weight,
                ..
            } => {
                if at < weight {
                    let (left_prefix, left_suffix) = (*left).split(at);
                    (left_prefix, Node::join(left_suffix, *right))
                } else if at == weight {
                    (*left, *right)
                } else {
                    let (right_prefix, right_suffix) = (*right).split(at - weight);
                    (Node::join(*left, right_prefix), right_suffix)
                }
            }
        }
    }

    /// Inserts into the leaf holding `at` when it has room. Returns false,
    /// leaving the tree untouched, when no single leaf can absorb the text.
    fn insert_in_leaf(&mut self, at: usize, text: &str, text_len: usize) -> bool {
        match self {
            Node::Leaf { text: chunk, len } => {
                if *len + text_len > MAX_CHUNK_LEN {
                    return false;
                }
                chunk.insert_str(byte_offset(chunk, at), text);
                *len += text_len;
                true
            }
            Node::Internal {
                left,
                right,
                weight,
                len,
                ..
            } => {
                if at <= *weight && left.insert_in_leaf(at, text, text_len) {
                    *weight += text_len;
                } else if at >= *weight && right.insert_in_leaf(at - *weight, text, text_len) {
                    // weight unchanged: the text went right
                } else {
                    return false;
                }
                *len += text_len;
                true
            }
        }
    }

    /// Removes `[from, to)` when the range lies inside a single leaf.
    fn delete_in_leaf(&mut self, from: usize, to: usize) -> bool {
        match self {
            Node::Leaf { text, len } => {
                let start = byte_offset(text, from);
                let end = byte_offset(text, to);
                text.replace_range(start..end, "");
                *len -= to - from;
                true
            }
            Node::Internal {
                left,
                right,
                weight,
                len,
                ..
            } => {
                let removed = to - from;
                if to <= *weight {
                    if !left.delete_in_leaf(from, to) {
                        return false;
                    }
                    *weight -= removed;
                } else if from >= *weight {
                    if !right.delete_in_leaf(from - *weight, to - *weight) {
                        return false;
                    }
                } else {
                    return false;
                }
                *len -= removed;
                true
            }
        }
    }

    fn collect_range(&self, from: usize, to: usize, out: &mut String) {
        if from >= to {
            return;
        }
        match self {
            Node::Leaf { text, .. } => {
                let start = byte_offset(text, from);
                let end = byte_offset(text, to);
                out.push_str(&text[start..end]);
            }
            Node::Internal {
                left,
                right,
                weight,
                ..
            } => {
                if from < *weight {
                    left.collect_range(from, to.min(*weight), out);
                }
                if to > *weight {
                    right.collect_range(from.saturating_sub(*weight), to - *weight, out);
                }
            }
        }
    }
}

/// A tree of text chunks supporting cheap concatenation, split and splice.
///
/// The empty rope is a single empty leaf, which is also the [`Default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rope {
    root: Node,
}

impl Default for Rope {
    fn default() -> Self {
        Self { root: Node::empty() }
    }
}

impl Rope {
    /// Creates an empty rope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a rope from `text`, halving it recursively until every chunk
    /// fits in [`MAX_CHUNK_LEN`] codepoints.
    ///
    /// The shape depends only on the input, so equal text always builds an
    /// equal tree.
    ///
    /// ```
    /// use vincent::document::rope::Rope;
    ///
    /// assert_eq!(Rope::build("hello"), Rope::build("hello"));
    /// assert_eq!(Rope::build("").len(), 0);
    /// ```
    pub fn build(text: &str) -> Self {
        Self {
            root: Node::build(text),
        }
    }

    /// Concatenates two ropes in O(1) by placing them under a new node.
    ///
    /// An empty operand is dropped and the other one returned as is. The
    /// result is not rebalanced.
    pub fn concat(left: Rope, right: Rope) -> Rope {
        Rope {
            root: Node::join(left.root, right.root),
        }
    }

    /// Total number of codepoints.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Height of the tree; a lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns the codepoint at `index`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `index >= self.len()`.
    pub fn char_at(&self, index: usize) -> Result<char> {
        let len = self.len();
        if index >= len {
            return Err(EditorError::out_of_range(index, len));
        }

        let mut node = &self.root;
        let mut i = index;
        loop {
            match node {
                Node::Leaf { text, .. } => {
                    return text
                        .chars()
                        .nth(i)
                        .ok_or_else(|| EditorError::out_of_range(index, len));
                }
                Node::Internal {
                    left,
                    right,
                    weight,
                    ..
                } => {
                    if i < *weight {
                        node = left.as_ref();
                    } else {
                        i -= *weight;
                        node = right.as_ref();
                    }
                }
            }
        }
    }

    /// Iterates over the non-empty leaf chunks from left to right.
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            stack: vec![&self.root],
        }
    }

    /// Returns the text in `[from, to)`.
    ///
    /// Only subtrees overlapping the range are visited.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` unless `from <= to <= self.len()`.
    pub fn slice(&self, from: usize, to: usize) -> Result<String> {
        self.check_range(from, to)?;
        let mut out = String::with_capacity(to - from);
        self.root.collect_range(from, to, &mut out);
        Ok(out)
    }

    /// Splits the rope into the text before `at` and the text from `at` on.
    ///
    /// Only the nodes on the path to `at` are rebuilt; every other subtree is
    /// moved into one of the halves.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `at > self.len()`.
    pub fn split(self, at: usize) -> Result<(Rope, Rope)> {
        let len = self.len();
        if at > len {
            return Err(EditorError::out_of_range(at, len));
        }
        let (left, right) = self.root.split(at);
        Ok((Rope { root: left }, Rope { root: right }))
    }

    /// Inserts `text` so that it starts at codepoint `at`.
    ///
    /// When the leaf at `at` has room the text is spliced into it directly;
    /// otherwise the rope is split at `at` and rejoined around a freshly
    /// built rope for `text`.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `at > self.len()`. The rope is unchanged.
    pub fn insert(&mut self, at: usize, text: &str) -> Result<()> {
        let len = self.len();
        if at > len {
            return Err(EditorError::out_of_range(at, len));
        }
        if text.is_empty() {
            return Ok(());
        }

        let text_len = text.chars().count();
        if self.root.insert_in_leaf(at, text, text_len) {
            return Ok(());
        }

        let root = std::mem::replace(&mut self.root, Node::empty());
        let (prefix, suffix) = root.split(at);
        self.root = Node::join(Node::join(prefix, Node::build(text)), suffix);
        self.rebalance_if_deep();
        Ok(())
    }

    /// Removes the codepoints in `[from, to)`. An empty range is a no-op.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` unless `from <= to <= self.len()`. The rope is
    /// unchanged.
    pub fn delete_range(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_range(from, to)?;
        if from == to {
            return Ok(());
        }
        if self.root.delete_in_leaf(from, to) {
            return Ok(());
        }

        let root = std::mem::replace(&mut self.root, Node::empty());
        let (prefix, rest) = root.split(from);
        let (_, suffix) = rest.split(to - from);
        self.root = Node::join(prefix, suffix);
        self.rebalance_if_deep();
        Ok(())
    }

    /// Rebuilds the tree from its contents, restoring a balanced shape.
    pub fn rebalance(&mut self) {
        let text = self.to_string();
        self.root = Node::build(&text);
    }

    /// Whether the depth is within bounds for the current length.
    pub fn is_balanced(&self) -> bool {
        let leaves = self.len().div_ceil(MAX_CHUNK_LEN).max(1);
        let ideal_depth = leaves.next_power_of_two().trailing_zeros() as usize;
        self.depth() <= 2 * ideal_depth + DEPTH_SLACK
    }

    fn rebalance_if_deep(&mut self) {
        if !self.is_balanced() {
            tracing::debug!(
                depth = self.depth(),
                len = self.len(),
                "rebuilding unbalanced rope"
            );
            self.rebalance();
        }
    }

    fn check_range(&self, from: usize, to: usize) -> Result<()> {
        let len = self.len();
        if to > len {
            return Err(EditorError::out_of_range(to, len));
        }
        if from > to {
            return Err(EditorError::out_of_range(from, to));
        }
        Ok(())
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Self {
        Rope::build(text)
    }
}

impl fmt::Display for Rope {
    /// Writes the contents chunk by chunk, so the cost is linear in length.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

/// Iterator over the leaf chunks of a [`Rope`], see [`Rope::chunks`].
pub struct Chunks<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while let Some(node) = self.stack.pop() {
            match node {
                Node::Leaf { text, .. } => {
                    if !text.is_empty() {
                        return Some(text.as_str());
                    }
                }
                Node::Internal { left, right, .. } => {
                    self.stack.push(right);
                    self.stack.push(left);
                }
            }
        }
        None
    }
}
