// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Greedy LZ78 parsing over a move-to-front trie.
//!
//! Every LZ78 phrase is a previous phrase extended by one byte, so the set of
//! phrases forms a trie. Parsing walks down from the root while the next byte
//! has a child; on a miss it hangs a new leaf, emits one phrase and returns
//! to the root.
//!
//! ```text
//! banana → b | a | n | an | a
//!
//!        root
//!       / |  \
//!      b  a   n        (children listed most-recently-used first)
//!         |
//!         n
//! ```
//!
//! # Node layout
//!
//! Nodes live in one contiguous arena and refer to each other by index:
//! `(label, first_child, next_sibling)`, packed. A child list is a singly
//! linked list threaded through `next_sibling`. Finding a child moves it to
//! the head of its list, so the child used most recently is found first.
//! Natural text reuses a few children heavily, which keeps most descents at
//! one comparison; the worst case stays O(σ) per byte.
//!
//! # INVARIANTS
//!
//! 1. **LABELS_UNIQUE**: siblings carry pairwise distinct labels
//! 2. **INDICES_STABLE**: a node's index never changes; nodes are never removed

use super::Phrase;
use crate::contracts::check_phrases_cover;

/// Index of a trie node in the arena.
pub type NodeId = usize;

const NIL: NodeId = NodeId::MAX;
const ROOT: NodeId = 0;

#[derive(Clone, Copy)]
#[repr(C, packed)]
struct Node {
    label: u8,
    first_child: NodeId,
    next_sibling: NodeId,
}

/// A byte trie with move-to-front child lists.
pub struct Trie {
    nodes: Vec<Node>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// A trie holding only the root.
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Reserve room for `capacity` nodes up front (root included).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(Node {
            label: 0,
            first_child: NIL,
            next_sibling: NIL,
        });
        Self { nodes }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// The byte on the edge into `v` (0 for the root).
    #[inline]
    pub fn label(&self, v: NodeId) -> u8 {
        self.nodes[v].label
    }

    /// Find the child of `u` labelled `c` and move it to the front of `u`'s
    /// child list.
    pub fn try_descend(&mut self, u: NodeId, c: u8) -> Option<NodeId> {
        let mut prev = NIL;
        let mut v = self.nodes[u].first_child;
        while v != NIL {
            if self.nodes[v].label == c {
                if prev != NIL {
                    // Splice v out and reinsert it at the head
                    self.nodes[prev].next_sibling = self.nodes[v].next_sibling;
                    self.nodes[v].next_sibling = self.nodes[u].first_child;
                    self.nodes[u].first_child = v;
                }
                return Some(v);
            }
            prev = v;
            v = self.nodes[v].next_sibling;
        }
        None
    }

    /// Create a new child of `u` labelled `c` at the head of its child list.
    ///
    /// The caller guarantees `u` has no child labelled `c` yet.
    pub fn add_child(&mut self, u: NodeId, c: u8) -> NodeId {
        debug_assert!(
            self.child_labels(u).all(|l| l != c),
            "node {} already has a child labelled {}",
            u,
            c
        );
        let v = self.nodes.len();
        self.nodes.push(Node {
            label: c,
            first_child: NIL,
            next_sibling: self.nodes[u].first_child,
        });
        self.nodes[u].first_child = v;
        v
    }

    /// Labels of `u`'s children in list order (most recently used first).
    pub fn child_labels(&self, u: NodeId) -> impl Iterator<Item = u8> + '_ {
        let mut v = self.nodes[u].first_child;
        std::iter::from_fn(move || {
            if v == NIL {
                return None;
            }
            let label = self.nodes[v].label;
            v = self.nodes[v].next_sibling;
            Some(label)
        })
    }
}

/// Run the greedy parse, calling `emit(start, len)` once per phrase.
fn parse_with(body: &[u8], mut emit: impl FnMut(usize, usize)) {
    // At most one node per byte, plus the root
    let mut trie = Trie::with_capacity(body.len() + 1);
    let mut v = trie.root();
    let mut start = 0;

    for (i, &c) in body.iter().enumerate() {
        match trie.try_descend(v, c) {
            Some(child) => v = child,
            None => {
                trie.add_child(v, c);
                emit(start, i + 1 - start);
                start = i + 1;
                v = trie.root();
            }
        }
    }

    // The last phrase may end inside the trie
    if v != trie.root() {
        emit(start, body.len() - start);
    }
}

/// z78: the number of phrases of the greedy LZ78 parse of `body`.
pub fn lz78_phrases(body: &[u8]) -> usize {
    let mut z = 0;
    parse_with(body, |_, _| z += 1);
    z
}

/// The phrases of the greedy LZ78 parse of `body`, in text order.
pub fn lz78_parse(body: &[u8]) -> Vec<Phrase> {
    let mut phrases = Vec::new();
    parse_with(body, |start, len| phrases.push(Phrase { start, len }));
    check_phrases_cover(&phrases, body.len());
    phrases
}
