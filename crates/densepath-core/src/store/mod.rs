//! Ordered key-value store backed by a red-black tree
//!
//! Stores `(key, payload)` integer pairs and enumerates them in ascending
//! key order. The driver uses it to hold edges keyed by weight, but the
//! structure itself knows nothing about graphs.
//!
//! Nodes live in an arena (`Vec`); slot 0 is the single shared sentinel
//! standing in for every absent child. Parent links are plain arena
//! indices, non-owning, used only for upward traversal during fix-up.

/// Arena index of the shared sentinel node. Always black.
const SENTINEL: usize = 0;

#[derive(Debug)]
struct Node {
    key: i64,
    payload: i64,
    red: bool,
    left: usize,
    right: usize,
    parent: usize,
}

/// A balanced ordered map from integer keys to integer payloads.
///
/// Insertion-only: entries are never removed, so no deletion fix-up
/// exists. Duplicate keys are accepted and placed to the right of
/// existing equal keys.
#[derive(Debug)]
pub struct OrderedStore {
    nodes: Vec<Node>,
    root: usize,
}

impl OrderedStore {
    /// Create an empty store. The arena starts with only the sentinel.
    pub fn new() -> Self {
        OrderedStore {
            nodes: vec![Node {
                key: 0,
                payload: 0,
                red: false,
                left: SENTINEL,
                right: SENTINEL,
                parent: SENTINEL,
            }],
            root: SENTINEL,
        }
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a `(key, payload)` pair, preserving search-tree order and
    /// restoring the red-black invariants afterwards.
    pub fn insert(&mut self, key: i64, payload: i64) {
        let z = self.nodes.len();
        self.nodes.push(Node {
            key,
            payload,
            red: true,
            left: SENTINEL,
            right: SENTINEL,
            parent: SENTINEL,
        });

        // Standard BST descent: strictly-less goes left, else right,
        // so equal keys accumulate on the right of their predecessors.
        let mut y = SENTINEL;
        let mut x = self.root;
        while x != SENTINEL {
            y = x;
            x = if key < self.nodes[x].key {
                self.nodes[x].left
            } else {
                self.nodes[x].right
            };
        }

        self.nodes[z].parent = y;
        if y == SENTINEL {
            self.root = z;
        } else if key < self.nodes[y].key {
            self.nodes[y].left = z;
        } else {
            self.nodes[y].right = z;
        }

        self.fix_insert(z);
    }

    /// Restore the red-black invariants after inserting node `z`.
    fn fix_insert(&mut self, mut z: usize) {
        // The sentinel is black, so the loop terminates at the root
        // (whose parent is the sentinel).
        while self.nodes[self.nodes[z].parent].red {
            let parent = self.nodes[z].parent;
            let grand = self.nodes[parent].parent;

            if parent == self.nodes[grand].left {
                let uncle = self.nodes[grand].right;
                if self.nodes[uncle].red {
                    // Red uncle: push blackness down from the grandparent
                    self.nodes[parent].red = false;
                    self.nodes[uncle].red = false;
                    self.nodes[grand].red = true;
                    z = grand;
                } else {
                    if z == self.nodes[parent].right {
                        // Inside (zig-zag): straighten into the outside case
                        z = parent;
                        self.rotate_left(z);
                    }
                    let parent = self.nodes[z].parent;
                    let grand = self.nodes[parent].parent;
                    self.nodes[parent].red = false;
                    self.nodes[grand].red = true;
                    self.rotate_right(grand);
                }
            } else {
                // Mirror image: parent is the right child
                let uncle = self.nodes[grand].left;
                if self.nodes[uncle].red {
                    self.nodes[parent].red = false;
                    self.nodes[uncle].red = false;
                    self.nodes[grand].red = true;
                    z = grand;
                } else {
                    if z == self.nodes[parent].left {
                        z = parent;
                        self.rotate_right(z);
                    }
                    let parent = self.nodes[z].parent;
                    let grand = self.nodes[parent].parent;
                    self.nodes[parent].red = false;
                    self.nodes[grand].red = true;
                    self.rotate_left(grand);
                }
            }

            if z == self.root {
                break;
            }
        }

        // Idempotent safeguard; also handles the first insertion
        let root = self.root;
        self.nodes[root].red = false;
    }

    /// Rotate left around `x`: `x`'s right child takes `x`'s place and
    /// `x` becomes its left child. In-order sequence is preserved.
    fn rotate_left(&mut self, x: usize) {
        let y = self.nodes[x].right;

        self.nodes[x].right = self.nodes[y].left;
        if self.nodes[y].left != SENTINEL {
            let left = self.nodes[y].left;
            self.nodes[left].parent = x;
        }

        self.nodes[y].parent = self.nodes[x].parent;
        let parent = self.nodes[x].parent;
        if parent == SENTINEL {
            self.root = y;
        } else if x == self.nodes[parent].left {
            self.nodes[parent].left = y;
        } else {
            self.nodes[parent].right = y;
        }

        self.nodes[y].left = x;
        self.nodes[x].parent = y;
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left).
    fn rotate_right(&mut self, x: usize) {
        let y = self.nodes[x].left;

        self.nodes[x].left = self.nodes[y].right;
        if self.nodes[y].right != SENTINEL {
            let right = self.nodes[y].right;
            self.nodes[right].parent = x;
        }

        self.nodes[y].parent = self.nodes[x].parent;
        let parent = self.nodes[x].parent;
        if parent == SENTINEL {
            self.root = y;
        } else if x == self.nodes[parent].right {
            self.nodes[parent].right = y;
        } else {
            self.nodes[parent].left = y;
        }

        self.nodes[y].right = x;
        self.nodes[x].parent = y;
    }

    /// Lazy ascending in-order iterator over `(key, payload)` pairs.
    /// Restartable: each call walks the tree from scratch.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }
}

impl Default for OrderedStore {
    fn default() -> Self {
        Self::new()
    }
}

/// In-order traversal state: an explicit stack of the pending left spine
#[derive(Debug)]
pub struct Iter<'a> {
    nodes: &'a [Node],
    stack: Vec<usize>,
}

impl Iter<'_> {
    fn push_left_spine(&mut self, mut idx: usize) {
        while idx != SENTINEL {
            self.stack.push(idx);
            idx = self.nodes[idx].left;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let (key, payload, right) = {
            let node = &self.nodes[idx];
            (node.key, node.payload, node.right)
        };
        self.push_left_spine(right);
        Some((key, payload))
    }
}

impl<'a> IntoIterator for &'a OrderedStore {
    type Item = (i64, i64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
