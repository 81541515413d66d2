use crate::augment::Augment;
use crate::error::IntervalTreeError;
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::Iter;
use crate::node::{Color, Node};

/// An augmented red-black tree whose nodes live in a vector.
///
/// Links between nodes are `Option<NodeIndex>`, `None` standing for an empty subtree or, for
/// `parent`, the root. Nodes are never removed individually, so indices stay stable for the
/// lifetime of the tree. Equal keys are kept, later ones to the right of earlier ones.
#[derive(Debug)]
pub struct RbTree<K, A, Ix = DefaultIx> {
    /// Vector that stores nodes
    pub(crate) nodes: Vec<Node<K, A, Ix>>,
    /// Root of the tree
    pub(crate) root: Option<NodeIndex<Ix>>,
}

impl<K, A, Ix> RbTree<K, A, Ix>
where
    K: Ord + Copy,
    A: Augment,
    Ix: IndexType,
{
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        RbTree {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Creates an empty tree with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        RbTree {
            nodes: Vec::with_capacity(capacity),
            root: None,
        }
    }

    /// Inserts `item` under `key` and rebalances.
    ///
    /// Every node on the path from the new node to the root has absorbed the new node's
    /// summary when this returns.
    ///
    /// # Errors
    ///
    /// Returns `OutOfMemory` if the node vector cannot grow or the index type has no room
    /// for another node. The tree is unchanged in that case.
    pub fn insert(&mut self, key: K, item: A) -> Result<NodeIndex<Ix>, IntervalTreeError> {
        let z = NodeIndex::new(self.nodes.len());
        if z == NodeIndex::end() {
            return Err(IntervalTreeError::OutOfMemory);
        }
        self.nodes
            .try_reserve(1)
            .map_err(|_| IntervalTreeError::OutOfMemory)?;
        self.nodes.push(Node::new(key, item));

        self.insert_inner(z);
        self.insert_fixup(z);
        self.propagate_up(z);
        Ok(z)
    }

    /// Remove every node.
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Return the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return the root, `None` when empty.
    #[inline]
    pub fn root(&self) -> Option<NodeIndex<Ix>> {
        self.root
    }

    /// The summary of the subtree rooted at `x`.
    #[inline]
    pub fn summary(&self, x: NodeIndex<Ix>) -> A::Summary {
        self.nodes[x.index()].item.summary()
    }

    /// Get an iterator over the nodes, sorted by key.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, A, Ix> {
        Iter::new(self)
    }
}

impl<K, A, Ix> RbTree<K, A, Ix>
where
    K: Ord + Copy,
    A: Augment,
    Ix: IndexType,
{
    /// Link a detached node into its BST position.
    fn insert_inner(&mut self, z: NodeIndex<Ix>) {
        let key = self.node_ref(z, Node::key);
        let mut y = None;
        let mut x = self.root;

        while let Some(xi) = x {
            y = Some(xi);
            if key < self.node_ref(xi, Node::key) {
                x = self.node_ref(xi, Node::left);
            } else {
                x = self.node_ref(xi, Node::right);
            }
        }
        self.node_mut(z, Node::set_parent(y));
        match y {
            None => self.root = Some(z),
            Some(yi) if key < self.node_ref(yi, Node::key) => {
                self.node_mut(yi, Node::set_left(Some(z)));
            }
            Some(yi) => self.node_mut(yi, Node::set_right(Some(z))),
        }
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        while let Some(mut p) = self.node_ref(z, Node::parent) {
            if self.node_ref(p, Node::is_black) {
                break;
            }
            // a red parent is never the root
            let Some(g) = self.node_ref(p, Node::parent) else {
                break;
            };
            if self.node_ref(g, Node::left) == Some(p) {
                let uncle = self.node_ref(g, Node::right);
                if let Some(y) = uncle.filter(|&y| self.node_ref(y, Node::is_red)) {
                    self.node_mut(p, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.node_mut(g, Node::set_color(Color::Red));
                    z = g;
                } else {
                    if self.node_ref(p, Node::right) == Some(z) {
                        self.left_rotate(p);
                        (z, p) = (p, z);
                    }
                    self.node_mut(p, Node::set_color(Color::Black));
                    self.node_mut(g, Node::set_color(Color::Red));
                    self.right_rotate(g);
                }
            } else {
                let uncle = self.node_ref(g, Node::left);
                if let Some(y) = uncle.filter(|&y| self.node_ref(y, Node::is_red)) {
                    self.node_mut(p, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.node_mut(g, Node::set_color(Color::Red));
                    z = g;
                } else {
                    if self.node_ref(p, Node::left) == Some(z) {
                        self.right_rotate(p);
                        (z, p) = (p, z);
                    }
                    self.node_mut(p, Node::set_color(Color::Black));
                    self.node_mut(g, Node::set_color(Color::Red));
                    self.left_rotate(g);
                }
            }
        }
        if let Some(root) = self.root {
            self.node_mut(root, Node::set_color(Color::Black));
        }
    }

    /// Binary tree left rotate.
    fn left_rotate(&mut self, x: NodeIndex<Ix>) {
        let Some(y) = self.node_ref(x, Node::right) else {
            return;
        };
        let y_left = self.node_ref(y, Node::left);
        self.node_mut(x, Node::set_right(y_left));
        if let Some(b) = y_left {
            self.node_mut(b, Node::set_parent(Some(x)));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(Some(x)));

        // x is now below y
        self.recompute(x);
        self.recompute(y);
    }

    /// Binary tree right rotate.
    fn right_rotate(&mut self, x: NodeIndex<Ix>) {
        let Some(y) = self.node_ref(x, Node::left) else {
            return;
        };
        let y_right = self.node_ref(y, Node::right);
        self.node_mut(x, Node::set_left(y_right));
        if let Some(b) = y_right {
            self.node_mut(b, Node::set_parent(Some(x)));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(Some(x)));

        self.recompute(x);
        self.recompute(y);
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        let xp = self.node_ref(x, Node::parent);
        self.node_mut(y, Node::set_parent(xp));
        match xp {
            None => self.root = Some(y),
            Some(p) if self.node_ref(p, Node::left) == Some(x) => {
                self.node_mut(p, Node::set_left(Some(y)));
            }
            Some(p) => self.node_mut(p, Node::set_right(Some(y))),
        }
        self.node_mut(x, Node::set_parent(Some(y)));
    }

    /// Recalculate the summary of `x` from its children.
    fn recompute(&mut self, x: NodeIndex<Ix>) {
        let left = self.node_ref(x, Node::left).map(|l| self.summary(l));
        let right = self.node_ref(x, Node::right).map(|r| self.summary(r));
        self.node_mut(x, |xn| xn.item.recompute(left, right));
    }

    /// Fold the summary of `z` into every ancestor.
    ///
    /// Rotations only repair the nodes they move, so ancestors above the last rotation
    /// may not cover `z` yet.
    fn propagate_up(&mut self, z: NodeIndex<Ix>) {
        let summary = self.summary(z);
        let mut p = self.node_ref(z, Node::parent);
        while let Some(pi) = p {
            self.node_mut(pi, |pn| pn.item.absorb(summary));
            p = self.node_ref(pi, Node::parent);
        }
    }
}

impl<K, A, Ix> Default for RbTree<K, A, Ix>
where
    K: Ord + Copy,
    A: Augment,
    Ix: IndexType,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// Convenient methods for reference or mutate a node
impl<'a, K, A, Ix> RbTree<K, A, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, A, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, A, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }
}
