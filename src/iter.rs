use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::rbtree::RbTree;

/// Pushes a link of nodes on the left to stack.
fn left_link<K, A, Ix>(
    tree_ref: &RbTree<K, A, Ix>,
    mut x: Option<NodeIndex<Ix>>,
    stack: &mut Vec<NodeIndex<Ix>>,
) where
    K: Copy,
    Ix: IndexType,
{
    while let Some(xi) = x {
        stack.push(xi);
        x = tree_ref.node_ref(xi, Node::left);
    }
}

/// An in-order iterator over the nodes of a `RbTree`.
#[derive(Debug)]
pub struct Iter<'a, K, A, Ix> {
    /// Reference to the tree
    tree_ref: &'a RbTree<K, A, Ix>,
    /// Stack for iteration
    stack: Vec<NodeIndex<Ix>>,
}

impl<'a, K, A, Ix> Iter<'a, K, A, Ix>
where
    K: Copy,
    Ix: IndexType,
{
    pub fn new(tree_ref: &'a RbTree<K, A, Ix>) -> Self {
        let mut stack = Vec::new();
        left_link(tree_ref, tree_ref.root, &mut stack);
        Iter { tree_ref, stack }
    }
}

impl<'a, K, A, Ix> Iterator for Iter<'a, K, A, Ix>
where
    K: Copy,
    Ix: IndexType,
{
    type Item = (K, &'a A);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        left_link(
            self.tree_ref,
            self.tree_ref.node_ref(x, Node::right),
            &mut self.stack,
        );
        Some(self.tree_ref.node_ref(x, |xn| (xn.key, &xn.item)))
    }
}
