use crate::index::NodeIndex;

/// Node of the red-black tree
#[derive(Debug)]
pub struct Node<K, A, Ix> {
    /// Left children
    pub left: Option<NodeIndex<Ix>>,
    /// Right children
    pub right: Option<NodeIndex<Ix>>,
    /// Parent, `None` for the root
    pub parent: Option<NodeIndex<Ix>>,
    /// Color of the node
    pub color: Color,

    /// Ordering key
    pub key: K,
    /// Item carrying the subtree aggregate
    pub item: A,
}

// Convenient getter/setter methods
impl<K, A, Ix> Node<K, A, Ix>
where
    K: Copy,
    Ix: Copy,
{
    pub fn new(key: K, item: A) -> Self {
        Node {
            left: None,
            right: None,
            parent: None,
            color: Color::Red,
            key,
            item,
        }
    }

    pub fn key(&self) -> K {
        self.key
    }

    pub fn left(&self) -> Option<NodeIndex<Ix>> {
        self.left
    }

    pub fn right(&self) -> Option<NodeIndex<Ix>> {
        self.right
    }

    pub fn parent(&self) -> Option<NodeIndex<Ix>> {
        self.parent
    }

    pub fn is_black(&self) -> bool {
        matches!(self.color, Color::Black)
    }

    pub fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }

    pub fn set_color(color: Color) -> impl FnOnce(&mut Node<K, A, Ix>) {
        move |node: &mut Node<K, A, Ix>| {
            node.color = color;
        }
    }

    pub fn set_left(left: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, A, Ix>) {
        move |node: &mut Node<K, A, Ix>| {
            node.left = left;
        }
    }

    pub fn set_right(right: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, A, Ix>) {
        move |node: &mut Node<K, A, Ix>| {
            node.right = right;
        }
    }

    pub fn set_parent(parent: Option<NodeIndex<Ix>>) -> impl FnOnce(&mut Node<K, A, Ix>) {
        move |node: &mut Node<K, A, Ix>| {
            node.parent = parent;
        }
    }
}

/// The color of the node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red node
    Red,
    /// Black node
    Black,
}
