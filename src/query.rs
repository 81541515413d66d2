use std::fmt;

use crate::accumulator::Accumulator;
use crate::augment::MaxEnd;
use crate::error::IntervalTreeError;
use crate::index::{IndexType, NodeIndex};
use crate::interval::{Interval, Span};
use crate::node::Node;
use crate::rbtree::RbTree;

/// How a stored interval must relate to the queried span to be reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// The stored interval lies within the query.
    ContainedBy,
    /// The stored interval covers the whole query.
    Contains,
    /// The stored interval and the query share at least one point.
    Overlaps,
}

impl Relation {
    /// Checks if `stored` relates to `query` this way
    #[inline]
    #[must_use]
    pub fn holds(self, stored: &Span, query: &Span) -> bool {
        match self {
            Relation::ContainedBy => query.contains(stored),
            Relation::Contains => stored.contains(query),
            Relation::Overlaps => stored.overlaps(query),
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Relation::ContainedBy => "contained",
            Relation::Contains => "containing",
            Relation::Overlaps => "overlapping",
        })
    }
}

/// Appends every interval in the subtree at `x` that satisfies `relation`, in start order.
///
/// Every relation needs the stored end to reach `query.start`, so a subtree whose max end
/// falls short is skipped. Every relation also needs the stored start to be at most
/// `query.end`, and nodes to the right never start earlier than `x`, so the right subtree
/// is skipped once `x` itself starts past the query.
pub(crate) fn collect<'a, P, Ix>(
    tree: &RbTree<u32, MaxEnd<'a, P>, Ix>,
    x: Option<NodeIndex<Ix>>,
    relation: Relation,
    query: &Span,
    acc: &mut Accumulator<Interval<'a, P>>,
) -> Result<(), IntervalTreeError>
where
    P: ?Sized,
    Ix: IndexType,
{
    let Some(x) = x else {
        return Ok(());
    };
    if tree.summary(x) < query.start {
        return Ok(());
    }
    collect(tree, tree.node_ref(x, Node::left), relation, query, acc)?;

    let interval = tree.node_ref(x, |xn| xn.item.interval);
    if relation.holds(&interval.span(), query) {
        acc.push(interval)?;
    }
    if query.end >= interval.start {
        collect(tree, tree.node_ref(x, Node::right), relation, query, acc)?;
    }
    Ok(())
}

/// Checks if any interval in the tree overlaps `query`, walking a single root-to-leaf path.
pub(crate) fn any_overlap<P, Ix>(tree: &RbTree<u32, MaxEnd<'_, P>, Ix>, query: &Span) -> bool
where
    P: ?Sized,
    Ix: IndexType,
{
    let mut x = tree.root();
    while let Some(xi) = x {
        let (span, left) = tree.node_ref(xi, |xn| (xn.item.interval.span(), xn.left));
        if span.overlaps(query) {
            return true;
        }
        // if the left subtree reaches query.start but holds no overlap, nothing to the
        // right can start early enough either
        if left.is_some_and(|l| tree.summary(l) >= query.start) {
            x = left;
        } else {
            x = tree.node_ref(xi, Node::right);
        }
    }
    false
}
