use crate::interval::Interval;

/// Per-node data derived from the node's own item and its subtrees.
///
/// The engine calls `recompute` on every node whose set of children changed, children before
/// parents, so a node may rely on its children's summaries being current. `absorb` folds a
/// newly inserted descendant into an ancestor without looking at the ancestor's children.
pub trait Augment {
    /// The aggregate exposed to the parent.
    type Summary: Copy;

    /// The aggregate of the subtree rooted at this node.
    fn summary(&self) -> Self::Summary;

    /// Rebuilds the aggregate from this node and the summaries of its children.
    fn recompute(&mut self, left: Option<Self::Summary>, right: Option<Self::Summary>);

    /// Widens the aggregate to cover a descendant's summary.
    fn absorb(&mut self, descendant: Self::Summary);
}

/// An interval together with the largest end found in its subtree
#[derive(Debug)]
pub struct MaxEnd<'a, P: ?Sized> {
    /// The stored interval
    pub interval: Interval<'a, P>,
    /// Max end over the subtree
    pub max: u32,
}

impl<'a, P: ?Sized> MaxEnd<'a, P> {
    pub fn new(interval: Interval<'a, P>) -> Self {
        MaxEnd {
            max: interval.end,
            interval,
        }
    }
}

impl<P: ?Sized> Augment for MaxEnd<'_, P> {
    type Summary = u32;

    #[inline]
    fn summary(&self) -> u32 {
        self.max
    }

    #[inline]
    fn recompute(&mut self, left: Option<u32>, right: Option<u32>) {
        self.max = self.interval.end.max(left.unwrap_or(0)).max(right.unwrap_or(0));
    }

    #[inline]
    fn absorb(&mut self, descendant: u32) {
        self.max = self.max.max(descendant);
    }
}
