use log::{debug, trace, warn};

use crate::accumulator::Accumulator;
use crate::augment::MaxEnd;
use crate::error::IntervalTreeError;
use crate::index::{DefaultIx, IndexType};
use crate::interval::{Interval, Span};
use crate::query::{self, Relation};
use crate::rbtree::RbTree;

/// An index over a dynamic set of closed `u32` intervals.
///
/// Intervals are kept in a red-black tree ordered by start, each node carrying the largest end
/// in its subtree. Queries reuse one internal result buffer, so the slice a query returns
/// borrows the tree until it is dropped.
#[derive(Debug)]
pub struct IntervalTree<'a, P: ?Sized, Ix = DefaultIx> {
    /// Nodes ordered by interval start
    pub(crate) tree: RbTree<u32, MaxEnd<'a, P>, Ix>,
    /// Matches of the last query
    pub(crate) matches: Accumulator<Interval<'a, P>>,
}

impl<'a, P, Ix> IntervalTree<'a, P, Ix>
where
    P: ?Sized,
    Ix: IndexType,
{
    /// Creates a new `IntervalTree` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        IntervalTree {
            tree: RbTree::with_capacity(capacity),
            matches: Accumulator::new(),
        }
    }

    /// Insert an interval into the tree.
    ///
    /// Intervals with equal bounds, or even equal payloads, are all kept.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if `interval.start > interval.end`, and `OutOfMemory` if the
    /// node storage cannot grow. In both cases the tree is left exactly as it was before the
    /// call.
    ///
    /// # Example
    /// ```rust
    /// use rb_interval_index::{Interval, IntervalTree};
    ///
    /// let mut tree = IntervalTree::new();
    /// tree.add_interval(Interval::new(1, 5, "a")).unwrap();
    /// tree.add_interval(Interval::new(1, 5, "a")).unwrap();
    /// assert_eq!(tree.len(), 2);
    /// ```
    #[inline]
    pub fn add_interval(&mut self, interval: Interval<'a, P>) -> Result<(), IntervalTreeError> {
        let inserted = Span::try_new(interval.start, interval.end)
            .and_then(|_| self.tree.insert(interval.start, MaxEnd::new(interval)));
        match inserted {
            Ok(idx) => {
                trace!(
                    "inserted [{}, {}] as {:?}",
                    interval.start,
                    interval.end,
                    idx
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "failed to insert [{}, {}]: {}",
                    interval.start, interval.end, err
                );
                Err(err)
            }
        }
    }

    /// Find all intervals that lie within `span`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if `span.start > span.end`, and `OutOfMemory` if the result
    /// buffer cannot grow.
    ///
    /// # Example
    /// ```rust
    /// use rb_interval_index::{Interval, IntervalTree, Span};
    ///
    /// let mut tree = IntervalTree::new();
    /// tree.add_interval(Interval::new(1, 5, &'a')).unwrap();
    /// tree.add_interval(Interval::new(6, 10, &'b')).unwrap();
    /// tree.add_interval(Interval::new(8, 20, &'c')).unwrap();
    /// let found = tree.query_contained(Span::new(0, 10)).unwrap();
    /// assert_eq!(found.iter().map(|i| *i.payload).collect::<String>(), "ab");
    /// ```
    #[inline]
    pub fn query_contained(
        &mut self,
        span: Span,
    ) -> Result<&[Interval<'a, P>], IntervalTreeError> {
        self.query(Relation::ContainedBy, span)
    }

    /// Find all intervals that cover the whole of `span`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if `span.start > span.end`, and `OutOfMemory` if the result
    /// buffer cannot grow.
    ///
    /// # Example
    /// ```rust
    /// use rb_interval_index::{Interval, IntervalTree, Span};
    ///
    /// let mut tree = IntervalTree::new();
    /// tree.add_interval(Interval::new(6, 10, "b")).unwrap();
    /// tree.add_interval(Interval::new(8, 20, "c")).unwrap();
    /// tree.add_interval(Interval::new(15, 18, "d")).unwrap();
    /// assert_eq!(tree.query_containing(Span::point(9)).unwrap().len(), 2);
    /// assert_eq!(tree.query_containing(Span::new(9, 16)).unwrap().len(), 1);
    /// ```
    #[inline]
    pub fn query_containing(
        &mut self,
        span: Span,
    ) -> Result<&[Interval<'a, P>], IntervalTreeError> {
        self.query(Relation::Contains, span)
    }

    /// Find all intervals that share at least one point with `span`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if `span.start > span.end`, and `OutOfMemory` if the result
    /// buffer cannot grow.
    ///
    /// # Example
    /// ```rust
    /// use rb_interval_index::{Interval, IntervalTree, Span};
    ///
    /// let mut tree = IntervalTree::new();
    /// tree.add_interval(Interval::new(1, 5, "a")).unwrap();
    /// tree.add_interval(Interval::new(6, 10, "b")).unwrap();
    /// assert_eq!(tree.query_overlapping(Span::new(5, 6)).unwrap().len(), 2);
    /// assert!(tree.query_overlapping(Span::new(11, 30)).unwrap().is_empty());
    /// ```
    #[inline]
    pub fn query_overlapping(
        &mut self,
        span: Span,
    ) -> Result<&[Interval<'a, P>], IntervalTreeError> {
        self.query(Relation::Overlaps, span)
    }

    /// Find all intervals related to `span` by `relation`, sorted by start.
    ///
    /// The previous query's results are discarded first. On error the buffer is left empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInterval` if `span.start > span.end`, and `OutOfMemory` if the result
    /// buffer cannot grow.
    pub fn query(
        &mut self,
        relation: Relation,
        span: Span,
    ) -> Result<&[Interval<'a, P>], IntervalTreeError> {
        self.matches.reset();
        let root = self.tree.root();
        let found = Span::try_new(span.start, span.end)
            .and_then(|span| query::collect(&self.tree, root, relation, &span, &mut self.matches));
        if let Err(err) = found {
            self.matches.reset();
            warn!(
                "{relation} query for [{}, {}] failed: {err}",
                span.start, span.end
            );
            return Err(err);
        }
        debug!(
            "{relation} query for [{}, {}] matched {} intervals",
            span.start,
            span.end,
            self.matches.len()
        );
        Ok(self.matches.as_slice())
    }

    /// Check if any interval in the tree overlaps with `span`.
    ///
    /// Unlike the queries this does not touch the result buffer. A span with `start > end`
    /// holds no points and overlaps nothing.
    ///
    /// # Example
    /// ```rust
    /// use rb_interval_index::{Interval, IntervalTree, Span};
    ///
    /// let mut tree = IntervalTree::new();
    /// tree.add_interval(Interval::new(1, 3, &())).unwrap();
    /// tree.add_interval(Interval::new(9, 11, &())).unwrap();
    /// assert!(tree.overlaps_any(Span::new(3, 5)));
    /// assert!(!tree.overlaps_any(Span::new(4, 8)));
    /// ```
    #[inline]
    #[must_use]
    pub fn overlaps_any(&self, span: Span) -> bool {
        span.start <= span.end && query::any_overlap(&self.tree, &span)
    }

    /// Get an iterator over the stored intervals, sorted by start.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Interval<'a, P>> + '_ {
        self.tree.iter().map(|(_, item)| &item.interval)
    }

    /// The number of results the reusable query buffer can hold before it has to grow.
    #[inline]
    #[must_use]
    pub fn result_capacity(&self) -> usize {
        self.matches.capacity()
    }

    /// Cap the reusable query buffer at `limit` results.
    ///
    /// A query that would need more room fails with `OutOfMemory` and leaves the buffer empty.
    /// Growth happens in steps of [`GROWTH_STEP`](crate::GROWTH_STEP), so the usable capacity
    /// is `limit` rounded down to a multiple of it, or the current capacity if that is larger.
    ///
    /// # Example
    /// ```rust
    /// use rb_interval_index::{Interval, IntervalTree, IntervalTreeError, Span};
    ///
    /// let mut tree = IntervalTree::new();
    /// for i in 0..15 {
    ///     tree.add_interval(Interval::new(i, i + 1, &())).unwrap();
    /// }
    /// tree.set_result_limit(10);
    /// assert_eq!(
    ///     tree.query_overlapping(Span::new(0, 100)),
    ///     Err(IntervalTreeError::OutOfMemory)
    /// );
    /// assert_eq!(tree.query_overlapping(Span::new(0, 3)).unwrap().len(), 4);
    /// ```
    #[inline]
    pub fn set_result_limit(&mut self, limit: usize) {
        self.matches.set_limit(limit);
    }

    /// Remove all intervals from the tree
    #[inline]
    pub fn clear(&mut self) {
        self.tree.clear();
        self.matches.reset();
    }

    /// Return the number of intervals in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Return `true` if the tree contains no intervals.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, P: ?Sized> IntervalTree<'a, P> {
    /// Create an empty `IntervalTree`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }
}

impl<P: ?Sized> Default for IntervalTree<'_, P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "graphviz")]
impl<P, Ix> IntervalTree<'_, P, Ix>
where
    P: ?Sized,
    Ix: IndexType,
{
    /// Write the tree to `path` as a Graphviz DOT file
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be written.
    pub fn draw(&self, path: impl AsRef<std::path::Path>) -> std::io::Result<()> {
        use std::fmt::Write as _;

        use crate::node::Color;

        let mut dot =
            String::from("digraph IntervalTree {\n    node [style=filled, fontcolor=white];\n");
        let mut stack: Vec<_> = self.tree.root().into_iter().collect();
        while let Some(x) = stack.pop() {
            let (interval, max, color, left, right) = self.tree.node_ref(x, |xn| {
                (xn.item.interval, xn.item.max, xn.color, xn.left, xn.right)
            });
            let fill = match color {
                Color::Red => "red",
                Color::Black => "black",
            };
            let _ignore = writeln!(
                dot,
                "    n{} [label=\"[{}, {}]\\nmax {}\", fillcolor={fill}];",
                x.index(),
                interval.start,
                interval.end,
                max
            );
            for child in [left, right].into_iter().flatten() {
                let _ignore = writeln!(dot, "    n{} -> n{};", x.index(), child.index());
                stack.push(child);
            }
        }
        dot.push_str("}\n");
        std::fs::write(path, dot)
    }
}
