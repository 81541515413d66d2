//! `rb_interval_index` is an interval index over closed `u32` intervals.
//!
//! It stores intervals in a red-black tree keyed by interval start and augmented with the
//! largest end of every subtree, and answers three kinds of queries over the dynamic set:
//! which intervals lie within a span, which cover a span, and which overlap it. Each query
//! prunes whole subtrees using the augmented max end on the left and the start ordering on the
//! right, so it runs in `O(log N + K)` for `K` matches in the common case.
//!
//! Like `Vec`-backed maps, nodes live in a vector and refer to each other by index, so the
//! tree is `Send` whenever the payload is `Sync`. There is no per-interval removal: intervals
//! live until the tree is cleared or dropped.
//!
//! Every interval carries a payload borrowed from the caller. The tree stores and returns the
//! reference but never owns what it points to.
//!
//! # Example
//!
//! ```rust
//! use rb_interval_index::{Interval, IntervalTree, Span};
//!
//! let mut tree = IntervalTree::new();
//! tree.add_interval(Interval::new(1, 5, "a")).unwrap();
//! tree.add_interval(Interval::new(6, 10, "b")).unwrap();
//! tree.add_interval(Interval::new(8, 20, "c")).unwrap();
//! tree.add_interval(Interval::new(15, 18, "d")).unwrap();
//!
//! let found: Vec<_> = tree
//!     .query_overlapping(Span::new(7, 9))
//!     .unwrap()
//!     .iter()
//!     .map(|i| i.payload)
//!     .collect();
//! assert_eq!(found, ["b", "c"]);
//! ```
//!

mod accumulator;
mod augment;
mod error;
mod index;
mod interval;
mod intervaltree;
mod iter;
mod node;
mod query;
mod rbtree;


pub use accumulator::GROWTH_STEP;
pub use error::IntervalTreeError;
pub use index::{DefaultIx, IndexType};
pub use interval::{Interval, Span};
pub use intervaltree::IntervalTree;
pub use query::Relation;
