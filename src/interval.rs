//! The closed intervals `[start, end]` stored in and queried against `IntervalTree`.
//!
//! A [`Span`] is just the bounds and is what queries take. An [`Interval`] is a span plus a
//! payload borrowed from the caller; the tree copies the `Interval` into its node but never
//! touches the payload behind the reference.
//!
//! Both types can only be built through their constructors, so `start <= end` holds unless
//! a caller rewrites the public fields afterwards. `IntervalTree` checks the bounds again
//! before inserting or querying. A span with `start == end` is a single point.

use std::fmt;

use crate::error::IntervalTreeError;

/// The closed range `[start, end]`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSpan"))]
#[non_exhaustive]
pub struct Span {
    /// Start value
    pub start: u32,
    /// End value, inclusive
    pub end: u32,
}

impl Span {
    /// Create a new `Span`
    ///
    /// # Panics
    ///
    /// This method panics when start > end
    #[inline]
    #[must_use]
    pub fn new(start: u32, end: u32) -> Self {
        assert!(start <= end, "invalid range");
        Self { start, end }
    }

    /// Create a new `Span`, rejecting `start > end`
    ///
    /// # Errors
    ///
    /// Returns `IntervalTreeError::InvalidInterval` when start > end
    #[inline]
    pub fn try_new(start: u32, end: u32) -> Result<Self, IntervalTreeError> {
        if start > end {
            return Err(IntervalTreeError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create the single point span `[x, x]`
    #[inline]
    #[must_use]
    pub fn point(x: u32) -> Self {
        Self { start: x, end: x }
    }

    /// Checks if self and other share at least one point
    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if every point of other lies within self
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Bounds as they come out of a deserializer, before `start <= end` is checked
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpan {
    start: u32,
    end: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSpan> for Span {
    type Error = IntervalTreeError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Span::try_new(raw.start, raw.end)
    }
}

/// A span tagged with a payload borrowed from the caller
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[non_exhaustive]
pub struct Interval<'a, P: ?Sized> {
    /// Start value
    pub start: u32,
    /// End value, inclusive
    pub end: u32,
    /// Caller-owned data attached to the interval
    pub payload: &'a P,
}

impl<'a, P: ?Sized> Interval<'a, P> {
    /// Create a new `Interval`
    ///
    /// # Panics
    ///
    /// This method panics when start > end
    #[inline]
    pub fn new(start: u32, end: u32, payload: &'a P) -> Self {
        assert!(start <= end, "invalid range");
        Self {
            start,
            end,
            payload,
        }
    }

    /// Create a new `Interval`, rejecting `start > end`
    ///
    /// # Errors
    ///
    /// Returns `IntervalTreeError::InvalidInterval` when start > end
    #[inline]
    pub fn try_new(start: u32, end: u32, payload: &'a P) -> Result<Self, IntervalTreeError> {
        let span = Span::try_new(start, end)?;
        Ok(Self::with_span(span, payload))
    }

    /// Attach a payload to an already validated span
    #[inline]
    pub fn with_span(span: Span, payload: &'a P) -> Self {
        Self {
            start: span.start,
            end: span.end,
            payload,
        }
    }

    /// The bounds of this interval
    #[inline]
    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }
}

// Hand-written so that `&'a P` stays copyable for unsized or non-`Clone` payloads.
impl<P: ?Sized> Clone for Interval<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for Interval<'_, P> {}

impl<P: ?Sized + PartialEq> PartialEq for Interval<'_, P> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.payload == other.payload
    }
}

impl<P: ?Sized + Eq> Eq for Interval<'_, P> {}

impl<P: ?Sized + fmt::Debug> fmt::Debug for Interval<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interval")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("payload", &self.payload)
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    #[should_panic(expected = "invalid range")]
    fn invalid_range_should_panic() {
        let _span = Span::new(3, 1);
    }

    #[test]
    #[should_panic(expected = "invalid range")]
    fn invalid_interval_should_panic() {
        let _interval = Interval::new(9, 2, "x");
    }

    #[test]
    fn try_new_rejects_inverted_bounds() {
        assert_eq!(
            Span::try_new(5, 4),
            Err(IntervalTreeError::InvalidInterval { start: 5, end: 4 })
        );
        assert_eq!(
            Interval::try_new(7, 0, &()).unwrap_err(),
            IntervalTreeError::InvalidInterval { start: 7, end: 0 }
        );
        assert_eq!(Span::try_new(4, 4), Ok(Span::point(4)));
    }

    #[test]
    fn closed_bounds_touch_at_endpoints() {
        let a = Span::new(1, 5);
        assert!(a.overlaps(&Span::new(5, 9)));
        assert!(a.overlaps(&Span::point(1)));
        assert!(!a.overlaps(&Span::new(6, 9)));
        assert!(a.contains(&Span::new(1, 5)));
        assert!(a.contains(&Span::point(3)));
        assert!(!a.contains(&Span::new(0, 3)));
    }

    #[test]
    fn unsized_payloads_are_copied_by_reference() {
        let label = String::from("edge");
        let interval: Interval<'_, str> = Interval::new(2, 8, label.as_str());
        let copy = interval;
        assert_eq!(copy, interval);
        assert!(std::ptr::eq(copy.payload, label.as_str()));
        assert_eq!(copy.span(), Span::new(2, 8));
    }
}
