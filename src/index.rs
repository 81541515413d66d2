use std::fmt;
use std::hash::Hash;

pub type DefaultIx = u32;

/// The integer type used to address nodes in the arena.
///
/// # Safety
///
/// `new` must round-trip every value in `0..=max().index()` through `index`.
pub unsafe trait IndexType: Copy + Default + Hash + Ord + fmt::Debug + 'static {
    fn new(x: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

macro_rules! index_type {
    ($($t:ty),*) => {
        $(
            unsafe impl IndexType for $t {
                #[inline(always)]
                fn new(x: usize) -> Self {
                    x as $t
                }
                #[inline(always)]
                fn index(&self) -> usize {
                    *self as usize
                }
                #[inline(always)]
                fn max() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

index_type!(u8, u16, u32, usize);

/// Node identifier.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct NodeIndex<Ix = DefaultIx>(Ix);

impl<Ix: IndexType> NodeIndex<Ix> {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    /// The reserved index one past the last addressable node.
    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

impl<Ix: fmt::Debug> fmt::Debug for NodeIndex<Ix> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "NodeIndex({:?})", self.0)
    }
}
