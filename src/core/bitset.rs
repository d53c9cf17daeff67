use crate::core::square::{BoardDims, Square};

/// A set of squares packed into `u64` words.
///
/// Used for the reachability overlay the presentation layer draws move hints from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SquareSet {
    dims: BoardDims,
    data: Vec<u64>,
}

impl SquareSet {
    pub fn new(dims: BoardDims) -> Self {
        let words = (dims.area() + 63) / 64;
        Self {
            dims,
            data: vec![0; words],
        }
    }

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        let i = self.dims.index_of(sq);
        self.data[i >> 6] |= 1u64 << (i & 63);
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        let i = self.dims.index_of(sq);
        (self.data[i >> 6] >> (i & 63)) & 1u64 == 1u64
    }

    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|w| *w = 0);
    }

    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&w| w == 0)
    }

    /// Members in rank-major order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.dims.squares().filter(move |&sq| self.contains(sq))
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}
