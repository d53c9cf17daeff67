use crate::board::arena::PieceId;
use crate::core::square::{BoardDims, Square};

/// Dense occupancy grid: at most one piece handle per square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dims: BoardDims,
    cells: Vec<Option<PieceId>>,
}

impl Grid {
    pub fn new(dims: BoardDims) -> Self {
        Self {
            dims,
            cells: vec![None; dims.area()],
        }
    }

    #[inline]
    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<PieceId> {
        self.cells[self.dims.index_of(sq)]
    }

    /// Store `occupant` at `sq`, returning the previous occupant.
    #[inline]
    pub fn set(&mut self, sq: Square, occupant: Option<PieceId>) -> Option<PieceId> {
        let i = self.dims.index_of(sq);
        std::mem::replace(&mut self.cells[i], occupant)
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
    }

    /// Overwrite every cell with `other`'s occupant.
    pub fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.dims, other.dims);
        self.cells.copy_from_slice(&other.cells);
    }

    /// Occupied squares in rank-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PieceId)> + '_ {
        self.dims
            .squares()
            .filter_map(move |sq| self.get(sq).map(|id| (sq, id)))
    }
}
