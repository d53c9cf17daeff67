use crate::chess::piece::Piece;

/// Stable handle to a piece in an [`Arena`].
///
/// Grids store handles, not pieces, so the main and scratch grids can refer to the same
/// piece and see each other's position updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(u16);

impl PieceId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Owner of every piece created for a board. Pieces are never freed; a captured piece
/// simply stops being referenced by any grid.
#[derive(Debug, Clone, Default)]
pub struct Arena {
    pieces: Vec<Piece>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, piece: Piece) -> PieceId {
        debug_assert!(self.pieces.len() < u16::MAX as usize);
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(piece);
        id
    }

    #[inline]
    pub fn get(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    #[inline]
    pub fn get_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn clear(&mut self) {
        self.pieces.clear();
    }
}
