//! Board state: an arena of pieces, the main grid, a scratch grid for hypothetical
//! moves and the reachability overlay.
//!
//! Both grids hold [`PieceId`]s into the same arena. Moving a piece on the scratch grid
//! therefore updates the piece's stored square as seen from the main grid too; whoever
//! simulates a move must restore the piece afterwards.

pub mod arena;
pub mod grid;
pub mod snapshot;

use std::fmt;

use tracing::debug;

use crate::chess::layout;
use crate::chess::piece::{Color, Piece, PieceKind};
use crate::core::bitset::SquareSet;
use crate::core::square::{BoardDims, Square};
use crate::error::{ChessError, ChessResult};

pub use arena::{Arena, PieceId};
pub use grid::Grid;
pub use snapshot::BoardSnapshot;

/// Which of the board's two grids an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    Main,
    Scratch,
}

#[derive(Debug, Clone)]
pub struct Board {
    dims: BoardDims,
    arena: Arena,
    main: Grid,
    scratch: Grid,
    overlay: SquareSet,
}

impl Board {
    /// An empty board. Use [`Board::place`] to build arbitrary positions.
    ///
    /// Fails if either side of `dims` is zero or larger than
    /// [`MAX_SIDE`](crate::core::square::MAX_SIDE).
    pub fn empty(dims: BoardDims) -> ChessResult<Self> {
        dims.validate()?;
        Ok(Self {
            dims,
            arena: Arena::new(),
            main: Grid::new(dims),
            scratch: Grid::new(dims),
            overlay: SquareSet::new(dims),
        })
    }

    /// A board holding the standard starting arrangement.
    pub fn standard(dims: BoardDims) -> ChessResult<Self> {
        let mut board = Self::empty(dims)?;
        board.setup_standard()?;
        Ok(board)
    }

    /// Reset to the standard starting arrangement. Previous pieces are dropped.
    pub fn setup_standard(&mut self) -> ChessResult<()> {
        let placements = layout::standard(self.dims)?;
        self.arena.clear();
        self.main.clear();
        self.scratch.clear();
        self.overlay.clear();
        for p in placements {
            self.place(p.kind, p.color, p.square);
        }
        debug!(pieces = self.arena.len(), "standard position set up");
        Ok(())
    }

    /// Put a new piece on the main grid, replacing any occupant.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) -> PieceId {
        let id = self.arena.alloc(Piece::new(kind, color, square));
        self.main.set(square, Some(id));
        id
    }

    /// Take whatever stands on `square` off the main grid.
    pub fn remove(&mut self, square: Square) -> Option<PieceId> {
        self.main.set(square, None)
    }

    #[inline]
    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    #[inline]
    pub fn grid(&self, kind: GridKind) -> &Grid {
        match kind {
            GridKind::Main => &self.main,
            GridKind::Scratch => &self.scratch,
        }
    }

    #[inline]
    fn grid_mut(&mut self, kind: GridKind) -> &mut Grid {
        match kind {
            GridKind::Main => &mut self.main,
            GridKind::Scratch => &mut self.scratch,
        }
    }

    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.arena.get(id)
    }

    /// The piece standing on `square` in the given grid.
    pub fn occupant(&self, kind: GridKind, square: Square) -> Option<(PieceId, &Piece)> {
        self.grid(kind)
            .get(square)
            .map(|id| (id, self.arena.get(id)))
    }

    pub fn view(&self, kind: GridKind) -> BoardView<'_> {
        BoardView {
            arena: &self.arena,
            grid: self.grid(kind),
        }
    }

    /// Move `id` to `destination` on the target grid.
    ///
    /// Clears the piece's current square, updates its stored square (shared by both
    /// grids) and overwrites the destination. Returns the displaced occupant, if any.
    /// No legality checks.
    pub fn move_piece(
        &mut self,
        target: GridKind,
        id: PieceId,
        destination: Square,
    ) -> Option<PieceId> {
        let source = self.arena.get(id).square;
        self.arena.get_mut(id).relocate(destination);
        let grid = self.grid_mut(target);
        grid.set(source, None);
        grid.set(destination, Some(id)).filter(|&prev| prev != id)
    }

    /// Undo a [`Board::move_piece`]: move `id` back to `origin` and put `captured` (if
    /// any) back on the square the piece had moved to.
    ///
    /// Moving back is still a move, so a pawn stays marked as moved.
    pub fn revert_move(
        &mut self,
        target: GridKind,
        id: PieceId,
        origin: Square,
        captured: Option<PieceId>,
    ) {
        let moved_to = self.arena.get(id).square;
        self.arena.get_mut(id).relocate(origin);
        let grid = self.grid_mut(target);
        grid.set(moved_to, captured);
        grid.set(origin, Some(id));
    }

    /// Set a piece's stored square back to `origin` without touching any grid. Goes
    /// through [`Piece::relocate`], so a pawn loses its two-square advance.
    pub(crate) fn return_piece(&mut self, id: PieceId, origin: Square) {
        self.arena.get_mut(id).relocate(origin);
    }

    /// The king of `color` on the main grid.
    pub fn king_of(&self, color: Color) -> ChessResult<PieceId> {
        self.main
            .occupied()
            .map(|(_, id)| id)
            .find(|&id| {
                let p = self.arena.get(id);
                p.color == color && p.kind() == PieceKind::King
            })
            .ok_or(ChessError::NoKingFound { color })
    }

    /// Pieces of `color` on the given grid, rank-major.
    pub fn pieces_of(&self, kind: GridKind, color: Color) -> Vec<PieceId> {
        self.grid(kind)
            .occupied()
            .map(|(_, id)| id)
            .filter(|&id| self.arena.get(id).color == color)
            .collect()
    }

    pub fn sync_scratch_from_main(&mut self) {
        self.scratch.copy_from(&self.main);
    }

    #[inline]
    pub fn overlay(&self) -> &SquareSet {
        &self.overlay
    }

    /// Replace the overlay with `squares`.
    pub fn set_overlay(&mut self, squares: &[Square]) {
        self.overlay.clear();
        self.overlay.extend(squares.iter().copied());
    }

    pub fn clear_overlay(&mut self) {
        self.overlay.clear();
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::capture(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.snapshot())
    }
}

/// Read-only view of one grid plus the pieces it refers to. Move generation and attack
/// tests run against a view, so they cannot mutate anything.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    arena: &'a Arena,
    grid: &'a Grid,
}

impl<'a> BoardView<'a> {
    #[inline]
    pub fn dims(&self) -> BoardDims {
        self.grid.dims()
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<&'a Piece> {
        let arena = self.arena;
        self.grid.get(sq).map(|id| arena.get(id))
    }

    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    pub fn pieces(&self) -> impl Iterator<Item = &'a Piece> + 'a {
        let (arena, grid) = (self.arena, self.grid);
        grid.occupied().map(move |(_, id)| arena.get(id))
    }
}
