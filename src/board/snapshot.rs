use std::fmt;

use serde::Serialize;

use crate::board::{Board, GridKind};
use crate::chess::piece::{Color, PieceKind};
use crate::core::square::{BoardDims, Square};

/// What a renderer needs to draw one occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub kind: PieceKind,
    pub color: Color,
}

/// Data-only picture of the main grid and the move-hint overlay.
///
/// `cells` is rank-major starting at `a1`; `highlighted` lists the overlay squares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub dims: BoardDims,
    pub cells: Vec<Option<CellView>>,
    pub highlighted: Vec<Square>,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        let dims = board.dims();
        let cells = dims
            .squares()
            .map(|sq| {
                board.occupant(GridKind::Main, sq).map(|(_, p)| CellView {
                    kind: p.kind(),
                    color: p.color,
                })
            })
            .collect();
        Self {
            dims,
            cells,
            highlighted: board.overlay().iter().collect(),
        }
    }

    pub fn cell(&self, sq: Square) -> Option<CellView> {
        self.cells.get(self.dims.index_of(sq)).copied().flatten()
    }

    pub fn is_highlighted(&self, sq: Square) -> bool {
        self.highlighted.contains(&sq)
    }
}

/// ASCII diagram, last rank on top. Uppercase is White, `*` marks a highlighted empty
/// square and a highlighted piece is wrapped in brackets.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..self.dims.ranks).rev() {
            write!(f, "{:>2} ", rank as u32 + 1)?;
            for file in 0..self.dims.files {
                let Some(sq) = Square::new(file, rank, self.dims) else {
                    continue;
                };
                let hl = self.is_highlighted(sq);
                match (self.cell(sq), hl) {
                    (Some(c), true) => write!(f, "[{}]", c.kind.symbol(c.color))?,
                    (Some(c), false) => write!(f, " {} ", c.kind.symbol(c.color))?,
                    (None, true) => write!(f, " * ")?,
                    (None, false) => write!(f, " . ")?,
                }
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for file in 0..self.dims.files {
            write!(f, " {} ", (b'a' + file) as char)?;
        }
        writeln!(f)
    }
}
