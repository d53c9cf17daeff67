use crate::chess::piece::{Color, PieceKind};
use crate::core::square::{BoardDims, Square};
use crate::error::{ChessError, ChessResult};

/// Back-rank order from the a-file: queens on d, kings on e.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One piece of a starting arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
}

/// The standard initial arrangement: White on the first two ranks, Black on the last two.
///
/// Works on any board with 8 files and at least 4 ranks; extra ranks end up between the
/// two armies.
pub fn standard(dims: BoardDims) -> ChessResult<Vec<Placement>> {
    if dims.files != BACK_RANK.len() as u8 || dims.ranks < 4 {
        return Err(ChessError::UnsupportedLayout {
            files: dims.files,
            ranks: dims.ranks,
        });
    }

    let last = dims.ranks - 1;
    let rows = [
        (Color::White, 0, 1),
        (Color::Black, last, last - 1),
    ];

    let mut out = Vec::with_capacity(32);
    for (color, back, pawns) in rows {
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            out.extend(
                [(kind, back), (PieceKind::Pawn, pawns)]
                    .into_iter()
                    .filter_map(|(kind, rank)| {
                        Square::new(file, rank, dims).map(|square| Placement {
                            kind,
                            color,
                            square,
                        })
                    }),
            );
        }
    }
    Ok(out)
}
