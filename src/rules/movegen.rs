use crate::board::BoardView;
use crate::chess::piece::{Color, MoveRule, Piece, BISHOP_DIRS, KNIGHT_DELTAS, ROOK_DIRS};
use crate::core::coord::{Coord, KING_STEPS};
use crate::core::square::Square;

/// Candidate destinations for `piece` on `view`.
///
/// A candidate never lands on a same-color piece. Whether the move would leave the
/// mover's own king attacked is not considered here.
pub fn candidate_moves(view: &BoardView<'_>, piece: &Piece) -> Vec<Square> {
    let mut out = Vec::new();
    let (from, color) = (piece.square, piece.color);

    match piece.rule {
        MoveRule::Pawn {
            direction,
            has_moved,
        } => pawn_moves(view, from, color, direction, has_moved, &mut out),
        MoveRule::Rook => slide_orthogonal(view, from, color, &mut out),
        MoveRule::Bishop => slide_diagonal(view, from, color, &mut out),
        MoveRule::Queen => {
            slide_orthogonal(view, from, color, &mut out);
            slide_diagonal(view, from, color, &mut out);
        }
        MoveRule::Knight => leap(view, from, color, &KNIGHT_DELTAS, &mut out),
        MoveRule::King => leap(view, from, color, &KING_STEPS, &mut out),
    }

    out
}

pub fn slide_orthogonal(view: &BoardView<'_>, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(view, from, color, &ROOK_DIRS, out);
}

pub fn slide_diagonal(view: &BoardView<'_>, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(view, from, color, &BISHOP_DIRS, out);
}

/// Walk each direction until the edge, an own piece (excluded) or an enemy piece
/// (included).
fn slide(view: &BoardView<'_>, from: Square, color: Color, dirs: &[Coord], out: &mut Vec<Square>) {
    let dims = view.dims();
    for &dir in dirs {
        let mut cur = from.offset(dir, dims);
        while let Some(sq) = cur {
            match view.color_at(sq) {
                None => out.push(sq),
                Some(c) => {
                    if c != color {
                        out.push(sq);
                    }
                    break;
                }
            }
            cur = sq.offset(dir, dims);
        }
    }
}

/// Fixed offsets, each independently bounds-checked.
fn leap(view: &BoardView<'_>, from: Square, color: Color, deltas: &[Coord], out: &mut Vec<Square>) {
    let dims = view.dims();
    out.extend(
        deltas
            .iter()
            .filter_map(|&d| from.offset(d, dims))
            .filter(|&sq| view.color_at(sq) != Some(color)),
    );
}

/// Pawn pushes and captures.
///
/// Both pushes accept an enemy-occupied target, and the double push does not look at
/// the square it passes over.
fn pawn_moves(
    view: &BoardView<'_>,
    from: Square,
    color: Color,
    direction: i32,
    has_moved: bool,
    out: &mut Vec<Square>,
) {
    let dims = view.dims();
    let not_own = |sq: &Square| view.color_at(*sq) != Some(color);

    if !has_moved {
        out.extend(from.offset(Coord::new(0, 2 * direction), dims).filter(not_own));
    }
    out.extend(from.offset(Coord::new(0, direction), dims).filter(not_own));

    for dx in [-1, 1] {
        let target = from.offset(Coord::new(dx, direction), dims);
        if let Some(sq) = target {
            if matches!(view.color_at(sq), Some(c) if c != color) {
                out.push(sq);
            }
        }
    }
}
