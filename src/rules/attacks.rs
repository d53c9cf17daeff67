use crate::board::BoardView;
use crate::chess::piece::Piece;

use super::movegen::candidate_moves;

/// True iff some piece of the other color has `king.square` among its candidate moves.
///
/// Short-circuits on the first attacker found.
pub fn is_attacked(view: &BoardView<'_>, king: &Piece) -> bool {
    view.pieces()
        .filter(|p| p.color != king.color)
        .any(|p| candidate_moves(view, p).contains(&king.square))
}

/// Every enemy piece currently attacking `king`.
pub fn attackers<'a>(view: &BoardView<'a>, king: &Piece) -> Vec<&'a Piece> {
    view.pieces()
        .filter(|p| p.color != king.color)
        .filter(|p| candidate_moves(view, p).contains(&king.square))
        .collect()
}
