use tracing::trace;

use crate::board::{Board, GridKind, PieceId};

use super::attacks::is_attacked;
use super::movegen::candidate_moves;

/// True iff `king` is attacked on the main grid and no single candidate move of any
/// piece of its color, simulated on the scratch grid, removes the attack.
///
/// Each own piece only tries its own candidates against the current position; moves are
/// never combined. Not being in check is never mate (stalemate is not told apart).
///
/// The main grid is left untouched. Piece state is shared with the scratch grid, so every
/// tried piece is moved back to its square before moving on. Moving back counts as a
/// move: every own pawn the search visits loses its two-square advance.
pub fn is_checkmate(board: &mut Board, king: PieceId) -> bool {
    board.sync_scratch_from_main();

    if !is_attacked(&board.view(GridKind::Main), board.piece(king)) {
        return false;
    }

    let color = board.piece(king).color;
    for id in board.pieces_of(GridKind::Main, color) {
        let before = *board.piece(id);
        let moves = candidate_moves(&board.view(GridKind::Main), &before);

        for dest in moves {
            board.move_piece(GridKind::Scratch, id, dest);
            let still_attacked = is_attacked(&board.view(GridKind::Scratch), board.piece(king));
            board.return_piece(id, before.square);

            if !still_attacked {
                trace!(from = %before.square, to = %dest, "check can be escaped");
                return false;
            }
            board.sync_scratch_from_main();
        }

        board.sync_scratch_from_main();
        board.return_piece(id, before.square);
    }

    true
}
