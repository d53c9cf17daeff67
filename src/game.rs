//! A two-player session on top of [`Board`]: turn order, selection, move application and
//! the end-of-game test.
//!
//! This is the surface a presentation layer drives. It returns data only; drawing the
//! board, mapping mouse positions to squares and showing the end popup happen elsewhere.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::board::{Board, BoardSnapshot, GridKind};
use crate::chess::config::GameConfig;
use crate::chess::piece::Color;
use crate::core::bitset::SquareSet;
use crate::core::square::Square;
use crate::error::ChessResult;
use crate::rules::attacks::attackers;
use crate::rules::{candidate_moves, is_attacked, is_checkmate};

/// What happened to an [`Game::attempt_move`] request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveOutcome {
    /// The move stands and the turn passed to the other side.
    Applied,
    /// The move would leave the mover's king attacked; the board is as before.
    RejectedSelfCheck,
    /// `from` is empty or holds a piece of the side not to move.
    NotAPiece,
    /// `to` is not a candidate move of the piece on `from`.
    Unreachable,
    /// The game has already ended.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum GameResult {
    InProgress,
    Checkmate { winner: Color },
}

/// Result of a single click in [`Game::click`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An own piece was selected; these squares are now highlighted.
    Selected(Vec<Square>),
    /// A highlighted square was clicked and the selected piece was moved there (or not).
    Moved(MoveOutcome),
    /// An empty, non-highlighted square was clicked; selection and overlay were cleared.
    Cleared,
    /// Nothing to do (e.g. an enemy piece that is not a capture target).
    Ignored,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    turn: Color,
    selected: Option<Square>,
    result: GameResult,
}

impl Game {
    /// A new game in the standard starting position.
    pub fn new(config: GameConfig) -> ChessResult<Self> {
        config.validate()?;
        let board = Board::standard(config.dims)?;
        Ok(Self::from_board(config, board))
    }

    /// A game continuing from an arbitrary board, `config.first_to_move` to play.
    pub fn from_board(config: GameConfig, board: Board) -> Self {
        let turn = config.first_to_move;
        Self {
            config,
            board,
            turn,
            selected: None,
            result: GameResult::InProgress,
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn result(&self) -> GameResult {
        self.result
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn overlay(&self) -> &SquareSet {
        self.board.overlay()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// Is the side to move in check? `false` when its king is missing.
    pub fn in_check(&self) -> bool {
        match self.board.king_of(self.turn) {
            Ok(king) => is_attacked(&self.board.view(GridKind::Main), self.board.piece(king)),
            Err(e) => {
                warn!(error = %e, "cannot tell whether side to move is in check");
                false
            }
        }
    }

    /// Squares of the pieces giving check to the side to move.
    pub fn checkers(&self) -> Vec<Square> {
        let Ok(king) = self.board.king_of(self.turn) else {
            return Vec::new();
        };
        let view = self.board.view(GridKind::Main);
        attackers(&view, self.board.piece(king))
            .into_iter()
            .map(|p| p.square)
            .collect()
    }

    /// Select the piece on `square` if it belongs to the side to move.
    ///
    /// Returns its candidate moves and highlights them. Anything else returns `None` and
    /// leaves the selection as it was.
    pub fn select_square(&mut self, square: Square) -> Option<Vec<Square>> {
        if self.result != GameResult::InProgress {
            return None;
        }
        let (_, piece) = self
            .board
            .occupant(GridKind::Main, square)
            .filter(|(_, p)| p.color == self.turn)?;
        let moves = candidate_moves(&self.board.view(GridKind::Main), piece);

        self.board.set_overlay(&moves);
        self.selected = Some(square);
        Some(moves)
    }

    /// Move the side-to-move's piece on `from` to `to`.
    ///
    /// A move that leaves the mover's own king attacked is undone (a captured piece comes
    /// back) and the turn stays. After an applied move the opponent's king is tested for
    /// checkmate.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> MoveOutcome {
        if self.result != GameResult::InProgress {
            return MoveOutcome::GameOver;
        }
        let mover = self.turn;
        let Some((id, piece)) = self
            .board
            .occupant(GridKind::Main, from)
            .filter(|(_, p)| p.color == mover)
        else {
            return MoveOutcome::NotAPiece;
        };
        let before = *piece;

        if !candidate_moves(&self.board.view(GridKind::Main), &before).contains(&to) {
            return MoveOutcome::Unreachable;
        }

        let captured = self.board.move_piece(GridKind::Main, id, to);

        match self.board.king_of(mover) {
            Ok(king) => {
                if is_attacked(&self.board.view(GridKind::Main), self.board.piece(king)) {
                    self.board.revert_move(GridKind::Main, id, from, captured);
                    debug!(%from, %to, color = %mover, "move rejected: own king left in check");
                    return MoveOutcome::RejectedSelfCheck;
                }
            }
            Err(e) => warn!(error = %e, "self-check test skipped"),
        }

        debug!(%from, %to, color = %mover, capture = captured.is_some(), "move applied");
        self.board.clear_overlay();
        self.selected = None;
        self.turn = mover.other();

        match self.board.king_of(self.turn) {
            Ok(king) => {
                if is_checkmate(&mut self.board, king) {
                    info!(winner = %mover, "checkmate");
                    self.result = GameResult::Checkmate { winner: mover };
                }
            }
            Err(e) => warn!(error = %e, "checkmate test skipped"),
        }

        MoveOutcome::Applied
    }

    /// One click on `square`, the way the interactive board handles it: select an own
    /// piece, move the selection to a highlighted square, or clear on an empty square.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        if let Some(moves) = self.select_square(square) {
            return ClickOutcome::Selected(moves);
        }

        if self.board.overlay().contains(square) {
            if let Some(from) = self.selected {
                return ClickOutcome::Moved(self.attempt_move(from, square));
            }
        }

        if self.board.occupant(GridKind::Main, square).is_none() {
            self.selected = None;
            self.board.clear_overlay();
            return ClickOutcome::Cleared;
        }

        ClickOutcome::Ignored
    }
}
