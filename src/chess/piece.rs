use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::core::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Pawn advance direction along the rank axis.
    #[inline]
    pub fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Plain piece kind, without per-piece state. This is what a renderer picks sprites by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}

impl PieceKind {
    /// Single-letter symbol, uppercase for White.
    pub fn symbol(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

/// A piece's move rule, carrying whatever state that rule depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRule {
    Pawn { direction: i32, has_moved: bool },
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}

impl MoveRule {
    /// Fresh rule for `kind`; pawns advance in `color`'s direction and have not moved.
    pub fn new(kind: PieceKind, color: Color) -> Self {
        match kind {
            PieceKind::Pawn => MoveRule::Pawn {
                direction: color.pawn_direction(),
                has_moved: false,
            },
            PieceKind::Rook => MoveRule::Rook,
            PieceKind::Knight => MoveRule::Knight,
            PieceKind::Bishop => MoveRule::Bishop,
            PieceKind::King => MoveRule::King,
            PieceKind::Queen => MoveRule::Queen,
        }
    }

    pub fn kind(self) -> PieceKind {
        match self {
            MoveRule::Pawn { .. } => PieceKind::Pawn,
            MoveRule::Rook => PieceKind::Rook,
            MoveRule::Knight => PieceKind::Knight,
            MoveRule::Bishop => PieceKind::Bishop,
            MoveRule::King => PieceKind::King,
            MoveRule::Queen => PieceKind::Queen,
        }
    }
}

/// One chess piece: color, current square and move rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub square: Square,
    pub rule: MoveRule,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            color,
            square,
            rule: MoveRule::new(kind, color),
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.rule.kind()
    }

    /// Move the piece to `square`. A pawn loses its two-square advance.
    pub fn relocate(&mut self, square: Square) {
        self.square = square;
        if let MoveRule::Pawn { has_moved, .. } = &mut self.rule {
            *has_moved = true;
        }
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 0 },
    Coord { x: -1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: 0, y: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { x: 1, y: 1 },
    Coord { x: -1, y: -1 },
    Coord { x: 1, y: -1 },
    Coord { x: -1, y: 1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { x: 2, y: -1 },
    Coord { x: 2, y: 1 },
    Coord { x: -2, y: 1 },
    Coord { x: -2, y: -1 },
    Coord { x: 1, y: 2 },
    Coord { x: -1, y: 2 },
    Coord { x: 1, y: -2 },
    Coord { x: -1, y: -2 },
];
