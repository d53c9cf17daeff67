//! Rules core for two-player chess on a rectangular board: per-piece candidate moves,
//! check and checkmate detection, and move application that refuses to leave the mover's
//! own king in check.
//!
//! No castling, en passant, promotion or draw detection.

pub mod board;
pub mod chess;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

pub use error::{ChessError, ChessResult};
