use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chess::piece::Color;
use crate::core::square::{BoardDims, MAX_SIDE};
use crate::error::{ChessError, ChessResult};

/// Session configuration.
///
/// ```json
/// { "name": "casual", "dims": { "files": 8, "ranks": 8 }, "first_to_move": "white" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub name: String,
    pub dims: BoardDims,
    pub first_to_move: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            name: "standard".to_string(),
            dims: BoardDims::STANDARD,
            first_to_move: Color::White,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> ChessResult<Self> {
        let cfg: GameConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> ChessResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> ChessResult<()> {
        self.dims.validate().map_err(|_| ChessError::InvalidConfig {
            reason: format!(
                "board must be 1..={MAX_SIDE} on each side, got {}x{}",
                self.dims.files, self.dims.ranks
            ),
        })
    }
}
