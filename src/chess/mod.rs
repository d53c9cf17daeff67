//! Chess vocabulary: pieces, the starting arrangement and session configuration.

pub mod config;
pub mod layout;
pub mod piece;
