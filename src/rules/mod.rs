//! Move rules: candidate generation, attack tests and the checkmate search.

pub mod attacks;
pub mod checkmate;
pub mod movegen;

pub use attacks::is_attacked;
pub use checkmate::is_checkmate;
pub use movegen::candidate_moves;
