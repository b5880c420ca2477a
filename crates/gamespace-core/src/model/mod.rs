//! Data model for GameSpace.
//!
//! Re-exports the game root and entry types and the size formatters.

pub mod game;
pub mod size;

pub use game::{GameEntry, GameRoot, GameRoots, ScanResult};
