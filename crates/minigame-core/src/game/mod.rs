//! Game identifiers and raw session results.
//!
//! - `GameType` - the three mini-games (puzzle, quiz, matching)
//! - `AnimationIntensity` - player animation preference
//! - `GameResult` - facts of one finished play session

mod enums;
mod result;

pub use enums::*;
pub use result::*;
