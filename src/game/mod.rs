pub mod actor;
pub mod moves;
pub mod outcome;
pub mod state;

pub use actor::Actor;
pub use moves::Move;
pub use outcome::Outcome;
pub use state::Game;

/// Rounds per game. The round counter landing on ROUNDS + 1 means
/// "just finished the last round".
pub const ROUNDS: u8 = 3;
