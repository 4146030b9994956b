/// Who took a round, or the whole game.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    User,
    Bot,
    Draw,
}

impl Outcome {
    /// Resolve one exchange of simultaneous moves.
    ///
    /// Equal moves draw (two bombs land here), a lone bomb wins
    /// unconditionally, and everything else falls to the adjacency table.
    pub fn resolve(user: Move, bot: Move) -> Self {
        if user == bot {
            Self::Draw
        } else if user == Move::Bomb {
            Self::User
        } else if bot == Move::Bomb {
            Self::Bot
        } else {
            match user.beats() == Some(bot) {
                true => Self::User,
                false => Self::Bot,
            }
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Bot => write!(f, "bot"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

use super::moves::Move;
use serde::Deserialize;
use serde::Serialize;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_moves_draw() {
        for m in Move::all() {
            assert_eq!(Outcome::resolve(m, m), Outcome::Draw);
        }
    }

    #[test]
    fn cycle_decides_bombless_rounds() {
        assert_eq!(Outcome::resolve(Move::Rock, Move::Scissors), Outcome::User);
        assert_eq!(Outcome::resolve(Move::Scissors, Move::Paper), Outcome::User);
        assert_eq!(Outcome::resolve(Move::Paper, Move::Rock), Outcome::User);
        assert_eq!(Outcome::resolve(Move::Scissors, Move::Rock), Outcome::Bot);
        assert_eq!(Outcome::resolve(Move::Paper, Move::Scissors), Outcome::Bot);
        assert_eq!(Outcome::resolve(Move::Rock, Move::Paper), Outcome::Bot);
    }

    #[test]
    fn lone_bomb_wins() {
        for m in Move::basics() {
            assert_eq!(Outcome::resolve(Move::Bomb, m), Outcome::User);
            assert_eq!(Outcome::resolve(m, Move::Bomb), Outcome::Bot);
        }
    }

    #[test]
    fn no_third_outcome_without_bombs() {
        for a in Move::basics() {
            for b in Move::basics() {
                let outcome = Outcome::resolve(a, b);
                match a == b {
                    true => assert_eq!(outcome, Outcome::Draw),
                    false => assert_ne!(outcome, Outcome::Draw),
                }
            }
        }
    }
}
