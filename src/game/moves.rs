/// The four recognized moves.
///
/// Bomb is single-use per side: it beats any non-bomb move outright and
/// only draws against another bomb.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// Every recognized move, in draw order.
    pub const fn all() -> [Move; 4] {
        [Self::Rock, Self::Paper, Self::Scissors, Self::Bomb]
    }

    /// The bombless pool, used for opponent redraws.
    pub const fn basics() -> [Move; 3] {
        [Self::Rock, Self::Paper, Self::Scissors]
    }

    /// Standard adjacency: the move this move defeats. None for bomb,
    /// which never reaches the adjacency lookup.
    pub const fn beats(self) -> Option<Move> {
        match self {
            Self::Rock => Some(Self::Scissors),
            Self::Scissors => Some(Self::Paper),
            Self::Paper => Some(Self::Rock),
            Self::Bomb => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Bomb => "bomb",
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "paper" => Ok(Self::Paper),
            "scissors" => Ok(Self::Scissors),
            "bomb" => Ok(Self::Bomb),
            _ => Err("Invalid move"),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "{}", "ROCK".white()),
            Self::Paper => write!(f, "{}", "PAPER".yellow()),
            Self::Scissors => write!(f, "{}", "SCISSORS".cyan()),
            Self::Bomb => write!(f, "{}", "BOMB".red()),
        }
    }
}

use colored::*;
use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognized() {
        assert_eq!(Move::try_from("rock"), Ok(Move::Rock));
        assert_eq!(Move::try_from(" Paper "), Ok(Move::Paper));
        assert_eq!(Move::try_from("SCISSORS"), Ok(Move::Scissors));
        assert_eq!(Move::try_from("bomb"), Ok(Move::Bomb));
    }

    #[test]
    fn parse_unrecognized() {
        assert_eq!(Move::try_from("lizard"), Err("Invalid move"));
        assert_eq!(Move::try_from(""), Err("Invalid move"));
    }

    #[test]
    fn adjacency_cycle() {
        assert_eq!(Move::Rock.beats(), Some(Move::Scissors));
        assert_eq!(Move::Scissors.beats(), Some(Move::Paper));
        assert_eq!(Move::Paper.beats(), Some(Move::Rock));
        assert_eq!(Move::Bomb.beats(), None);
    }

    #[test]
    fn pools() {
        assert!(Move::all().contains(&Move::Bomb));
        assert!(!Move::basics().contains(&Move::Bomb));
        assert_eq!(Move::all().len(), 4);
        assert_eq!(Move::basics().len(), 3);
    }

    #[test]
    fn bijective_str() {
        for m in Move::all() {
            assert_eq!(Move::try_from(m.name()), Ok(m));
        }
    }
}
