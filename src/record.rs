//! Serializable transcript of a finished game.

/// One exchange. A wasted round keeps its slot in the sequence but
/// carries no moves and no outcome; the bot's would-be draw is not
/// recorded, matching its absence of effect on the state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub round: u8,
    pub user: Option<Move>,
    pub bot: Option<Move>,
    pub outcome: Option<Outcome>,
    pub user_score: u8,
    pub bot_score: u8,
}

/// A finished game, ready for JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub name: String,
    pub rounds: Vec<Round>,
    pub user_score: u8,
    pub bot_score: u8,
    pub verdict: Outcome,
}

impl Transcript {
    pub fn of(game: &Game, rounds: Vec<Round>) -> Self {
        Self {
            name: game.name().to_string(),
            rounds,
            user_score: game.user_score,
            bot_score: game.bot_score,
            verdict: game.verdict(),
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}

use crate::game::Game;
use crate::game::Move;
use crate::game::Outcome;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

#[cfg(test)]
mod tests {
    use super::*;

    fn finished() -> (Game, Vec<Round>) {
        let mut game = Game::new();
        game.christen("alice");
        let mut rounds = Vec::new();
        let plays = [
            (Move::Rock, Move::Scissors, Outcome::User),
            (Move::Paper, Move::Scissors, Outcome::Bot),
            (Move::Bomb, Move::Rock, Outcome::User),
        ];
        for (user, bot, outcome) in plays {
            let round = game.round;
            game.apply(outcome, user, bot);
            rounds.push(Round {
                round,
                user: Some(user),
                bot: Some(bot),
                outcome: Some(outcome),
                user_score: game.user_score,
                bot_score: game.bot_score,
            });
        }
        (game, rounds)
    }

    #[test]
    fn scores_are_prefix_sums() {
        let (_, rounds) = finished();
        let mut user = 0;
        let mut bot = 0;
        for r in &rounds {
            match r.outcome {
                Some(Outcome::User) => user += 1,
                Some(Outcome::Bot) => bot += 1,
                _ => {}
            }
            assert_eq!(r.user_score, user);
            assert_eq!(r.bot_score, bot);
        }
    }

    #[test]
    fn transcript_folds_the_game() {
        let (game, rounds) = finished();
        let transcript = Transcript::of(&game, rounds);
        assert_eq!(transcript.name, "Alice");
        assert_eq!(transcript.rounds.len(), 3);
        assert_eq!(transcript.user_score, 2);
        assert_eq!(transcript.bot_score, 1);
        assert_eq!(transcript.verdict, Outcome::User);
    }

    #[test]
    fn json_round_trip() {
        let (game, rounds) = finished();
        let transcript = Transcript::of(&game, rounds);
        let json = serde_json::to_string(&transcript).unwrap();
        assert!(json.contains("\"bomb\""));
        let back: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(back.verdict, transcript.verdict);
        assert_eq!(back.rounds.len(), transcript.rounds.len());
    }
}
