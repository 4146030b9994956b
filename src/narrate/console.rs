/// Offline referee: deterministic phrasing, no network.
pub struct Console;

#[async_trait]
impl Narrator for Console {
    async fn deliver(&mut self, event: Event) -> Result<String> {
        Ok(match event {
            Event::Welcome { name } => {
                format!("Welcome to the table, {}. Best of {} rounds.", name, ROUNDS)
            }
            Event::Rules => [
                "Moves: rock, paper, scissors, bomb.",
                "Rock beats scissors, scissors beats paper, paper beats rock.",
                "Bomb beats everything except another bomb, once per side.",
                "Best of 3 rounds; most round wins takes the game.",
                "An unrecognized entry wastes the round.",
            ]
            .join("\n"),
            Event::Round {
                round,
                user,
                bot,
                outcome,
                user_score,
                bot_score,
            } => format!(
                "Round {}: {} vs {} -> {}. Score {}-{}.",
                round,
                user,
                bot,
                match outcome {
                    Outcome::User => "point to you".to_string(),
                    Outcome::Bot => "point to the bot".to_string(),
                    Outcome::Draw => "a draw".to_string(),
                },
                user_score,
                bot_score,
            ),
            Event::Wasted {
                round,
                entry,
                reason,
                user_score,
                bot_score,
            } => format!(
                "Round {}: \"{}\" doesn't play here ({}). Round wasted. Score {}-{}.",
                round, entry, reason, user_score, bot_score,
            ),
            Event::Final {
                name,
                user_score,
                bot_score,
                verdict,
            } => format!(
                "Game over at {}-{}. {}",
                user_score,
                bot_score,
                match verdict {
                    Outcome::User => format!("{} takes it!", name),
                    Outcome::Bot => "The bot takes it.".to_string(),
                    Outcome::Draw => "Dead even.".to_string(),
                },
            ),
        })
    }
}

use super::Event;
use super::Narrator;
use crate::game::Outcome;
use crate::game::ROUNDS;
use anyhow::Result;
use async_trait::async_trait;
