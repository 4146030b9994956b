/// The mutable per-session record.
///
/// Owned by the session controller and passed explicitly into the three
/// round operations: validate, apply, waste. Exactly one writer at a
/// time; a rematch replaces the record wholesale rather than resetting
/// fields piecemeal.
///
/// Invariants:
/// - `round` starts at 1, increments once per resolved or wasted round,
///   never exceeds ROUNDS + 1.
/// - each bomb flag transitions false -> true at most once.
/// - `game_over` holds exactly when `round > ROUNDS`.
/// - scores only increase; their sum never exceeds `round - 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub name: Option<String>,
    pub round: u8,
    pub user_score: u8,
    pub bot_score: u8,
    pub user_used_bomb: bool,
    pub bot_used_bomb: bool,
    pub game_over: bool,
}

impl Game {
    pub fn new() -> Self {
        Self {
            name: None,
            round: 1,
            user_score: 0,
            bot_score: 0,
            user_used_bomb: false,
            bot_used_bomb: false,
            game_over: false,
        }
    }

    /// Register the player's name: trimmed, each word title-cased.
    pub fn christen(&mut self, input: &str) {
        self.name = Some(titlecase(input));
    }

    /// The registered name, or a placeholder before registration.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("Player")
    }

    /// Validate a candidate move for an actor. Pure, no side effects.
    ///
    /// Rejects unrecognized input and a bomb from a side that already
    /// spent its bomb. The caller's policy on rejection is to waste the
    /// round, not to retry the user.
    pub fn validate(&self, actor: Actor, input: &str) -> Result<Move, &'static str> {
        let candidate = Move::try_from(input)?;
        match self.admits(actor, candidate) {
            true => Ok(candidate),
            false => Err(match actor {
                Actor::User => "User bomb already used",
                Actor::Bot => "Bot bomb already used",
            }),
        }
    }

    /// Whether the actor may still play this (already recognized) move.
    pub fn admits(&self, actor: Actor, candidate: Move) -> bool {
        match (actor, candidate) {
            (Actor::User, Move::Bomb) => !self.user_used_bomb,
            (Actor::Bot, Move::Bomb) => !self.bot_used_bomb,
            _ => true,
        }
    }

    /// Moves the actor may still play.
    pub fn available(&self, actor: Actor) -> Vec<Move> {
        Move::all()
            .into_iter()
            .filter(|m| self.admits(actor, *m))
            .collect()
    }

    /// Apply a resolved round, in order: bomb flags, winner's score,
    /// round counter, game-over check.
    ///
    /// Callers must have validated the user's move; an invalid entry
    /// takes the waste path instead and never reaches here.
    pub fn apply(&mut self, outcome: Outcome, user: Move, bot: Move) {
        if user == Move::Bomb {
            self.user_used_bomb = true;
        }
        if bot == Move::Bomb {
            self.bot_used_bomb = true;
        }
        match outcome {
            Outcome::User => self.user_score += 1,
            Outcome::Bot => self.bot_score += 1,
            Outcome::Draw => {}
        }
        self.advance();
    }

    /// A wasted round advances the counter and nothing else. The bot's
    /// would-be move is discarded without consuming its bomb.
    pub fn waste(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.round += 1;
        if self.round > ROUNDS {
            self.game_over = true;
        }
    }

    /// Final classification once the game is over.
    pub fn verdict(&self) -> Outcome {
        match self.user_score.cmp(&self.bot_score) {
            Ordering::Greater => Outcome::User,
            Ordering::Less => Outcome::Bot,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ROUND {}/{}   {} {}   {} {}   {}",
            self.round.min(ROUNDS),
            ROUNDS,
            self.name().bold(),
            self.user_score.to_string().green(),
            "Bot".bold(),
            self.bot_score.to_string().red(),
            match (self.user_used_bomb, self.bot_used_bomb) {
                (false, false) => "both bombs live",
                (true, false) => "your bomb spent",
                (false, true) => "bot bomb spent",
                (true, true) => "both bombs spent",
            }
        )
    }
}

fn titlecase(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

use super::actor::Actor;
use super::moves::Move;
use super::outcome::Outcome;
use super::ROUNDS;
use colored::*;
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;
