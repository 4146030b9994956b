//! Session controller.
//!
//! Drives one naming phase, up to three playing rounds (resolved or
//! wasted), and a terminal game-over phase, then offers a rematch. The
//! table owns the state record and is its only writer; the round
//! operations receive it explicitly.

pub struct Table<N: Narrator> {
    game: Game,
    robot: Robot,
    narrator: N,
    rounds: Vec<Round>,
    record: Option<PathBuf>,
}

impl<N: Narrator> Table<N> {
    pub fn new(robot: Robot, narrator: N, record: Option<PathBuf>) -> Self {
        Self {
            game: Game::new(),
            robot,
            narrator,
            rounds: Vec::new(),
            record,
        }
    }

    pub async fn play(&mut self) -> Result<()> {
        loop {
            self.begin_game().await?;
            while !self.game.game_over {
                self.turn().await?;
            }
            self.end_game().await?;
            match Human::rematch() {
                true => self.begin_again(),
                false => break Ok(()),
            }
        }
    }

    async fn begin_game(&mut self) -> Result<()> {
        self.game.christen(&Human::name());
        log::info!("{} sits down", self.game.name());
        self.speak(Event::Welcome {
            name: self.game.name().to_string(),
        })
        .await?;
        self.speak(Event::Rules).await
    }

    /// One iteration of PLAYING. The human enters free text, the robot
    /// draws, and validation routes to the resolved or the wasted path.
    async fn turn(&mut self) -> Result<()> {
        println!("{}", self.game);
        let entry = Human::act(&self.game);
        let bot = self.robot.act(&self.game);
        match self.game.validate(Actor::User, &entry) {
            Ok(user) => self.resolve(user, bot).await,
            Err(reason) => self.squander(entry, reason).await,
        }
    }

    async fn resolve(&mut self, user: Move, bot: Move) -> Result<()> {
        let round = self.game.round;
        let outcome = Outcome::resolve(user, bot);
        self.game.apply(outcome, user, bot);
        log::info!("round {} {} vs {} -> {}", round, user, bot, outcome);
        self.rounds.push(Round {
            round,
            user: Some(user),
            bot: Some(bot),
            outcome: Some(outcome),
            user_score: self.game.user_score,
            bot_score: self.game.bot_score,
        });
        self.speak(Event::Round {
            round,
            user,
            bot,
            outcome,
            user_score: self.game.user_score,
            bot_score: self.game.bot_score,
        })
        .await
    }

    /// The wasted path: the counter advances, nothing is scored, and
    /// the bot's draw is discarded without consuming its bomb.
    async fn squander(&mut self, entry: String, reason: &'static str) -> Result<()> {
        let round = self.game.round;
        self.game.waste();
        log::warn!("round {} wasted on {:?}: {}", round, entry, reason);
        self.rounds.push(Round {
            round,
            user: None,
            bot: None,
            outcome: None,
            user_score: self.game.user_score,
            bot_score: self.game.bot_score,
        });
        self.speak(Event::Wasted {
            round,
            entry,
            reason: reason.to_string(),
            user_score: self.game.user_score,
            bot_score: self.game.bot_score,
        })
        .await
    }

    async fn end_game(&mut self) -> Result<()> {
        self.speak(Event::Final {
            name: self.game.name().to_string(),
            user_score: self.game.user_score,
            bot_score: self.game.bot_score,
            verdict: self.game.verdict(),
        })
        .await?;
        if let Some(ref path) = self.record {
            Transcript::of(&self.game, self.rounds.clone()).save(path)?;
            log::info!("transcript saved to {}", path.display());
        }
        Ok(())
    }

    async fn speak(&mut self, event: Event) -> Result<()> {
        let line = self.narrator.deliver(event).await?;
        println!("{} {}", "REFEREE".purple().bold(), line);
        Ok(())
    }

    /// A rematch replaces the record wholesale.
    fn begin_again(&mut self) {
        self.game = Game::new();
        self.rounds.clear();
    }
}

use crate::game::Actor;
use crate::game::Game;
use crate::game::Move;
use crate::game::Outcome;
use crate::narrate::Event;
use crate::narrate::Narrator;
use crate::players::Human;
use crate::players::Robot;
use crate::record::Round;
use crate::record::Transcript;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;
