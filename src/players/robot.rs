/// The automated opponent.
///
/// Draws uniformly over the full pool; a draw landing on an
/// already-spent bomb falls back to a uniform draw over the bombless
/// pool. Generation is isolated from round resolution, which never
/// retries anything.
pub struct Robot {
    rng: SmallRng,
}

impl Robot {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Reproducible opponent for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn act(&mut self, game: &Game) -> Move {
        let first = draw(&mut self.rng, &Move::all());
        match game.admits(Actor::Bot, first) {
            true => first,
            false => draw(&mut self.rng, &Move::basics()),
        }
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for Robot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot")
    }
}

/// Uniform draw over a candidate pool.
pub fn draw<R: Rng>(rng: &mut R, pool: &[Move]) -> Move {
    *pool.choose(rng).expect("nonempty pool")
}

use crate::game::Actor;
use crate::game::Game;
use crate::game::Move;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use std::fmt::Debug;
use std::fmt::Formatter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Outcome;

    #[test]
    fn draws_stay_in_pool() {
        let mut rng = SmallRng::seed_from_u64(0);
        for _ in 0..100 {
            let m = draw(&mut rng, &Move::basics());
            assert!(Move::basics().contains(&m));
        }
    }

    #[test]
    fn spent_bomb_never_drawn() {
        let mut game = Game::new();
        game.apply(Outcome::Draw, Move::Bomb, Move::Bomb);
        assert!(game.bot_used_bomb);
        let mut robot = Robot::seeded(42);
        for _ in 0..100 {
            assert_ne!(robot.act(&game), Move::Bomb);
        }
    }

    #[test]
    fn fresh_bomb_eventually_drawn() {
        let game = Game::new();
        let mut robot = Robot::seeded(42);
        assert!((0..100).any(|_| robot.act(&game) == Move::Bomb));
    }

    #[test]
    fn seeded_runs_repeat() {
        let game = Game::new();
        let mut a = Robot::seeded(7);
        let mut b = Robot::seeded(7);
        for _ in 0..20 {
            assert_eq!(a.act(&game), b.act(&game));
        }
    }
}
