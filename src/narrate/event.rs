/// The moments the referee speaks on, carrying everything a narrator
/// needs to phrase them. Snapshots, not references: an event outlives
/// the state it was cut from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Welcome {
        name: String,
    },
    Rules,
    Round {
        round: u8,
        user: Move,
        bot: Move,
        outcome: Outcome,
        user_score: u8,
        bot_score: u8,
    },
    Wasted {
        round: u8,
        entry: String,
        reason: String,
        user_score: u8,
        bot_score: u8,
    },
    Final {
        name: String,
        user_score: u8,
        bot_score: u8,
        verdict: Outcome,
    },
}

use crate::game::Move;
use crate::game::Outcome;
use serde::Deserialize;
use serde::Serialize;
