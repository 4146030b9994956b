/// The terminal player.
///
/// Move entry is free text on purpose: an unrecognized entry is a real
/// game event (it wastes the round), so we never constrain the input to
/// a menu.
pub struct Human;

impl Human {
    pub fn name() -> String {
        Input::<String>::new()
            .with_prompt("Your name")
            .report(false)
            .validate_with(|i: &String| -> Result<(), &str> {
                match i.trim().is_empty() {
                    true => Err("Enter a name"),
                    false => Ok(()),
                }
            })
            .interact()
            .unwrap()
    }

    pub fn act(game: &Game) -> String {
        let menu = game
            .available(Actor::User)
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        Input::<String>::new()
            .with_prompt(format!("Round {} [{}]", game.round, menu))
            .report(false)
            .interact()
            .unwrap()
    }

    pub fn rematch() -> bool {
        Confirm::new()
            .with_prompt("Play again?")
            .default(false)
            .interact()
            .unwrap()
    }
}

impl Debug for Human {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}

use crate::game::Actor;
use crate::game::Game;
use dialoguer::Confirm;
use dialoguer::Input;
use std::fmt::Debug;
use std::fmt::Formatter;
