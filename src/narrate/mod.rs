//! Referee narration seam.
//!
//! The round engine never narrates. The table hands [`Event`]s to
//! whatever [`Narrator`] is plugged in and prints the commentary it
//! gets back. [`Console`] phrases events locally; a remote
//! text-generation client would be another implementation of the same
//! trait, outside this crate.

pub mod console;
pub mod event;

pub use console::Console;
pub use event::Event;

#[async_trait]
pub trait Narrator {
    async fn deliver(&mut self, event: Event) -> Result<String>;
}

use anyhow::Result;
use async_trait::async_trait;
