//! Terminal binary. One table, one human, one robot, console narration.

use clap::Parser;
use rps_plus::narrate::Console;
use rps_plus::players::Robot;
use rps_plus::table::Table;

#[derive(Parser)]
#[command(about = "Best-of-three rock paper scissors with a single-use bomb")]
struct Args {
    /// Seed the opponent for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
    /// Write a JSON transcript of the finished game here.
    #[arg(long)]
    record: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rps_plus::log();
    let args = Args::parse();
    let robot = match args.seed {
        Some(seed) => Robot::seeded(seed),
        None => Robot::new(),
    };
    Table::new(robot, Console, args.record).play().await
}
