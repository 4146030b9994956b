pub mod game;
pub mod narrate;
pub mod players;
pub mod record;
pub mod table;

/// Terminal logging for the binary. Call once, before anything else.
pub fn log() {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("logger init");
}
