//! Turn-resolution engine for a two-player Shithead-style shedding game.
//!
//! - [`cards`] card codec and the playability and burn rules
//! - [`gameplay`] hands, reserves, players and the authoritative context
//! - [`engine`] the phase machine and post-play resolution cascade
//! - [`gameroom`] async actors that let a human and a bot drive the engine
pub mod cards;
pub mod engine;
pub mod gameplay;
pub mod gameroom;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats. Always one human and one bot.
pub const PLAYERS: usize = 2;
/// Positions in each face-up and face-down reserve.
pub const SLOTS: usize = 3;
/// Cards dealt into each hand, before the face-up reserve is chosen.
pub const HAND_SIZE: usize = 6;

// ============================================================================
// RULE PARAMETERS
// ============================================================================
/// Trailing cards of one rank that burn the pile.
pub const BURN_RUN: usize = 4;

// ============================================================================
// PACING PARAMETERS
// ============================================================================
/// Lower bound of the bot's simulated thinking time, in milliseconds.
pub const THINK_MIN_MS: u64 = 450;
/// Upper bound of the bot's simulated thinking time, in milliseconds.
pub const THINK_MAX_MS: u64 = 750;

/// Initialize logging: debug to a timestamped file under `logs/`, warnings
/// to the terminal so prompts stay readable.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
