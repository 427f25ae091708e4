//! Bubble Drop - a falling-bubble clicker mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, click handling, session state)
//! - `highscores`: Session-local leaderboard
//!
//! Rendering, input capture and the game-over prompt belong to a presentation
//! shell outside this crate. The shell forwards "start" and "bubble clicked"
//! events in, schedules the fixed tick while the session runs, and redraws
//! from [`sim::SessionSnapshot`] each frame.

pub mod highscores;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation tick period (milliseconds)
    pub const TICK_PERIOD_MS: u64 = 50;

    /// Play-field coordinates are percentages of the field size.
    /// Bubbles spawn above the visible field and are gone once they pass the bottom.
    pub const SPAWN_Y: f32 = -10.0;
    pub const FIELD_BOTTOM: f32 = 100.0;

    /// Horizontal spawn band (percent of field width)
    pub const SPAWN_X_MIN: f32 = 10.0;
    pub const SPAWN_X_MAX: f32 = 90.0;

    /// Lives at session start
    pub const STARTING_LIVES: i32 = 3;
    /// Level a fresh session begins at
    pub const STARTING_LEVEL: u32 = 1;
}
