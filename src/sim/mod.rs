//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod snapshot;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod tick;
pub mod tuning;

pub use snapshot::{BubbleSnapshot, SessionSnapshot};
pub use state::{Bubble, BubbleKind, GameOverReason, SessionEvent, SessionPhase, SessionState};
pub use tick::tick;
pub use tuning::{fall_speed, hazard_chance, spawn_chance};
