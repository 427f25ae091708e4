//! Shared fixtures for the simulation unit tests

use glam::Vec2;

use super::state::{Bubble, BubbleKind, SessionState};

/// A session in the running phase with the start event already drained.
/// Note this uses up episode 1.
pub(crate) fn running_session(seed: u64) -> SessionState {
    let mut state = SessionState::new(seed);
    state.start();
    state.take_events();
    state
}

/// Drop a bubble onto the field at the given height
pub(crate) fn place(state: &mut SessionState, id: u32, y: f32, kind: BubbleKind, speed: f32) {
    state.bubbles.push(Bubble {
        id,
        pos: Vec2::new(50.0, y),
        kind,
        speed,
    });
}
