//! Fixed-period simulation tick
//!
//! Advances every live bubble, settles misses against the post-movement
//! positions, then rolls the spawn chance. The spawn roll comes last so a
//! bubble born this tick never takes part in this tick's movement or miss
//! count.

use super::state::{BubbleKind, GameOverReason, SessionEvent, SessionPhase, SessionState};

/// Advance the session by one fixed tick. No-op unless the session is
/// running, which also makes a stray timer callback after teardown harmless.
pub fn tick(state: &mut SessionState) {
    if state.phase != SessionPhase::Running {
        return;
    }
    state.time_ticks += 1;

    // Movement, using each bubble's speed as it stood at the start of the tick.
    for bubble in &mut state.bubbles {
        bubble.pos.y += bubble.speed;
    }

    // Misses: benign bubbles that fell past the bottom this tick. Hazardous
    // bubbles leave the field for free.
    let missed = state
        .bubbles
        .iter()
        .filter(|b| b.off_field() && b.kind == BubbleKind::Benign)
        .count() as u32;
    if missed > 0 {
        state.lives -= missed as i32;
        state.events.push(SessionEvent::LivesLost { missed });
        log::debug!(
            "missed {missed} bubble(s), lives now {}",
            state.display_lives()
        );
    }

    if state.lives <= 0 {
        // Terminal; the bubble list is left as moved.
        state.end_session(GameOverReason::LivesExhausted);
        return;
    }

    // Off-field bubbles of either kind are gone.
    state.bubbles.retain(|b| !b.off_field());

    // Spawn roll, independent of the miss evaluation above.
    if state.roll_spawn() {
        state.spawn_bubble();
    }
}
