//! Read-only view of session state for a presentation shell
//!
//! The shell re-reads a snapshot every frame to draw; it never touches the
//! live [`SessionState`] except through start/click and the tick timer.

use serde::Serialize;

use super::state::{BubbleKind, SessionPhase, SessionState};

/// One bubble as drawn: percent coordinates plus the id to report on click
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BubbleSnapshot {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub kind: BubbleKind,
}

/// Everything the shell needs to render one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub score: u64,
    /// Already clamped; a shell never shows negative lives
    pub lives: u32,
    pub level: u32,
    pub episode: u32,
    pub time_ticks: u64,
    pub bubbles: Vec<BubbleSnapshot>,
}

impl SessionState {
    /// Cheap copy of the renderable state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            lives: self.display_lives(),
            level: self.level,
            episode: self.episode(),
            time_ticks: self.time_ticks,
            bubbles: self
                .bubbles
                .iter()
                .map(|b| BubbleSnapshot {
                    id: b.id,
                    x: b.pos.x,
                    y: b.pos.y,
                    kind: b.kind,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = SessionState::new(9);
        state.start();
        state.spawn_bubble();
        state.score = 7;

        let snap = state.snapshot();
        assert_eq!(snap.phase, SessionPhase::Running);
        assert_eq!(snap.score, 7);
        assert_eq!(snap.lives, 3);
        assert_eq!(snap.level, 1);
        assert_eq!(snap.bubbles.len(), 1);
        assert_eq!(snap.bubbles[0].id, state.bubbles[0].id);
    }

    #[test]
    fn test_snapshot_clamps_lives() {
        let mut state = SessionState::new(9);
        state.start();
        state.lives = -1;
        assert_eq!(state.snapshot().lives, 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = SessionState::new(9);
        state.start();
        state.spawn_bubble();

        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Running\""));
        assert!(json.contains("\"bubbles\""));
    }
}
