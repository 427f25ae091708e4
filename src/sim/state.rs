//! Session state and core simulation types

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::tuning;
use crate::consts::*;

/// Bubble flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BubbleKind {
    /// Scores a point when clicked, costs a life when missed
    Benign,
    /// Ends the session when clicked; missing it has no penalty
    Hazardous,
}

/// A falling bubble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bubble {
    pub id: u32,
    /// Percent coordinates: x fixed at spawn, y grows by `speed` each tick
    pub pos: Vec2,
    pub kind: BubbleKind,
    /// Percent of field height per tick, constant for the bubble's lifetime
    pub speed: f32,
}

impl Bubble {
    /// True once the bubble has fallen past the bottom of the field
    pub fn off_field(&self) -> bool {
        self.pos.y >= FIELD_BOTTOM
    }
}

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No session started yet (or torn down)
    #[default]
    Idle,
    /// Tick loop active, input accepted
    Running,
    /// Terminal; restart via [`SessionState::start`]
    GameOver,
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    HazardClicked,
    LivesExhausted,
}

/// Discrete outputs for the presentation shell, drained via
/// [`SessionState::take_events`]. `GameOver` is the cue to cancel the tick
/// timer and surface the end-of-run prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Popped { id: u32 },
    LivesLost { missed: u32 },
    GameOver { score: u64, reason: GameOverReason },
}

/// Complete session state.
///
/// Deterministic: the same seed and the same sequence of start/tick/click
/// calls reproduce the same session. The shell owns exactly one of these per
/// play-field and is the only mutator.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Base seed; each episode derives its own stream from it
    seed: u64,
    rng: Pcg32,
    /// Restart counter
    episode: u32,
    pub phase: SessionPhase,
    pub score: u64,
    /// Goes negative transiently inside a tick; clamped before the session ends
    pub lives: i32,
    /// Fixed per session; only feeds the tuning formulas
    pub level: u32,
    pub time_ticks: u64,
    /// Live bubbles in spawn order, ids unique
    pub bubbles: Vec<Bubble>,
    next_id: u32,
    pub(crate) events: Vec<SessionEvent>,
}

impl SessionState {
    /// Create an idle session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            episode: 0,
            phase: SessionPhase::Idle,
            score: 0,
            lives: STARTING_LIVES,
            level: STARTING_LEVEL,
            time_ticks: 0,
            bubbles: Vec::new(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Lives as shown to the player (never negative)
    pub fn display_lives(&self) -> u32 {
        self.lives.max(0) as u32
    }

    /// Reset to defaults and begin the tick loop.
    ///
    /// Each restart reseeds the RNG from the base seed and the episode
    /// counter, so consecutive runs differ but any single run can be
    /// replayed. Stale unconsumed events from a previous run are discarded.
    pub fn start(&mut self) {
        let episode = self.episode.wrapping_add(1);
        *self = Self::new(self.seed);
        self.episode = episode;
        self.rng = Pcg32::seed_from_u64(self.seed.wrapping_add(u64::from(episode)));
        self.phase = SessionPhase::Running;
        self.events.push(SessionEvent::Started);
        log::info!("session started (episode {episode})");
    }

    /// Allocate a bubble id. Monotonic per session, so ids never collide
    /// however fast the tick cadence gets.
    fn next_bubble_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Roll the per-tick spawn chance
    pub(crate) fn roll_spawn(&mut self) -> bool {
        self.rng.random::<f32>() < tuning::spawn_chance(self.level)
    }

    /// Spawn one bubble above the top of the field.
    ///
    /// Draw order is fixed (kind roll, then x position) so a given RNG stream
    /// always produces the same bubbles.
    pub(crate) fn spawn_bubble(&mut self) {
        let kind = if self.rng.random::<f32>() < tuning::hazard_chance(self.level) {
            BubbleKind::Hazardous
        } else {
            BubbleKind::Benign
        };
        let x = self.rng.random_range(SPAWN_X_MIN..=SPAWN_X_MAX);
        let id = self.next_bubble_id();
        log::debug!("spawn {kind:?} bubble {id} at x={x:.1}");
        self.bubbles.push(Bubble {
            id,
            pos: Vec2::new(x, SPAWN_Y),
            kind,
            speed: tuning::fall_speed(self.level),
        });
    }

    /// Handle a click on bubble `id`.
    ///
    /// Clicks outside the running phase and clicks on unknown or
    /// already-removed ids are no-ops, not errors.
    pub fn click(&mut self, id: u32) {
        if self.phase != SessionPhase::Running {
            return;
        }
        let Some(idx) = self.bubbles.iter().position(|b| b.id == id) else {
            return;
        };
        match self.bubbles[idx].kind {
            BubbleKind::Hazardous => {
                // Score and bubble list are left untouched; the session ends
                // before another tick can run.
                self.end_session(GameOverReason::HazardClicked);
            }
            BubbleKind::Benign => {
                self.score += 1;
                self.bubbles.remove(idx);
                self.events.push(SessionEvent::Popped { id });
            }
        }
    }

    /// Transition to game over and stop accepting input
    pub(crate) fn end_session(&mut self, reason: GameOverReason) {
        self.lives = self.lives.max(0);
        self.phase = SessionPhase::GameOver;
        self.events.push(SessionEvent::GameOver {
            score: self.score,
            reason,
        });
        log::info!("game over ({reason:?}), final score {}", self.score);
    }

    /// Drain queued events for the presentation shell
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }
}
