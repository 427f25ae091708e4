//! Bubble Drop entry point
//!
//! Headless demo driver: owns the single 50 ms tick timer and stands in for
//! a presentation shell. A small autoplay bot clicks bubbles so the whole
//! start/tick/click/snapshot surface gets exercised end to end.
//!
//! Usage: `bubble-drop [seed] [sessions]`, logging via `RUST_LOG`.

use std::thread;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use bubble_drop::HighScores;
use bubble_drop::consts::TICK_PERIOD_MS;
use bubble_drop::sim::{BubbleKind, SessionEvent, SessionState, tick};

/// Fraction of ticks on which the bot attempts a click
const BOT_CLICK_CHANCE: f64 = 0.35;
/// How often the bot clicks blindly instead of aiming (lets runs actually end)
const BOT_FUMBLE_CHANCE: f64 = 0.1;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xB0BB_1E5);
    let sessions: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(3);

    let mut state = SessionState::new(seed);
    let mut bot = Pcg32::seed_from_u64(seed ^ 0x5EED);
    let mut scores = HighScores::new();

    for _ in 0..sessions {
        state.start();

        // The tick loop runs only while the session does; leaving the loop
        // cancels the timer, so no tick can fire into a finished session.
        while state.is_running() {
            tick(&mut state);
            if let Some(id) = bot_pick(&state, &mut bot) {
                state.click(id);
            }
            for event in state.take_events() {
                match event {
                    SessionEvent::GameOver { score, reason } => {
                        // A real shell would open its game-over prompt here.
                        println!("Game over ({reason:?}). Final score: {score}");
                    }
                    other => log::debug!("event: {other:?}"),
                }
            }
            thread::sleep(Duration::from_millis(TICK_PERIOD_MS));
        }

        scores.add_score(state.score, state.level, state.time_ticks);
    }

    // Final frame and leaderboard, the way a shell would read them.
    match serde_json::to_string_pretty(&state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
    for (rank, entry) in scores.entries.iter().enumerate() {
        println!(
            "{:>2}. {:>4} pts  (level {}, {} ticks)",
            rank + 1,
            entry.score,
            entry.level,
            entry.ticks
        );
    }
}

/// Pick a bubble to click: prefer the deepest visible benign bubble, but
/// occasionally click blindly, which sooner or later hits a hazard.
fn bot_pick(state: &SessionState, bot: &mut Pcg32) -> Option<u32> {
    if state.bubbles.is_empty() || !bot.random_bool(BOT_CLICK_CHANCE) {
        return None;
    }
    if bot.random_bool(BOT_FUMBLE_CHANCE) {
        let idx = bot.random_range(0..state.bubbles.len());
        return Some(state.bubbles[idx].id);
    }
    state
        .bubbles
        .iter()
        .filter(|b| b.kind == BubbleKind::Benign && b.pos.y >= 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|b| b.id)
}
