//! Display-driven game loop
//!
//! The host calls [`Game::frame`] once per display refresh with a monotonic
//! timestamp in milliseconds. The frame gate lets at most one simulation step
//! through per call; dropped frames slow the game down instead of queueing
//! catch-up steps.

use crate::consts::FRAME_TIME_MS;
use crate::sim::{Difficulty, GameState, Snapshot, TickInput, tick};

/// Source of the directional keys, sampled once per tick
pub trait InputSource {
    fn sample(&self) -> TickInput;
}

impl InputSource for TickInput {
    fn sample(&self) -> TickInput {
        *self
    }
}

/// Consumer of the post-tick state
pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>);
}

/// Gate that opens once per frame interval, carrying the remainder
#[derive(Debug, Clone)]
pub struct FrameGate {
    frame_ms: f64,
    /// Gate reference point, lags the last step by the carried remainder
    last_frame_time: f64,
    /// When the last step actually ran
    last_step_time: f64,
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new(FRAME_TIME_MS)
    }
}

impl FrameGate {
    pub fn new(frame_ms: f64) -> Self {
        Self {
            frame_ms,
            last_frame_time: 0.0,
            last_step_time: 0.0,
        }
    }

    /// If a step is due at `now`, returns the wall-clock time since the previous step
    pub fn poll(&mut self, now: f64) -> Option<f64> {
        let delta = now - self.last_frame_time;
        // Also rejects NaN and timestamps that went backwards
        if !(delta >= self.frame_ms) {
            return None;
        }
        let elapsed = now - self.last_step_time;
        self.last_frame_time = now - delta % self.frame_ms;
        self.last_step_time = now;
        Some(elapsed)
    }
}

/// Owns the run and drives it from display callbacks
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    gate: FrameGate,
    frames: u64,
}

impl Game {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            gate: FrameGate::default(),
            frames: 0,
        }
    }

    /// Number of frames that ran a step
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Display callback: maybe step the simulation, then hand the result to the renderer.
    /// Returns whether a step ran.
    pub fn frame<I, R>(&mut self, now: f64, input: &I, renderer: &mut R) -> bool
    where
        I: InputSource + ?Sized,
        R: Renderer + ?Sized,
    {
        let Some(elapsed) = self.gate.poll(now) else {
            return false;
        };
        self.frames += 1;

        let before = self.state.phase;
        tick(&mut self.state, &input.sample(), elapsed as f32);
        if self.state.phase != before {
            log::info!("Phase {:?} -> {:?}", before, self.state.phase);
        }

        renderer.render(&self.state.snapshot());
        true
    }

    /// Selection UI entry point
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        self.state.select_difficulty(difficulty)
    }

    /// Restart UI entry point
    pub fn restart(&mut self) -> bool {
        self.state.restart()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[derive(Default)]
    struct Recorder {
        phases: Vec<GamePhase>,
        times: Vec<f32>,
    }

    impl Renderer for Recorder {
        fn render(&mut self, snapshot: &Snapshot<'_>) {
            self.phases.push(snapshot.phase);
            self.times.push(snapshot.time_remaining);
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_gate_waits_for_frame_interval() {
        let mut gate = FrameGate::default();
        assert_eq!(gate.poll(10.0), None);
        assert_eq!(gate.poll(20.0), Some(20.0));
        assert_eq!(gate.poll(30.0), None);
    }

    #[test]
    fn test_gate_carries_remainder() {
        let mut gate = FrameGate::new(10.0);
        assert_eq!(gate.poll(14.0), Some(14.0));
        // The 4ms remainder carries, so 20.0 is already due; only 6ms really passed
        assert!(approx(gate.poll(20.0).unwrap(), 6.0));
        assert_eq!(gate.poll(29.0), None);
        assert!(approx(gate.poll(30.0).unwrap(), 10.0));
    }

    #[test]
    fn test_gate_no_catch_up() {
        let mut gate = FrameGate::new(10.0);
        // A long stall yields one step, not many
        assert_eq!(gate.poll(1005.0), Some(1005.0));
        assert_eq!(gate.poll(1005.0), None);
        assert_eq!(gate.poll(1009.0), None);
        assert!(gate.poll(1010.0).is_some());
    }

    #[test]
    fn test_gate_ignores_time_going_backwards() {
        let mut gate = FrameGate::new(10.0);
        gate.poll(100.0);
        assert_eq!(gate.poll(50.0), None);
        assert_eq!(gate.poll(f64::NAN), None);
    }

    #[test]
    fn test_frame_renders_after_step() {
        let mut game = Game::new(GameState::new(4));
        let mut recorder = Recorder::default();
        let idle = TickInput::default();

        assert!(!game.frame(5.0, &idle, &mut recorder));
        assert!(recorder.phases.is_empty());

        assert!(game.frame(20.0, &idle, &mut recorder));
        assert_eq!(recorder.phases, vec![GamePhase::SelectingDifficulty]);
        assert_eq!(game.frames(), 1);
    }

    #[test]
    fn test_run_times_out() {
        let mut game = Game::new(GameState::new(4));
        assert!(game.select_difficulty(Difficulty::Hard));
        let mut recorder = Recorder::default();
        let idle = TickInput::default();

        // 60 FPS for a bit over 90 seconds
        let mut now = 0.0;
        for _ in 0..(60 * 92) {
            now += FRAME_TIME_MS + 0.01;
            game.frame(now, &idle, &mut recorder);
        }

        assert_eq!(game.state.phase, GamePhase::Lost);
        assert_eq!(recorder.phases.last(), Some(&GamePhase::Lost));
        assert_eq!(recorder.times.last(), Some(&0.0));

        assert!(game.restart());
        assert_eq!(game.state.phase, GamePhase::SelectingDifficulty);
    }
}
