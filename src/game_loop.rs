//! The main loop
//!
//! Update 60 times per second, poll input as often as possible and at least
//! once per update, render once per pass. If updates fall behind, they catch
//! up before the next frame is drawn.

use crate::platform::Platform;
use crate::sim::{GameState, InputEvent, SimConfig, handle_event, tick};
use crate::timestep::{Clock, FixedTimestep};

/// Counters gathered over one run of the loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Outer passes (poll, catch up, render)
    pub iterations: u64,
    /// Simulation steps performed
    pub ticks: u64,
    /// Frames handed to the platform
    pub frames: u64,
    /// Input events dispatched
    pub events: u64,
}

/// Everything the loop owns besides the platform
pub struct GameLoop<C: Clock> {
    pub state: GameState,
    pub config: SimConfig,
    pub timestep: FixedTimestep,
    pub clock: C,
    stats: LoopStats,
    events: Vec<InputEvent>,
}

impl<C: Clock> GameLoop<C> {
    pub fn new(state: GameState, config: SimConfig, timestep: FixedTimestep, clock: C) -> Self {
        Self {
            state,
            config,
            timestep,
            clock,
            stats: LoopStats::default(),
            events: Vec::new(),
        }
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Run until the platform reports the window closed
    pub fn run<P: Platform>(&mut self, platform: &mut P) -> LoopStats {
        self.timestep.reset();
        // Start timing from here, not from construction
        self.clock.restart();

        while platform.is_open() {
            self.run_once(platform);
        }

        log::info!(
            "Loop finished: {} iterations, {} ticks, {} frames, {} events",
            self.stats.iterations,
            self.stats.ticks,
            self.stats.frames,
            self.stats.events
        );
        self.stats
    }

    /// One outer pass: poll, catch up on simulation, render
    pub fn run_once<P: Platform>(&mut self, platform: &mut P) {
        self.stats.iterations += 1;

        self.process_events(platform); // as many as possible
        self.timestep.accumulate(self.clock.restart());

        let step = self.timestep.step();
        while self.timestep.consume_step() {
            self.process_events(platform); // at least once per tick
            let report = tick(&mut self.state, &self.config, step);
            self.stats.ticks += 1;
            if report.close_window && platform.is_open() {
                log::info!("Exit requested, closing window");
                platform.close();
            }
        }

        if platform.is_open() {
            platform.render(&self.state);
            self.stats.frames += 1;
        }
    }

    fn process_events<P: Platform>(&mut self, platform: &mut P) {
        self.events.clear();
        platform.poll_events(&mut self.events);
        for event in self.events.drain(..) {
            handle_event(&mut self.state, event);
            self.stats.events += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec2;

    use super::*;
    use crate::platform::ScriptedPlatform;
    use crate::sim::{Key, MouseButton};
    use crate::timestep::ManualClock;

    const STEP: Duration = Duration::from_millis(10);

    fn game_loop(deltas: Vec<Duration>) -> GameLoop<ManualClock> {
        GameLoop::new(
            GameState::default(),
            SimConfig {
                expected_step_ms: 10,
                ..Default::default()
            },
            FixedTimestep::new(STEP),
            ManualClock::new(deltas, Duration::ZERO),
        )
    }

    #[test]
    fn test_renders_once_per_iteration() {
        // First delta is swallowed by the restart in `run`
        let mut lp = game_loop(vec![Duration::ZERO, STEP * 3, Duration::from_millis(4), STEP]);
        let mut platform = ScriptedPlatform::with_frame_limit(3);

        let stats = lp.run(&mut platform);
        assert_eq!(stats.iterations, 3);
        assert_eq!(stats.frames, 3);
        // 30ms, then 4ms, then 14ms => 3 + 0 + 1
        assert_eq!(stats.ticks, 4);
        assert_eq!(lp.timestep.accumulated(), Duration::from_millis(4));
        assert_eq!(platform.rendered.len(), 3);
        // One poll per pass plus one per tick
        assert_eq!(platform.polls, 3 + 4);
        assert_eq!(lp.stats(), stats);
    }

    #[test]
    fn test_long_frame_catches_up_before_render() {
        let mut lp = game_loop(vec![Duration::ZERO, Duration::from_secs(2)]);
        let mut platform = ScriptedPlatform::with_frame_limit(1);

        let stats = lp.run(&mut platform);
        assert_eq!(stats.ticks, 200);
        assert_eq!(stats.frames, 1);
        // Big plane moved 200 ticks worth before the only frame
        let frame = &platform.rendered[0];
        assert_eq!(frame.time_ticks, 200);
    }

    #[test]
    fn test_escape_closes_on_next_tick() {
        let mut lp = game_loop(vec![Duration::ZERO, Duration::ZERO, STEP]);
        let mut platform = ScriptedPlatform::with_frame_limit(10);
        platform.queue([InputEvent::KeyPressed(Key::Escape)]);

        let stats = lp.run(&mut platform);
        // First pass: Escape handled, no tick yet, frame drawn
        // Second pass: one tick observes exit and closes; no frame
        assert_eq!(stats.iterations, 2);
        assert_eq!(stats.ticks, 1);
        assert_eq!(stats.frames, 1);
        assert!(platform.close_calls == 1);
    }

    #[test]
    fn test_drag_applied_before_tick() {
        let mut lp = game_loop(vec![Duration::ZERO, STEP]);
        let mut platform = ScriptedPlatform::with_frame_limit(1);
        platform.queue([
            InputEvent::MouseDown {
                button: MouseButton::Left,
                pos: Vec2::new(100.0, 100.0),
            },
            InputEvent::MouseUp {
                button: MouseButton::Left,
                pos: Vec2::new(100.0, 50.0),
            },
        ]);

        lp.run(&mut platform);
        assert_eq!(lp.state.big.vel, Vec2::new(0.0, -0.5));
        assert_eq!(lp.state.big.pos, Vec2::new(200.0, 199.5));
    }

    #[test]
    fn test_render_does_not_change_state() {
        let mut lp = game_loop(vec![Duration::ZERO, Duration::from_millis(5)]);
        let mut platform = ScriptedPlatform::with_frame_limit(2);
        lp.state.debug = true;

        let stats = lp.run(&mut platform);
        assert_eq!(stats.ticks, 0);
        assert_eq!(platform.rendered[0].big, platform.rendered[1].big);
        assert_eq!(platform.rendered[0].small, platform.rendered[1].small);
    }
}
