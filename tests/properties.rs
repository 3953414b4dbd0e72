//! Property tests for motion, clamping, collision and the fixed-step loop

use std::time::Duration;

use glam::Vec2;
use proptest::prelude::*;

use air_crash::game_loop::GameLoop;
use air_crash::platform::ScriptedPlatform;
use air_crash::sim::{
    BIG_PLANE_FRAME, CollisionPolicy, Entity, GameState, InputEvent, MouseButton,
    SMALL_PLANE_FRAME, SimConfig, apply_velocity, circles_collide, entities_collide,
    handle_event, keep_on_screen, tick,
};
use air_crash::timestep::{FixedTimestep, ManualClock};

const STEP: Duration = Duration::from_nanos(16_666_666);

fn coord() -> impl Strategy<Value = f32> {
    -5000.0f32..5000.0
}

fn vec2() -> impl Strategy<Value = Vec2> {
    (coord(), coord()).prop_map(|(x, y)| Vec2::new(x, y))
}

proptest! {
    #[test]
    fn clamp_stays_in_bounds(mut pos in vec2(), w in 1.0f32..4000.0, h in 1.0f32..4000.0) {
        keep_on_screen(&mut pos, Vec2::new(w, h));
        prop_assert!(pos.x >= 0.0 && pos.x <= w);
        prop_assert!(pos.y >= 0.0 && pos.y <= h);
    }

    #[test]
    fn motion_step_adds_velocity(pos in vec2(), vel in vec2()) {
        let mut e = Entity::new(pos, vel, 0.0, BIG_PLANE_FRAME);
        apply_velocity(&mut e);
        prop_assert_eq!(e.pos, pos + vel);
        prop_assert_eq!(e.vel, vel);
    }

    #[test]
    fn collision_is_symmetric(a in vec2(), b in vec2(), ra in 0.0f32..200.0, rb in 0.0f32..200.0) {
        prop_assert_eq!(circles_collide(a, ra, b, rb), circles_collide(b, rb, a, ra));

        let ea = Entity::new(a, Vec2::ZERO, 30.0, BIG_PLANE_FRAME);
        let eb = Entity::new(b, Vec2::ZERO, 200.0, SMALL_PLANE_FRAME);
        prop_assert_eq!(entities_collide(&ea, &eb), entities_collide(&eb, &ea));
        prop_assert_eq!(
            CollisionPolicy::BoundingBox.collides(&ea, &eb),
            CollisionPolicy::BoundingBox.collides(&eb, &ea)
        );
    }

    #[test]
    fn tick_keeps_planes_on_screen(big in vec2(), small in vec2(), vb in vec2(), vs in vec2()) {
        let mut state = GameState::default();
        state.big.pos = big;
        state.small.pos = small;
        state.big.vel = vb;
        state.small.vel = vs;

        tick(&mut state, &SimConfig::default(), STEP);
        for plane in state.planes() {
            prop_assert!(plane.pos.x >= 0.0 && plane.pos.x <= state.bounds.x);
            prop_assert!(plane.pos.y >= 0.0 && plane.pos.y <= state.bounds.y);
        }
    }

    #[test]
    fn frozen_planes_stay_frozen(ticks in 1usize..50) {
        let mut state = GameState::default();
        state.big.pos = Vec2::new(500.0, 400.0);
        state.small.pos = Vec2::new(520.0, 410.0);

        for _ in 0..ticks {
            tick(&mut state, &SimConfig::default(), STEP);
            prop_assert_eq!(state.big.vel, Vec2::ZERO);
            prop_assert_eq!(state.small.vel, Vec2::ZERO);
        }

        handle_event(&mut state, InputEvent::MouseDown { button: MouseButton::Right, pos: Vec2::ZERO });
        handle_event(&mut state, InputEvent::MouseUp { button: MouseButton::Right, pos: Vec2::new(100.0, 0.0) });
        prop_assert_eq!(state.small.vel, Vec2::new(2.0, 0.0));
        prop_assert_eq!(state.big.vel, Vec2::ZERO);
    }

    #[test]
    fn accumulator_releases_whole_steps(deltas in proptest::collection::vec(0u64..100_000_000, 1..40)) {
        let deltas: Vec<Duration> = deltas.into_iter().map(Duration::from_nanos).collect();
        let total: Duration = deltas.iter().sum();

        let mut script = vec![Duration::ZERO];
        script.extend(deltas.iter().copied());
        let mut game = GameLoop::new(
            GameState::default(),
            SimConfig::default(),
            FixedTimestep::new(STEP),
            ManualClock::new(script, Duration::ZERO),
        );
        let mut platform = ScriptedPlatform::with_frame_limit(deltas.len());

        let stats = game.run(&mut platform);
        let expected = total.as_nanos() / STEP.as_nanos();
        prop_assert_eq!(u128::from(stats.ticks), expected);
        prop_assert_eq!(stats.frames as usize, deltas.len());
        prop_assert!(game.timestep.accumulated() < STEP);
        prop_assert_eq!(
            game.timestep.accumulated().as_nanos(),
            total.as_nanos() % STEP.as_nanos()
        );
    }
}

#[test]
fn collision_boundary_is_strict() {
    let a = Vec2::new(100.0, 100.0);
    // 3-4-5 triangle scaled: distance exactly 50
    let b = Vec2::new(130.0, 140.0);
    assert!(!circles_collide(a, 20.0, b, 30.0));
    // One unit closer than the radius sum
    let c = Vec2::new(100.0, 149.0);
    assert!(circles_collide(a, 20.0, c, 30.0));
}
