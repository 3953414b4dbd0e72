//! Air Crash entry point
//!
//! Loads settings and assets, opens the window and runs the game loop.

use std::path::Path;

use anyhow::Context;

use air_crash::Settings;
use air_crash::assets::Assets;
use air_crash::game_loop::GameLoop;
use air_crash::platform::NativePlatform;
use air_crash::sim::GameState;
use air_crash::timestep::{FixedTimestep, SystemClock};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    log::info!("Air Crash starting...");

    let settings = Settings::load(Path::new(Settings::FILE_NAME));
    let assets = Assets::load(&settings.assets);
    if assets.font.is_empty() {
        log::warn!("No font loaded");
    } else {
        log::info!(
            "Font {} ({} bytes)",
            assets.font.family.as_deref().unwrap_or("<unnamed>"),
            assets.font.data.len()
        );
    }

    let mut platform =
        NativePlatform::new(&settings, &assets).context("failed to initialise the window")?;

    let mut state = GameState::new(settings.width, settings.height);
    state.debug = settings.debug_overlay;

    let mut game = GameLoop::new(
        state,
        settings.sim_config(),
        FixedTimestep::from_rate(settings.ticks_per_second),
        SystemClock::new(),
    );
    game.run(&mut platform);

    let stats = game.stats();
    log::info!(
        "Air Crash exiting after {} ticks and {} frames",
        stats.ticks,
        stats.frames
    );
    Ok(())
}
