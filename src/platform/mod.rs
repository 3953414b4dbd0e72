//! Platform abstraction layer
//!
//! The loop only needs four things from the outside world:
//! - Pending input events
//! - Whether the window is still open
//! - A way to close it
//! - Somewhere to draw the current state

pub mod native;
pub mod scripted;

pub use native::NativePlatform;
pub use scripted::ScriptedPlatform;

use crate::sim::{GameState, InputEvent};

/// Window, event source and presentation surface
pub trait Platform {
    /// Append every pending input event to `events`
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);

    fn is_open(&self) -> bool;

    fn close(&mut self);

    /// Draw one frame of `state`
    fn render(&mut self, state: &GameState);
}

/// Fatal start-up failures
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("window was not created before the event loop went idle")]
    NoWindow,
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}
