//! Desktop platform: winit window, wgpu surface
//!
//! The event loop is pumped rather than run, so the game keeps ownership of
//! its own loop and can poll input whenever it likes.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowAttributes, WindowId};

use super::{Platform, PlatformError};
use crate::assets::Assets;
use crate::renderer::{RenderState, build_scene};
use crate::settings::Settings;
use crate::sim::{GameState, InputEvent, Key, MouseButton};

/// Pumps allowed for the window to appear before giving up
const STARTUP_PUMPS: usize = 16;

/// winit callbacks; collects translated events between pumps
struct WindowApp {
    attributes: WindowAttributes,
    window: Option<Arc<Window>>,
    error: Option<PlatformError>,
    events: Vec<InputEvent>,
    cursor: Vec2,
    resized: Option<PhysicalSize<u32>>,
}

impl WindowApp {
    fn new(attributes: WindowAttributes) -> Self {
        Self {
            attributes,
            window: None,
            error: None,
            events: Vec::new(),
            cursor: Vec2::ZERO,
            resized: None,
        }
    }
}

impl ApplicationHandler for WindowApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(self.attributes.clone()) {
            Ok(window) => {
                log::info!("Window created: {:?}", window.inner_size());
                self.window = Some(Arc::new(window));
            }
            Err(err) => self.error = Some(err.into()),
        }
    }

    /// Translate window events into game input.
    ///
    /// Key auto-repeat is dropped, so holding F1 toggles the overlay once.
    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.events.push(InputEvent::Closed),
            WindowEvent::Resized(size) => self.resized = Some(size),
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    self.events.push(InputEvent::KeyPressed(map_key(event.physical_key)));
                }
            }
            WindowEvent::CursorMoved { position, .. } => self.cursor = cursor_pos(position),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = map_button(button);
                let pos = self.cursor;
                self.events.push(match state {
                    ElementState::Pressed => InputEvent::MouseDown { button, pos },
                    ElementState::Released => InputEvent::MouseUp { button, pos },
                });
            }
            _ => {}
        }
    }
}

fn cursor_pos(position: PhysicalPosition<f64>) -> Vec2 {
    Vec2::new(position.x as f32, position.y as f32)
}

fn map_key(key: PhysicalKey) -> Key {
    match key {
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        PhysicalKey::Code(KeyCode::F1) => Key::F1,
        _ => Key::Other,
    }
}

fn map_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        _ => MouseButton::Other,
    }
}

/// A real window with a GPU surface
pub struct NativePlatform {
    // Dropped before the window the surface draws into
    render_state: Option<RenderState>,
    app: WindowApp,
    event_loop: EventLoop<()>,
    open: bool,
}

impl NativePlatform {
    /// Open the window and set up the GPU; textures come from `assets`
    pub fn new(settings: &Settings, assets: &Assets) -> Result<Self, PlatformError> {
        let mut event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let attributes = Window::default_attributes()
            .with_title(settings.title.clone())
            .with_inner_size(PhysicalSize::new(settings.width, settings.height))
            .with_resizable(false);
        let mut app = WindowApp::new(attributes);

        for _ in 0..STARTUP_PUMPS {
            if app.window.is_some() || app.error.is_some() {
                break;
            }
            if let PumpStatus::Exit(code) =
                event_loop.pump_app_events(Some(Duration::from_millis(10)), &mut app)
            {
                log::warn!("Event loop exited during start-up ({})", code);
                break;
            }
        }
        if let Some(err) = app.error.take() {
            return Err(err);
        }
        let window = app.window.clone().ok_or(PlatformError::NoWindow)?;

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window.clone())?;
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let size = window.inner_size();
        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
            Vec2::new(settings.width as f32, settings.height as f32),
            assets,
            settings.vsync,
        ))?;

        Ok(Self {
            render_state: Some(render_state),
            app,
            event_loop,
            open: true,
        })
    }
}

impl Platform for NativePlatform {
    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        if let PumpStatus::Exit(code) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut self.app)
        {
            log::info!("Event loop exited ({})", code);
            self.open = false;
        }

        if let (Some(size), Some(render_state)) = (self.app.resized.take(), &mut self.render_state)
        {
            render_state.resize(size.width, size.height);
        }

        events.append(&mut self.app.events);
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
        self.render_state = None;
        if let Some(window) = self.app.window.take() {
            window.set_visible(false);
        }
    }

    fn render(&mut self, state: &GameState) {
        let Some(render_state) = self.render_state.as_mut() else {
            return;
        };

        let scene = build_scene(state, &render_state.layout());
        match render_state.render(&scene) {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                render_state.resize(render_state.size.0, render_state.size.1);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("Out of memory!");
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }
    }
}
