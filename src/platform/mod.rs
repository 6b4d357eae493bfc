//=========================================================================
// Platform Subsystem
//
// Bridges winit (OS-level events) and the pixels surface with the game
// core. Everything runs on the main thread.
//
// Architecture:
// ```text
//  Main Thread:
//  ┌──────────────────────────────────────────────────────────┐
//  │  winit Event Loop                                        │
//  │   ↓                                                      │
//  │  InputProcessor (cursor tracking, window → frame coords) │
//  │   ↓                                                      │
//  │  InputBuffer (presses, arrival order)                    │
//  │   ↓ (flush at frame boundary)                            │
//  │  Bridge Channel ──> GameRuntime::tick(dt)                │
//  │                       ↓                                  │
//  │  RedrawRequested ──> GameRuntime::draw(FrameCanvas)      │
//  │                       ↓                                  │
//  │                     pixels.render()                      │
//  └──────────────────────────────────────────────────────────┘
//
//  Frame Boundary: about_to_wait once the frame deadline passed
//    → buffered input sent as one batch
//    → one game step, then a redraw request
//    → ControlFlow::WaitUntil(next deadline)
// ```
//
// Key Design Decisions:
// - **Fixed logical frame**: the game draws into a width×height buffer;
//   pixels scales it to the window, so resizes never touch game code
// - **Errors end the loop**: window/surface/game errors are logged,
//   stored, and returned from `run()` after the loop exits
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;

//=== External Crates =====================================================

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Sender, TrySendError};
use log::*;
use pixels::{Pixels, SurfaceTexture};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Icon, Window, WindowAttributes, WindowId},
};

//=== Internal Imports ====================================================

use crate::core::error::{GameError, Result};
use crate::core::geometry::Point;
use crate::core::platform_bridge::{PlatformEvent, TickControl};
use crate::core::render::{Color, FrameCanvas, Image};
use crate::core::GameRuntime;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;

//=== WindowSettings ======================================================

/// Window parameters taken from the game configuration.
#[derive(Debug, Clone)]
pub(crate) struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub icon: Option<Image>,
}

//=== Platform ============================================================

/// Window manager, frame pacer and input aggregator.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(...)` - no window yet
/// 2. **Execution**: `platform.run()` - blocks in the winit event loop
/// 3. **Resume**: window + pixels surface created lazily
/// 4. **Shutdown**: close request, `Quit` token or fatal error
pub(crate) struct Platform {
    settings: WindowSettings,

    /// OS window handle (None until `resumed()` called).
    window: Option<Arc<Window>>,

    /// Frame buffer bound to the window (None until `resumed()`).
    pixels: Option<Pixels<'static>>,

    /// Buffers presses until frame boundary.
    buffer: InputBuffer,

    /// Channel to the core side.
    event_sender: Sender<PlatformEvent>,

    /// Converts winit events to engine InputEvents.
    input_processor: InputProcessor,

    runtime: GameRuntime,

    frame_duration: Duration,
    last_frame: Instant,
    next_frame: Instant,

    /// First fatal error; returned from `run()`.
    error: Option<GameError>,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        settings: WindowSettings,
        event_sender: Sender<PlatformEvent>,
        runtime: GameRuntime,
        fps: u32,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized ({} fps)", fps);
        let now = Instant::now();
        Self {
            settings,
            window: None,
            pixels: None,
            buffer: InputBuffer::new(),
            event_sender,
            input_processor: InputProcessor::new(),
            runtime,
            frame_duration: Duration::from_secs(1) / fps,
            last_frame: now,
            next_frame: now,
            error: None,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the event loop until the game exits.
    ///
    /// # Errors
    ///
    /// Event loop failures, window/surface creation failures and any game
    /// error raised during a frame.
    pub(crate) fn run(mut self) -> Result<()> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new()?;
        event_loop.run_app(&mut self)?;

        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered input to the core side as one batch.
    ///
    /// A full or disconnected channel drops the batch with a warning.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            trace!(target: "platform::input", "Flushing {} events", count);

            match self.event_sender.try_send(PlatformEvent::Inputs(events)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => warn!(
                    target: "platform::input",
                    "Channel full, dropping {} events",
                    count
                ),
                Err(TrySendError::Disconnected(_)) => warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    count
                ),
            }
        }
    }

    /// Maps a window position to frame-buffer pixels (clamped).
    fn to_frame(pixels: Option<&Pixels<'static>>, x: f64, y: f64) -> Point {
        match pixels {
            Some(pixels) => {
                let (px, py) = pixels
                    .window_pos_to_pixel((x as f32, y as f32))
                    .unwrap_or_else(|pos| pixels.clamp_pixel_pos(pos));
                Point::new(px as i32, py as i32)
            }
            None => Point::new(x as i32, y as i32),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let mut attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height));

        if let Some(icon) = &self.settings.icon {
            match Icon::from_rgba(icon.pixels().to_vec(), icon.width(), icon.height()) {
                Ok(icon) => attrs = attrs.with_window_icon(Some(icon)),
                Err(e) => warn!(target: "platform", "Window icon rejected: {}", e),
            }
        }

        let window = Arc::new(event_loop.create_window(attrs)?);
        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        let surface = SurfaceTexture::new(size.width, size.height, Arc::clone(&window));
        let pixels = Pixels::new(self.settings.width, self.settings.height, surface)?;

        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
        Ok(())
    }

    fn redraw(&mut self) -> Result<()> {
        let Some(pixels) = self.pixels.as_mut() else {
            return Ok(());
        };

        let mut canvas = FrameCanvas::new(pixels.frame_mut(), self.settings.width, self.settings.height);
        canvas.clear(Color::BLACK);
        self.runtime.draw(&mut canvas);
        pixels.render()?;
        Ok(())
    }

    fn step(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if now < self.next_frame {
            return;
        }

        self.flush_input_buffer();

        let dt = now - self.last_frame;
        self.last_frame = now;
        self.next_frame = now + self.frame_duration;

        match self.runtime.tick(dt) {
            Ok(TickControl::Continue) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Ok(TickControl::Exit) => {
                info!(target: "platform", "Game requested exit");
                event_loop.exit();
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: GameError) {
        error!(target: "platform", "Fatal error: {}", error);
        if self.error.is_none() {
            self.error = Some(error);
        }
        event_loop.exit();
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window and surface on first resume.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (resume)");
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
            self.fail(event_loop, e);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.try_send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(pixels) = self.pixels.as_mut() {
                    if let Err(e) = pixels.resize_surface(size.width, size.height) {
                        error!(target: "platform", "Surface resize failed: {}", e);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input_processor.process_cursor_move(position.x, position.y);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let pixels = self.pixels.as_ref();
                if let Some(event) = self
                    .input_processor
                    .process_mouse_button(button, state, |x, y| Self::to_frame(pixels, x, y))
                {
                    trace!(target: "platform::input", "Pointer down: {:?}", event);
                    self.buffer.push(event);
                }
            }

            WindowEvent::RedrawRequested => {
                if let Err(e) = self.redraw() {
                    self.fail(event_loop, e);
                }
            }

            _ => {}
        }
    }

    /// Frame boundary: one game step per elapsed frame interval.
    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.step(event_loop);
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
