use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};

use gridfall_engine::backend::WgpuBlitBackend;
use gridfall_engine::coords::Dimensions;
use gridfall_engine::driver::FrameDriver;
use gridfall_engine::pattern::GridPattern;

use crate::config::DemoConfig;

/// End-of-iteration yield, the classic `delay(1)`: keeps a core from
/// pegging at 100% when presentation is not vsync-limited.
const LOOP_YIELD: Duration = Duration::from_millis(1);

/// Runs the demo until quit.
pub fn run(config: DemoConfig) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create winit event loop")?;
    let mut app = DemoApp::new(config);

    event_loop
        .run_app(&mut app)
        .context("event loop terminated with error")?;

    match app.failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct DemoApp {
    config: DemoConfig,
    window: Option<Arc<Window>>,
    backend: Option<WgpuBlitBackend>,
    driver: Option<FrameDriver>,
    fullscreen: bool,

    /// First fatal error, carried out of the loop for a non-zero exit.
    failure: Option<anyhow::Error>,
}

impl DemoApp {
    fn new(config: DemoConfig) -> Self {
        Self {
            config,
            window: None,
            backend: None,
            driver: None,
            fullscreen: false,
            failure: None,
        }
    }

    fn bootstrap(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        let backend = pollster::block_on(WgpuBlitBackend::new(window.clone(), self.config.frame))
            .context("failed to initialize graphics backend")?;

        let pattern = GridPattern::new(self.config.grid_cell, self.config.grid_speed);
        self.driver = Some(FrameDriver::new(self.config.frame, pattern, Instant::now()));
        self.backend = Some(backend);

        window.request_redraw();
        self.window = Some(window);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    fn toggle_fullscreen(&mut self) {
        let Some(window) = self.window.as_ref() else {
            return;
        };

        self.fullscreen = !self.fullscreen;
        let mode = self.fullscreen.then(|| Fullscreen::Borderless(None));
        window.set_fullscreen(mode);
        window.set_cursor_visible(!self.fullscreen);
    }
}

impl ApplicationHandler for DemoApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(err) = self.bootstrap(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        // Continuous redraw: the demo animates every frame.
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(window) = self.window.as_ref() {
            window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::KeyboardInput { event, .. } => {
                if !event.state.is_pressed() || event.repeat {
                    return;
                }
                match event.physical_key {
                    PhysicalKey::Code(KeyCode::Escape | KeyCode::KeyQ) => event_loop.exit(),
                    PhysicalKey::Code(KeyCode::KeyF | KeyCode::F11) => self.toggle_fullscreen(),
                    _ => {}
                }
            }

            WindowEvent::Resized(size) => {
                if let Some(driver) = self.driver.as_mut() {
                    driver.handle_resize(
                        Dimensions::new(size.width, size.height),
                        Instant::now(),
                    );
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                // The drawable size changed even though no Resized fired.
                if let (Some(driver), Some(window)) = (self.driver.as_mut(), self.window.as_ref()) {
                    let size = window.inner_size();
                    driver.handle_resize(
                        Dimensions::new(size.width, size.height),
                        Instant::now(),
                    );
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(driver), Some(backend)) =
                    (self.driver.as_mut(), self.backend.as_mut())
                {
                    if let Err(err) = driver.step(backend, Instant::now()) {
                        self.fail(event_loop, anyhow::Error::from(err).context("frame step failed"));
                        return;
                    }
                }

                thread::sleep(LOOP_YIELD);
            }

            _ => {}
        }
    }
}
