use anyhow::{Context, Result};
use std::rc::Rc;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::host::WinitFrameHost;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,

    /// Exit once no frame is pending on the host, e.g. after every loop on it
    /// has terminated.
    pub exit_when_idle: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "tickloop".to_string(),
            initial_size: LogicalSize::new(640.0, 360.0),
            exit_when_idle: true,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens a window and pumps `host` from its redraw cycle until the window is
    /// closed (or the host goes idle, see [`RuntimeConfig::exit_when_idle`]).
    ///
    /// Loops are usually created on `host` before calling this; their first frame
    /// runs once the window is up.
    pub fn run(config: RuntimeConfig, host: Rc<WinitFrameHost>) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, host);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct RuntimeState {
    config: RuntimeConfig,
    host: Rc<WinitFrameHost>,
    window: Option<Rc<Window>>,
    exit_requested: bool,
}

impl RuntimeState {
    fn new(config: RuntimeConfig, host: Rc<WinitFrameHost>) -> Self {
        Self {
            config,
            host,
            window: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let window = Rc::new(window);
        self.host.attach(Rc::clone(&window));
        self.window = Some(window);
        Ok(())
    }
}

impl ApplicationHandler for RuntimeState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            self.request_exit(event_loop);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        let Some(window) = &self.window else {
            return;
        };

        if self.host.has_pending() {
            window.request_redraw();
        } else if self.config.exit_when_idle {
            log::info!("no frames pending, exiting");
            self.request_exit(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.window.as_ref().map(|w| w.id()) != Some(window_id) {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                self.host.detach();
                self.window = None;
                self.request_exit(event_loop);
            }

            WindowEvent::RedrawRequested => {
                let ran = self.host.dispatch();
                log::trace!("redraw dispatched {ran} frame callback(s)");
            }

            _ => {}
        }
    }
}
