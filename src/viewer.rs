//! Standalone viewer window backed by winit.
//!
//! ```no_run
//! use orbview::Viewer;
//!
//! Viewer::builder()
//!     .with_title("demo")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::camera::OrbitController;
use crate::error::OrbviewError;
use crate::gpu::blit::FramePresenter;
use crate::gpu::context::RenderContext;
use crate::input::{self, PointerButton};
use crate::options::Options;
use crate::source::{FrameRequest, FrameSource, RaycastSource};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Options,
    source: Option<Box<dyn FrameSource>>,
    title: String,
}

impl ViewerBuilder {
    fn new() -> Self {
        Self {
            options: Options::default(),
            source: None,
            title: "Orbview".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Provide the frame source. Defaults to the built-in ray-cast
    /// scene when not set.
    #[must_use]
    pub fn with_source(mut self, source: Box<dyn FrameSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options,
            source: self.source,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window displaying frames from a
/// [`FrameSource`](crate::source::FrameSource) under orbit-camera
/// control.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    source: Option<Box<dyn FrameSource>>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window
    /// closes.
    ///
    /// # Errors
    ///
    /// Invalid camera configuration is rejected before any window
    /// appears; GPU and event-loop setup failures are returned once the
    /// loop winds down.
    pub fn run(self) -> Result<(), OrbviewError> {
        let controller = OrbitController::from_options(&self.options.camera)?;
        let event_loop = EventLoop::new()
            .map_err(|e| OrbviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            gpu: None,
            controller,
            source: self
                .source
                .unwrap_or_else(|| Box::new(RaycastSource::new())),
            options: self.options,
            title: self.title,
            cursor_pos: None,
            failure: None,
        };
        event_loop
            .run_app(&mut app)
            .map_err(|e| OrbviewError::Viewer(e.to_string()))?;

        match app.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

// ── Event-loop application ───────────────────────────────────────────────

struct GpuState {
    context: RenderContext,
    presenter: FramePresenter,
}

/// Winit application driving the input → camera → frame-source →
/// presenter cycle. All of it runs on the event-loop thread, so every
/// redraw observes a camera with all prior events applied.
struct ViewerApp {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    controller: OrbitController,
    source: Box<dyn FrameSource>,
    options: Options,
    title: String,
    cursor_pos: Option<(f32, f32)>,
    failure: Option<OrbviewError>,
}

impl ViewerApp {
    fn init(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), OrbviewError> {
        let attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.options.window.width),
                f64::from(self.options.window.height),
            ));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| OrbviewError::Viewer(e.to_string()))?,
        );

        let size = window.inner_size();
        let context = pollster::block_on(RenderContext::new(
            window.clone(),
            (size.width, size.height),
        ))?;
        let presenter = FramePresenter::new(&context, size.width, size.height);
        log::info!(
            "viewer up: {}x{} surface, format {:?}",
            size.width,
            size.height,
            context.format()
        );

        window.request_redraw();
        self.window = Some(window);
        self.gpu = Some(GpuState { context, presenter });
        Ok(())
    }

    fn redraw(&mut self) {
        let Some(gpu) = &mut self.gpu else { return };
        let started = Instant::now();

        let (width, height) = gpu.presenter.frame_size();
        let request = FrameRequest {
            view: self.controller.view_matrix(),
            eye: self.controller.eye_position(),
            width,
            height,
        };
        let pixels = self.source.render_frame(&request);
        gpu.presenter.upload(&gpu.context, pixels);

        match gpu.context.get_next_frame() {
            Ok(frame) => {
                let view = frame
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                let mut encoder = gpu.context.create_encoder();
                gpu.presenter.blit(&mut encoder, &view);
                gpu.context.submit(encoder);
                frame.present();
                log::debug!(
                    "frame time: {:.1} ms",
                    started.elapsed().as_secs_f64() * 1e3
                );
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                if let Some(window) = &self.window {
                    let size = window.inner_size();
                    gpu.context.resize(size.width, size.height);
                }
            }
            Err(e) => log::error!("surface error: {e:?}"),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            if let Err(e) = self.init(event_loop) {
                log::error!("viewer startup failed: {e}");
                self.failure = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(size.width, size.height);
                    gpu.presenter.resize(
                        &gpu.context,
                        size.width,
                        size.height,
                    );
                }
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let (x, y) = self.cursor_pos.unwrap_or((0.0, 0.0));
                let button = PointerButton::from(button);
                if state == ElementState::Pressed {
                    self.controller.press(x, y, button);
                } else {
                    self.controller.release(x, y, button);
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let pos = (position.x as f32, position.y as f32);
                if let Some(last) = self.cursor_pos {
                    self.controller.drag(
                        pos.0,
                        pos.1,
                        pos.0 - last.0,
                        pos.1 - last.1,
                    );
                }
                self.cursor_pos = Some(pos);
            }

            // Reset delta tracking so re-entry does not produce a jump;
            // an in-flight session simply waits for its release.
            WindowEvent::CursorLeft { .. } => self.cursor_pos = None,

            WindowEvent::MouseWheel { delta, .. } => {
                let (horizontal, vertical) = input::scroll_offsets(&delta);
                self.controller.scroll(horizontal, vertical);
            }

            _ => (),
        }
    }
}
