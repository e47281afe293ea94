//! wgpu-based canvas backed by a native winit window.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context as _;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent as WinitWindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};
use winit::platform::pump_events::EventLoopExtPumpEvents;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::context::Context;
use crate::event::{Action, Key, Modifiers, WindowEvent};
use crate::window::canvas::CanvasSetup;

/// How long a pump may block while the window has nothing to present to.
const MINIMIZED_WAIT: Duration = Duration::from_millis(100);

/// Internal event type that stores both the event data and state updates needed.
#[derive(Clone)]
enum PendingEvent {
    WindowEvent(WindowEvent),
    Key(Key, Action),
    Modifiers(ModifiersState),
    Resize { width: u32, height: u32 },
}

/// Collects the events of one window while the event loop is pumped.
struct EventCollector<'a> {
    window_id: WindowId,
    pending: &'a mut Vec<PendingEvent>,
}

impl ApplicationHandler for EventCollector<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WinitWindowEvent,
    ) {
        if window_id != self.window_id {
            return;
        }

        match event {
            WinitWindowEvent::CloseRequested => {
                self.pending
                    .push(PendingEvent::WindowEvent(WindowEvent::Close));
            }
            WinitWindowEvent::Resized(physical_size) => {
                self.pending.push(PendingEvent::Resize {
                    width: physical_size.width,
                    height: physical_size.height,
                });
            }
            WinitWindowEvent::KeyboardInput { event, .. } => {
                let action = translate_action(event.state, event.repeat);
                let key = translate_key(event.physical_key);
                self.pending.push(PendingEvent::Key(key, action));
            }
            WinitWindowEvent::ModifiersChanged(new_modifiers) => {
                self.pending
                    .push(PendingEvent::Modifiers(new_modifiers.state()));
            }
            _ => {}
        }
    }
}

/// A native window together with its wgpu surface and depth buffer.
// Fields drop in declaration order: GPU resources, then the window, then the event loop.
pub struct WgpuCanvas {
    depth_view: wgpu::TextureView,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,
    context: Context,
    window: Arc<Window>,
    out_events: Sender<WindowEvent>,
    modifiers_state: ModifiersState,
    minimized: bool,
    event_loop: EventLoop<()>,
}

impl WgpuCanvas {
    /// Opens a new window and initializes the wgpu context.
    ///
    /// Fails if the event loop, the window, the surface, the adapter or the device
    /// cannot be created.
    pub async fn open(
        title: &str,
        width: u32,
        height: u32,
        canvas_setup: CanvasSetup,
        out_events: Sender<WindowEvent>,
    ) -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create the event loop")?;

        let window_attrs = WindowAttributes::default()
            .with_title(title)
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .with_resizable(canvas_setup.resizable);

        #[allow(deprecated)]
        let window = event_loop
            .create_window(window_attrs)
            .context("failed to create the window")?;
        let window = Arc::new(window);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create the rendering surface")?;

        let context = Context::request(instance, &surface).await?;

        let surface_caps = surface.get_capabilities(&context.adapter);
        let alpha_mode = preferred_alpha_mode(&surface_caps.alpha_modes);

        // Get the actual window size
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: context.surface_format,
            width,
            height,
            present_mode: canvas_setup.present_mode(),
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&context.device, &surface_config);

        let depth_view = Self::create_depth_view(&context, width, height);

        log::info!(
            "opened a {}x{} window ({:?}, {:?})",
            width,
            height,
            surface_config.format,
            surface_config.present_mode
        );

        Ok(WgpuCanvas {
            event_loop,
            window,
            context,
            surface,
            surface_config,
            out_events,
            modifiers_state: ModifiersState::default(),
            minimized: false,
            depth_view,
        })
    }

    fn create_depth_view(context: &Context, width: u32, height: u32) -> wgpu::TextureView {
        // Ensure minimum dimensions of 1x1 to avoid wgpu validation errors
        let width = width.max(1);
        let height = height.max(1);
        let texture = context.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Context::depth_format(),
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&wgpu::TextureViewDescriptor::default())
    }

    /// Polls events from the window system.
    ///
    /// Translated events are sent through the channel given to [`open`](Self::open).
    /// This does not block, except while the window is minimized where it waits
    /// briefly for events instead.
    pub fn poll_events(&mut self) {
        let timeout = if self.minimized {
            MINIMIZED_WAIT
        } else {
            Duration::ZERO
        };

        let mut pending = Vec::new();
        let mut collector = EventCollector {
            window_id: self.window.id(),
            pending: &mut pending,
        };
        let _ = self
            .event_loop
            .pump_app_events(Some(timeout), &mut collector);

        for event in pending {
            match event {
                PendingEvent::WindowEvent(we) => {
                    let _ = self.out_events.send(we);
                }
                PendingEvent::Key(key, action) => {
                    let modifiers = translate_modifiers(self.modifiers_state);
                    let _ = self
                        .out_events
                        .send(WindowEvent::Key(key, action, modifiers));
                }
                PendingEvent::Modifiers(m) => {
                    self.modifiers_state = m;
                }
                PendingEvent::Resize { width, height } => {
                    self.minimized = width == 0 || height == 0;
                    if self.minimized {
                        log::debug!("window minimized, pausing rendering");
                        continue;
                    }
                    self.resize(width, height);
                    let _ = self
                        .out_events
                        .send(WindowEvent::FramebufferSize(width, height));
                }
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface
            .configure(&self.context.device, &self.surface_config);
        self.depth_view = Self::create_depth_view(&self.context, width, height);
    }

    /// Reconfigures the surface with its current size, e.g. after it was lost.
    pub fn reconfigure(&mut self) {
        let (width, height) = self.size();
        self.resize(width, height);
    }

    /// Gets the current surface texture for rendering.
    pub fn get_current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    /// Presents the current frame.
    pub fn present(&self, frame: wgpu::SurfaceTexture) {
        self.window.pre_present_notify();
        frame.present();
    }

    /// The GPU context this canvas renders with.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Gets the depth texture view for rendering.
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth_view
    }

    /// Whether the window currently has a zero-sized surface.
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// The size of the render surface.
    pub fn size(&self) -> (u32, u32) {
        (self.surface_config.width, self.surface_config.height)
    }
}

fn preferred_alpha_mode(supported: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if supported.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        supported
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

fn translate_action(state: ElementState, repeat: bool) -> Action {
    match state {
        ElementState::Pressed if repeat => Action::Repeat,
        ElementState::Pressed => Action::Press,
        ElementState::Released => Action::Release,
    }
}

fn translate_modifiers(modifiers: ModifiersState) -> Modifiers {
    let mut res = Modifiers::empty();
    if modifiers.shift_key() {
        res.insert(Modifiers::Shift)
    }
    if modifiers.control_key() {
        res.insert(Modifiers::Control)
    }
    if modifiers.alt_key() {
        res.insert(Modifiers::Alt)
    }
    if modifiers.super_key() {
        res.insert(Modifiers::Super)
    }
    res
}

fn translate_key(physical_key: PhysicalKey) -> Key {
    if let PhysicalKey::Code(key_code) = physical_key {
        match key_code {
            KeyCode::KeyA => Key::A,
            KeyCode::KeyB => Key::B,
            KeyCode::KeyC => Key::C,
            KeyCode::KeyD => Key::D,
            KeyCode::KeyE => Key::E,
            KeyCode::KeyF => Key::F,
            KeyCode::KeyG => Key::G,
            KeyCode::KeyH => Key::H,
            KeyCode::KeyI => Key::I,
            KeyCode::KeyJ => Key::J,
            KeyCode::KeyK => Key::K,
            KeyCode::KeyL => Key::L,
            KeyCode::KeyM => Key::M,
            KeyCode::KeyN => Key::N,
            KeyCode::KeyO => Key::O,
            KeyCode::KeyP => Key::P,
            KeyCode::KeyQ => Key::Q,
            KeyCode::KeyR => Key::R,
            KeyCode::KeyS => Key::S,
            KeyCode::KeyT => Key::T,
            KeyCode::KeyU => Key::U,
            KeyCode::KeyV => Key::V,
            KeyCode::KeyW => Key::W,
            KeyCode::KeyX => Key::X,
            KeyCode::KeyY => Key::Y,
            KeyCode::KeyZ => Key::Z,
            KeyCode::Escape => Key::Escape,
            KeyCode::Space => Key::Space,
            _ => Key::Unknown,
        }
    } else {
        Key::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn opaque_alpha_is_preferred() {
        use wgpu::CompositeAlphaMode;

        let modes = [CompositeAlphaMode::PreMultiplied, CompositeAlphaMode::Opaque];
        assert_eq!(preferred_alpha_mode(&modes), CompositeAlphaMode::Opaque);
        assert_eq!(
            preferred_alpha_mode(&[CompositeAlphaMode::PostMultiplied]),
            CompositeAlphaMode::PostMultiplied
        );
        assert_eq!(preferred_alpha_mode(&[]), CompositeAlphaMode::Auto);
    }

    #[test]
    fn held_keys_become_repeats() {
        assert_eq!(translate_action(ElementState::Pressed, false), Action::Press);
        assert_eq!(translate_action(ElementState::Pressed, true), Action::Repeat);
        assert_eq!(translate_action(ElementState::Released, false), Action::Release);
    }

    #[test]
    fn movement_keys_are_translated() {
        let pairs = [
            (KeyCode::KeyW, Key::W),
            (KeyCode::KeyA, Key::A),
            (KeyCode::KeyS, Key::S),
            (KeyCode::KeyD, Key::D),
            (KeyCode::KeyQ, Key::Q),
            (KeyCode::KeyE, Key::E),
            (KeyCode::Escape, Key::Escape),
        ];

        for (code, key) in pairs {
            assert_eq!(translate_key(PhysicalKey::Code(code)), key);
        }

        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::F1)), Key::Unknown);
        assert_eq!(
            translate_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            Key::Unknown
        );
    }

    #[test]
    fn modifier_state_is_translated() {
        let state = ModifiersState::SHIFT | ModifiersState::CONTROL;
        assert_eq!(
            translate_modifiers(state),
            Modifiers::Shift | Modifiers::Control
        );
        assert_eq!(translate_modifiers(ModifiersState::empty()), Modifiers::empty());
    }
}
