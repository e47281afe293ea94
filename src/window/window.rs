//! The spincube window.

use std::sync::mpsc::{self, Receiver};

use crate::color::{self, Color};
use crate::context::Context;
use crate::event::WindowEvent;
use crate::window::canvas::CanvasSetup;
use crate::window::WgpuCanvas;

/// Structure representing a window able to draw 3D content.
///
/// The window owns the native event loop. Events are pumped explicitly through
/// [`poll_events`](Self::poll_events), so nothing happens behind the caller's back.
pub struct Window {
    pub(crate) events: Receiver<WindowEvent>,
    pub(crate) background: Color,
    pub(crate) should_close: bool,
    pub(crate) canvas: WgpuCanvas,
}

impl Window {
    /// Indicates whether this window should be closed.
    #[inline]
    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Closes the window.
    ///
    /// The render loop is expected to check [`should_close`](Self::should_close) once
    /// per iteration and stop.
    #[inline]
    pub fn close(&mut self) {
        self.should_close = true;
    }

    /// Sets the color used to clear each frame.
    pub fn set_background_color(&mut self, color: Color) {
        self.background = color;
    }

    /// The GPU context used by this window.
    pub fn context(&self) -> &Context {
        self.canvas.context()
    }

    /// Creates a new window with custom setup options.
    ///
    /// # Arguments
    /// * `title` - The window title
    /// * `width` - The window width in logical pixels
    /// * `height` - The window height in logical pixels
    /// * `setup` - A `CanvasSetup` struct containing the window configuration
    ///
    /// # Errors
    /// Fails if the windowing system or the GPU cannot be initialized.
    pub async fn new_with_setup(
        title: &str,
        width: u32,
        height: u32,
        setup: CanvasSetup,
    ) -> anyhow::Result<Window> {
        let (event_send, event_receive) = mpsc::channel();
        let canvas = WgpuCanvas::open(title, width, height, setup, event_send).await?;

        Ok(Window {
            events: event_receive,
            background: color::BLACK,
            should_close: false,
            canvas,
        })
    }
}
