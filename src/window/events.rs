//! Event handling functionality.

use crate::event::WindowEvent;

use super::Window;

impl Window {
    /// Pumps the window system and returns the events received since the last call.
    ///
    /// A close request from the window system closes the window; the event is
    /// still returned so the caller can observe it.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        self.canvas.poll_events();

        let events: Vec<WindowEvent> = self.events.try_iter().collect();
        for event in &events {
            self.handle_event(event);
        }

        events
    }

    fn handle_event(&mut self, event: &WindowEvent) {
        if let WindowEvent::Close = *event {
            log::info!("close requested by the window system");
            self.close();
        }
    }
}
