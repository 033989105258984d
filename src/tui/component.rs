use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Props come in as struct fields; persistent presentation state (list
/// offset, detail scroll) is borrowed as `&mut` so `render` can clamp it
/// against the area it was actually given.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw terminal events into a component-level event.
pub trait EventHandler {
    type Event;

    /// Returns `None` when the event is not for this component.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
