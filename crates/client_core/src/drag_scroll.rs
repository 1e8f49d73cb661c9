//! Pointer-drag panning for a vertically scrollable surface.

use tracing::debug;

pub const DRAG_SPEED_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Other(u16),
}

impl PointerButton {
    /// Maps DOM-style button indices (0 primary, 1 wheel, 2 context).
    pub fn from_index(index: u16) -> Self {
        match index {
            0 => Self::Primary,
            1 => Self::Auxiliary,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// `y` is the pointer position relative to the surface's top edge.
    Down { button: PointerButton, y: f64 },
    Move { y: f64 },
    Up,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAffordance {
    Grab,
    Grabbing,
}

pub trait ScrollSurface {
    fn scroll_offset(&self) -> f64;
    /// Implementations clamp to their own scroll range.
    fn set_scroll_offset(&mut self, offset: f64);
    fn set_cursor(&mut self, cursor: CursorAffordance);
    fn set_text_selection(&mut self, enabled: bool);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSession {
    pub anchor_pointer_y: f64,
    pub anchor_scroll_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ScrollSession),
}

#[derive(Debug, Default)]
pub struct DragScrollController {
    state: DragState,
}

impl DragScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, surface: &mut dyn ScrollSurface) {
        surface.set_cursor(CursorAffordance::Grab);
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<ScrollSession> {
        match self.state {
            DragState::Dragging(session) => Some(session),
            DragState::Idle => None,
        }
    }

    /// Returns `true` when the event was consumed and the host should suppress
    /// its default handling (e.g. native text selection on move).
    pub fn handle_event(&mut self, event: PointerEvent, surface: &mut dyn ScrollSurface) -> bool {
        match event {
            PointerEvent::Down { button, y } => self.drag_start(button, y, surface),
            PointerEvent::Move { y } => self.drag_move(y, surface),
            PointerEvent::Up => {
                self.drag_end(surface);
                false
            }
            PointerEvent::Leave => {
                self.pointer_leave(surface);
                false
            }
        }
    }

    pub fn drag_start(
        &mut self,
        button: PointerButton,
        pointer_y: f64,
        surface: &mut dyn ScrollSurface,
    ) -> bool {
        if button != PointerButton::Primary {
            return false;
        }

        let session = ScrollSession {
            anchor_pointer_y: pointer_y,
            anchor_scroll_offset: surface.scroll_offset(),
        };
        self.state = DragState::Dragging(session);
        surface.set_cursor(CursorAffordance::Grabbing);
        surface.set_text_selection(false);
        debug!(
            anchor_y = session.anchor_pointer_y,
            anchor_offset = session.anchor_scroll_offset,
            "drag scroll: session started"
        );
        true
    }

    pub fn drag_move(&mut self, pointer_y: f64, surface: &mut dyn ScrollSurface) -> bool {
        let DragState::Dragging(session) = self.state else {
            return false;
        };

        let walk = (pointer_y - session.anchor_pointer_y) * DRAG_SPEED_MULTIPLIER;
        surface.set_scroll_offset(session.anchor_scroll_offset - walk);
        true
    }

    pub fn drag_end(&mut self, surface: &mut dyn ScrollSurface) {
        self.finish(surface, "release");
    }

    pub fn pointer_leave(&mut self, surface: &mut dyn ScrollSurface) {
        self.finish(surface, "leave");
    }

    fn finish(&mut self, surface: &mut dyn ScrollSurface, reason: &'static str) {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        surface.set_cursor(CursorAffordance::Grab);
        surface.set_text_selection(true);
        if was_dragging {
            debug!(reason, offset = surface.scroll_offset(), "drag scroll: session ended");
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoundedSurface {
    content_height: f64,
    viewport_height: f64,
    offset: f64,
    cursor: Option<CursorAffordance>,
    text_selection: bool,
}

impl BoundedSurface {
    pub fn new(content_height: f64, viewport_height: f64) -> Self {
        Self {
            content_height: content_height.max(0.0),
            viewport_height: viewport_height.max(0.0),
            offset: 0.0,
            cursor: None,
            text_selection: true,
        }
    }

    pub fn max_offset(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    pub fn cursor(&self) -> Option<CursorAffordance> {
        self.cursor
    }

    pub fn text_selection_enabled(&self) -> bool {
        self.text_selection
    }
}

impl ScrollSurface for BoundedSurface {
    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: f64) {
        if offset.is_finite() {
            self.offset = offset.clamp(0.0, self.max_offset());
        }
    }

    fn set_cursor(&mut self, cursor: CursorAffordance) {
        self.cursor = Some(cursor);
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.text_selection = enabled;
    }
}

#[cfg(test)]
#[path = "tests/drag_scroll_tests.rs"]
mod tests;
