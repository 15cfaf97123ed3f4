/// Which pointer button started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` value. Unknown buttons read as primary.
    pub fn from_dom(button: i16) -> Self {
        match button {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Input event types the camera controls understand.
/// Coordinates are CSS pixels relative to the canvas' top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began.
    PointerDown { x: f32, y: f32, button: PointerButton },
    /// A touch/cursor moved.
    PointerMove { x: f32, y: f32 },
    /// A touch/click ended.
    PointerUp { x: f32, y: f32 },
    /// Scroll wheel; positive `delta_y` scrolls toward the user (zoom out).
    Wheel { delta_y: f32 },
}

/// A queue of input events.
/// DOM listeners push; the frame tick drains once per refresh.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0, button: PointerButton::Primary });
        q.push(InputEvent::Wheel { delta_y: -3.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn dom_buttons() {
        assert_eq!(PointerButton::from_dom(0), PointerButton::Primary);
        assert_eq!(PointerButton::from_dom(1), PointerButton::Middle);
        assert_eq!(PointerButton::from_dom(2), PointerButton::Secondary);
        assert_eq!(PointerButton::from_dom(4), PointerButton::Primary);
    }
}
