/// Direction of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollDirection {
    Up,
    Down,
    Left,
    Right,
    /// Continuous deltas from a touchpad or high-resolution wheel.
    Smooth { delta_x: f64, delta_y: f64 },
}

impl ScrollDirection {
    /// Horizontal mirror image: Left and Right swap, everything else stays.
    pub fn mirrored(self) -> Self {
        match self {
            ScrollDirection::Left => ScrollDirection::Right,
            ScrollDirection::Right => ScrollDirection::Left,
            other => other,
        }
    }
}

/// Mouse wheel or touchpad scroll event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    pub direction: ScrollDirection,
    pub x: f32,
    pub y: f32,
    /// Synthesized from another event the platform also delivers.
    pub pointer_emulated: bool,
}

impl ScrollEvent {
    pub fn new(direction: ScrollDirection) -> Self {
        Self {
            direction,
            x: 0.0,
            y: 0.0,
            pointer_emulated: false,
        }
    }

    pub fn smooth(delta_x: f64, delta_y: f64) -> Self {
        Self::new(ScrollDirection::Smooth { delta_x, delta_y })
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn emulated(mut self) -> Self {
        self.pointer_emulated = true;
        self
    }

    /// Translate a crossterm mouse event. Returns None for anything that is
    /// not a wheel event.
    pub fn from_crossterm(event: &crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;
        let direction = match event.kind {
            MouseEventKind::ScrollUp => ScrollDirection::Up,
            MouseEventKind::ScrollDown => ScrollDirection::Down,
            MouseEventKind::ScrollLeft => ScrollDirection::Left,
            MouseEventKind::ScrollRight => ScrollDirection::Right,
            _ => return None,
        };
        Some(Self::new(direction).at(event.column as f32, event.row as f32))
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
