mod rect;

pub use rect::Rect;

use crate::actor::Actor;

/// Minimum and natural size of an actor along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeRequest {
    pub min: f32,
    pub natural: f32,
}

impl SizeRequest {
    pub const fn new(min: f32, natural: f32) -> Self {
        Self { min, natural }
    }

    /// Same size for minimum and natural.
    pub const fn fixed(size: f32) -> Self {
        Self {
            min: size,
            natural: size,
        }
    }

    /// Grow both sizes by `amount`.
    pub fn grow(self, amount: f32) -> Self {
        Self {
            min: self.min + amount,
            natural: self.natural + amount,
        }
    }
}

/// Run one height-for-width layout pass over `actor` inside `available`.
///
/// The width is negotiated first, then the height for that width, then the
/// actor is allocated. Each step consumes geometry produced by the previous
/// one, so the order is fixed. The actor gets its natural size, clamped to the
/// available space but never below its minimum.
pub fn layout_pass(actor: &mut dyn Actor, available: Rect) -> Rect {
    let width = actor.preferred_width(Some(available.height));
    let width = width.natural.min(available.width).max(width.min);

    let height = actor.preferred_height(Some(width));
    let height = height.natural.min(available.height).max(height.min);

    let rect = Rect::new(available.x, available.y, width, height);
    log::trace!("[layout] {} allocated {:?}", actor.name(), rect);
    actor.allocate(rect);
    rect
}
