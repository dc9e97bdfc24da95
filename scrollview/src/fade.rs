//! Edge fade applied over scrolled content.

use crate::adjustment::Adjustment;
use crate::layout::Rect;
use crate::types::Edges;

/// Fades the content out towards the edges that have more content beyond
/// them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeEffect {
    margins: Edges,
}

impl FadeEffect {
    pub fn new(margins: Edges) -> Self {
        Self { margins }
    }

    pub fn margins(&self) -> Edges {
        self.margins
    }

    pub fn set_margins(&mut self, margins: Edges) {
        self.margins = margins;
    }

    /// Opacity multiplier at `(x, y)` inside `bounds`.
    ///
    /// An edge only fades while the adjustment can still scroll towards it,
    /// so content resting at the start shows no leading fade.
    pub fn alpha_at(
        &self,
        bounds: Rect,
        x: f32,
        y: f32,
        hadjustment: &Adjustment,
        vadjustment: &Adjustment,
    ) -> f32 {
        let mut alpha = 1.0;

        if vadjustment.value() > vadjustment.lower() {
            alpha *= ramp(y - bounds.top(), self.margins.top);
        }
        if vadjustment.value() < vadjustment.max_value() {
            alpha *= ramp(bounds.bottom() - y, self.margins.bottom);
        }
        if hadjustment.value() > hadjustment.lower() {
            alpha *= ramp(x - bounds.left(), self.margins.left);
        }
        if hadjustment.value() < hadjustment.max_value() {
            alpha *= ramp(bounds.right() - x, self.margins.right);
        }

        alpha
    }
}

fn ramp(distance: f32, margin: f32) -> f32 {
    if margin <= 0.0 {
        1.0
    } else {
        (distance / margin).clamp(0.0, 1.0)
    }
}
