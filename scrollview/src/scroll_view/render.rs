use super::ScrollView;
use crate::actor::{Actor, PaintContext, PaintOp};

/// The part of a scroll view under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Background,
    Child,
    HScrollBar,
    VScrollBar,
}

impl ScrollView {
    /// Paint background, child, fade, then the scrollbars that are shown.
    pub(super) fn paint_parts(&self, ctx: &mut PaintContext) {
        ctx.push(PaintOp::Background {
            rect: self.allocation,
        });

        if let Some(child) = self.child() {
            child.paint(ctx);

            if let Some(fade) = &self.fade_effect {
                ctx.push(PaintOp::Fade {
                    rect: child.allocation(),
                    margins: fade.margins(),
                });
            }
        }

        if self.hscrollbar_visible {
            self.hscroll.paint(ctx);
        }
        if self.vscrollbar_visible {
            self.vscroll.paint(ctx);
        }
    }

    /// Find the topmost part at `(x, y)`. Hidden scrollbars are never hit.
    pub fn pick_part(&self, x: f32, y: f32) -> Option<Part> {
        if !self.allocation.contains(x, y) {
            return None;
        }

        if self.vscrollbar_visible && self.vscroll.pick(x, y) {
            return Some(Part::VScrollBar);
        }
        if self.hscrollbar_visible && self.hscroll.pick(x, y) {
            return Some(Part::HScrollBar);
        }
        if self.child().is_some_and(|child| child.pick(x, y)) {
            return Some(Part::Child);
        }

        Some(Part::Background)
    }
}
