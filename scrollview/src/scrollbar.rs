//! Scrollbar bound to one adjustment.

use std::rc::Rc;

use crate::actor::{Actor, ActorId, PaintContext, PaintOp};
use crate::adjustment::Adjustment;
use crate::layout::{Rect, SizeRequest};
use crate::style::ScrollBarStyle;
use crate::types::Orientation;

/// Smallest thumb extent along the track.
const MIN_THUMB_LENGTH: f32 = 8.0;

#[derive(Debug)]
pub struct ScrollBar {
    id: ActorId,
    orientation: Orientation,
    adjustment: Rc<Adjustment>,
    style: ScrollBarStyle,
    visible: bool,
    allocation: Rect,
}

impl ScrollBar {
    pub fn new(orientation: Orientation, adjustment: Rc<Adjustment>) -> Self {
        Self {
            id: ActorId::next(),
            orientation,
            adjustment,
            style: ScrollBarStyle::default(),
            visible: true,
            allocation: Rect::default(),
        }
    }

    pub fn with_style(mut self, style: ScrollBarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn adjustment(&self) -> &Rc<Adjustment> {
        &self.adjustment
    }

    pub fn style(&self) -> ScrollBarStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ScrollBarStyle) {
        self.style = style;
    }

    /// Actor-level visibility. A hidden bar takes no space in the scroll
    /// view's size negotiation.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Thumb rectangle inside the current allocation, positioned from the
    /// adjustment's value and sized from its page-to-range ratio.
    pub fn thumb(&self) -> Rect {
        let track = self.allocation;
        let track_length = match self.orientation {
            Orientation::Vertical => track.height,
            Orientation::Horizontal => track.width,
        };

        let adj = &self.adjustment;
        let range = adj.upper() - adj.lower();
        let length = if range <= 0.0 {
            track_length
        } else {
            let ratio = (adj.page_size() / range).min(1.0) as f32;
            (ratio * track_length).max(MIN_THUMB_LENGTH.min(track_length))
        };

        let max_offset = adj.max_value() - adj.lower();
        let position = if max_offset <= 0.0 {
            0.0
        } else {
            let progress = ((adj.value() - adj.lower()) / max_offset) as f32;
            progress * (track_length - length)
        };

        match self.orientation {
            Orientation::Vertical => Rect::new(track.x, track.y + position, track.width, length),
            Orientation::Horizontal => {
                Rect::new(track.x + position, track.y, length, track.height)
            }
        }
    }
}

impl Actor for ScrollBar {
    fn name(&self) -> &str {
        match self.orientation {
            Orientation::Vertical => "vscrollbar",
            Orientation::Horizontal => "hscrollbar",
        }
    }

    fn preferred_width(&self, _for_height: Option<f32>) -> SizeRequest {
        match self.orientation {
            Orientation::Vertical => SizeRequest::fixed(self.style.thickness),
            Orientation::Horizontal => SizeRequest::fixed(self.style.min_length),
        }
    }

    fn preferred_height(&self, _for_width: Option<f32>) -> SizeRequest {
        match self.orientation {
            Orientation::Vertical => SizeRequest::fixed(self.style.min_length),
            Orientation::Horizontal => SizeRequest::fixed(self.style.thickness),
        }
    }

    fn allocate(&mut self, rect: Rect) {
        self.allocation = rect;
    }

    fn allocation(&self) -> Rect {
        self.allocation
    }

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.push(PaintOp::Actor {
            name: self.name().to_string(),
            rect: self.allocation,
        });
        ctx.push(PaintOp::Actor {
            name: "thumb".to_string(),
            rect: self.thumb(),
        });
    }
}
