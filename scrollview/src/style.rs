//! Box-model and theme configuration.

use crate::layout::{Rect, SizeRequest};
use crate::types::Edges;

/// Theme-declared style of a scroll view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollViewStyle {
    /// Space between the border and the content box.
    pub padding: Edges,

    /// Border widths.
    pub border: Edges,

    /// Vertical edge fade length (top and bottom), if the theme declares one.
    pub vfade_offset: Option<f32>,

    /// Horizontal edge fade length (left and right), if the theme declares one.
    pub hfade_offset: Option<f32>,
}

impl ScrollViewStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn border(mut self, border: Edges) -> Self {
        self.border = border;
        self
    }

    pub fn vfade_offset(mut self, offset: f32) -> Self {
        self.vfade_offset = Some(offset);
        self
    }

    pub fn hfade_offset(mut self, offset: f32) -> Self {
        self.hfade_offset = Some(offset);
        self
    }

    /// Padding plus border.
    pub fn decoration(&self) -> Edges {
        self.padding + self.border
    }

    /// Fade margins declared by the theme, if any offset is declared.
    pub fn fade_margins(&self) -> Option<Edges> {
        if self.vfade_offset.is_none() && self.hfade_offset.is_none() {
            return None;
        }
        let v = self.vfade_offset.unwrap_or(0.0);
        let h = self.hfade_offset.unwrap_or(0.0);
        Some(Edges::symmetric(v, h))
    }

    /// Turn an outer height hint into a content height hint.
    pub fn adjust_for_height(&self, for_height: Option<f32>) -> Option<f32> {
        let vertical = self.decoration().vertical_total();
        for_height.map(|h| (h - vertical).max(0.0))
    }

    /// Turn an outer width hint into a content width hint.
    pub fn adjust_for_width(&self, for_width: Option<f32>) -> Option<f32> {
        let horizontal = self.decoration().horizontal_total();
        for_width.map(|w| (w - horizontal).max(0.0))
    }

    /// Turn a content width request into an outer width request.
    pub fn adjust_preferred_width(&self, request: SizeRequest) -> SizeRequest {
        request.grow(self.decoration().horizontal_total())
    }

    /// Turn a content height request into an outer height request.
    pub fn adjust_preferred_height(&self, request: SizeRequest) -> SizeRequest {
        request.grow(self.decoration().vertical_total())
    }

    /// The content box inside an allocation.
    pub fn content_box(&self, allocation: Rect) -> Rect {
        allocation.shrink(self.decoration())
    }
}

/// Size configuration of a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBarStyle {
    /// Extent across the scrolling axis.
    pub thickness: f32,

    /// Smallest extent along the scrolling axis.
    pub min_length: f32,
}

impl Default for ScrollBarStyle {
    fn default() -> Self {
        Self {
            thickness: 12.0,
            min_length: 32.0,
        }
    }
}

impl ScrollBarStyle {
    pub fn new(thickness: f32) -> Self {
        Self {
            thickness,
            ..Default::default()
        }
    }

    pub fn min_length(mut self, min_length: f32) -> Self {
        self.min_length = min_length;
        self
    }
}
