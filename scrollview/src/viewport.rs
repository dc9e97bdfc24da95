//! A scrollable child with a known content size.

use std::rc::Rc;

use crate::actor::{Actor, Scrollable};
use crate::adjustment::Adjustment;
use crate::layout::{Rect, SizeRequest};

/// Scrollable content of a fixed size, optionally reflowing like wrapped
/// text: narrower than its natural width, it grows taller so its area stays
/// the same.
///
/// On allocation it publishes its content size and visible page into the
/// bound adjustments.
#[derive(Debug)]
pub struct Viewport {
    name: String,
    min_width: f32,
    natural_width: f32,
    min_height: f32,
    natural_height: f32,
    reflow: bool,
    hadjustment: Option<Rc<Adjustment>>,
    vadjustment: Option<Rc<Adjustment>>,
    allocation: Rect,
}

impl Viewport {
    /// Content whose minimum and natural size are both `width` x `height`.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            name: "viewport".to_string(),
            min_width: width,
            natural_width: width,
            min_height: height,
            natural_height: height,
            reflow: false,
            hadjustment: None,
            vadjustment: None,
            allocation: Rect::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set a minimum size below the natural size.
    pub fn min_size(mut self, width: f32, height: f32) -> Self {
        self.min_width = width;
        self.min_height = height;
        self
    }

    /// Grow taller when given less than the natural width.
    pub fn reflow(mut self) -> Self {
        self.reflow = true;
        self
    }

    fn height_scale(&self, for_width: Option<f32>) -> f32 {
        match for_width {
            Some(width) if self.reflow && width > 0.0 && width < self.natural_width => {
                self.natural_width / width
            }
            _ => 1.0,
        }
    }

    /// Current scroll position as `(x, y)`.
    pub fn scroll_offset(&self) -> (f64, f64) {
        let x = self.hadjustment.as_ref().map_or(0.0, |adj| adj.value());
        let y = self.vadjustment.as_ref().map_or(0.0, |adj| adj.value());
        (x, y)
    }
}

impl Actor for Viewport {
    fn name(&self) -> &str {
        &self.name
    }

    fn preferred_width(&self, _for_height: Option<f32>) -> SizeRequest {
        SizeRequest::new(self.min_width, self.natural_width)
    }

    fn preferred_height(&self, for_width: Option<f32>) -> SizeRequest {
        let scale = self.height_scale(for_width);
        SizeRequest::new(self.min_height * scale, self.natural_height * scale)
    }

    fn allocate(&mut self, rect: Rect) {
        self.allocation = rect;

        let content_height = self.natural_height * self.height_scale(Some(rect.width));

        if let Some(adj) = &self.hadjustment {
            let page = f64::from(rect.width);
            adj.set_range(0.0, f64::from(self.natural_width), page, page);
        }
        if let Some(adj) = &self.vadjustment {
            let page = f64::from(rect.height);
            adj.set_range(0.0, f64::from(content_height), page, page);
        }
    }

    fn allocation(&self) -> Rect {
        self.allocation
    }

    fn as_scrollable(&self) -> Option<&dyn Scrollable> {
        Some(self)
    }

    fn as_scrollable_mut(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }
}

impl Scrollable for Viewport {
    fn set_adjustments(
        &mut self,
        hadjustment: Option<Rc<Adjustment>>,
        vadjustment: Option<Rc<Adjustment>>,
    ) {
        self.hadjustment = hadjustment;
        self.vadjustment = vadjustment;
    }

    fn adjustments(&self) -> (Option<Rc<Adjustment>>, Option<Rc<Adjustment>>) {
        (self.hadjustment.clone(), self.vadjustment.clone())
    }
}
