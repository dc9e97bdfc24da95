//! Value model for one scroll axis.

use std::cell::Cell;

/// Step increment an adjustment starts with and returns to when an explicit
/// step is cleared.
pub const DEFAULT_STEP_INCREMENT: f64 = 0.0;

/// Scroll position and range of one axis.
///
/// Shared by reference (`Rc<Adjustment>`) between the scroll view, its
/// scrollbar and the bound child, so every setter takes `&self`.
#[derive(Debug)]
pub struct Adjustment {
    value: Cell<f64>,
    lower: Cell<f64>,
    upper: Cell<f64>,
    page_size: Cell<f64>,
    page_increment: Cell<f64>,
    step_increment: Cell<f64>,
    default_step_increment: f64,
}

impl Default for Adjustment {
    fn default() -> Self {
        Self::new()
    }
}

impl Adjustment {
    pub fn new() -> Self {
        Self::with_step_increment(DEFAULT_STEP_INCREMENT)
    }

    /// Create an adjustment whose default step increment is `step`.
    pub fn with_step_increment(step: f64) -> Self {
        Self {
            value: Cell::new(0.0),
            lower: Cell::new(0.0),
            upper: Cell::new(0.0),
            page_size: Cell::new(0.0),
            page_increment: Cell::new(0.0),
            step_increment: Cell::new(step),
            default_step_increment: step,
        }
    }

    pub fn value(&self) -> f64 {
        self.value.get()
    }

    pub fn lower(&self) -> f64 {
        self.lower.get()
    }

    pub fn upper(&self) -> f64 {
        self.upper.get()
    }

    pub fn page_size(&self) -> f64 {
        self.page_size.get()
    }

    pub fn page_increment(&self) -> f64 {
        self.page_increment.get()
    }

    pub fn step_increment(&self) -> f64 {
        self.step_increment.get()
    }

    pub fn default_step_increment(&self) -> f64 {
        self.default_step_increment
    }

    pub fn set_step_increment(&self, step: f64) {
        self.step_increment.set(step);
    }

    /// Go back to the step increment the adjustment was created with.
    pub fn reset_step_increment(&self) {
        self.step_increment.set(self.default_step_increment);
    }

    /// Largest value the adjustment can take.
    pub fn max_value(&self) -> f64 {
        (self.upper() - self.page_size()).max(self.lower())
    }

    /// Set the value, clamped to `[lower, upper - page_size]`.
    /// Returns true if the value changed.
    pub fn set_value(&self, value: f64) -> bool {
        let clamped = value.clamp(self.lower(), self.max_value());
        if clamped == self.value() {
            return false;
        }
        self.value.set(clamped);
        true
    }

    /// Update the range after the scrolled content was laid out.
    /// The current value is re-clamped into the new range.
    pub fn set_range(&self, lower: f64, upper: f64, page_size: f64, page_increment: f64) {
        self.lower.set(lower);
        self.upper.set(upper.max(lower));
        self.page_size.set(page_size.max(0.0));
        self.page_increment.set(page_increment);
        self.set_value(self.value());
    }

    /// Move the value by one scroll event worth of `delta`.
    ///
    /// A delta of 1.0 moves by `page_size^(2/3)`, so larger views scroll
    /// further per wheel click without moving a whole page.
    pub fn adjust_for_scroll_event(&self, delta: f64) -> bool {
        let scroll_unit = self.page_size().powf(2.0 / 3.0);
        self.set_value(self.value() + delta * scroll_unit)
    }
}
