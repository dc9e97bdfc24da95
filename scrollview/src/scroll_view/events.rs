use super::ScrollView;
use crate::adjustment::Adjustment;
use crate::event::{EventResult, ScrollDirection, ScrollEvent};
use crate::types::TextDirection;

impl ScrollView {
    /// Translate a wheel or touchpad event into adjustment movement.
    ///
    /// Ignored while mouse scrolling is disabled, so the event reaches the
    /// view's ancestors instead.
    pub fn scroll(&mut self, event: &ScrollEvent) -> EventResult {
        if !self.mouse_scroll {
            return EventResult::Ignored;
        }

        // The platform also delivers the real event this one was made from.
        if event.pointer_emulated {
            return EventResult::Consumed;
        }

        let rtl = self.text_direction == TextDirection::Rtl;

        match event.direction {
            ScrollDirection::Smooth { delta_x, delta_y } => {
                let delta_x = if rtl { -delta_x } else { delta_x };
                self.hadjustment.adjust_for_scroll_event(delta_x);
                self.vadjustment.adjust_for_scroll_event(delta_y);
            }
            ScrollDirection::Up | ScrollDirection::Down => {
                adjust_with_direction(&self.vadjustment, event.direction);
            }
            ScrollDirection::Left | ScrollDirection::Right => {
                let direction = if rtl {
                    event.direction.mirrored()
                } else {
                    event.direction
                };
                adjust_with_direction(&self.hadjustment, direction);
            }
        }

        log::trace!(
            "[scroll_view] scrolled to ({}, {})",
            self.hadjustment.value(),
            self.vadjustment.value()
        );
        EventResult::Consumed
    }

    /// Handle a crossterm mouse event; anything but a wheel event is ignored.
    pub fn handle_mouse_event(&mut self, event: &crossterm::event::MouseEvent) -> EventResult {
        match ScrollEvent::from_crossterm(event) {
            Some(scroll) => self.scroll(&scroll),
            None => EventResult::Ignored,
        }
    }
}

fn adjust_with_direction(adjustment: &Adjustment, direction: ScrollDirection) {
    let delta = match direction {
        ScrollDirection::Up | ScrollDirection::Left => -1.0,
        ScrollDirection::Down | ScrollDirection::Right => 1.0,
        ScrollDirection::Smooth { .. } => {
            unreachable!("smooth scroll events carry their own deltas")
        }
    };
    adjustment.adjust_for_scroll_event(delta);
}
