use super::ScrollView;
use crate::actor::Actor;
use crate::layout::{Rect, SizeRequest};
use crate::notify::Property;
use crate::types::{Policy, RequestMode, TextDirection};
use crate::visibility::{resolve_visibility, AvailableSpace, Visibility};

impl ScrollView {
    /// Width of the vertical scrollbar; zero while the bar actor is hidden.
    fn scrollbar_width(&self, for_height: Option<f32>) -> f32 {
        if self.vscroll.is_visible() {
            self.vscroll.preferred_width(for_height).min
        } else {
            0.0
        }
    }

    /// Height of the horizontal scrollbar; zero while the bar actor is hidden.
    fn scrollbar_height(&self, for_width: Option<f32>) -> f32 {
        if self.hscroll.is_visible() {
            self.hscroll.preferred_height(for_width).min
        } else {
            0.0
        }
    }

    /// Whether the vertical scrollbar takes layout space.
    fn reserves_vscrollbar(&self) -> bool {
        self.vscrollbar_policy.is_managed() && !self.overlay_scrollbars
    }

    /// Whether the horizontal scrollbar takes layout space.
    fn reserves_hscrollbar(&self) -> bool {
        self.hscrollbar_policy.is_managed() && !self.overlay_scrollbars
    }

    pub(super) fn width_request(&self, for_height: Option<f32>) -> SizeRequest {
        let Some(child) = self.child() else {
            return SizeRequest::default();
        };

        let for_height = self.style.adjust_for_height(for_height);

        // Width is negotiated before height, so the child is never asked for
        // its width at a given height.
        let child_request = child.preferred_width(None);

        // Anything but Never can scroll horizontally, so the minimum width
        // does not depend on the child. It should really be the scrollbar's
        // minimum width, which is not well defined without knowing the height.
        let min = match self.hscrollbar_policy {
            Policy::Never => child_request.min,
            Policy::Always | Policy::Automatic | Policy::External => 0.0,
        };
        let mut request = SizeRequest::new(min, child_request.natural);

        // Whether an automatic scrollbar is needed is only known once the
        // height is assigned, so its space is always requested.
        if self.reserves_vscrollbar() {
            request = request.grow(self.scrollbar_width(for_height));
        }

        log::trace!(
            "[scroll_view] preferred width for {:?}: {:?}",
            for_height,
            request
        );
        self.style.adjust_preferred_width(request)
    }

    pub(super) fn height_request(&self, for_width: Option<f32>) -> SizeRequest {
        let Some(child) = self.child() else {
            return SizeRequest::default();
        };

        let mut for_width = self.style.adjust_for_width(for_width);

        // The width we reported included the vertical scrollbar; the child
        // only gets what is left of it.
        if self.reserves_vscrollbar() {
            let sb_width = self.scrollbar_width(None);
            for_width = for_width.map(|width| (width - sb_width).max(0.0));
        }

        let child_request = child.preferred_height(for_width);

        let min = match self.vscrollbar_policy {
            Policy::Never => child_request.min,
            Policy::Always | Policy::Automatic | Policy::External => 0.0,
        };
        let mut request = SizeRequest::new(min, child_request.natural);

        if self.reserves_hscrollbar() {
            request = request.grow(self.scrollbar_height(for_width));
        }

        log::trace!(
            "[scroll_view] preferred height for {:?}: {:?}",
            for_width,
            request
        );
        self.style.adjust_preferred_height(request)
    }

    pub(super) fn allocate_parts(&mut self, rect: Rect) {
        self.allocation = rect;
        let content = self.style.content_box(rect);

        // Ask the axis negotiated first without a constraint so the two
        // queries do not depend on each other.
        let (sb_width, sb_height) = match self.request_mode {
            RequestMode::HeightForWidth => {
                let sb_width = self.scrollbar_width(None);
                (sb_width, self.scrollbar_height(Some(sb_width)))
            }
            RequestMode::WidthForHeight => {
                let sb_height = self.scrollbar_height(None);
                (self.scrollbar_width(Some(sb_height)), sb_height)
            }
        };

        let visibility = resolve_visibility(
            self.hscrollbar_policy,
            self.vscrollbar_policy,
            self.child(),
            AvailableSpace {
                width: content.width,
                height: content.height,
                scrollbar_width: sb_width,
                scrollbar_height: sb_height,
            },
        );

        let rtl = self.text_direction == TextDirection::Rtl;

        // Scrollbars get their place whether shown or not; hidden ones are
        // skipped by paint and pick.
        let vscroll_x = if rtl {
            content.left()
        } else {
            content.right() - sb_width
        };
        let vscroll_height = content.height - if visibility.horizontal { sb_height } else { 0.0 };
        self.vscroll.allocate(Rect::new(
            vscroll_x,
            content.top(),
            sb_width,
            vscroll_height.max(0.0),
        ));

        let beside_vscroll = if visibility.vertical { sb_width } else { 0.0 };
        let hscroll_x = if rtl {
            content.left() + beside_vscroll
        } else {
            content.left()
        };
        self.hscroll.allocate(Rect::new(
            hscroll_x,
            content.bottom() - sb_height,
            (content.width - beside_vscroll).max(0.0),
            sb_height,
        ));

        // Never, External and overlay scrollbars leave the child its full size.
        let child_sb_width = if self.reserves_vscrollbar() { sb_width } else { 0.0 };
        let child_sb_height = if self.reserves_hscrollbar() { sb_height } else { 0.0 };
        let child_x = if rtl {
            content.left() + child_sb_width
        } else {
            content.left()
        };
        let child_rect = Rect::new(
            child_x,
            content.top(),
            (content.width - child_sb_width).max(0.0),
            (content.height - child_sb_height).max(0.0),
        );
        if let Some(child) = self.child_mut() {
            child.allocate(child_rect);
        }

        self.update_visibility(visibility);
        self.relayout_requested = false;
    }

    /// Store the resolved visibility, notifying each changed axis once after
    /// both are updated.
    fn update_visibility(&mut self, visibility: Visibility) {
        let _batch = self.notifier.freeze();

        if self.hscrollbar_visible != visibility.horizontal {
            self.hscrollbar_visible = visibility.horizontal;
            log::debug!(
                "[scroll_view] hscrollbar visible: {}",
                visibility.horizontal
            );
            self.notifier.notify(Property::HscrollbarVisible);
        }

        if self.vscrollbar_visible != visibility.vertical {
            self.vscrollbar_visible = visibility.vertical;
            log::debug!("[scroll_view] vscrollbar visible: {}", visibility.vertical);
            self.notifier.notify(Property::VscrollbarVisible);
        }
    }
}
