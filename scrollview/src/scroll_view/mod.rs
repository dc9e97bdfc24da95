//! Single-child container with a pair of scrollbars.
//!
//! The scroll view negotiates height-for-width only. Automatic and Always
//! scrollbars are always included in the reported minimum and natural sizes,
//! so the surrounding layout never needs a second pass to make room for a
//! scrollbar that turns out to be needed. Which scrollbars are actually shown
//! is decided again on every allocation, see [`crate::visibility`].

mod events;
mod layout;
mod render;

pub use render::Part;

use std::rc::Rc;

use crate::actor::{Actor, ActorId, PaintContext};
use crate::adjustment::Adjustment;
use crate::error::ScrollViewError;
use crate::event::{EventResult, ScrollEvent};
use crate::fade::FadeEffect;
use crate::layout::{Rect, SizeRequest};
use crate::notify::{Notifier, Property};
use crate::scrollbar::ScrollBar;
use crate::style::ScrollViewStyle;
use crate::types::{Edges, Orientation, Policy, RequestMode, TextDirection};
use crate::visibility::Visibility;

struct Child {
    id: ActorId,
    actor: Box<dyn Actor>,
}

pub struct ScrollView {
    id: ActorId,
    style: ScrollViewStyle,
    child: Option<Child>,

    hadjustment: Rc<Adjustment>,
    vadjustment: Rc<Adjustment>,
    hscroll: ScrollBar,
    vscroll: ScrollBar,

    hscrollbar_policy: Policy,
    vscrollbar_policy: Policy,
    hscrollbar_visible: bool,
    vscrollbar_visible: bool,

    row_size: Option<f32>,
    column_size: Option<f32>,

    mouse_scroll: bool,
    overlay_scrollbars: bool,
    fade_effect: Option<FadeEffect>,

    text_direction: TextDirection,
    request_mode: RequestMode,
    allocation: Rect,
    relayout_requested: bool,

    notifier: Notifier,
}

impl std::fmt::Debug for ScrollView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollView")
            .field("id", &self.id)
            .field("child", &self.child.as_ref().map(|c| c.actor.name()))
            .field("hscrollbar_policy", &self.hscrollbar_policy)
            .field("vscrollbar_policy", &self.vscrollbar_policy)
            .field("hscrollbar_visible", &self.hscrollbar_visible)
            .field("vscrollbar_visible", &self.vscrollbar_visible)
            .field("overlay_scrollbars", &self.overlay_scrollbars)
            .field("allocation", &self.allocation)
            .finish_non_exhaustive()
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollView {
    /// Create an empty scroll view: both policies Automatic, mouse scrolling
    /// enabled, overlay scrollbars disabled.
    pub fn new() -> Self {
        let hadjustment = Rc::new(Adjustment::new());
        let vadjustment = Rc::new(Adjustment::new());

        Self {
            id: ActorId::next(),
            style: ScrollViewStyle::default(),
            child: None,
            hscroll: ScrollBar::new(Orientation::Horizontal, Rc::clone(&hadjustment)),
            vscroll: ScrollBar::new(Orientation::Vertical, Rc::clone(&vadjustment)),
            hadjustment,
            vadjustment,
            hscrollbar_policy: Policy::Automatic,
            vscrollbar_policy: Policy::Automatic,
            hscrollbar_visible: false,
            vscrollbar_visible: false,
            row_size: None,
            column_size: None,
            mouse_scroll: true,
            overlay_scrollbars: false,
            fade_effect: None,
            text_direction: TextDirection::default(),
            request_mode: RequestMode::default(),
            allocation: Rect::default(),
            relayout_requested: false,
            notifier: Notifier::new(),
        }
    }

    pub fn with_style(mut self, style: ScrollViewStyle) -> Self {
        self.set_style(style);
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn style(&self) -> &ScrollViewStyle {
        &self.style
    }

    /// Apply a new theme style. Declared fade offsets install or update the
    /// fade effect; a style without them leaves the current effect alone.
    pub fn set_style(&mut self, style: ScrollViewStyle) {
        if let Some(margins) = style.fade_margins() {
            self.update_fade_effect(margins);
        }
        self.style = style;
        self.queue_relayout();
    }

    // -------------------------------------------------------------------------
    // Policy and flags
    // -------------------------------------------------------------------------

    /// `(horizontal, vertical)` scrollbar policies.
    pub fn policy(&self) -> (Policy, Policy) {
        (self.hscrollbar_policy, self.vscrollbar_policy)
    }

    /// Set both scrollbar policies at once.
    pub fn set_policy(&mut self, hpolicy: Policy, vpolicy: Policy) {
        if self.hscrollbar_policy == hpolicy && self.vscrollbar_policy == vpolicy {
            return;
        }

        {
            let _batch = self.notifier.freeze();

            if self.hscrollbar_policy != hpolicy {
                self.hscrollbar_policy = hpolicy;
                self.notifier.notify(Property::HscrollbarPolicy);
            }

            if self.vscrollbar_policy != vpolicy {
                self.vscrollbar_policy = vpolicy;
                self.notifier.notify(Property::VscrollbarPolicy);
            }
        }

        self.queue_relayout();
    }

    pub fn mouse_scrolling(&self) -> bool {
        self.mouse_scroll
    }

    /// Enable or disable translating wheel events into scrolling.
    pub fn set_mouse_scrolling(&mut self, enabled: bool) {
        if self.mouse_scroll != enabled {
            self.mouse_scroll = enabled;
            self.notifier.notify(Property::MouseScroll);
        }
    }

    pub fn overlay_scrollbars(&self) -> bool {
        self.overlay_scrollbars
    }

    /// Paint scrollbars over the content instead of making room for them.
    pub fn set_overlay_scrollbars(&mut self, enabled: bool) {
        if self.overlay_scrollbars != enabled {
            self.overlay_scrollbars = enabled;
            self.notifier.notify(Property::OverlayScrollbars);
            self.queue_relayout();
        }
    }

    pub fn text_direction(&self) -> TextDirection {
        self.text_direction
    }

    pub fn set_text_direction(&mut self, direction: TextDirection) {
        if self.text_direction != direction {
            self.text_direction = direction;
            self.queue_relayout();
        }
    }

    pub fn request_mode(&self) -> RequestMode {
        self.request_mode
    }

    pub fn set_request_mode(&mut self, mode: RequestMode) {
        if self.request_mode != mode {
            self.request_mode = mode;
            self.queue_relayout();
        }
    }

    // -------------------------------------------------------------------------
    // Step increments
    // -------------------------------------------------------------------------

    /// Vertical step increment, read from the vertical adjustment.
    pub fn row_size(&self) -> f32 {
        self.vadjustment.step_increment() as f32
    }

    /// Set the vertical step increment. A negative value clears the
    /// override and restores the adjustment's default step.
    pub fn set_row_size(&mut self, row_size: f32) {
        self.row_size = apply_step(&self.vadjustment, row_size);
    }

    /// Horizontal step increment, read from the horizontal adjustment.
    pub fn column_size(&self) -> f32 {
        self.hadjustment.step_increment() as f32
    }

    /// Set the horizontal step increment. A negative value clears the
    /// override and restores the adjustment's default step.
    pub fn set_column_size(&mut self, column_size: f32) {
        self.column_size = apply_step(&self.hadjustment, column_size);
    }

    /// Whether an explicit vertical step is set.
    pub fn row_size_set(&self) -> bool {
        self.row_size.is_some()
    }

    /// Whether an explicit horizontal step is set.
    pub fn column_size_set(&self) -> bool {
        self.column_size.is_some()
    }

    // -------------------------------------------------------------------------
    // Parts
    // -------------------------------------------------------------------------

    pub fn hscroll_bar(&self) -> &ScrollBar {
        &self.hscroll
    }

    pub fn vscroll_bar(&self) -> &ScrollBar {
        &self.vscroll
    }

    pub fn hscroll_bar_mut(&mut self) -> &mut ScrollBar {
        self.relayout_requested = true;
        &mut self.hscroll
    }

    pub fn vscroll_bar_mut(&mut self) -> &mut ScrollBar {
        self.relayout_requested = true;
        &mut self.vscroll
    }

    pub fn hadjustment(&self) -> &Rc<Adjustment> {
        &self.hadjustment
    }

    pub fn vadjustment(&self) -> &Rc<Adjustment> {
        &self.vadjustment
    }

    pub fn hscrollbar_visible(&self) -> bool {
        self.hscrollbar_visible
    }

    pub fn vscrollbar_visible(&self) -> bool {
        self.vscrollbar_visible
    }

    /// Both visibility flags as resolved by the last allocation.
    pub fn visibility(&self) -> Visibility {
        Visibility::new(self.hscrollbar_visible, self.vscrollbar_visible)
    }

    pub fn fade_effect(&self) -> Option<&FadeEffect> {
        self.fade_effect.as_ref()
    }

    /// Set the fade lengths of all four edges. All zero removes the effect.
    pub fn update_fade_effect(&mut self, margins: Edges) {
        if margins.is_zero() {
            if self.fade_effect.take().is_some() {
                log::debug!("[scroll_view] fade effect removed");
            }
            return;
        }

        match &mut self.fade_effect {
            Some(effect) => effect.set_margins(margins),
            None => {
                log::debug!("[scroll_view] fade effect installed: {:?}", margins);
                self.fade_effect = Some(FadeEffect::new(margins));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Observers and relayout
    // -------------------------------------------------------------------------

    /// Call `callback` whenever `property` changes.
    pub fn connect_notify<F>(&self, property: Property, callback: F)
    where
        F: Fn(Property) + 'static,
    {
        self.notifier.connect(property, callback);
    }

    /// Whether something changed that needs a new layout pass.
    /// Cleared by `allocate`.
    pub fn relayout_requested(&self) -> bool {
        self.relayout_requested
    }

    fn queue_relayout(&mut self) {
        self.relayout_requested = true;
    }

    // -------------------------------------------------------------------------
    // Child
    // -------------------------------------------------------------------------

    /// Add the scrolled child and bind both adjustments into it.
    ///
    /// The actor must be scrollable and the view must be empty; otherwise the
    /// actor is refused and dropped.
    pub fn add_child(&mut self, mut actor: Box<dyn Actor>) -> Result<ActorId, ScrollViewError> {
        let name = actor.name().to_string();

        if let Some(existing) = &self.child {
            log::warn!(
                "[scroll_view] refusing '{}': already contains '{}'",
                name,
                existing.actor.name()
            );
            return Err(ScrollViewError::ChildExists(existing.actor.name().to_string()));
        }

        let Some(scrollable) = actor.as_scrollable_mut() else {
            let err = ScrollViewError::NotScrollable(name);
            log::warn!("[scroll_view] {}", err);
            return Err(err);
        };
        scrollable.set_adjustments(
            Some(Rc::clone(&self.hadjustment)),
            Some(Rc::clone(&self.vadjustment)),
        );

        let id = ActorId::next();
        log::debug!("[scroll_view] added child '{}' as {:?}", name, id);
        self.child = Some(Child { id, actor });
        self.queue_relayout();
        Ok(id)
    }

    /// Remove the child and hand it back, unbinding its adjustments first.
    ///
    /// Scrollbars cannot be removed; any other id is not ours.
    pub fn remove_child(&mut self, id: ActorId) -> Result<Box<dyn Actor>, ScrollViewError> {
        let mut actor = match self.child.take() {
            Some(child) if child.id == id => child.actor,
            other => {
                self.child = other;
                let err = if id == self.hscroll.id() || id == self.vscroll.id() {
                    ScrollViewError::PermanentScrollBar(id)
                } else {
                    ScrollViewError::UnknownChild(id)
                };
                log::warn!("[scroll_view] {}", err);
                return Err(err);
            }
        };

        let Some(scrollable) = actor.as_scrollable_mut() else {
            panic!(
                "ScrollView child '{}' no longer exposes its adjustments",
                actor.name()
            );
        };
        scrollable.set_adjustments(None, None);

        log::debug!("[scroll_view] removed child '{}'", actor.name());
        self.queue_relayout();
        Ok(actor)
    }

    /// Id of the current child.
    pub fn child_id(&self) -> Option<ActorId> {
        self.child.as_ref().map(|child| child.id)
    }

    pub fn child(&self) -> Option<&dyn Actor> {
        let child = self.child.as_ref()?;
        let actor: &dyn Actor = child.actor.as_ref();
        Some(actor)
    }

    pub fn child_mut(&mut self) -> Option<&mut dyn Actor> {
        let child = self.child.as_mut()?;
        let actor: &mut dyn Actor = child.actor.as_mut();
        Some(actor)
    }
}

/// Write an explicit step through to `adjustment`, or restore its default
/// for a negative `step`. Returns the override to remember.
fn apply_step(adjustment: &Adjustment, step: f32) -> Option<f32> {
    if step < 0.0 {
        adjustment.reset_step_increment();
        None
    } else {
        adjustment.set_step_increment(f64::from(step));
        Some(step)
    }
}

impl Actor for ScrollView {
    fn name(&self) -> &str {
        "ScrollView"
    }

    fn preferred_width(&self, for_height: Option<f32>) -> SizeRequest {
        self.width_request(for_height)
    }

    fn preferred_height(&self, for_width: Option<f32>) -> SizeRequest {
        self.height_request(for_width)
    }

    fn allocate(&mut self, rect: Rect) {
        self.allocate_parts(rect);
    }

    fn allocation(&self) -> Rect {
        self.allocation
    }

    fn paint(&self, ctx: &mut PaintContext) {
        self.paint_parts(ctx);
    }

    fn pick(&self, x: f32, y: f32) -> bool {
        self.pick_part(x, y).is_some()
    }

    fn handle_scroll(&mut self, event: &ScrollEvent) -> EventResult {
        self.scroll(event)
    }
}
