//! Capabilities shared by everything the scroll view lays out.

use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::adjustment::Adjustment;
use crate::event::{EventResult, ScrollEvent};
use crate::layout::{Rect, SizeRequest};
use crate::types::Edges;

/// Identity of an actor inside a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(u64);

impl ActorId {
    /// Allocate a fresh, process-unique id.
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A node of the layout tree.
///
/// Layout follows height-for-width negotiation: `preferred_width` is asked
/// first, then `preferred_height` for the chosen width, then `allocate`.
/// `None` as a size hint means "unconstrained".
pub trait Actor {
    /// Type name used in diagnostics.
    fn name(&self) -> &str;

    fn preferred_width(&self, for_height: Option<f32>) -> SizeRequest;

    fn preferred_height(&self, for_width: Option<f32>) -> SizeRequest;

    fn allocate(&mut self, rect: Rect);

    /// The rectangle given by the last `allocate`.
    fn allocation(&self) -> Rect;

    fn paint(&self, ctx: &mut PaintContext) {
        ctx.push(PaintOp::Actor {
            name: self.name().to_string(),
            rect: self.allocation(),
        });
    }

    /// Whether the point hits this actor.
    fn pick(&self, x: f32, y: f32) -> bool {
        self.allocation().contains(x, y)
    }

    fn handle_scroll(&mut self, _event: &ScrollEvent) -> EventResult {
        EventResult::Ignored
    }

    /// The scrollable capability, if this actor has one.
    fn as_scrollable(&self) -> Option<&dyn Scrollable> {
        None
    }

    fn as_scrollable_mut(&mut self) -> Option<&mut dyn Scrollable> {
        None
    }
}

/// Actors that can be moved around by a pair of adjustments.
///
/// The reported minimum size of a scrollable is the size at which it needs
/// no scrollbar. Bound adjustments may be read and have their range updated,
/// but their identity belongs to the container that bound them.
pub trait Scrollable {
    /// Bind (`Some`) or unbind (`None`) the horizontal and vertical adjustments.
    fn set_adjustments(
        &mut self,
        hadjustment: Option<Rc<Adjustment>>,
        vadjustment: Option<Rc<Adjustment>>,
    );

    /// The currently bound adjustments.
    fn adjustments(&self) -> (Option<Rc<Adjustment>>, Option<Rc<Adjustment>>);
}

/// One entry of a display list.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Background { rect: Rect },
    Actor { name: String, rect: Rect },
    /// Edge fade applied over everything painted before it.
    Fade { rect: Rect, margins: Edges },
}

/// Display list collected by a paint walk.
#[derive(Debug, Default)]
pub struct PaintContext {
    ops: Vec<PaintOp>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: PaintOp) {
        self.ops.push(op);
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Names of the actors painted, in paint order.
    pub fn painted_actors(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PaintOp::Actor { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }
}
