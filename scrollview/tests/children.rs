use std::cell::RefCell;
use std::rc::Rc;

use scrollview::{
    Actor, Adjustment, Rect, Scrollable, ScrollView, ScrollViewError, SizeRequest, Viewport,
};

/// Plain actor without the scrollable capability.
struct Label {
    allocation: Rect,
}

impl Actor for Label {
    fn name(&self) -> &str {
        "label"
    }

    fn preferred_width(&self, _for_height: Option<f32>) -> SizeRequest {
        SizeRequest::fixed(40.0)
    }

    fn preferred_height(&self, _for_width: Option<f32>) -> SizeRequest {
        SizeRequest::fixed(10.0)
    }

    fn allocate(&mut self, rect: Rect) {
        self.allocation = rect;
    }

    fn allocation(&self) -> Rect {
        self.allocation
    }
}

/// Scrollable actor that records binding and teardown order.
struct Probe {
    log: Rc<RefCell<Vec<String>>>,
    hadjustment: Option<Rc<Adjustment>>,
    vadjustment: Option<Rc<Adjustment>>,
}

impl Drop for Probe {
    fn drop(&mut self) {
        let bound = self.hadjustment.is_some() || self.vadjustment.is_some();
        self.log.borrow_mut().push(format!("drop bound={bound}"));
    }
}

impl Actor for Probe {
    fn name(&self) -> &str {
        "probe"
    }

    fn preferred_width(&self, _for_height: Option<f32>) -> SizeRequest {
        SizeRequest::fixed(10.0)
    }

    fn preferred_height(&self, _for_width: Option<f32>) -> SizeRequest {
        SizeRequest::fixed(10.0)
    }

    fn allocate(&mut self, _rect: Rect) {}

    fn allocation(&self) -> Rect {
        Rect::default()
    }

    fn as_scrollable(&self) -> Option<&dyn Scrollable> {
        Some(self)
    }

    fn as_scrollable_mut(&mut self) -> Option<&mut dyn Scrollable> {
        Some(self)
    }
}

impl Scrollable for Probe {
    fn set_adjustments(&mut self, h: Option<Rc<Adjustment>>, v: Option<Rc<Adjustment>>) {
        let entry = if h.is_some() && v.is_some() { "bind" } else { "unbind" };
        self.log.borrow_mut().push(entry.to_string());
        self.hadjustment = h;
        self.vadjustment = v;
    }

    fn adjustments(&self) -> (Option<Rc<Adjustment>>, Option<Rc<Adjustment>>) {
        (self.hadjustment.clone(), self.vadjustment.clone())
    }
}

// ============================================================================
// Adding
// ============================================================================

#[test]
fn test_add_binds_view_adjustments() {
    let mut view = ScrollView::new();

    let id = view.add_child(Box::new(Viewport::new(100.0, 100.0))).unwrap();

    assert_eq!(view.child_id(), Some(id));
    let (h, v) = view.child().unwrap().as_scrollable().unwrap().adjustments();
    assert!(Rc::ptr_eq(&h.unwrap(), view.hadjustment()));
    assert!(Rc::ptr_eq(&v.unwrap(), view.vadjustment()));
}

#[test]
fn test_scrollbars_share_view_adjustments() {
    let view = ScrollView::new();

    assert!(Rc::ptr_eq(view.hscroll_bar().adjustment(), view.hadjustment()));
    assert!(Rc::ptr_eq(view.vscroll_bar().adjustment(), view.vadjustment()));
}

#[test]
fn test_add_non_scrollable_is_refused() {
    let mut view = ScrollView::new();

    let result = view.add_child(Box::new(Label {
        allocation: Rect::default(),
    }));

    assert_eq!(result, Err(ScrollViewError::NotScrollable("label".to_string())));
    assert!(view.child().is_none());
    assert!(!view.relayout_requested());
}

#[test]
fn test_add_second_child_is_refused() {
    let mut view = ScrollView::new();
    let first = view.add_child(Box::new(Viewport::new(1.0, 1.0).named("first"))).unwrap();

    let result = view.add_child(Box::new(Viewport::new(1.0, 1.0).named("second")));

    assert_eq!(result, Err(ScrollViewError::ChildExists("first".to_string())));
    assert_eq!(view.child_id(), Some(first));
    assert_eq!(view.child().unwrap().name(), "first");
}

// ============================================================================
// Removing
// ============================================================================

#[test]
fn test_remove_unbinds_adjustments() {
    let mut view = ScrollView::new();
    let id = view.add_child(Box::new(Viewport::new(100.0, 100.0))).unwrap();

    let removed = view.remove_child(id).unwrap();

    let (h, v) = removed.as_scrollable().unwrap().adjustments();
    assert!(h.is_none());
    assert!(v.is_none());
    assert!(view.child().is_none());
    assert_eq!(view.child_id(), None);
}

#[test]
fn test_remove_unbinds_before_release() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut view = ScrollView::new();
    let id = view
        .add_child(Box::new(Probe {
            log: Rc::clone(&log),
            hadjustment: None,
            vadjustment: None,
        }))
        .unwrap();

    let removed = view.remove_child(id).unwrap();
    drop(removed);

    assert_eq!(*log.borrow(), vec!["bind", "unbind", "drop bound=false"]);
}

#[test]
fn test_remove_unknown_actor_is_refused() {
    let mut view = ScrollView::new();
    let id = view.add_child(Box::new(Viewport::new(100.0, 100.0))).unwrap();
    let stranger = scrollview::ActorId::next();

    let result = view.remove_child(stranger);

    assert!(matches!(result, Err(ScrollViewError::UnknownChild(other)) if other == stranger));
    assert_eq!(view.child_id(), Some(id));
}

#[test]
fn test_remove_twice_is_refused() {
    let mut view = ScrollView::new();
    let id = view.add_child(Box::new(Viewport::new(100.0, 100.0))).unwrap();
    view.remove_child(id).unwrap();

    assert!(matches!(
        view.remove_child(id),
        Err(ScrollViewError::UnknownChild(_))
    ));
}

#[test]
fn test_scrollbars_cannot_be_removed() {
    let mut view = ScrollView::new();
    let hscroll = view.hscroll_bar().id();
    let vscroll = view.vscroll_bar().id();

    assert!(matches!(
        view.remove_child(hscroll),
        Err(ScrollViewError::PermanentScrollBar(id)) if id == hscroll
    ));
    assert!(matches!(
        view.remove_child(vscroll),
        Err(ScrollViewError::PermanentScrollBar(id)) if id == vscroll
    ));
}

#[test]
fn test_refused_remove_keeps_child_bound() {
    let mut view = ScrollView::new();
    let id = view.add_child(Box::new(Viewport::new(100.0, 100.0))).unwrap();
    let vscroll = view.vscroll_bar().id();

    assert!(view.remove_child(vscroll).is_err());
    assert!(view.remove_child(scrollview::ActorId::next()).is_err());

    assert_eq!(view.child_id(), Some(id));
    let (h, v) = view.child().unwrap().as_scrollable().unwrap().adjustments();
    assert!(Rc::ptr_eq(&h.unwrap(), view.hadjustment()));
    assert!(Rc::ptr_eq(&v.unwrap(), view.vadjustment()));

    assert!(view.remove_child(id).is_ok());
}

#[test]
fn test_readd_after_remove() {
    let mut view = ScrollView::new();
    let id = view.add_child(Box::new(Viewport::new(100.0, 100.0))).unwrap();
    let removed = view.remove_child(id).unwrap();

    let again = view.add_child(removed).unwrap();

    assert_ne!(again, id);
    let (h, _) = view.child().unwrap().as_scrollable().unwrap().adjustments();
    assert!(Rc::ptr_eq(&h.unwrap(), view.hadjustment()));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ScrollViewError::NotScrollable("label".to_string()).to_string(),
        "Attempting to add an actor of type 'label' to a ScrollView, but the actor is not scrollable"
    );
    assert_eq!(
        ScrollViewError::ChildExists("viewport".to_string()).to_string(),
        "ScrollView already contains a child ('viewport')"
    );
}
