use scrollview::{
    Actor, Edges, Policy, ScrollBarStyle, ScrollView, ScrollViewStyle, SizeRequest, Viewport,
};

fn scroll_view_with(child: Viewport) -> ScrollView {
    let mut view = ScrollView::new();
    view.vscroll_bar_mut().set_style(ScrollBarStyle::new(16.0));
    view.hscroll_bar_mut().set_style(ScrollBarStyle::new(16.0));
    view.add_child(Box::new(child)).unwrap();
    view
}

// ============================================================================
// Preferred Width
// ============================================================================

#[test]
fn test_width_without_child_is_zero() {
    let view = ScrollView::new();

    assert_eq!(view.preferred_width(None), SizeRequest::default());
    assert_eq!(view.preferred_height(Some(100.0)), SizeRequest::default());
}

#[test]
fn test_width_automatic_reserves_vscrollbar() {
    let view = scroll_view_with(Viewport::new(200.0, 400.0));

    let request = view.preferred_width(None);

    assert_eq!(request.min, 16.0, "min width only holds the scrollbar");
    assert_eq!(request.natural, 216.0);
}

#[test]
fn test_width_always_reserves_vscrollbar() {
    let mut view = scroll_view_with(Viewport::new(200.0, 10.0));
    view.set_policy(Policy::Automatic, Policy::Always);

    assert_eq!(view.preferred_width(None), SizeRequest::new(16.0, 216.0));
}

#[test]
fn test_width_hpolicy_never_keeps_child_min() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0).min_size(150.0, 400.0));
    view.set_policy(Policy::Never, Policy::Automatic);

    assert_eq!(view.preferred_width(None), SizeRequest::new(166.0, 216.0));
}

#[test]
fn test_width_vpolicy_never_or_external_reserves_nothing() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0));

    view.set_policy(Policy::Automatic, Policy::Never);
    assert_eq!(view.preferred_width(None), SizeRequest::new(0.0, 200.0));

    view.set_policy(Policy::Automatic, Policy::External);
    assert_eq!(view.preferred_width(None), SizeRequest::new(0.0, 200.0));
}

#[test]
fn test_width_overlay_reserves_nothing() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0));
    view.set_overlay_scrollbars(true);

    assert_eq!(view.preferred_width(None), SizeRequest::new(0.0, 200.0));
}

#[test]
fn test_width_hidden_vscrollbar_has_no_footprint() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0));
    view.set_policy(Policy::Automatic, Policy::Always);
    view.vscroll_bar_mut().set_visible(false);

    assert_eq!(view.preferred_width(None), SizeRequest::new(0.0, 200.0));
}

#[test]
fn test_width_adds_decoration() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0));
    view.set_style(
        ScrollViewStyle::new()
            .padding(Edges::symmetric(0.0, 4.0))
            .border(Edges::all(1.0)),
    );

    // 16 + 4 + 4 + 1 + 1
    assert_eq!(view.preferred_width(Some(300.0)), SizeRequest::new(26.0, 226.0));
}

// ============================================================================
// Preferred Height
// ============================================================================

#[test]
fn test_height_automatic_reserves_hscrollbar() {
    let view = scroll_view_with(Viewport::new(200.0, 400.0));

    assert_eq!(view.preferred_height(Some(216.0)), SizeRequest::new(16.0, 416.0));
}

#[test]
fn test_height_vpolicy_never_keeps_child_min() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0).min_size(200.0, 300.0));
    view.set_policy(Policy::Automatic, Policy::Never);

    assert_eq!(view.preferred_height(Some(200.0)), SizeRequest::new(316.0, 416.0));
}

#[test]
fn test_height_hpolicy_never_reserves_nothing() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0));
    view.set_policy(Policy::Never, Policy::Automatic);

    assert_eq!(view.preferred_height(Some(216.0)), SizeRequest::new(0.0, 400.0));
}

#[test]
fn test_height_hpolicy_always_reserves_hscrollbar() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0));
    view.set_policy(Policy::Always, Policy::Automatic);

    assert_eq!(view.preferred_height(Some(216.0)), SizeRequest::new(16.0, 416.0));
}

#[test]
fn test_height_hpolicy_external_reserves_nothing() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0));
    view.set_policy(Policy::External, Policy::Automatic);

    assert_eq!(view.preferred_height(Some(216.0)), SizeRequest::new(0.0, 400.0));
}

#[test]
fn test_height_subtracts_reserved_vscrollbar_from_width() {
    // Reflowing content: 200 wide at natural size, twice as tall at 100.
    let view = scroll_view_with(Viewport::new(200.0, 400.0).reflow());

    // 116 includes the vertical scrollbar, so the child is asked at 100.
    assert_eq!(view.preferred_height(Some(116.0)), SizeRequest::new(16.0, 816.0));
}

#[test]
fn test_height_keeps_width_when_vscrollbar_not_reserved() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0).reflow());
    view.set_policy(Policy::Automatic, Policy::Never);

    // Child gets the full 100 and is asked at 100 -> 800 tall.
    assert_eq!(view.preferred_height(Some(100.0)).natural, 816.0);

    view.set_policy(Policy::Automatic, Policy::Automatic);
    view.set_overlay_scrollbars(true);
    assert_eq!(view.preferred_height(Some(100.0)), SizeRequest::new(0.0, 800.0));
}

#[test]
fn test_height_unconstrained_width() {
    let view = scroll_view_with(Viewport::new(200.0, 400.0).reflow());

    assert_eq!(view.preferred_height(None), SizeRequest::new(16.0, 416.0));
}

#[test]
fn test_height_adds_decoration() {
    let mut view = scroll_view_with(Viewport::new(200.0, 400.0));
    view.set_style(ScrollViewStyle::new().padding(Edges::new(3.0, 0.0, 5.0, 0.0)));

    assert_eq!(view.preferred_height(Some(216.0)), SizeRequest::new(24.0, 424.0));
}
