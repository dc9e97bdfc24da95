//! Deciding which scrollbars are shown for a concrete size.
//!
//! The child's minimum size is its size when no scrollbar is needed, so
//! visibility can be decided by comparing minimum sizes with the available
//! space, without looking inside the adjustments. Automatic scrollbars start
//! from the assumption that none is needed and are added while the content
//! still overflows. Content exactly as large as the space never overflows.

use crate::actor::Actor;
use crate::types::Policy;

/// Which scrollbars are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Visibility {
    pub const fn new(horizontal: bool, vertical: bool) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Content-box size and scrollbar footprints for one allocation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AvailableSpace {
    pub width: f32,
    pub height: f32,
    /// Width of the vertical scrollbar.
    pub scrollbar_width: f32,
    /// Height of the horizontal scrollbar.
    pub scrollbar_height: f32,
}

/// Resolve scrollbar visibility for `space`.
///
/// With both policies Automatic this is a two-pass approximation: a vertical
/// scrollbar that appears narrows the child, so its minimum height is asked
/// once more at the narrower width. There is no third pass, even for children
/// whose height does not shrink monotonically with width.
pub fn resolve_visibility(
    hpolicy: Policy,
    vpolicy: Policy,
    child: Option<&dyn Actor>,
    space: AvailableSpace,
) -> Visibility {
    let Some(child) = child else {
        return Visibility::new(hpolicy.is_managed(), vpolicy.is_managed());
    };

    let AvailableSpace {
        width: avail_width,
        height: avail_height,
        scrollbar_width: sb_width,
        scrollbar_height: sb_height,
    } = space;

    let min_width = child.preferred_width(None).min;
    let min_height_for = |width: f32| child.preferred_height(Some(width)).min;

    match (hpolicy, vpolicy) {
        (Policy::Automatic, Policy::Automatic) => {
            // Pass one: try without a vertical scrollbar.
            let min_height = min_height_for(avail_width);
            let vertical = min_height > avail_height;
            let horizontal = min_width > avail_width - if vertical { sb_width } else { 0.0 };
            let vertical = min_height > avail_height - if horizontal { sb_height } else { 0.0 };

            if !vertical {
                return Visibility::new(horizontal, vertical);
            }

            // Pass two: the vertical scrollbar narrows the child.
            let narrowed = (avail_width - sb_width).max(0.0);
            let min_height = min_height_for(narrowed);
            let horizontal = min_width > avail_width - sb_width;
            log::trace!(
                "[visibility] second pass at width {}: min height {}, hscrollbar {}",
                narrowed,
                min_height,
                horizontal
            );
            Visibility::new(horizontal, vertical)
        }
        (_, Policy::Automatic) => {
            let horizontal = hpolicy == Policy::Always;
            let min_height = min_height_for(avail_width);
            let vertical = min_height > avail_height - if horizontal { sb_height } else { 0.0 };
            Visibility::new(horizontal, vertical)
        }
        (Policy::Automatic, _) => {
            let vertical = vpolicy == Policy::Always;
            let horizontal = min_width > avail_width - if vertical { sb_width } else { 0.0 };
            Visibility::new(horizontal, vertical)
        }
        _ => Visibility::new(hpolicy == Policy::Always, vpolicy == Policy::Always),
    }
}
