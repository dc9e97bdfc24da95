/// When a scrollbar is shown on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Policy {
    /// Never shown; the child is given its full minimum size on this axis.
    Never,
    /// Always shown, regardless of content size.
    Always,
    /// Shown only when the content does not fit.
    #[default]
    Automatic,
    /// Scrolling is possible, but the scrollbar is provided elsewhere.
    External,
}

impl Policy {
    /// Whether the scroll view shows this bar itself and makes room for it.
    /// Never has no bar; External scrolling is driven by a bar elsewhere.
    pub const fn is_managed(self) -> bool {
        matches!(self, Policy::Always | Policy::Automatic)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Which axis is negotiated first by the surrounding layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    #[default]
    HeightForWidth,
    WidthForHeight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}
