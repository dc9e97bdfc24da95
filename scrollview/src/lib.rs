pub mod actor;
pub mod adjustment;
pub mod error;
pub mod event;
pub mod fade;
pub mod layout;
pub mod notify;
pub mod scroll_view;
pub mod scrollbar;
pub mod style;
pub mod types;
pub mod viewport;
pub mod visibility;

pub use actor::{Actor, ActorId, PaintContext, PaintOp, Scrollable};
pub use adjustment::Adjustment;
pub use error::ScrollViewError;
pub use event::{EventResult, ScrollDirection, ScrollEvent};
pub use fade::FadeEffect;
pub use layout::{layout_pass, Rect, SizeRequest};
pub use notify::{Notifier, NotifyBatch, Property};
pub use scroll_view::{Part, ScrollView};
pub use scrollbar::ScrollBar;
pub use style::{ScrollBarStyle, ScrollViewStyle};
pub use types::*;
pub use viewport::Viewport;
pub use visibility::{resolve_visibility, AvailableSpace, Visibility};
