use thiserror::Error;

use crate::actor::ActorId;

/// Container contract violations reported by a scroll view.
///
/// The operation is refused; the scroll view is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScrollViewError {
    /// The actor does not implement the scrollable capability.
    #[error("Attempting to add an actor of type '{0}' to a ScrollView, but the actor is not scrollable")]
    NotScrollable(String),

    /// A scroll view holds a single child.
    #[error("ScrollView already contains a child ('{0}')")]
    ChildExists(String),

    /// The actor is neither the child nor one of the scrollbars.
    #[error("Actor {0:?} is not a child of this ScrollView")]
    UnknownChild(ActorId),

    /// Scrollbars live as long as the scroll view.
    #[error("Scrollbar {0:?} belongs to the ScrollView and cannot be removed")]
    PermanentScrollBar(ActorId),
}
