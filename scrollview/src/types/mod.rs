mod edges;
mod enums;

pub use edges::Edges;
pub use enums::{Orientation, Policy, RequestMode, TextDirection};
