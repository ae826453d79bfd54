pub mod element;
pub mod error;
pub mod geom;
pub mod layout;
mod macros;
pub mod page;
pub mod ready;

pub use element::{ClassName, Element, ElementId, Positioning};
pub use error::LayoutError;
pub use geom::{Placement, Point, Size};
pub use layout::{PetalGeometry, RADIUS, WheelLayout, initialize_task_wheel};
pub use page::{Node, Page, Selectors};
pub use ready::ReadySignal;
