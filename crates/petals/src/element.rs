use crate::geom::{Placement, Size};
use crate::macros::string_newtype;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumString};

string_newtype! {
    pub struct ElementId;
}

string_newtype! {
    /// Shared marker used to locate elements by role (the class in `.task-petal`).
    pub struct ClassName;
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    DeserializeFromStr,
    SerializeDisplay,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum Positioning {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
}

impl Positioning {
    /// Whether absolutely positioned descendants are offset from this element.
    pub fn establishes_context(&self) -> bool {
        !matches!(self, Self::Static)
    }
}

/// A rendered element the wheel layout can measure and move.
pub trait Element {
    fn size(&self) -> Size;

    fn positioning(&self) -> Positioning;

    fn set_positioning(&mut self, positioning: Positioning);

    fn set_placement(&mut self, placement: Placement);
}

impl<T: Element + ?Sized> Element for &mut T {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn positioning(&self) -> Positioning {
        (**self).positioning()
    }

    fn set_positioning(&mut self, positioning: Positioning) {
        (**self).set_positioning(positioning)
    }

    fn set_placement(&mut self, placement: Placement) {
        (**self).set_placement(placement)
    }
}
