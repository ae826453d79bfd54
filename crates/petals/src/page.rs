use crate::element::{ClassName, Element, ElementId, Positioning};
use crate::error::LayoutError;
use crate::geom::{Placement, Size};
use crate::layout;
use serde::{Deserialize, Serialize};

pub const WHEEL_CLASS: &str = "wheel";
pub const PETAL_CLASS: &str = "task-petal";

/// Class markers used to find the wheel and its petals on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub wheel: ClassName,
    pub petal: ClassName,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            wheel: ClassName::new(WHEEL_CLASS),
            petal: ClassName::new(PETAL_CLASS),
        }
    }
}

/// A rendered element of a page, already laid out by whatever styled it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default)]
    pub id: Option<ElementId>,
    #[serde(default)]
    pub classes: Vec<ClassName>,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub position: Positioning,
    #[serde(default)]
    pub placement: Option<Placement>,
    #[serde(default)]
    pub label: Option<String>,
}

impl Node {
    pub fn new(classes: &[&str], width: f64, height: f64) -> Self {
        Self {
            id: None,
            classes: classes.iter().map(|&c| ClassName::new(c)).collect(),
            width,
            height,
            position: Positioning::default(),
            placement: None,
            label: None,
        }
    }

    pub fn has_class(&self, class: &ClassName) -> bool {
        self.classes.contains(class)
    }

    /// Display name: the label if there is one, then the id.
    pub fn name(&self) -> Option<&str> {
        self.label
            .as_deref()
            .or_else(|| self.id.as_ref().map(|id| id.as_str()))
    }
}

impl Element for Node {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn positioning(&self) -> Positioning {
        self.position
    }

    fn set_positioning(&mut self, positioning: Positioning) {
        self.position = positioning;
    }

    fn set_placement(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }
}

/// Nodes of a page in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Page {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// First node carrying `class`.
    pub fn query_selector(&self, class: &ClassName) -> Option<&Node> {
        self.nodes.iter().find(|n| n.has_class(class))
    }

    /// Every node carrying `class`, in document order.
    pub fn query_selector_all<'a>(
        &'a self,
        class: &'a ClassName,
    ) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |n| n.has_class(class))
    }

    /// Finds the wheel and its petals and places the petals around it.
    ///
    /// The first node matching the wheel selector is the wheel; it is never treated as
    /// a petal of itself.
    pub fn initialize_task_wheel(
        &mut self,
        selectors: &Selectors,
    ) -> Result<usize, LayoutError> {
        let mut wheel = None;
        let mut petals = Vec::new();

        for node in self.nodes.iter_mut() {
            if wheel.is_none() && node.has_class(&selectors.wheel) {
                wheel = Some(node);
            } else if node.has_class(&selectors.petal) {
                petals.push(node);
            }
        }

        let wheel = wheel.ok_or_else(|| LayoutError::MissingWheel(selectors.wheel.clone()))?;
        Ok(layout::initialize_task_wheel(wheel, &mut petals))
    }
}
