//! Element records stored in a [`Document`](super::Document)

use std::fmt;

use ratatui::layout::Rect;

/// Handle to an element inside one document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(super) u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// A single node of the element tree
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub dom_id: Option<String>,
    pub class: Option<String>,
    pub text: Option<String>,
    pub visibility: Visibility,
    /// Screen placement assigned by `set_element_position`, if any
    pub position: Option<Rect>,
    pub(super) parent: Option<ElementId>,
    pub(super) children: Vec<ElementId>,
}

impl Element {
    pub(super) fn new(tag: &str, text: Option<&str>, class: Option<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            dom_id: None,
            class: class.map(str::to_string),
            text: text.map(str::to_string),
            visibility: Visibility::Visible,
            position: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[ElementId] {
        &self.children
    }
}
