//! Document arena
//!
//! Owns every element and keeps parent/child links consistent.

use std::collections::BTreeMap;

use ratatui::layout::Rect;

use super::element::{Element, ElementId, Visibility};
use crate::error::{NoticeError, Result};

#[derive(Debug)]
pub struct Document {
    elements: BTreeMap<ElementId, Element>,
    next_id: u64,
    body: ElementId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only its `body` element
    pub fn new() -> Self {
        let body = ElementId(0);
        let mut elements = BTreeMap::new();
        elements.insert(body, Element::new("body", None, None));
        Self {
            elements,
            next_id: 1,
            body,
        }
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    /// Number of live elements, body included
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false: the body element cannot be removed
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Create a detached element
    pub fn create(&mut self, tag: &str, text: Option<&str>, class: Option<&str>) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Element::new(tag, text, class));
        id
    }

    pub fn element(&self, id: ElementId) -> Result<&Element> {
        self.elements.get(&id).ok_or(NoticeError::UnknownElement(id))
    }

    fn element_mut(&mut self, id: ElementId) -> Result<&mut Element> {
        self.elements
            .get_mut(&id)
            .ok_or(NoticeError::UnknownElement(id))
    }

    pub fn children(&self, id: ElementId) -> Result<&[ElementId]> {
        Ok(self.element(id)?.children())
    }

    pub fn set_dom_id(&mut self, id: ElementId, dom_id: &str) -> Result<()> {
        self.element_mut(id)?.dom_id = Some(dom_id.to_string());
        Ok(())
    }

    /// First element carrying `dom_id`, in creation order
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, el)| el.dom_id.as_deref() == Some(dom_id))
            .map(|(id, _)| *id)
    }

    /// Attach `child` as the last child of `parent`, detaching it from any
    /// previous parent first
    pub fn append_to(&mut self, child: ElementId, parent: ElementId) -> Result<()> {
        self.element(child)?;
        self.element(parent)?;

        // Walk up from the new parent; meeting the child would create a cycle
        let mut cursor = Some(parent);
        while let Some(id) = cursor {
            if id == child {
                return Err(NoticeError::InvalidArgument(format!(
                    "cannot append {} inside itself",
                    child
                )));
            }
            cursor = self.element(id)?.parent;
        }

        if let Some(old_parent) = self.element(child)?.parent {
            self.element_mut(old_parent)?.children.retain(|c| *c != child);
        }
        self.element_mut(parent)?.children.push(child);
        self.element_mut(child)?.parent = Some(parent);
        Ok(())
    }

    pub fn show(&mut self, id: ElementId) -> Result<()> {
        self.element_mut(id)?.visibility = Visibility::Visible;
        Ok(())
    }

    pub fn hide(&mut self, id: ElementId) -> Result<()> {
        self.element_mut(id)?.visibility = Visibility::Hidden;
        Ok(())
    }

    pub fn set_position(&mut self, id: ElementId, area: Rect) -> Result<()> {
        self.element_mut(id)?.position = Some(area);
        Ok(())
    }

    /// Forget any placement, so painters fall back to their default spot
    pub fn clear_position(&mut self, id: ElementId) -> Result<()> {
        self.element_mut(id)?.position = None;
        Ok(())
    }

    /// Drop every descendant of `id`
    pub fn empty(&mut self, id: ElementId) -> Result<()> {
        let mut stack = std::mem::take(&mut self.element_mut(id)?.children);
        while let Some(next) = stack.pop() {
            if let Some(removed) = self.elements.remove(&next) {
                stack.extend(removed.children);
            }
        }
        Ok(())
    }

    /// Concatenated text of the element and its descendants, in tree order
    pub fn text_content(&self, id: ElementId) -> Result<String> {
        let mut out = String::new();
        self.collect_text(id, &mut out)?;
        Ok(out)
    }

    fn collect_text(&self, id: ElementId, out: &mut String) -> Result<()> {
        let element = self.element(id)?;
        if let Some(text) = &element.text {
            out.push_str(text);
        }
        for child in &element.children {
            self.collect_text(*child, out)?;
        }
        Ok(())
    }

    /// Serialize a subtree as HTML-like markup
    ///
    /// Hidden elements carry a bare `hidden` attribute. Output is
    /// deterministic, which makes it usable in snapshots.
    pub fn to_markup(&self, id: ElementId) -> Result<String> {
        let mut out = String::new();
        self.write_markup(id, &mut out)?;
        Ok(out)
    }

    fn write_markup(&self, id: ElementId, out: &mut String) -> Result<()> {
        let element = self.element(id)?;
        out.push('<');
        out.push_str(&element.tag);
        if let Some(dom_id) = &element.dom_id {
            out.push_str(&format!(" id=\"{}\"", escape(dom_id)));
        }
        if let Some(class) = &element.class {
            out.push_str(&format!(" class=\"{}\"", escape(class)));
        }
        if !element.is_visible() {
            out.push_str(" hidden");
        }
        out.push('>');
        if let Some(text) = &element.text {
            out.push_str(&escape(text));
        }
        for child in &element.children {
            self.write_markup(*child, out)?;
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
        Ok(())
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "document_state_tests.rs"]
mod document_state_tests;
