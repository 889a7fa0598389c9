//! Screen placement for elements

use ratatui::{layout::Rect, text::Span};

use super::{Document, ElementId};
use crate::error::Result;
use crate::widgets::popup;

/// Measure the box an element occupies when painted
///
/// Width is the widest child text plus padding and borders (2 each side),
/// height is one row per child plus the two border rows.
pub fn measure(document: &Document, id: ElementId) -> Result<(u16, u16)> {
    let children = document.children(id)?;

    let mut content_width = 0usize;
    for child in children {
        let text = document.text_content(*child)?;
        content_width = content_width.max(Span::raw(text).width());
    }

    let width = u16::try_from(content_width)
        .unwrap_or(u16::MAX)
        .saturating_add(4);
    let height = u16::try_from(children.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    Ok((width, height))
}

/// Center an element on `screen` and record the placement on the element
pub fn set_element_position(document: &mut Document, id: ElementId, screen: Rect) -> Result<Rect> {
    let (width, height) = measure(document, id)?;
    let area = popup::centered_popup(screen, width, height);
    document.set_position(id, area)?;
    Ok(area)
}
