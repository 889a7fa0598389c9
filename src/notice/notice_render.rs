//! Notice rendering
//!
//! Rebuilds the shared list element from a set of notices and toggles the
//! shared loader element.

use ratatui::layout::Rect;

use super::notice_state::Notice;
use crate::config::WidgetOptions;
use crate::context::SharedElements;
use crate::document::{Document, set_element_position};
use crate::error::Result;

/// Tag of the text element inside each list item
pub const ITEM_TEXT_TAG: &str = "span";

/// Mirror `notices` into the shared list and loader
///
/// The list is emptied and refilled in order, centered on `screen` when
/// `options.center_list` is set and there is something to show (any earlier
/// placement is dropped otherwise), then shown only when non-empty. The
/// loader is shown iff any notice wants it.
pub fn render_notices(
    document: &mut Document,
    elements: SharedElements,
    notices: &[Notice],
    options: &WidgetOptions,
    screen: Rect,
) -> Result<()> {
    document.empty(elements.list)?;

    let mut show_loader = false;
    for notice in notices {
        let item = document.create(&options.item_tag, None, options.list_item_class.as_deref());
        let text = document.create(ITEM_TEXT_TAG, Some(notice.message().unwrap_or("")), None);
        document.append_to(text, item)?;
        document.append_to(item, elements.list)?;

        show_loader |= notice.wants_loader();
    }

    // Another widget may have centered the shared list before
    if options.center_list && !notices.is_empty() {
        set_element_position(document, elements.list, screen)?;
    } else {
        document.clear_position(elements.list)?;
    }

    if notices.is_empty() {
        document.hide(elements.list)?;
    } else {
        document.show(elements.list)?;
    }

    if show_loader {
        document.show(elements.loader)?;
    } else {
        document.hide(elements.loader)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "notice_render_tests.rs"]
mod notice_render_tests;
