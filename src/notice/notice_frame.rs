//! Paints the shared notice elements onto a ratatui frame
//!
//! Should be called after the host UI so the notices float on top.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::context::NoticeContext;
use crate::document::measure;
use crate::error::Result;
use crate::theme;
use crate::widgets::popup;

pub const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Ticks each spinner frame stays on screen
const TICKS_PER_FRAME: u64 = 8;

const MARGIN: u16 = 2;
const LOADER_WIDTH: u16 = 3;

/// Spinner glyph and color for a tick count
pub fn get_spinner(tick: u64) -> (char, Color) {
    // Reduce in u64 so huge ticks wrap the same way on 32-bit targets
    let frame = tick / TICKS_PER_FRAME;
    let colors = theme::loader::SPINNER_COLORS;
    (
        SPINNER_CHARS[(frame % SPINNER_CHARS.len() as u64) as usize],
        colors[(frame % colors.len() as u64) as usize],
    )
}

/// Draw the list and loader if they are visible
///
/// The list goes where `set_element_position` put it, or the top-right
/// corner otherwise. The loader sits under the list, or takes the corner
/// when the list is hidden.
pub fn paint_notices(frame: &mut Frame, ctx: &NoticeContext, tick: u64) -> Result<()> {
    let Some(shared) = ctx.shared() else {
        return Ok(());
    };
    let document = ctx.document();
    let frame_area = frame.area();

    let mut list_area = None;
    let list = document.element(shared.list)?;
    if list.is_visible() {
        let area = match list.position {
            Some(position) => position.intersection(frame_area),
            None => {
                let (width, height) = measure(document, shared.list)?;
                popup::top_right_popup(frame_area, width, height, MARGIN)
            }
        };

        // Too small to hold borders and one line
        if area.width >= 5 && area.height >= 3 {
            let mut lines = Vec::new();
            for item in document.children(shared.list)? {
                let text = document.text_content(*item)?;
                lines.push(Line::from(Span::styled(
                    format!(" {} ", text),
                    theme::notice::ITEM,
                )));
            }

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::notice::BORDER).bg(theme::notice::BG))
                .style(Style::default().bg(theme::notice::BG));

            popup::clear_area(frame, area);
            frame.render_widget(Paragraph::new(lines).block(block), area);
            list_area = Some(area);
        }
    }

    if document.element(shared.loader)?.is_visible() {
        let area = match list_area {
            Some(above) => Rect {
                x: above.x,
                y: above.bottom(),
                width: LOADER_WIDTH,
                height: 1,
            },
            None => popup::top_right_popup(frame_area, LOADER_WIDTH, 1, MARGIN),
        }
        .intersection(frame_area);

        if !area.is_empty() {
            let (glyph, color) = get_spinner(tick);
            let spinner = Span::styled(
                format!(" {} ", glyph),
                Style::default()
                    .fg(color)
                    .bg(theme::loader::BG)
                    .add_modifier(theme::loader::GLYPH_MODIFIER),
            );
            popup::clear_area(frame, area);
            frame.render_widget(Paragraph::new(Line::from(spinner)), area);
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "notice_frame_tests.rs"]
mod notice_frame_tests;
