//! Notice module for noticeboard
//!
//! Callers register and unregister "process in progress" notices through a
//! [`NoticeWidget`]; the widget mirrors them into the context's shared list
//! element and toggles the shared loader.

mod notice_frame;
mod notice_render;
mod notice_state;
mod notice_widget;

pub use notice_frame::{SPINNER_CHARS, get_spinner, paint_notices};
pub use notice_render::{ITEM_TEXT_TAG, render_notices};
pub use notice_state::{Notice, NoticeId, NoticeRegistry};
pub use notice_widget::NoticeWidget;
