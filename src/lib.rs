//! noticeboard library - transient process notices with a shared loader
//!
//! A [`NoticeContext`] owns the element tree and the shared list/loader
//! elements; [`NoticeWidget`]s register notices against it and
//! [`paint_notices`](notice::paint_notices) draws the result with ratatui.

pub mod config;
pub mod context;
pub mod document;
pub mod error;
pub mod notice;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use config::{Config, DefaultsPatch, InstanceOptions};
pub use context::{ContextId, NoticeContext};
pub use error::NoticeError;
pub use notice::{Notice, NoticeWidget};
