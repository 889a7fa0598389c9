//! Retained element tree for the notice widget
//!
//! Stands in for the host document: elements are created, attached,
//! shown, hidden and emptied here, and the frame painter reads them back.

mod document_state;
mod element;
mod position;

pub use document_state::Document;
pub use element::{Element, ElementId, Visibility};
pub use position::{measure, set_element_position};
