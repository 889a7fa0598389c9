use thiserror::Error;

use crate::document::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoticeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    #[error("Widget was built on a different notice context")]
    ForeignContext,
}

pub type Result<T, E = NoticeError> = std::result::Result<T, E>;
