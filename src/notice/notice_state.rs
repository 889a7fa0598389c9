//! Notice records and the per-widget registry

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{NoticeError, Result};

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a notice, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(u64);

impl NoticeId {
    fn next() -> Self {
        NoticeId(NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A single queued message, optionally asking for the loader
///
/// The clone returned by [`NoticeRegistry::add`] is the caller's handle for removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    id: NoticeId,
    message: Option<String>,
    wants_loader: bool,
}

impl Notice {
    pub fn id(&self) -> NoticeId {
        self.id
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn wants_loader(&self) -> bool {
        self.wants_loader
    }
}

/// Ordered collection of active notices; insertion order is display order
#[derive(Debug, Default)]
pub struct NoticeRegistry {
    notices: Vec<Notice>,
}

impl NoticeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a notice
    ///
    /// An empty message counts as no message; at least one of a message or
    /// the loader flag is required.
    pub fn add(&mut self, message: Option<&str>, wants_loader: bool) -> Result<Notice> {
        let message = message.filter(|m| !m.is_empty());
        if message.is_none() && !wants_loader {
            return Err(NoticeError::InvalidArgument(
                "a notice needs a message or a loader".to_string(),
            ));
        }

        let notice = Notice {
            id: NoticeId::next(),
            message: message.map(str::to_string),
            wants_loader,
        };
        self.notices.push(notice.clone());
        Ok(notice)
    }

    /// Remove every entry sharing the handle's id
    ///
    /// Fails without touching the registry when no entry matches.
    pub fn remove(&mut self, notice: &Notice) -> Result<()> {
        if !self.notices.iter().any(|n| n.id == notice.id) {
            return Err(NoticeError::InvalidArgument(format!(
                "notice {} is not registered here",
                notice.id.get()
            )));
        }
        self.notices.retain(|n| n.id != notice.id);
        Ok(())
    }

    /// Put back a list taken earlier from [`NoticeRegistry::list`]
    pub(crate) fn restore(&mut self, notices: Vec<Notice>) {
        self.notices = notices;
    }

    pub fn list(&self) -> &[Notice] {
        &self.notices
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }

    /// True when any active notice asks for the loader
    pub fn wants_loader(&self) -> bool {
        self.notices.iter().any(Notice::wants_loader)
    }
}

#[cfg(test)]
#[path = "notice_state_tests.rs"]
mod notice_state_tests;
