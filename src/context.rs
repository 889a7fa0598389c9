//! Notice context
//!
//! Owns the document, the process-wide defaults and the shared list and
//! loader elements. Widgets borrow it mutably for every operation, so one
//! context is one isolated document.

use std::sync::atomic::{AtomicU64, Ordering};

use ratatui::layout::Rect;

use crate::config::{
    Config, Defaults, DefaultsPatch, LIST_ID_SUFFIX, LOADER_ID_SUFFIX, WidgetOptions,
};
use crate::document::{Document, ElementId};
use crate::error::Result;

/// Tag used for the loader element
pub const LOADER_TAG: &str = "div";

/// Screen area used for centering until the host reports its real size
pub const DEFAULT_SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a context; widgets remember the one they were built on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

/// The list and loader elements shared by every widget of a context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedElements {
    pub list: ElementId,
    pub loader: ElementId,
}

#[derive(Debug)]
pub struct NoticeContext {
    id: ContextId,
    document: Document,
    defaults: Defaults,
    shared: Option<SharedElements>,
    screen: Rect,
}

impl Default for NoticeContext {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeContext {
    pub fn new() -> Self {
        Self::with_defaults(Defaults::default())
    }

    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            id: ContextId(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed)),
            document: Document::new(),
            defaults,
            shared: None,
            screen: DEFAULT_SCREEN,
        }
    }

    pub fn id(&self) -> ContextId {
        self.id
    }

    /// Context whose defaults come from the `[defaults]` config section
    pub fn from_config(config: &Config) -> Self {
        let mut ctx = Self::new();
        ctx.set_options(&config.defaults);
        ctx
    }

    /// Merge `patch` into the defaults
    ///
    /// Only widgets constructed afterwards see the change. Shared elements
    /// that already exist keep their tag and id.
    pub fn set_options(&mut self, patch: &DefaultsPatch) {
        self.defaults.merge(patch);

        #[cfg(debug_assertions)]
        log::debug!("Defaults updated: {:?}", self.defaults);
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn shared(&self) -> Option<SharedElements> {
        self.shared
    }

    /// Return the shared elements, creating them on first use
    ///
    /// Classes come from the options of the widget that triggers creation;
    /// without one configured the element has no class.
    pub fn ensure_shared(&mut self, options: &WidgetOptions) -> Result<SharedElements> {
        if let Some(shared) = self.shared {
            return Ok(shared);
        }

        let prefix = self.defaults.elements_id_prefix.clone();
        let body = self.document.body();

        let list = self
            .document
            .create(&self.defaults.list_tag, None, options.list_class.as_deref());
        self.document
            .set_dom_id(list, &format!("{}{}", prefix, LIST_ID_SUFFIX))?;
        self.document.append_to(list, body)?;
        self.document.hide(list)?;

        let loader = self
            .document
            .create(LOADER_TAG, None, options.loader_class.as_deref());
        self.document
            .set_dom_id(loader, &format!("{}{}", prefix, LOADER_ID_SUFFIX))?;
        self.document.append_to(loader, body)?;
        self.document.hide(loader)?;

        #[cfg(debug_assertions)]
        log::debug!(
            "Created shared elements: list={} loader={} (prefix {})",
            list,
            loader,
            prefix
        );

        let shared = SharedElements { list, loader };
        self.shared = Some(shared);
        Ok(shared)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Rect) {
        self.screen = screen;
    }
}
