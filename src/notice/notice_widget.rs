//! Caller-facing notice widget
//!
//! Binds a registry to resolved options and the context's shared elements.
//! Every mutation re-renders into the context document; a mutation whose
//! render fails leaves the registry as it was.

use super::notice_render::render_notices;
use super::notice_state::{Notice, NoticeRegistry};
use crate::config::{InstanceOptions, WidgetOptions};
use crate::context::{ContextId, NoticeContext, SharedElements};
use crate::error::{NoticeError, Result};

#[derive(Debug)]
pub struct NoticeWidget {
    context: ContextId,
    registry: NoticeRegistry,
    options: WidgetOptions,
    elements: SharedElements,
}

impl NoticeWidget {
    /// Resolve `options` against the context defaults and make sure the
    /// shared elements exist
    pub fn new(ctx: &mut NoticeContext, options: &InstanceOptions) -> Result<Self> {
        let options = WidgetOptions::resolve(ctx.defaults(), options);
        let elements = ctx.ensure_shared(&options)?;
        Ok(Self {
            context: ctx.id(),
            registry: NoticeRegistry::new(),
            options,
            elements,
        })
    }

    pub fn add(
        &mut self,
        ctx: &mut NoticeContext,
        message: Option<&str>,
        display_loader: bool,
    ) -> Result<Notice> {
        self.check_context(ctx)?;
        let snapshot = self.registry.list().to_vec();
        let notice = self.registry.add(message, display_loader)?;

        #[cfg(debug_assertions)]
        log::debug!(
            "Notice {} added (loader={}), {} active",
            notice.id().get(),
            display_loader,
            self.registry.len()
        );

        self.display_or_restore(ctx, snapshot)?;
        Ok(notice)
    }

    pub fn remove(&mut self, ctx: &mut NoticeContext, notice: &Notice) -> Result<()> {
        self.check_context(ctx)?;
        let snapshot = self.registry.list().to_vec();
        self.registry.remove(notice)?;

        #[cfg(debug_assertions)]
        log::debug!(
            "Notice {} removed, {} active",
            notice.id().get(),
            self.registry.len()
        );

        self.display_or_restore(ctx, snapshot)
    }

    /// Re-render the current notices
    ///
    /// Fails with [`NoticeError::ForeignContext`] when `ctx` is not the
    /// context this widget was built on.
    pub fn display(&self, ctx: &mut NoticeContext) -> Result<()> {
        self.check_context(ctx)?;
        let screen = ctx.screen();
        render_notices(
            ctx.document_mut(),
            self.elements,
            self.registry.list(),
            &self.options,
            screen,
        )
    }

    fn display_or_restore(
        &mut self,
        ctx: &mut NoticeContext,
        snapshot: Vec<Notice>,
    ) -> Result<()> {
        let result = self.display(ctx);
        if result.is_err() {
            self.registry.restore(snapshot);
        }
        result
    }

    fn check_context(&self, ctx: &NoticeContext) -> Result<()> {
        if ctx.id() != self.context {
            return Err(NoticeError::ForeignContext);
        }
        Ok(())
    }

    pub fn notices(&self) -> &[Notice] {
        self.registry.list()
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn elements(&self) -> SharedElements {
        self.elements
    }
}

#[cfg(test)]
#[path = "notice_widget_tests.rs"]
mod notice_widget_tests;
