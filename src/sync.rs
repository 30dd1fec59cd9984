//! Keeps exactly one theme marker on the root element in agreement with the
//! live color-scheme preference.
//!
//! Startup runs to completion synchronously: log the startup line, apply the
//! current preference, register the change handler. After that all work
//! happens inside the host's serialized dispatch of change notifications.

#[cfg(test)]
#[path = "sync_test.rs"]
mod sync_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::SyncConfig;
use crate::host::{ChangeHandler, PreferenceSource, RootClasses};
use crate::theme::Theme;

pub struct ThemeSynchronizer<R> {
    root: R,
    config: SyncConfig,
    current: Option<Theme>,
}

impl<R: RootClasses> ThemeSynchronizer<R> {
    /// Wrap `root` without touching it. Nothing is applied until
    /// [`ThemeSynchronizer::apply_theme`] or [`ThemeSynchronizer::start`].
    #[must_use]
    pub fn new(root: R, config: SyncConfig) -> Self {
        Self { root, config, current: None }
    }

    /// Replace the opposite marker with the one for `is_dark`.
    ///
    /// Removal happens before addition, so the root ends up with exactly one
    /// of the two markers whatever it carried before. Unrelated classes are
    /// never touched. Applying the same value twice is a no-op on the class
    /// set.
    ///
    /// # Errors
    ///
    /// Returns the root's own error unchanged if the host refuses either
    /// mutation.
    pub fn apply_theme(&mut self, is_dark: bool) -> Result<Theme, R::Error> {
        let theme = Theme::from_dark(is_dark);
        self.root.remove(self.config.token(theme.opposite()))?;
        self.root.add(self.config.token(theme))?;

        match self.current.replace(theme) {
            Some(prev) if prev == theme => log::trace!("theme: {theme} reapplied"),
            Some(prev) => log::debug!("theme: {prev} -> {theme}"),
            None => log::debug!("theme: initial {theme}"),
        }
        Ok(theme)
    }

    /// Theme last applied, `None` before the first application.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut R {
        &mut self.root
    }

    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }
}

impl<R: RootClasses + 'static> ThemeSynchronizer<R> {
    /// Run the initialization sequence against `source`.
    ///
    /// 1. Log the configured startup line, if any.
    /// 2. Apply the source's current match state, synchronously.
    /// 3. Subscribe a handler applying every subsequently delivered state.
    ///
    /// The returned handle is shared with the handler, which stays registered
    /// for the source's lifetime.
    ///
    /// # Errors
    ///
    /// Returns host errors from the initial application or from registering
    /// the handler, unchanged.
    pub fn start<S>(source: &S, root: R, config: SyncConfig) -> Result<Rc<RefCell<Self>>, R::Error>
    where
        S: PreferenceSource<Error = R::Error>,
    {
        if let Some(line) = &config.startup_line {
            log::info!("{line}");
        }

        let sync = Rc::new(RefCell::new(Self::new(root, config)));
        sync.borrow_mut().apply_theme(source.matches())?;

        let handle = Rc::clone(&sync);
        let handler = Box::new(move |is_dark: bool| -> Result<(), R::Error> {
            handle.borrow_mut().apply_theme(is_dark)?;
            Ok(())
        }) as ChangeHandler<R::Error>;
        source.subscribe(handler)?;

        Ok(sync)
    }
}
