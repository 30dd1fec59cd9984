//! In-memory implementations of the host seams.
//!
//! Used by the test suite and by any non-browser host that wants the same
//! marker semantics without a rendering environment.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::host::{ChangeHandler, PreferenceSource, RootClasses};

/// Fault raised by the in-memory host.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryHostError {
    #[error("class list rejected token {0:?}")]
    Rejected(String),
}

/// Ordered class set standing in for `document.documentElement.classList`.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoot {
    classes: Vec<String>,
    rejected: Vec<String>,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing classes (e.g. `no-js`). Duplicates collapse.
    #[must_use]
    pub fn with_classes(classes: &[&str]) -> Self {
        let mut root = Self::new();
        for class in classes {
            if !root.contains(class) {
                root.classes.push((*class).to_string());
            }
        }
        root
    }

    /// Make every later `add`/`remove` of `token` fail.
    pub fn reject(&mut self, token: &str) {
        self.rejected.push(token.to_string());
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn check(&self, token: &str) -> Result<(), MemoryHostError> {
        if self.rejected.iter().any(|t| t == token) {
            return Err(MemoryHostError::Rejected(token.to_string()));
        }
        Ok(())
    }
}

impl RootClasses for MemoryRoot {
    type Error = MemoryHostError;

    fn add(&mut self, token: &str) -> Result<(), Self::Error> {
        self.check(token)?;
        if !self.contains(token) {
            self.classes.push(token.to_string());
        }
        Ok(())
    }

    fn remove(&mut self, token: &str) -> Result<(), Self::Error> {
        self.check(token)?;
        self.classes.retain(|c| c != token);
        Ok(())
    }

    fn contains(&self, token: &str) -> bool {
        self.classes.iter().any(|c| c == token)
    }
}

struct PreferenceInner {
    matches: bool,
    handlers: Vec<ChangeHandler<MemoryHostError>>,
}

/// Scriptable preference handle. Clones share state, so a test can keep one
/// clone to drive changes after handing another to the synchronizer.
#[derive(Clone)]
pub struct MemoryPreference {
    inner: Rc<RefCell<PreferenceInner>>,
}

impl MemoryPreference {
    #[must_use]
    pub fn new(matches: bool) -> Self {
        Self { inner: Rc::new(RefCell::new(PreferenceInner { matches, handlers: Vec::new() })) }
    }

    /// Change the preference. Like a real media query list, handlers only
    /// fire when the match state actually changes.
    ///
    /// # Errors
    ///
    /// The first handler error, after which remaining handlers are skipped.
    pub fn set_matches(&self, matches: bool) -> Result<(), MemoryHostError> {
        if self.inner.borrow().matches == matches {
            return Ok(());
        }
        self.dispatch(matches)
    }

    /// Deliver a change event carrying `matches` regardless of the stored
    /// state.
    ///
    /// # Errors
    ///
    /// The first handler error, after which remaining handlers are skipped.
    pub fn dispatch(&self, matches: bool) -> Result<(), MemoryHostError> {
        let mut handlers = {
            let mut inner = self.inner.borrow_mut();
            inner.matches = matches;
            std::mem::take(&mut inner.handlers)
        };

        let mut outcome = Ok(());
        for handler in &mut handlers {
            outcome = handler(matches);
            if outcome.is_err() {
                break;
            }
        }

        // Handlers registered during dispatch were pushed onto the emptied vec.
        let mut inner = self.inner.borrow_mut();
        handlers.append(&mut inner.handlers);
        inner.handlers = handlers;
        outcome
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

impl PreferenceSource for MemoryPreference {
    type Error = MemoryHostError;

    fn matches(&self) -> bool {
        self.inner.borrow().matches
    }

    fn subscribe(&self, handler: ChangeHandler<Self::Error>) -> Result<(), Self::Error> {
        self.inner.borrow_mut().handlers.push(handler);
        Ok(())
    }
}
