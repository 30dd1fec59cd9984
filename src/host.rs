//! Seams between the synchronizer and its host environment.
//!
//! The synchronizer never touches a document or a media query directly. It
//! talks to a [`RootClasses`] (the class set of the root element) and a
//! [`PreferenceSource`] (the live color-scheme handle). The browser binding
//! implements both over `web-sys`; [`crate::memory`] implements both in memory.
//!
//! Each seam has its own `Error` type, returned to the caller unchanged.

/// Callback invoked with the new "dark requested" state on every change.
pub type ChangeHandler<E> = Box<dyn FnMut(bool) -> Result<(), E>>;

/// The class set of the document root element.
pub trait RootClasses {
    type Error;

    /// Add `token`. Adding a present token is a no-op.
    ///
    /// # Errors
    ///
    /// Whatever the host class list reports.
    fn add(&mut self, token: &str) -> Result<(), Self::Error>;

    /// Remove `token`. Removing an absent token is a no-op.
    ///
    /// # Errors
    ///
    /// Whatever the host class list reports.
    fn remove(&mut self, token: &str) -> Result<(), Self::Error>;

    fn contains(&self, token: &str) -> bool;
}

/// A live, observable color-scheme preference.
pub trait PreferenceSource {
    type Error;

    /// Current match state of the query.
    fn matches(&self) -> bool;

    /// Register `handler` for every future change. There is no unsubscribe;
    /// the handler lives as long as the source does.
    ///
    /// # Errors
    ///
    /// Whatever the host reports when registering the listener.
    fn subscribe(&self, handler: ChangeHandler<Self::Error>) -> Result<(), Self::Error>;
}
