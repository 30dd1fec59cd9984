//! Light/dark theme synchronizer for the browser.
//!
//! Compiled to WebAssembly, this crate keeps exactly one of two marker classes
//! (`dark` / `light` by default) on the document root element, matching the
//! operating system's `prefers-color-scheme` preference, and follows changes
//! live for the lifetime of the page. Styling rules key off those classes.
//!
//! The core is host-agnostic: [`sync::ThemeSynchronizer`] talks only to the
//! traits in [`host`], so it is tested natively against [`memory`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | `Light` / `Dark` state and canonical tokens |
//! | [`config`] | Media query, marker tokens, startup line |
//! | [`error`] | Configuration errors |
//! | [`host`] | Root class-set and preference seams |
//! | [`sync`] | `apply_theme`, startup sequence, live tracking |
//! | [`memory`] | In-memory host used by tests |
//! | `browser` | `web-sys` host and wasm entry points (wasm32 only) |

pub mod config;
pub mod error;
pub mod host;
pub mod memory;
pub mod sync;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod browser;
