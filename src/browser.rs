//! `web-sys` implementations of the host seams and the wasm entry points.
//!
//! [`DocumentRoot`] wraps `document.documentElement.classList`.
//! [`MediaPreference`] wraps `window.matchMedia(query)`; its `change` listener
//! closure is leaked and lives as long as the page.
//!
//! Host faults are returned as the `JsValue` the browser produced. The start
//! entry returns them to wasm-bindgen, which throws them as an uncaught JS
//! exception.
//!
//! The page may override [`SyncConfig`] with a JSON object in the root
//! element's `data-theme-sync` attribute:
//!
//! ```html
//! <html class="no-js" data-theme-sync='{"dark_token": "theme-dark"}'>
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{DomTokenList, Element, MediaQueryList, MediaQueryListEvent};

use crate::config::SyncConfig;
use crate::host::{ChangeHandler, PreferenceSource, RootClasses};
use crate::sync::ThemeSynchronizer;

/// Root element attribute carrying an optional JSON [`SyncConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-theme-sync";

type SharedSync = Rc<RefCell<ThemeSynchronizer<DocumentRoot>>>;

thread_local! {
    static ACTIVE: RefCell<Option<SharedSync>> = const { RefCell::new(None) };
}

fn host_fault(message: &str) -> JsValue {
    JsValue::from_str(message)
}

fn root_element() -> Result<Element, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| host_fault("document root element unavailable"))
}

/// Class set of the document root element.
pub struct DocumentRoot {
    classes: DomTokenList,
}

impl DocumentRoot {
    #[must_use]
    pub fn new(element: &Element) -> Self {
        Self { classes: element.class_list() }
    }

    /// Bind to `document.documentElement`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no window, document, or root element.
    pub fn from_document() -> Result<Self, JsValue> {
        Ok(Self::new(&root_element()?))
    }
}

impl RootClasses for DocumentRoot {
    type Error = JsValue;

    fn add(&mut self, token: &str) -> Result<(), Self::Error> {
        self.classes.add_1(token)
    }

    fn remove(&mut self, token: &str) -> Result<(), Self::Error> {
        self.classes.remove_1(token)
    }

    fn contains(&self, token: &str) -> bool {
        self.classes.contains(token)
    }
}

/// Live `matchMedia` handle.
pub struct MediaPreference {
    list: MediaQueryList,
}

impl MediaPreference {
    /// Open a live handle for `query`, e.g. `(prefers-color-scheme: dark)`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if there is no window, or `matchMedia` throws or returns
    /// `null`.
    pub fn query(query: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| host_fault("window unavailable"))?;
        let list = window
            .match_media(query)?
            .ok_or_else(|| host_fault(&format!("matchMedia({query}) returned null")))?;
        Ok(Self { list })
    }
}

impl PreferenceSource for MediaPreference {
    type Error = JsValue;

    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn subscribe(&self, mut handler: ChangeHandler<Self::Error>) -> Result<(), Self::Error> {
        let listener = Closure::wrap(Box::new(move |event: MediaQueryListEvent| handler(event.matches()))
            as Box<dyn FnMut(MediaQueryListEvent) -> Result<(), JsValue>>);
        self.list
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref::<js_sys::Function>())?;
        listener.forget();
        Ok(())
    }
}

fn install_diagnostics() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::warn!("logger already installed");
    }
}

fn page_config(root: &Element) -> Result<SyncConfig, JsValue> {
    let Some(raw) = root.get_attribute(CONFIG_ATTRIBUTE) else {
        return Ok(SyncConfig::default());
    };
    SyncConfig::from_json(&raw).map_err(|err| host_fault(&format!("{CONFIG_ATTRIBUTE}: {err}")))
}

/// Module entry point: apply the current preference and follow changes.
///
/// # Errors
///
/// Host faults and an invalid `data-theme-sync` attribute, thrown to JS.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    install_diagnostics();

    let element = root_element()?;
    let config = page_config(&element)?;
    let source = MediaPreference::query(&config.media_query)?;
    let sync = ThemeSynchronizer::start(&source, DocumentRoot::new(&element), config)?;

    ACTIVE.with(|slot| *slot.borrow_mut() = Some(sync));
    Ok(())
}

/// Apply a theme from JS. The next preference change overrides it.
///
/// # Errors
///
/// Host faults from the class list or from locating the root element.
#[wasm_bindgen(js_name = applyTheme)]
pub fn apply_theme(is_dark: bool) -> Result<(), JsValue> {
    let active = ACTIVE.with(|slot| slot.borrow().clone());
    if let Some(sync) = active {
        sync.borrow_mut().apply_theme(is_dark)?;
    } else {
        let mut sync = ThemeSynchronizer::new(DocumentRoot::from_document()?, SyncConfig::default());
        sync.apply_theme(is_dark)?;
    }
    Ok(())
}

/// Theme most recently applied by the running synchronizer, if any.
#[wasm_bindgen(js_name = currentTheme)]
pub fn current_theme() -> Option<String> {
    ACTIVE.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|sync| sync.borrow().current())
            .map(|theme| theme.to_string())
    })
}
