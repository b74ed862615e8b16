//! JS-facing API.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Window};

use super::host::WebHost;
use super::renderer::DomRenderer;
use crate::config::{self, CursorConfig};
use crate::contact::{self, ContactErrors, ContactField, ContactForm};
use crate::cursor::CursorTracker;
use crate::error::{dom_error, CursorError, CursorResult};

const MOVE_EVENT: &str = "mousemove";

/// Initialize panic hook and logging for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::cursor::current().log_level()).ok();
    log::info!("[CursorTracker] WASM module initialized");
}

/// Replace the global config used by later mounts.
#[wasm_bindgen(js_name = setCursorConfig)]
pub fn set_cursor_config(config: JsValue) -> Result<(), JsValue> {
    let config: CursorConfig = serde_wasm_bindgen::from_value(config).map_err(CursorError::from)?;
    config::cursor::set_config(config);
    Ok(())
}

#[wasm_bindgen(js_name = getCursorConfig)]
pub fn get_cursor_config() -> Result<JsValue, JsValue> {
    Ok(serde_wasm_bindgen::to_value(&config::cursor::current()).map_err(CursorError::from)?)
}

/// Validate contact form input; returns an object with one message per
/// invalid field (empty object when the form can be sent).
#[wasm_bindgen(js_name = validateContactForm)]
pub fn validate_contact_form(form: JsValue) -> Result<JsValue, JsValue> {
    let form: ContactForm = serde_wasm_bindgen::from_value(form).map_err(CursorError::from)?;
    let errors = contact::validate(&form);
    Ok(serde_wasm_bindgen::to_value(&errors).map_err(CursorError::from)?)
}

/// Drop the error of the field being edited; `field` is the input's `name`
/// attribute.
#[wasm_bindgen(js_name = clearContactError)]
pub fn clear_contact_error(errors: JsValue, field: &str) -> Result<JsValue, JsValue> {
    let mut errors: ContactErrors =
        serde_wasm_bindgen::from_value(errors).map_err(CursorError::from)?;
    let field: ContactField = field.parse().map_err(CursorError::Config)?;
    errors.clear(field);
    Ok(serde_wasm_bindgen::to_value(&errors).map_err(CursorError::from)?)
}

/// Everything owned by one mount. Field order matters: the window listener
/// is removed in `Drop` before the tracker and renderer are dropped.
struct Mounted {
    window: Window,
    on_move: Closure<dyn FnMut(MouseEvent)>,
    tracker: Rc<CursorTracker<WebHost>>,
}

impl Mounted {
    fn new(config: CursorConfig) -> CursorResult<Self> {
        let window = web_sys::window().ok_or(CursorError::NoWindow)?;
        let document = window.document().ok_or(CursorError::NoDocument)?;

        let renderer = DomRenderer::create(&document, &config)?;
        let tracker = Rc::new(CursorTracker::mount(WebHost::new(document), config, renderer));

        let tracker_for_cb = Rc::clone(&tracker);
        let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |e: MouseEvent| {
            tracker_for_cb.pointer_moved(e.client_x() as f64, e.client_y() as f64);
        });
        window
            .add_event_listener_with_callback(MOVE_EVENT, on_move.as_ref().unchecked_ref())
            .map_err(|e| dom_error(&e))?;

        Ok(Self {
            window,
            on_move,
            tracker,
        })
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(MOVE_EVENT, self.on_move.as_ref().unchecked_ref());
    }
}

/// Custom cursor widget handle. Freeing it from JS unmounts it.
#[wasm_bindgen(js_name = CursorTracker)]
pub struct WasmCursorTracker {
    inner: Option<Mounted>,
}

#[wasm_bindgen(js_class = CursorTracker)]
impl WasmCursorTracker {
    /// Mount on the current document. `config` may be `undefined` to use
    /// the global config.
    #[wasm_bindgen]
    pub fn mount(config: JsValue) -> Result<WasmCursorTracker, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            config::cursor::current()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(CursorError::from)?
        };

        Ok(WasmCursorTracker {
            inner: Some(Mounted::new(config)?),
        })
    }

    /// Current frame as a plain object, or `null` after unmount.
    #[wasm_bindgen]
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        match &self.inner {
            Some(mounted) => Ok(serde_wasm_bindgen::to_value(&mounted.tracker.frame())
                .map_err(CursorError::from)?),
            None => Ok(JsValue::NULL),
        }
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.inner.is_some()
    }

    #[wasm_bindgen(getter, js_name = registeredCount)]
    pub fn registered_count(&self) -> usize {
        self.inner
            .as_ref()
            .map(|mounted| mounted.tracker.registered_count())
            .unwrap_or(0)
    }

    /// Detach every listener and remove the cursor nodes. Idempotent.
    #[wasm_bindgen]
    pub fn unmount(&mut self) {
        self.inner.take();
    }
}
