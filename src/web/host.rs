//! [`DomHost`] over the browser document.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::cursor::observer::{DomHost, HoverCallback};
use crate::cursor::zone::ZoneRect;

const ENTER_EVENT: &str = "mouseenter";
const LEAVE_EVENT: &str = "mouseleave";

/// Handle to `window.document`.
#[derive(Clone)]
pub struct WebHost {
    document: Document,
}

impl WebHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

/// The two JS closures registered on one element. Dropping them after
/// removal frees the wasm side.
pub struct WebHoverListener {
    enter: Closure<dyn FnMut(Event)>,
    leave: Closure<dyn FnMut(Event)>,
}

impl DomHost for WebHost {
    type Element = Element;
    type Listener = WebHoverListener;

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let list = match self.document.query_selector_all(selector) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("[Observer] Bad selector {:?}: {:?}", selector, e);
                return Vec::new();
            }
        };

        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn bounding_rect(&self, element: &Element) -> Option<ZoneRect> {
        let rect = element.get_bounding_client_rect();
        let zone = ZoneRect::new(rect.left(), rect.top(), rect.right(), rect.bottom());
        let readable = [zone.left, zone.top, zone.right, zone.bottom]
            .iter()
            .all(|v| v.is_finite());
        readable.then_some(zone)
    }

    fn contains(&self, ancestor: &Element, element: &Element) -> bool {
        ancestor.contains(Some(element.as_ref()))
    }

    fn add_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().add_1(class) {
            log::debug!("[Observer] add class {:?} failed: {:?}", class, e);
        }
    }

    fn remove_class(&self, element: &Element, class: &str) {
        if let Err(e) = element.class_list().remove_1(class) {
            log::debug!("[Observer] remove class {:?} failed: {:?}", class, e);
        }
    }

    fn attach_hover(&self, element: &Element, on_hover: HoverCallback) -> Option<WebHoverListener> {
        let on_enter = Rc::clone(&on_hover);
        let enter = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_enter(true));
        let leave = Closure::<dyn FnMut(Event)>::new(move |_: Event| on_hover(false));

        if let Err(e) =
            element.add_event_listener_with_callback(ENTER_EVENT, enter.as_ref().unchecked_ref())
        {
            log::debug!("[Observer] attach {} failed: {:?}", ENTER_EVENT, e);
            return None;
        }
        if let Err(e) =
            element.add_event_listener_with_callback(LEAVE_EVENT, leave.as_ref().unchecked_ref())
        {
            log::debug!("[Observer] attach {} failed: {:?}", LEAVE_EVENT, e);
            let _ = element
                .remove_event_listener_with_callback(ENTER_EVENT, enter.as_ref().unchecked_ref());
            return None;
        }

        Some(WebHoverListener { enter, leave })
    }

    fn detach_hover(&self, element: &Element, listener: WebHoverListener) {
        let _ = element.remove_event_listener_with_callback(
            ENTER_EVENT,
            listener.enter.as_ref().unchecked_ref(),
        );
        let _ = element.remove_event_listener_with_callback(
            LEAVE_EVENT,
            listener.leave.as_ref().unchecked_ref(),
        );
    }
}
