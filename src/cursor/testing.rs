//! In-memory [`DomHost`] used by the unit tests.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use super::observer::{DomHost, HoverCallback};
use super::zone::ZoneRect;

#[derive(Default)]
struct FakeElement {
    dom_id: Option<String>,
    parent: Option<usize>,
    interactive: bool,
    rect: Option<ZoneRect>,
    classes: BTreeSet<String>,
    listeners: Vec<(u64, HoverCallback)>,
}

#[derive(Default)]
struct FakeDom {
    elements: Vec<FakeElement>,
    next_listener: u64,
    detach_calls: usize,
    queries: Vec<String>,
}

/// Flat fake document. Elements are addressed by index.
#[derive(Clone, Default)]
pub struct FakeHost {
    dom: Rc<RefCell<FakeDom>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a non-interactive zone element with an id and rect.
    pub fn add_zone(&self, id: &str, rect: ZoneRect) -> usize {
        self.push(FakeElement {
            dom_id: Some(id.to_string()),
            rect: Some(rect),
            ..Default::default()
        })
    }

    /// Add an element that matches the interactive selector.
    pub fn add_interactive(&self, parent: Option<usize>) -> usize {
        self.push(FakeElement {
            parent,
            interactive: true,
            ..Default::default()
        })
    }

    /// Move or resize an element (e.g. the zone after a scroll).
    pub fn set_rect(&self, element: usize, rect: Option<ZoneRect>) {
        self.dom.borrow_mut().elements[element].rect = rect;
    }

    /// Drop the id so `element_by_id` no longer finds the element.
    pub fn clear_id(&self, element: usize) {
        self.dom.borrow_mut().elements[element].dom_id = None;
    }

    /// Dispatch an enter (`true`) or leave (`false`) to every listener.
    pub fn fire_hover(&self, element: usize, entered: bool) {
        let callbacks: Vec<HoverCallback> = self.dom.borrow().elements[element]
            .listeners
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in callbacks {
            cb(entered);
        }
    }

    pub fn has_class(&self, element: usize, class: &str) -> bool {
        self.dom.borrow().elements[element].classes.contains(class)
    }

    pub fn listener_count(&self, element: usize) -> usize {
        self.dom.borrow().elements[element].listeners.len()
    }

    pub fn detach_calls(&self) -> usize {
        self.dom.borrow().detach_calls
    }

    pub fn queries(&self) -> Vec<String> {
        self.dom.borrow().queries.clone()
    }

    fn push(&self, element: FakeElement) -> usize {
        let mut dom = self.dom.borrow_mut();
        dom.elements.push(element);
        dom.elements.len() - 1
    }
}

impl DomHost for FakeHost {
    type Element = usize;
    type Listener = u64;

    fn query_all(&self, selector: &str) -> Vec<usize> {
        let mut dom = self.dom.borrow_mut();
        dom.queries.push(selector.to_string());
        dom.elements
            .iter()
            .enumerate()
            .filter(|(_, el)| el.interactive)
            .map(|(idx, _)| idx)
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<usize> {
        self.dom
            .borrow()
            .elements
            .iter()
            .position(|el| el.dom_id.as_deref() == Some(id))
    }

    fn bounding_rect(&self, element: &usize) -> Option<ZoneRect> {
        self.dom.borrow().elements.get(*element).and_then(|el| el.rect)
    }

    fn contains(&self, ancestor: &usize, element: &usize) -> bool {
        let dom = self.dom.borrow();
        let mut current = Some(*element);
        while let Some(idx) = current {
            if idx == *ancestor {
                return true;
            }
            current = dom.elements[idx].parent;
        }
        false
    }

    fn add_class(&self, element: &usize, class: &str) {
        self.dom.borrow_mut().elements[*element]
            .classes
            .insert(class.to_string());
    }

    fn remove_class(&self, element: &usize, class: &str) {
        self.dom.borrow_mut().elements[*element].classes.remove(class);
    }

    fn attach_hover(&self, element: &usize, on_hover: HoverCallback) -> Option<u64> {
        let mut dom = self.dom.borrow_mut();
        let token = dom.next_listener;
        dom.next_listener += 1;
        dom.elements[*element].listeners.push((token, on_hover));
        Some(token)
    }

    fn detach_hover(&self, element: &usize, listener: u64) {
        let mut dom = self.dom.borrow_mut();
        dom.detach_calls += 1;
        dom.elements[*element]
            .listeners
            .retain(|(token, _)| *token != listener);
    }
}
