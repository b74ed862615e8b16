//! Interactive-element observer.
//!
//! At mount the document is scanned once for interactive controls. Every
//! match outside the exclusion zone gets the marker class and a pair of
//! hover listeners. The captured set is fixed: elements inserted later are
//! never registered.
//!
//! [`HoverRegistration`] owns the captured set and releases exactly those
//! markers and listeners when it is dropped or explicitly released.

use std::rc::Rc;

use super::zone::ZoneRect;

/// Hover callback: `true` on pointer-enter, `false` on pointer-leave.
pub type HoverCallback = Rc<dyn Fn(bool)>;

/// The slice of a DOM the cursor widget needs.
///
/// Implementations are cheap handles (`Clone`) over a shared document.
/// Every method is infallible from the caller's view: a failed DOM call
/// degrades to "absent" / no-op.
pub trait DomHost: Clone {
    type Element: Clone;
    type Listener;

    /// All elements matching `selector`, in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Current bounding rect, or `None` if it cannot be read.
    fn bounding_rect(&self, element: &Self::Element) -> Option<ZoneRect>;

    /// DOM `Node.contains` semantics (an element contains itself).
    fn contains(&self, ancestor: &Self::Element, element: &Self::Element) -> bool;

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    /// Attach enter/leave listeners that forward to `on_hover`.
    fn attach_hover(&self, element: &Self::Element, on_hover: HoverCallback) -> Option<Self::Listener>;

    /// Detach listeners previously returned by [`DomHost::attach_hover`].
    fn detach_hover(&self, element: &Self::Element, listener: Self::Listener);

    /// Rect of the element with `id`, `None` when absent or unreadable.
    fn zone_rect(&self, id: &str) -> Option<ZoneRect> {
        self.element_by_id(id)
            .and_then(|zone| self.bounding_rect(&zone))
    }
}

struct Registered<H: DomHost> {
    element: H::Element,
    listener: Option<H::Listener>,
}

/// Scoped registration of hover listeners over a snapshot of elements.
pub struct HoverRegistration<H: DomHost> {
    host: H,
    marker_class: String,
    entries: Vec<Registered<H>>,
}

impl<H: DomHost> HoverRegistration<H> {
    /// Scan `selector`, skip descendants of the `zone_id` element, mark and
    /// attach listeners to the rest.
    pub fn acquire(
        host: &H,
        selector: &str,
        zone_id: &str,
        marker_class: &str,
        on_hover: HoverCallback,
    ) -> Self {
        let zone = host.element_by_id(zone_id);
        let mut entries = Vec::new();
        let mut skipped_in_zone = 0;

        for element in host.query_all(selector) {
            if let Some(zone) = zone.as_ref() {
                if host.contains(zone, &element) {
                    skipped_in_zone += 1;
                    continue;
                }
            }

            host.add_class(&element, marker_class);
            let listener = host.attach_hover(&element, Rc::clone(&on_hover));
            if listener.is_none() {
                log::debug!("[Observer] Failed to attach hover listener; element stays marked only");
            }
            entries.push(Registered { element, listener });
        }

        log::info!(
            "[Observer] Registered {} interactive elements ({} inside #{})",
            entries.len(),
            skipped_in_zone,
            zone_id
        );

        Self {
            host: host.clone(),
            marker_class: marker_class.to_string(),
            entries,
        }
    }

    /// Number of elements currently registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove markers and listeners from the captured set. Idempotent.
    pub fn release(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            self.host.remove_class(&entry.element, &self.marker_class);
            if let Some(listener) = entry.listener {
                self.host.detach_hover(&entry.element, listener);
            }
        }
        log::debug!("[Observer] Released {} interactive elements", count);
    }
}

impl<H: DomHost> Drop for HoverRegistration<H> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::testing::FakeHost;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<i32>>, HoverCallback) {
        let hits = Rc::new(Cell::new(0));
        let hits_cb = Rc::clone(&hits);
        (hits, Rc::new(move |_: bool| hits_cb.set(hits_cb.get() + 1)))
    }

    #[test]
    fn test_skips_elements_inside_zone() {
        let host = FakeHost::new();
        let hero = host.add_zone("hero", ZoneRect::new(0.0, 0.0, 100.0, 100.0));
        let hero_button = host.add_interactive(Some(hero));
        let nav_link = host.add_interactive(None);
        let footer_button = host.add_interactive(None);

        let (_, cb) = counter();
        let registration = HoverRegistration::acquire(&host, "a, button", "hero", "hover-effect", cb);

        assert_eq!(registration.len(), 2);
        assert!(!host.has_class(hero_button, "hover-effect"));
        assert!(host.has_class(nav_link, "hover-effect"));
        assert!(host.has_class(footer_button, "hover-effect"));
        assert_eq!(host.listener_count(hero_button), 0);
        assert_eq!(host.listener_count(nav_link), 1);
    }

    #[test]
    fn test_missing_zone_registers_everything() {
        let host = FakeHost::new();
        let a = host.add_interactive(None);
        let b = host.add_interactive(None);

        let (_, cb) = counter();
        let registration = HoverRegistration::acquire(&host, "a", "hero", "hover-effect", cb);

        assert_eq!(registration.len(), 2);
        assert!(host.has_class(a, "hover-effect"));
        assert!(host.has_class(b, "hover-effect"));
    }

    #[test]
    fn test_drop_releases_captured_set() {
        let host = FakeHost::new();
        let a = host.add_interactive(None);
        let b = host.add_interactive(None);

        let (hits, cb) = counter();
        {
            let _registration = HoverRegistration::acquire(&host, "a", "hero", "hover-effect", cb);
            host.fire_hover(a, true);
            assert_eq!(hits.get(), 1);
        }

        for el in [a, b] {
            assert_eq!(host.listener_count(el), 0);
            assert!(!host.has_class(el, "hover-effect"));
        }
        host.fire_hover(a, true);
        host.fire_hover(b, false);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_late_elements_are_not_observed() {
        let host = FakeHost::new();
        host.add_interactive(None);

        let (hits, cb) = counter();
        let mut registration = HoverRegistration::acquire(&host, "a", "hero", "hover-effect", cb);
        let late = host.add_interactive(None);

        host.fire_hover(late, true);
        assert_eq!(hits.get(), 0);
        assert!(!host.has_class(late, "hover-effect"));

        // Release only touches the captured snapshot.
        host.add_class(&late, "hover-effect");
        registration.release();
        assert!(host.has_class(late, "hover-effect"));
        assert!(registration.is_empty());
    }

    #[test]
    fn test_release_is_idempotent() {
        let host = FakeHost::new();
        let a = host.add_interactive(None);

        let (_, cb) = counter();
        let mut registration = HoverRegistration::acquire(&host, "a", "hero", "hover-effect", cb);
        registration.release();
        registration.release();
        drop(registration);

        assert_eq!(host.detach_calls(), 1);
        assert_eq!(host.listener_count(a), 0);
    }

    #[test]
    fn test_zone_rect_default_method() {
        let host = FakeHost::new();
        assert_eq!(host.zone_rect("hero"), None);

        let rect = ZoneRect::new(0.0, 0.0, 10.0, 10.0);
        host.add_zone("hero", rect);
        assert_eq!(host.zone_rect("hero"), Some(rect));
    }
}
