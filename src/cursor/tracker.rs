//! Mounted cursor tracker.
//!
//! Ties the pieces together for one mount:
//! pointer move → zone classification → state reducer → render sink, with
//! the hover registration feeding `Hover` inputs into the same reducer.
//! Dropping the tracker is the unmount.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::events::CursorInput;
use super::observer::{DomHost, HoverCallback, HoverRegistration};
use super::state::CursorState;
use crate::config::CursorConfig;
use crate::rendering::{CursorFrame, RenderSink};

/// State shared between the tracker and its hover listeners.
struct Shared {
    state: RefCell<CursorState>,
    sink: RefCell<Box<dyn RenderSink>>,
    trail_max_opacity: f64,
}

impl Shared {
    fn dispatch(&self, input: CursorInput) {
        let changed = self.state.borrow_mut().apply(input);
        if changed {
            let frame = self.frame();
            self.sink.borrow_mut().present(&frame);
        }
    }

    fn frame(&self) -> CursorFrame {
        CursorFrame::from_state(&self.state.borrow(), self.trail_max_opacity)
    }
}

/// One mounted cursor widget over a [`DomHost`].
pub struct CursorTracker<H: DomHost> {
    host: H,
    zone_id: String,
    shared: Rc<Shared>,
    registration: HoverRegistration<H>,
}

impl<H: DomHost> CursorTracker<H> {
    /// Create state, register interactive elements and present the first
    /// frame.
    pub fn mount(host: H, mut config: CursorConfig, sink: impl RenderSink + 'static) -> Self {
        config.validate();

        let shared = Rc::new(Shared {
            state: RefCell::new(CursorState::new(config.trail_capacity())),
            sink: RefCell::new(Box::new(sink)),
            trail_max_opacity: config.trail_max_opacity,
        });

        // Weak so a listener that outlives the mount can't touch dropped state.
        let weak: Weak<Shared> = Rc::downgrade(&shared);
        let on_hover: HoverCallback = Rc::new(move |hovering: bool| {
            if let Some(shared) = weak.upgrade() {
                log::trace!("[CursorTracker] hover={}", hovering);
                shared.dispatch(CursorInput::Hover(hovering));
            }
        });

        let registration = HoverRegistration::acquire(
            &host,
            &config.interactive_selector,
            &config.exclusion_zone_id,
            &config.marker_class,
            on_hover,
        );

        let initial = shared.frame();
        shared.sink.borrow_mut().present(&initial);

        log::info!(
            "[CursorTracker] Mounted (zone #{}, trail {})",
            config.exclusion_zone_id,
            config.trail_length
        );

        Self {
            host,
            zone_id: config.exclusion_zone_id,
            shared,
            registration,
        }
    }

    /// Handle a pointer move at viewport coordinates `(x, y)`.
    ///
    /// The zone rect is read synchronously here, so a scroll between two
    /// events is picked up on the next move.
    pub fn pointer_moved(&self, x: f64, y: f64) {
        let zone = self.host.zone_rect(&self.zone_id);
        log::trace!("[CursorTracker] move ({}, {}) zone={:?}", x, y, zone);
        self.shared.dispatch(CursorInput::moved(x, y, zone));
    }

    /// Current frame, independent of the sink.
    pub fn frame(&self) -> CursorFrame {
        self.shared.frame()
    }

    /// Copy of the current state.
    pub fn state(&self) -> CursorState {
        self.shared.state.borrow().clone()
    }

    /// Number of interactive elements registered at mount.
    pub fn registered_count(&self) -> usize {
        self.registration.len()
    }

    /// Release listeners and markers, then drop the state.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<H: DomHost> Drop for CursorTracker<H> {
    fn drop(&mut self) {
        self.registration.release();
        log::info!("[CursorTracker] Unmounted");
    }
}
