// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-scroll suppression shared between slider instances.
//!
//! While any slider is being dragged, the host page must not scroll. Several
//! sliders may be on screen at once (and multi-touch can drag two of them
//! together), so suppression is reference counted: every dragging slider
//! holds a [`ScrollHold`], and scrolling is suppressed while at least one
//! hold is alive.
//!
//! ```rust
//! use sentiment_slider::scroll::{ScrollInput, ScrollSuppressor};
//!
//! let scroll = ScrollSuppressor::new();
//!
//! let first = scroll.acquire();
//! let second = scroll.acquire();
//! assert!(scroll.should_prevent(ScrollInput::Wheel));
//!
//! drop(first);
//! assert!(scroll.is_suppressed());
//!
//! drop(second);
//! assert!(!scroll.should_prevent(ScrollInput::Wheel));
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

/// Default distance from the top/bottom viewport edge within which a touch
/// start is prevented while suppressed.
pub const DEFAULT_EDGE_MARGIN: f64 = 10.0;

/// A scroll-producing input the host is about to let through.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScrollInput {
    /// A touch moved.
    TouchMove,
    /// A mouse wheel or trackpad scroll.
    Wheel,
    /// A touch started at vertical position `y` in a viewport `viewport_height` tall.
    TouchStart {
        /// Vertical touch position in viewport coordinates.
        y: f64,
        /// Viewport height in the same units.
        viewport_height: f64,
    },
}

struct Shared {
    holders: usize,
    edge_margin: f64,
    listener: Option<Box<dyn FnMut(bool)>>,
    /// Last state reported to the listener.
    delivered: bool,
    notifying: bool,
}

/// Cloneable handle to a shared scroll-suppression counter.
///
/// Clones share the same counter. Give every slider on a page a clone of one
/// suppressor.
#[derive(Clone)]
pub struct ScrollSuppressor {
    shared: Rc<RefCell<Shared>>,
}

impl ScrollSuppressor {
    /// Creates a suppressor with no holds and the default edge margin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                holders: 0,
                edge_margin: DEFAULT_EDGE_MARGIN,
                listener: None,
                delivered: false,
                notifying: false,
            })),
        }
    }

    /// Sets a listener called with `true` when suppression starts and `false`
    /// when it ends.
    ///
    /// The listener only sees edges (first hold acquired, last hold released),
    /// never intermediate count changes. A host typically toggles a
    /// `no-scroll` style on its document here.
    ///
    /// The listener may acquire or release holds itself. Edges it causes are
    /// delivered after it returns, collapsed to the latest state, so the last
    /// call always matches [`is_suppressed`](Self::is_suppressed).
    pub fn set_listener(&self, listener: impl FnMut(bool) + 'static) {
        self.shared.borrow_mut().listener = Some(Box::new(listener));
    }

    /// Sets the touch-start edge margin.
    pub fn set_edge_margin(&self, margin: f64) {
        self.shared.borrow_mut().edge_margin = margin;
    }

    /// Acquires a hold. Scrolling stays suppressed until every hold is dropped.
    #[must_use = "suppression ends as soon as the hold is dropped"]
    pub fn acquire(&self) -> ScrollHold {
        self.shared.borrow_mut().holders += 1;
        self.notify();
        ScrollHold {
            suppressor: self.clone(),
        }
    }

    fn release(&self) {
        {
            let mut shared = self.shared.borrow_mut();
            shared.holders = shared.holders.saturating_sub(1);
        }
        self.notify();
    }

    /// Reports the current state to the listener until it stops changing.
    ///
    /// Nested calls from inside the listener return immediately; the
    /// outermost call picks up whatever state they left behind.
    fn notify(&self) {
        {
            let mut shared = self.shared.borrow_mut();
            if shared.notifying {
                return;
            }
            shared.notifying = true;
        }
        loop {
            let (suppressed, listener) = {
                let mut shared = self.shared.borrow_mut();
                let suppressed = shared.holders > 0;
                if suppressed == shared.delivered {
                    shared.notifying = false;
                    return;
                }
                shared.delivered = suppressed;
                // Taken out so the listener may use this suppressor re-entrantly.
                (suppressed, shared.listener.take())
            };
            log::debug!("scroll suppression {}", if suppressed { "on" } else { "off" });
            if let Some(mut listener) = listener {
                listener(suppressed);
                let mut shared = self.shared.borrow_mut();
                if shared.listener.is_none() {
                    shared.listener = Some(listener);
                }
            }
        }
    }

    /// Number of live holds.
    #[must_use]
    pub fn holders(&self) -> usize {
        self.shared.borrow().holders
    }

    /// Returns `true` while at least one hold is alive.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.holders() > 0
    }

    /// Decides whether the host should cancel the default action of `input`.
    ///
    /// Touch moves and wheel scrolling are always prevented while suppressed.
    /// Touch starts are only prevented near the top or bottom edge of the
    /// viewport, which is where elastic over-scroll begins.
    #[must_use]
    pub fn should_prevent(&self, input: ScrollInput) -> bool {
        let shared = self.shared.borrow();
        if shared.holders == 0 {
            return false;
        }
        match input {
            ScrollInput::TouchMove | ScrollInput::Wheel => true,
            ScrollInput::TouchStart {
                y,
                viewport_height,
            } => y < shared.edge_margin || y > viewport_height - shared.edge_margin,
        }
    }
}

impl Default for ScrollSuppressor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScrollSuppressor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("ScrollSuppressor")
            .field("holders", &shared.holders)
            .field("edge_margin", &shared.edge_margin)
            .field("has_listener", &shared.listener.is_some())
            .finish()
    }
}

/// A live suppression hold. Dropping it releases the hold.
#[derive(Debug)]
pub struct ScrollHold {
    suppressor: ScrollSuppressor,
}

impl Drop for ScrollHold {
    fn drop(&mut self) {
        self.suppressor.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn idle_suppressor_prevents_nothing() {
        let s = ScrollSuppressor::new();
        assert!(!s.is_suppressed());
        assert!(!s.should_prevent(ScrollInput::TouchMove));
        assert!(!s.should_prevent(ScrollInput::Wheel));
        assert!(!s.should_prevent(ScrollInput::TouchStart {
            y: 0.0,
            viewport_height: 800.0
        }));
    }

    #[test]
    fn holds_are_counted() {
        let s = ScrollSuppressor::new();
        let a = s.acquire();
        let b = s.clone().acquire();
        assert_eq!(s.holders(), 2);

        drop(a);
        assert_eq!(s.holders(), 1);
        assert!(s.is_suppressed());

        drop(b);
        assert_eq!(s.holders(), 0);
        assert!(!s.is_suppressed());
    }

    #[test]
    fn listener_sees_only_edges() {
        let s = ScrollSuppressor::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        s.set_listener(move |on| sink.borrow_mut().push(on));

        let a = s.acquire();
        let b = s.acquire();
        drop(b);
        drop(a);
        let c = s.acquire();
        drop(c);

        assert_eq!(*log.borrow(), [true, false, true, false]);
    }

    #[test]
    fn listener_may_query_the_suppressor() {
        let s = ScrollSuppressor::new();
        let probe = s.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        s.set_listener(move |_| sink.borrow_mut().push(probe.holders()));

        let hold = s.acquire();
        drop(hold);

        assert_eq!(*seen.borrow(), [1, 0]);
    }

    #[test]
    fn listener_acquiring_on_release_is_reported() {
        let s = ScrollSuppressor::new();
        let edges = Rc::new(RefCell::new(Vec::new()));
        let kept = Rc::new(RefCell::new(None));
        let reacquired = Rc::new(Cell::new(false));

        let sink = Rc::clone(&edges);
        let keep = Rc::clone(&kept);
        let once = Rc::clone(&reacquired);
        let handle = s.clone();
        s.set_listener(move |on| {
            sink.borrow_mut().push(on);
            if !on && !once.replace(true) {
                *keep.borrow_mut() = Some(handle.acquire());
            }
        });

        drop(s.acquire());

        assert_eq!(s.holders(), 1);
        assert!(s.is_suppressed());
        assert_eq!(*edges.borrow(), [true, false, true]);

        let held = kept.borrow_mut().take();
        drop(held);
        assert_eq!(s.holders(), 0);
        assert_eq!(*edges.borrow(), [true, false, true, false]);
    }

    #[test]
    fn listener_toggling_back_and_forth_collapses_to_latest() {
        let s = ScrollSuppressor::new();
        let edges = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&edges);
        let handle = s.clone();
        s.set_listener(move |on| {
            sink.borrow_mut().push(on);
            if on {
                // Briefly take and drop a second hold; the count never hits 0.
                drop(handle.acquire());
            }
        });

        let hold = s.acquire();
        assert_eq!(*edges.borrow(), [true]);
        drop(hold);
        assert_eq!(*edges.borrow(), [true, false]);
    }

    #[test]
    fn touch_start_is_prevented_only_near_edges() {
        let s = ScrollSuppressor::new();
        let _hold = s.acquire();
        let at = |y| ScrollInput::TouchStart {
            y,
            viewport_height: 800.0,
        };

        assert!(s.should_prevent(at(5.0)));
        assert!(!s.should_prevent(at(10.0)));
        assert!(!s.should_prevent(at(400.0)));
        assert!(!s.should_prevent(at(790.0)));
        assert!(s.should_prevent(at(795.0)));
    }

    #[test]
    fn edge_margin_is_configurable() {
        let s = ScrollSuppressor::new();
        s.set_edge_margin(50.0);
        let _hold = s.acquire();
        assert!(s.should_prevent(ScrollInput::TouchStart {
            y: 40.0,
            viewport_height: 800.0
        }));
    }
}
