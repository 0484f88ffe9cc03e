// Copyright 2025 the Sentiment Slider Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sentiment Timing: host-agnostic one-shot timers.
//!
//! This crate provides [`TimerQueue`], a small queue of cancellable one-shot
//! timers keyed by deadline. It never reads a clock: the host passes the
//! current time (as a [`Duration`](core::time::Duration) since an arbitrary
//! origin of its choosing) and the queue reports which timers are due.
//!
//! That makes timed behavior fully deterministic under test. A test can
//! schedule, cancel and advance time explicitly instead of sleeping.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use sentiment_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let start = Duration::ZERO;
//!
//! let reveal = timers.schedule_after(start, Duration::from_millis(500), "reveal");
//! timers.schedule_after(start, Duration::from_millis(600), "clear");
//!
//! // Nothing is due yet.
//! assert_eq!(timers.pop_due(Duration::from_millis(100)), None);
//!
//! // Cancelling is idempotent.
//! assert_eq!(timers.cancel(reveal), Some("reveal"));
//! assert_eq!(timers.cancel(reveal), None);
//!
//! let fired: Vec<_> = timers
//!     .drain_due(Duration::from_millis(700))
//!     .map(|(_, payload)| payload)
//!     .collect();
//! assert_eq!(fired, ["clear"]);
//! ```
//!
//! ## Ordering
//!
//! Timers fire in deadline order. Timers sharing a deadline fire in the order
//! they were scheduled.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{DrainDue, TimerId, TimerQueue};
