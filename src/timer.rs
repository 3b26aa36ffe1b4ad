// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A single-slot cancellable timer.
//!
//! Both the search debounce and the preview hover-intent use the same shape:
//! at most one pending callback, and arming a new one replaces the old. The
//! slot hands out a generation number on every arm; a timer that wakes up
//! after being replaced sees a stale generation and does nothing.
//!
//! Timers run on the ambient tokio runtime, so `arm` must be called from
//! inside one.

use parking_lot::Mutex;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

#[derive(Default)]
struct SlotState {
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

/// At most one pending timer; arming cancels whatever was there.
#[derive(Clone, Default)]
pub struct TimerSlot {
    state: Arc<Mutex<SlotState>>,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` after `delay`, cancelling any timer already pending.
    ///
    /// Once the delay elapses the slot is empty again, so the task itself is
    /// free to re-arm or cancel the slot without aborting itself.
    pub fn arm<F, Fut>(&self, delay: Duration, task: F) -> u64
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let mut state = self.state.lock();
        if let Some(previous) = state.pending.take() {
            previous.abort();
        }
        state.generation += 1;
        let generation = state.generation;

        let slot = Arc::clone(&self.state);
        state.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if release(&slot, generation) {
                task().await;
            }
        }));
        generation
    }

    /// Cancel the pending timer. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let mut state = self.state.lock();
        state.generation += 1;
        match state.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Is a timer armed and not yet fired?
    pub fn is_armed(&self) -> bool {
        self.state.lock().pending.is_some()
    }
}

/// Empty the slot if `generation` still owns it.
fn release(slot: &Mutex<SlotState>, generation: u64) -> bool {
    let mut state = slot.lock();
    if state.generation == generation {
        state.pending = None;
        true
    } else {
        false
    }
}
