//! Fire-and-forget error reporting.
//!
//! The frame loop must never block on reporting a failed transmission, so
//! the channel is bounded and counts overflow instead of waiting. Built on
//! `critical-section` and `heapless::Deque`; safe from threads and
//! interrupts alike.

use core::cell::RefCell;
use core::sync::atomic::{AtomicU32, Ordering};

use critical_section::Mutex;
use heapless::Deque;

/// A bounded channel for non-fatal runtime errors.
pub struct ErrorChannel<E, const SIZE: usize> {
    inner: Mutex<RefCell<Deque<E, SIZE>>>,
    dropped: AtomicU32,
}

impl<E, const SIZE: usize> ErrorChannel<E, SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
            dropped: AtomicU32::new(0),
        }
    }

    /// Get a reporting handle for this channel.
    pub const fn sender(&self) -> ErrorSender<'_, E, SIZE> {
        ErrorSender { channel: self }
    }

    /// Queue an error. When the channel is full the error is discarded and
    /// only counted; reporting never blocks.
    pub fn report(&self, error: E) {
        let pushed = critical_section::with(|cs| {
            self.inner.borrow(cs).borrow_mut().push_back(error).is_ok()
        });
        if !pushed {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Take the oldest queued error, if any.
    pub fn take(&self) -> Option<E> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    /// How many errors were discarded because the channel was full.
    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl<E, const SIZE: usize> Default for ErrorChannel<E, SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A reporting handle for an [`ErrorChannel`].
///
/// Lightweight reference that can be copied into whatever produces errors.
pub struct ErrorSender<'a, E, const SIZE: usize> {
    channel: &'a ErrorChannel<E, SIZE>,
}

impl<E, const SIZE: usize> Clone for ErrorSender<'_, E, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, const SIZE: usize> Copy for ErrorSender<'_, E, SIZE> {}

impl<E, const SIZE: usize> ErrorSender<'_, E, SIZE> {
    /// Queue an error without ever blocking.
    pub fn report(&self, error: E) {
        self.channel.report(error);
    }
}
