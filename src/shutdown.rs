//! Cooperative shutdown signalling.
//!
//! One `Shutdown` value is shared by every star activity and the frame loop.
//! Activities poll [`Shutdown::is_requested`] once per iteration; an activity
//! mid-sleep observes the request only after its sleep completes, so the
//! worst-case shutdown latency is one full sleep interval (the whole
//! lifetime in binary fade mode, lifetime/100 in smooth mode).

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Broadcast cancellation signal with join semantics.
pub struct Shutdown {
    requested: AtomicBool,
    active: AtomicUsize,
    all_stopped: Signal<CriticalSectionRawMutex, ()>,
}

impl Shutdown {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
            active: AtomicUsize::new(0),
            all_stopped: Signal::new(),
        }
    }

    /// Ask every tracked activity to stop.
    pub fn request(&self) {
        self.requested.store(true, Ordering::Release);
        if self.active.load(Ordering::Acquire) == 0 {
            self.all_stopped.signal(());
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Register the calling activity. The guard deregisters on drop; the
    /// last guard dropped after a shutdown request releases [`wait_idle`].
    ///
    /// [`wait_idle`]: Self::wait_idle
    pub fn track(&self) -> ActiveGuard<'_> {
        self.active.fetch_add(1, Ordering::AcqRel);
        ActiveGuard { shutdown: self }
    }

    /// Wait until shutdown was requested and every tracked activity exited.
    pub async fn wait_idle(&self) {
        // re-check after every wakeup; a stale latched signal must not
        // release the waiter while activities are still registered
        loop {
            if self.is_requested() && self.active.load(Ordering::Acquire) == 0 {
                return;
            }
            self.all_stopped.wait().await;
        }
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps an activity registered with its [`Shutdown`] until dropped.
pub struct ActiveGuard<'a> {
    shutdown: &'a Shutdown,
}

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        let remaining = self.shutdown.active.fetch_sub(1, Ordering::AcqRel) - 1;
        if remaining == 0 && self.shutdown.is_requested() {
            self.shutdown.all_stopped.signal(());
        }
    }
}
