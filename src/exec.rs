//! Single-threaded execution context
//!
//! All view and brush state lives on one UI/event thread. Instead of
//! asserting "we are on the event thread" at runtime, the thread claims a
//! [`UiThread`] token once and state owners require it at construction; the
//! token and everything built on it are `!Send`, so the contract holds at
//! compile time.
//!
//! Long-running or I/O-bound work (font enumeration, file loads) runs on
//! background threads or a runtime and hands results back through a
//! [`Remote`]/[`Inbox`] pair; the inbox is drained on the UI thread before
//! any result may touch view state.

use crate::error::Error;
use std::cell::Cell;
use std::marker::PhantomData;
use tokio::sync::mpsc;

thread_local! {
    static CLAIMED: Cell<bool> = const { Cell::new(false) };
}

/// Proof of being on the UI thread
///
/// `!Send`/`!Sync`; claimed once per thread. Double claiming is a
/// programming error and panics.
pub struct UiThread {
    _not_send: PhantomData<*const ()>,
}

impl UiThread {
    pub fn claim() -> Self {
        CLAIMED.with(|claimed| {
            assert!(!claimed.get(), "UI thread token already claimed on this thread");
            claimed.set(true);
        });
        tracing::debug!("[Exec] UI thread claimed");
        Self {
            _not_send: PhantomData,
        }
    }
}

impl Drop for UiThread {
    fn drop(&mut self) {
        CLAIMED.with(|claimed| claimed.set(false));
    }
}

/// Sending half handed to background work; `Clone + Send`
pub struct Remote<T> {
    tx: mpsc::UnboundedSender<T>,
}

impl<T> Clone for Remote<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<T> Remote<T> {
    /// Queue a value for the UI thread
    pub fn send(&self, value: T) -> Result<(), Error> {
        self.tx.send(value).map_err(|_| Error::UiThreadGone)
    }
}

/// Receiving half, drained on the UI thread; `!Send`
pub struct Inbox<T> {
    rx: mpsc::UnboundedReceiver<T>,
    _not_send: PhantomData<*const ()>,
}

impl<T> Inbox<T> {
    /// Take everything queued so far without blocking
    pub fn drain(&mut self) -> Vec<T> {
        let mut out = Vec::new();
        while let Ok(value) = self.rx.try_recv() {
            out.push(value);
        }
        out
    }
}

/// A marshaling channel from background work to the UI thread
pub fn channel<T>(_ui: &UiThread) -> (Remote<T>, Inbox<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        Remote { tx },
        Inbox {
            rx,
            _not_send: PhantomData,
        },
    )
}
