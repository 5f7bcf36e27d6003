//! Scratch allocation ledger
//!
//! White-box instrumentation compiled in with the `ledger` feature. Every
//! scratch acquisition, wipe and release on the current thread is counted.
//! A wipe is only counted by the wipe step itself, so a release that skipped
//! it leaves `wipes` behind `released`. Tests can also arm faults: a chosen
//! acquisition fails as if the allocator had run out of memory, or the next
//! release skips its wipe.
//!
//! State is thread-local, so tests running in parallel do not interfere.

use std::cell::RefCell;

use saltwrap_api::{Error, Result};

/// Counters observed since the last [`reset`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    /// Buffers successfully acquired
    pub acquired: usize,
    /// Buffers released
    pub released: usize,
    /// Buffers wiped before release
    pub wipes: usize,
    /// Total bytes acquired
    pub bytes_acquired: usize,
    /// Acquisitions failed on purpose by an armed fault
    pub faults_injected: usize,
}

impl Ledger {
    /// Buffers acquired but not yet released
    pub fn live(&self) -> usize {
        self.acquired - self.released
    }

    /// Buffers released without being wiped first
    pub fn unwiped(&self) -> usize {
        self.released.saturating_sub(self.wipes)
    }

    /// Everything acquired was wiped and released
    pub fn is_clean(&self) -> bool {
        self.live() == 0 && self.wipes == self.released
    }
}

#[derive(Default)]
struct State {
    ledger: Ledger,
    fail_in: Option<usize>,
    skip_wipe: bool,
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::default());
}

/// Clear all counters and disarm any pending fault
pub fn reset() {
    STATE.with(|s| *s.borrow_mut() = State::default());
}

/// Current counters
pub fn snapshot() -> Ledger {
    STATE.with(|s| s.borrow().ledger)
}

/// Make the `n`-th acquisition from now (1-based) fail with `OutOfMemory`
pub fn fail_nth_acquisition(n: usize) {
    assert!(n > 0, "acquisitions are counted from 1");
    STATE.with(|s| s.borrow_mut().fail_in = Some(n));
}

/// Make the next scratch release skip its wipe
///
/// Exists so tests can show that [`Ledger::is_clean`] notices a missing
/// wipe.
pub fn skip_next_wipe() {
    STATE.with(|s| s.borrow_mut().skip_wipe = true);
}

pub(crate) fn check_fault(context: &'static str, len: usize) -> Result<()> {
    STATE.with(|s| {
        let mut s = s.borrow_mut();
        match s.fail_in {
            Some(1) => {
                s.fail_in = None;
                s.ledger.faults_injected += 1;
                Err(Error::OutOfMemory {
                    context,
                    requested: len,
                })
            }
            Some(n) => {
                s.fail_in = Some(n - 1);
                Ok(())
            }
            None => Ok(()),
        }
    })
}

pub(crate) fn record_acquire(len: usize) {
    STATE.with(|s| {
        let mut s = s.borrow_mut();
        s.ledger.acquired += 1;
        s.ledger.bytes_acquired += len;
    });
}

pub(crate) fn take_skipped_wipe() -> bool {
    STATE.with(|s| core::mem::take(&mut s.borrow_mut().skip_wipe))
}

pub(crate) fn record_wipe() {
    STATE.with(|s| s.borrow_mut().ledger.wipes += 1);
}

pub(crate) fn record_release() {
    STATE.with(|s| s.borrow_mut().ledger.released += 1);
}
