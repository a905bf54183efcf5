//! Bounded admission gate for concurrent partition transactions.

use parking_lot::{Condvar, Mutex};

/// A counting semaphore: at most the configured number of permits are out
/// at once. `acquire` blocks until a permit frees.
pub(crate) struct Gate {
    permits: Mutex<usize>,
    freed: Condvar,
}

impl Gate {
    pub(crate) fn new(permits: usize) -> Self {
        Gate {
            permits: Mutex::new(permits),
            freed: Condvar::new(),
        }
    }

    /// Take a permit, blocking until one is available. The permit is
    /// returned when the guard drops.
    pub(crate) fn acquire(&self) -> GatePermit<'_> {
        let mut permits = self.permits.lock();
        while *permits == 0 {
            self.freed.wait(&mut permits);
        }
        *permits -= 1;
        GatePermit { gate: self }
    }
}

/// RAII permit handle; releases its slot on drop, even on panic.
pub(crate) struct GatePermit<'a> {
    gate: &'a Gate,
}

impl Drop for GatePermit<'_> {
    fn drop(&mut self) {
        let mut permits = self.gate.permits.lock();
        *permits += 1;
        self.gate.freed.notify_one();
    }
}
