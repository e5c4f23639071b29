use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cooperative run/stop flag for a vehicle.
///
/// The drive loop checks the switch at every cycle boundary and each
/// background worker checks it between iterations of its own loop. Any part
/// holding a clone can end the drive by turning it off; there is no way to
/// interrupt a part call already in flight.
///
/// Clones share the same underlying flag. Turning the switch off is
/// one-way: a stopped vehicle does not restart.
#[derive(Debug, Clone)]
pub struct Switch {
    on: Arc<AtomicBool>,
}

impl Switch {
    /// Create a switch in the "on" position.
    pub fn new() -> Self {
        Switch {
            on: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::SeqCst)
    }

    /// Turn the switch off, signalling the drive loop and all workers to
    /// wind down at their next check.
    pub fn turn_off(&self) {
        self.on.store(false, Ordering::SeqCst);
    }
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}
