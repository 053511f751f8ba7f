//! Timer tokens for deferred effects.
//!
//! The engines never block and never own a clock. When an operation needs a
//! delayed follow-up (flipping a mismatched pair back, the computer's
//! "thinking" pause), it returns a [`Delayed`] value. The caller waits out
//! `delay` with whatever timer facility it has, then hands the value back to
//! the engine's `fire` operation.
//!
//! ## Cancellation
//!
//! Each engine owns an [`Epoch`] and bumps it on every reset-class operation
//! (new deal, board reset, mode change). A `Delayed` value carries the epoch
//! at scheduling time; `fire` drops it if the epoch has moved on. This makes
//! every pending timer logically cancellable even when the caller's timer
//! mechanism cannot physically cancel it.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monotonic generation counter for timer invalidation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Epoch(u64);

impl Epoch {
    /// Advance to the next generation, invalidating all outstanding
    /// [`Delayed`] values scheduled under the current one.
    pub fn bump(&mut self) {
        self.0 += 1;
    }
}

/// A deferred engine effect, scheduled but not yet applied.
///
/// The caller is expected to wait `delay`, then pass the whole value back to
/// the engine that produced it. Firing it early is harmless to the engine's
/// invariants (the delays exist for pacing, not correctness); firing it after
/// a reset is a no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delayed<T> {
    /// Engine epoch at scheduling time.
    pub token: Epoch,

    /// How long the caller should wait before firing.
    pub delay: Duration,

    /// What to do when the delay expires.
    pub payload: T,
}

impl<T> Delayed<T> {
    /// Create a new deferred effect.
    #[must_use]
    pub fn new(token: Epoch, delay: Duration, payload: T) -> Self {
        Self {
            token,
            delay,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_bump() {
        let mut epoch = Epoch::default();
        let scheduled_under = epoch;

        epoch.bump();

        assert_ne!(epoch, scheduled_under);
    }

    #[test]
    fn test_delayed_carries_token() {
        let mut epoch = Epoch::default();
        let delayed = Delayed::new(epoch, Duration::from_millis(700), "move");

        assert_eq!(delayed.token, epoch);
        epoch.bump();
        assert_ne!(delayed.token, epoch);
    }
}
