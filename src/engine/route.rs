//! Branch routing for exclusive choices.
//!
//! The random source is an injectable capability rather than an implicit
//! global generator, so tests can force deterministic routing.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Picks which outgoing flow an exclusive choice routes a token to.
///
/// Called once per consumed token, so two tokens arriving together each make
/// their own independent choice and may diverge.
pub trait FlowRouter: Send + Sync {
    /// Pick an outgoing flow index in `0..fan_out`.
    ///
    /// `fan_out` is the number of outgoing flows and is at least 1 for any
    /// well-formed graph (the builder rejects non-End nodes without an
    /// outgoing flow).
    fn pick_route(&self, fan_out: usize) -> usize;
}

/// Uniformly random router backed by a seeded [`StdRng`].
///
/// # Example
///
/// ```
/// use tokenflow::engine::{FlowRouter, RandomRouter};
///
/// let router = RandomRouter::seeded(42);
/// let first = router.pick_route(4);
///
/// // Same seed produces the same route sequence.
/// let replay = RandomRouter::seeded(42);
/// assert_eq!(replay.pick_route(4), first);
/// ```
pub struct RandomRouter {
    rng: Mutex<StdRng>,
    seed: u64,
}

impl RandomRouter {
    /// Create a router seeded from system time entropy.
    #[must_use]
    pub fn new() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("System time before UNIX epoch")
            .as_nanos() as u64;
        Self::seeded(seed)
    }

    /// Create a router with a fixed seed for deterministic replay.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed,
        }
    }

    /// Get the seed used to create this router.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Reset the router to its initial state.
    pub fn reset(&self) {
        *self.rng.lock() = StdRng::seed_from_u64(self.seed);
    }
}

impl Default for RandomRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowRouter for RandomRouter {
    fn pick_route(&self, fan_out: usize) -> usize {
        self.rng.lock().gen_range(0..fan_out)
    }
}

/// Router that always selects the same index, clamped to the fan-out.
///
/// Used by tests that need a forced branch choice.
#[derive(Debug, Clone, Copy)]
pub struct FixedRouter {
    index: usize,
}

impl FixedRouter {
    /// Create a router that always picks `index` (clamped to `fan_out - 1`).
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self { index }
    }
}

impl FlowRouter for FixedRouter {
    fn pick_route(&self, fan_out: usize) -> usize {
        self.index.min(fan_out.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_router_is_deterministic() {
        let r1 = RandomRouter::seeded(12345);
        let r2 = RandomRouter::seeded(12345);

        let routes1: Vec<usize> = (0..10).map(|_| r1.pick_route(5)).collect();
        let routes2: Vec<usize> = (0..10).map(|_| r2.pick_route(5)).collect();

        assert_eq!(routes1, routes2);
    }

    #[test]
    fn seeded_router_reset() {
        let router = RandomRouter::seeded(42);
        let first_run: Vec<usize> = (0..5).map(|_| router.pick_route(3)).collect();

        router.reset();
        let second_run: Vec<usize> = (0..5).map(|_| router.pick_route(3)).collect();

        assert_eq!(first_run, second_run);
    }

    #[test]
    fn routes_stay_in_range() {
        let router = RandomRouter::seeded(7);
        for _ in 0..100 {
            assert!(router.pick_route(3) < 3);
        }
    }

    #[test]
    fn single_fan_out_degenerates() {
        let router = RandomRouter::seeded(99);
        for _ in 0..10 {
            assert_eq!(router.pick_route(1), 0);
        }
    }

    #[test]
    fn fixed_router_clamps() {
        let router = FixedRouter::new(5);
        assert_eq!(router.pick_route(2), 1);
        assert_eq!(router.pick_route(10), 5);

        let router = FixedRouter::new(0);
        assert_eq!(router.pick_route(3), 0);
    }
}
