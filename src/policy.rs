//! Offload policy and execution mode selection.
//!
//! The edit table costs `old.len() * new.len()` cells. Below a threshold it
//! is cheaper to compute on the calling thread than to start a worker;
//! above it, the caller's thread (often an event loop) would stall.

/// Default table size above which a diff is offloaded.
pub const DEFAULT_OFFLOAD_THRESHOLD: usize = 10_000;

/// Size heuristic deciding whether a diff runs on a worker.
///
/// The threshold is a tunable, not a contract. The decision is monotonic in
/// the product of both lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffloadPolicy {
    /// Table cells (`old_len * new_len`) above which work is offloaded.
    /// Default: 10 000
    pub threshold: usize,
}

impl Default for OffloadPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_OFFLOAD_THRESHOLD,
        }
    }
}

impl OffloadPolicy {
    /// Create a policy with a custom threshold.
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Policy that never offloads.
    pub fn never() -> Self {
        Self { threshold: usize::MAX }
    }

    /// Policy that offloads anything with a non-empty table.
    pub fn always() -> Self {
        Self { threshold: 0 }
    }

    /// Whether lists of these (trimmed) lengths should go to a worker.
    #[inline]
    pub fn should_offload(&self, old_len: usize, new_len: usize) -> bool {
        old_len.saturating_mul(new_len) > self.threshold
    }
}

/// How a single diff invocation executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Let the policy decide from the trimmed sizes.
    Auto(OffloadPolicy),
    /// Always compute on the calling thread.
    Inline,
    /// Always compute on a worker.
    Offload,
}

impl Default for ExecutionMode {
    fn default() -> Self {
        Self::Auto(OffloadPolicy::default())
    }
}

impl ExecutionMode {
    /// Mode forced by a `spawn_worker` flag.
    #[inline]
    pub fn forced(spawn_worker: bool) -> Self {
        if spawn_worker { Self::Offload } else { Self::Inline }
    }

    /// Resolve to a concrete decision for the given trimmed sizes.
    #[inline]
    pub fn offloads(&self, old_len: usize, new_len: usize) -> bool {
        match self {
            Self::Auto(policy) => policy.should_offload(old_len, new_len),
            Self::Inline => false,
            Self::Offload => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let policy = OffloadPolicy::default();
        assert!(!policy.should_offload(100, 100));
        assert!(policy.should_offload(101, 100));
        assert!(!policy.should_offload(0, 1_000_000));
    }

    #[test]
    fn test_monotonic_in_product() {
        let policy = OffloadPolicy::new(50);
        let mut seen_offload = false;
        for n in 0..20 {
            let decision = policy.should_offload(n, n);
            assert!(decision || !seen_offload, "decision flipped back at {n}");
            seen_offload |= decision;
        }
        assert!(seen_offload);
    }

    #[test]
    fn test_presets() {
        assert!(!OffloadPolicy::never().should_offload(usize::MAX, usize::MAX));
        assert!(OffloadPolicy::always().should_offload(1, 1));
        assert!(!OffloadPolicy::always().should_offload(0, 5));
    }

    #[test]
    fn test_forced_modes_ignore_sizes() {
        assert!(ExecutionMode::forced(true).offloads(0, 0));
        assert!(!ExecutionMode::forced(false).offloads(10_000, 10_000));
        assert!(ExecutionMode::default().offloads(1_000, 1_000));
    }
}
