//! Cycle timing abstraction.

/// Monotonic millisecond clock with a blocking idle primitive.
pub trait CadenceClock {
    fn now_ms(&mut self) -> u64;

    /// Blocks for `ms`; implementations sleep rather than spin.
    fn idle_wait_ms(&mut self, ms: u32);
}
