// Plain data types shared by the bounded channel and its handles.

use std::collections::TryReserveError;
use std::io;
use thiserror::Error;

/// Largest capacity a channel accepts: permit counters are 32-bit futex words.
pub const MAX_CAPACITY: usize = u32::MAX as usize;

/// Failures reported by the bounded channel.
///
/// A full or empty channel is never an error: blocking calls wait and the
/// non-blocking calls report it through `bool`/`Option`.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// A channel with no slots could never transfer a byte.
    #[error("capacity must be greater than zero")]
    ZeroCapacity,

    #[error("capacity {requested} exceeds the maximum of {max} slots")]
    CapacityTooLarge { requested: usize, max: usize },

    /// Storage for the ring could not be reserved. Nothing was left allocated.
    #[error("failed to allocate {capacity} bytes of ring storage")]
    AllocationFailure {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },

    /// The blocking wait for a permit failed (e.g. interrupted by a signal).
    #[error("waiting for a slot failed: {0}")]
    WaitFailure(#[source] io::Error),
}

/// Point-in-time view of a channel's permit counters.
///
/// Both counters are read without the lock, so under concurrent traffic the
/// pair is only approximately consistent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChannelSnapshot {
    pub capacity: usize,
    pub free: usize,
    pub filled: usize,
}

impl ChannelSnapshot {
    /// Permits currently held by operations between acquire and release.
    /// Zero whenever the channel is quiescent.
    pub fn in_flight(&self) -> usize {
        self.capacity.saturating_sub(self.free + self.filled)
    }
}
