// The bounded circular byte buffer shared by any number of producers and consumers.

use crate::Core::Semaphore;
use parking_lot::Mutex;

/// Storage plus both cursors. Only ever touched with the channel's lock held.
pub(crate) struct Ring {
    /// Fixed-length backing store; `storage.len()` is the channel capacity.
    pub(crate) storage: Box<[u8]>,

    /// Next slot a producer writes.
    pub(crate) write_cursor: usize,

    /// Next slot a consumer reads.
    pub(crate) read_cursor: usize,
}

/// A fixed-capacity multi-producer, multi-consumer byte channel.
///
/// ### Concurrency Design:
/// - **Producers**: take a permit from `free_slots` (blocking or not), then
///   under the lock write one byte at `write_cursor` and advance it, then
///   release a permit on `filled_slots`.
/// - **Consumers**: mirror this with `filled_slots`, `read_cursor` and
///   `free_slots`.
///
/// Waiting for a permit never happens with the lock held, and the lock is
/// only held for one cursor update plus one slot access. A permit is always
/// consumed before the opposite one is produced, so
/// `free_slots + filled_slots == capacity` whenever no operation is in flight.
pub struct BoundedChannel {
    /// Exclusion guard over the storage and both cursors.
    pub(crate) ring: Mutex<Ring>,

    /// Empty slots available to producers. Starts at `capacity`.
    pub(crate) free_slots: Semaphore,

    /// Occupied slots available to consumers. Starts at 0.
    pub(crate) filled_slots: Semaphore,

    /// Number of slots, fixed at construction.
    pub(crate) capacity: usize,
}
