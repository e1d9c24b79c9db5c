use std::io;
use std::time::Duration;

use parking_lot::Mutex;

use super::Buffer::{BoundedChannel, Ring};
use crate::trace::{debug, warn};
use crate::Core::Semaphore;
use crate::MPMC::Structs::Buffer_Structs::{ChannelError, ChannelSnapshot, MAX_CAPACITY};

impl Ring {
    /// Store `byte` at the write cursor and advance it.
    #[inline]
    fn push(&mut self, byte: u8) {
        let cursor = self.write_cursor;
        self.storage[cursor] = byte;
        self.write_cursor = (cursor + 1) % self.storage.len();
    }

    /// Take the byte at the read cursor and advance it.
    #[inline]
    fn pop(&mut self) -> u8 {
        let cursor = self.read_cursor;
        let byte = self.storage[cursor];
        self.read_cursor = (cursor + 1) % self.storage.len();
        byte
    }
}

impl BoundedChannel {
    /// Create a channel holding up to `capacity` bytes.
    ///
    /// Storage is reserved fallibly: if the allocator refuses, the error is
    /// returned and nothing stays allocated.
    pub fn new(capacity: usize) -> Result<Self, ChannelError> {
        if capacity == 0 {
            return Err(ChannelError::ZeroCapacity);
        }
        let permits = u32::try_from(capacity).map_err(|_| ChannelError::CapacityTooLarge {
            requested: capacity,
            max: MAX_CAPACITY,
        })?;

        let mut storage = Vec::new();
        storage
            .try_reserve_exact(capacity)
            .map_err(|source| ChannelError::AllocationFailure { capacity, source })?;
        storage.resize(capacity, 0u8);

        debug!(capacity, "bounded channel created");

        Ok(Self {
            ring: Mutex::new(Ring {
                storage: storage.into_boxed_slice(),
                write_cursor: 0,
                read_cursor: 0,
            }),
            free_slots: Semaphore::new(permits),
            filled_slots: Semaphore::new(0),
            capacity,
        })
    }

    /// Tear the channel down now. Equivalent to dropping it.
    pub fn destroy(self) {
        drop(self);
    }

    /// Write one byte, blocking while the channel is full.
    ///
    /// Fails only if waiting for a free slot fails; the byte is then not stored.
    pub fn put(&self, byte: u8) -> Result<(), ChannelError> {
        self.free_slots
            .acquire()
            .map_err(|e| Self::wait_failed("free", e))?;
        self.commit_put(byte);
        Ok(())
    }

    /// Read one byte, blocking while the channel is empty.
    pub fn get(&self) -> Result<u8, ChannelError> {
        self.filled_slots
            .acquire()
            .map_err(|e| Self::wait_failed("filled", e))?;
        Ok(self.commit_get())
    }

    /// Write one byte if a slot is free right now. `false` leaves the channel untouched.
    pub fn try_put(&self, byte: u8) -> bool {
        if !self.free_slots.try_acquire() {
            return false;
        }
        self.commit_put(byte);
        true
    }

    /// Read one byte if one is stored right now.
    pub fn try_get(&self) -> Option<u8> {
        if !self.filled_slots.try_acquire() {
            return None;
        }
        Some(self.commit_get())
    }

    /// Like [`put`](Self::put) but gives up after `timeout`.
    ///
    /// # Returns
    /// * `Ok(true)` if the byte was stored
    /// * `Ok(false)` if the channel stayed full for the whole timeout
    /// * `Err(ChannelError::WaitFailure)` if the wait itself failed
    pub fn put_timeout(&self, byte: u8, timeout: Duration) -> Result<bool, ChannelError> {
        let acquired = self
            .free_slots
            .acquire_timeout(timeout)
            .map_err(|e| Self::wait_failed("free", e))?;
        if acquired {
            self.commit_put(byte);
        }
        Ok(acquired)
    }

    /// Like [`get`](Self::get) but gives up after `timeout`, returning `Ok(None)`.
    pub fn get_timeout(&self, timeout: Duration) -> Result<Option<u8>, ChannelError> {
        let acquired = self
            .filled_slots
            .acquire_timeout(timeout)
            .map_err(|e| Self::wait_failed("filled", e))?;
        Ok(acquired.then(|| self.commit_get()))
    }

    // The caller owns one free-slot permit.
    #[inline]
    fn commit_put(&self, byte: u8) {
        self.ring.lock().push(byte);
        self.filled_slots.release();
    }

    // The caller owns one filled-slot permit.
    #[inline]
    fn commit_get(&self) -> u8 {
        let byte = self.ring.lock().pop();
        self.free_slots.release();
        byte
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn wait_failed(slots: &'static str, err: io::Error) -> ChannelError {
        warn!(slots, error = %err, "wait for slot permit failed");
        ChannelError::WaitFailure(err)
    }

    /// Number of slots, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes currently available to consumers.
    #[inline]
    pub fn len(&self) -> usize {
        self.filled_slots.available() as usize
    }

    /// Slots currently available to producers.
    #[inline]
    pub fn free(&self) -> usize {
        self.free_slots.available() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.free() == 0
    }

    /// Read both counters without taking the lock.
    pub fn snapshot(&self) -> ChannelSnapshot {
        ChannelSnapshot {
            capacity: self.capacity,
            free: self.free(),
            filled: self.len(),
        }
    }
}

impl Drop for BoundedChannel {
    fn drop(&mut self) {
        debug!(
            capacity = self.capacity,
            undelivered = self.len(),
            "bounded channel destroyed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursors_wrap_around_capacity() {
        let channel = BoundedChannel::new(3).unwrap();
        for round in 0..5u8 {
            assert!(channel.try_put(round));
            assert!(channel.try_put(round + 100));
            assert_eq!(channel.try_get(), Some(round));
            assert_eq!(channel.try_get(), Some(round + 100));
        }

        let ring = channel.ring.lock();
        assert_eq!(ring.write_cursor, 10 % 3);
        assert_eq!(ring.read_cursor, 10 % 3);
    }

    #[test]
    fn rejected_try_put_leaves_cursors_alone() {
        let channel = BoundedChannel::new(2).unwrap();
        assert!(channel.try_put(1));
        assert!(channel.try_put(2));
        assert!(!channel.try_put(3));

        let ring = channel.ring.lock();
        assert_eq!(ring.write_cursor, 0);
        assert_eq!(ring.read_cursor, 0);
        assert_eq!(&ring.storage[..], &[1, 2]);
    }

    #[test]
    fn debug_format_does_not_take_the_lock() {
        let channel = BoundedChannel::new(2).unwrap();
        let _guard = channel.ring.lock();
        assert!(format!("{:?}", channel).contains("capacity: 2"));
    }

    #[test]
    fn oversized_capacity_is_rejected() {
        if usize::BITS > 32 {
            let err = BoundedChannel::new(MAX_CAPACITY + 1).unwrap_err();
            assert!(matches!(err, ChannelError::CapacityTooLarge { .. }));
        }
    }
}
