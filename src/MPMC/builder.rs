use super::{Consumer, Producer};
use crate::MPMC::Buffer::BoundedChannel;
use crate::MPMC::Structs::ChannelError;
use std::sync::Arc;

/// Capacity used when the builder is not told otherwise.
pub const DEFAULT_CAPACITY: usize = 4 * 1024;

pub struct ChannelBuilder {
    capacity: usize,
}

impl Default for ChannelBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY, // 4KB default
        }
    }
}

impl ChannelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Build a channel owned by the caller.
    pub fn build(self) -> Result<BoundedChannel, ChannelError> {
        BoundedChannel::new(self.capacity)
    }

    /// Build a channel and hand it out as a producer/consumer pair.
    /// Either side can be cloned for additional producers or consumers.
    pub fn build_pair(self) -> Result<(Producer, Consumer), ChannelError> {
        let channel = Arc::new(self.build()?);
        Ok((Producer::new(channel.clone()), Consumer::new(channel)))
    }
}

/// Shorthand for `ChannelBuilder::new().with_capacity(capacity).build_pair()`.
pub fn channel(capacity: usize) -> Result<(Producer, Consumer), ChannelError> {
    ChannelBuilder::new().with_capacity(capacity).build_pair()
}
