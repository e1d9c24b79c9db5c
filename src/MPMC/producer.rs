// In src/MPMC/producer.rs
use crate::MPMC::Buffer::BoundedChannel;
use crate::MPMC::Structs::ChannelError;
use std::sync::Arc;
use std::time::Duration;

/// The sending half of a bounded channel.
///
/// Cloning a producer adds another producer on the same channel; the channel
/// is released when the last producer and consumer are dropped.
#[derive(Clone)]
pub struct Producer {
    channel: Arc<BoundedChannel>,
}

impl Producer {
    pub(crate) fn new(channel: Arc<BoundedChannel>) -> Self {
        Self { channel }
    }

    /// Sends one byte, blocking while the channel is full.
    ///
    /// # Returns
    /// * `Ok(())` once the byte is stored
    /// * `Err(ChannelError::WaitFailure)` if the blocking wait failed
    pub fn send(&self, byte: u8) -> Result<(), ChannelError> {
        self.channel.put(byte)
    }

    /// Sends one byte only if there is room right now.
    pub fn try_send(&self, byte: u8) -> bool {
        self.channel.try_put(byte)
    }

    /// Sends one byte, waiting up to `timeout` for room.
    /// `Ok(false)` means the channel stayed full.
    pub fn send_timeout(&self, byte: u8, timeout: Duration) -> Result<bool, ChannelError> {
        self.channel.put_timeout(byte, timeout)
    }

    /// Returns the channel capacity
    pub fn capacity(&self) -> usize {
        self.channel.capacity()
    }

    /// Returns the underlying channel
    pub fn channel(&self) -> &Arc<BoundedChannel> {
        &self.channel
    }
}
