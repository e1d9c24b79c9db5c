// src/MPMC/consumer.rs

use crate::MPMC::Buffer::BoundedChannel;
use crate::MPMC::Structs::ChannelError;
use std::sync::Arc;
use std::time::Duration;

/// The receiving half of a bounded channel.
/// Clone it to add consumers; each byte is delivered to exactly one of them.
#[derive(Clone)]
pub struct Consumer {
    channel: Arc<BoundedChannel>,
}

impl Consumer {
    pub(crate) fn new(channel: Arc<BoundedChannel>) -> Self {
        Self { channel }
    }

    /// Receives a byte, blocking until one is available.
    pub fn receive(&self) -> Result<u8, ChannelError> {
        self.channel.get()
    }

    /// Receives a byte if one is available.
    ///
    /// # Returns
    /// * `Some(byte)` if a byte was received
    /// * `None` if the channel is empty
    pub fn try_receive(&self) -> Option<u8> {
        self.channel.try_get()
    }

    /// Receives a byte from the channel, waiting up to the specified timeout.
    ///
    /// # Returns
    /// * `Ok(Some(byte))` if a byte was received
    /// * `Ok(None)` if the timeout was reached
    /// * `Err(ChannelError::WaitFailure)` if the blocking wait failed
    pub fn receive_timeout(&self, timeout: Duration) -> Result<Option<u8>, ChannelError> {
        self.channel.get_timeout(timeout)
    }

    /// Bytes waiting to be received
    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }

    /// Returns the underlying channel
    pub fn channel(&self) -> &Arc<BoundedChannel> {
        &self.channel
    }
}
