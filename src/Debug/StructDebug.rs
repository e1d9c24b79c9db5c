use std::fmt;
use crate::MPMC::Buffer::BoundedChannel;
use crate::MPMC::{Consumer, Producer};

/// Debug function for BoundedChannel
///
/// Shows capacity and both permit counters. The ring lock is never taken,
/// so formatting a channel cannot block behind a producer or consumer.
pub fn debug_bounded_channel(channel: &BoundedChannel, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("BoundedChannel")
        .field("capacity", &channel.capacity())
        .field("free", &channel.free())
        .field("filled", &channel.len())
        .finish_non_exhaustive()
}

/// Debug function for Producer
pub fn debug_producer(producer: &Producer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Producer")
        .field("channel", &**producer.channel())
        .finish()
}

/// Debug function for Consumer
pub fn debug_consumer(consumer: &Consumer, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Consumer")
        .field("channel", &**consumer.channel())
        .finish()
}

// Debug proxy implementations that call the standalone debug functions
impl fmt::Debug for BoundedChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_bounded_channel(self, f)
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_producer(self, f)
    }
}

impl fmt::Debug for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_consumer(self, f)
    }
}
