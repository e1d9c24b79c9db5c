//! A fixed-capacity circular byte buffer shared by any number of producer
//! and consumer threads.
//!
//! Producers block (or get `false`) when the buffer is full, consumers block
//! (or get `None`) when it is empty. Two counting semaphores track free and
//! filled slots; a mutex guards the cursors for the one-slot critical section.
//!
//! ```
//! use ringsem::MPMC::Buffer::BoundedChannel;
//!
//! let channel = BoundedChannel::new(2)?;
//! channel.put(b'h')?;
//! assert!(channel.try_put(b'i'));
//! assert!(!channel.try_put(b'!'));
//!
//! assert_eq!(channel.get()?, b'h');
//! assert_eq!(channel.try_get(), Some(b'i'));
//! assert_eq!(channel.try_get(), None);
//! # Ok::<(), ringsem::MPMC::Structs::ChannelError>(())
//! ```

// Module naming follows project convention (MPMC = Multi-Producer Multi-Consumer)
#[allow(non_snake_case)]
pub mod MPMC;
#[allow(non_snake_case)]
pub mod Core;
#[allow(non_snake_case)]
pub mod Debug {
    pub mod StructDebug;
}
pub mod ffi;
pub mod trace;

pub use MPMC::Buffer::BoundedChannel;
pub use MPMC::Structs::{ChannelError, ChannelSnapshot};
pub use MPMC::{channel, ChannelBuilder, Consumer, Producer};
