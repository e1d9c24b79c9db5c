mod builder;
mod consumer;
mod producer;

pub use builder::{channel, ChannelBuilder, DEFAULT_CAPACITY};
pub use consumer::Consumer;
pub use producer::Producer;

pub mod Buffer {
    pub mod Buffer;
    pub mod Buffer_impl;
    pub use Buffer::BoundedChannel; // re-export for stable path
}

pub mod Structs {
    pub mod Buffer_Structs;
    pub use Buffer_Structs::{ChannelError, ChannelSnapshot, MAX_CAPACITY}; // re-export for stable path
}
