pub mod futex;
pub mod semaphore;

pub use semaphore::Semaphore;
