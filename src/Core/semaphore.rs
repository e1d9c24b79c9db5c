// Counting semaphore on a single futex word.
//
// The permit count itself is the futex word: sleepers wait for it to leave
// zero, `release` bumps it and wakes one sleeper if any are registered.

use super::futex::{futex_wait, futex_wake};
use crossbeam_utils::CachePadded;
use std::io;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::{Acquire, Relaxed, SeqCst};
use std::time::{Duration, Instant};

/// A waitable permit counter with blocking, timed and non-blocking acquire.
///
/// `release` has Release semantics and every successful acquire has Acquire
/// semantics, so whatever the releasing thread wrote before `release` is
/// visible to the thread that takes that permit.
pub struct Semaphore {
    /// Available permits. Padded so two semaphores living side by side
    /// (free/filled) do not false-share.
    permits: CachePadded<AtomicU32>,

    /// Threads currently registered to sleep on `permits`.
    sleepers: AtomicU32,
}

impl Semaphore {
    pub const fn new(initial: u32) -> Self {
        Self {
            permits: CachePadded::new(AtomicU32::new(initial)),
            sleepers: AtomicU32::new(0),
        }
    }

    /// Current number of permits. Only a hint under concurrency.
    #[inline]
    pub fn available(&self) -> u32 {
        self.permits.load(Acquire)
    }

    /// Take one permit if one is available right now.
    pub fn try_acquire(&self) -> bool {
        let mut current = self.permits.load(Relaxed);
        loop {
            if current == 0 {
                return false;
            }
            match self
                .permits
                .compare_exchange_weak(current, current - 1, Acquire, Relaxed)
            {
                Ok(_) => return true,
                Err(actual) => current = actual,
            }
        }
    }

    /// Block until a permit is taken.
    ///
    /// Only fails if the underlying wait itself fails (for example when the
    /// thread is interrupted by a signal). The error is not retried here.
    pub fn acquire(&self) -> io::Result<()> {
        self.acquire_until(None).map(|_| ())
    }

    /// Block for at most `timeout`. `Ok(false)` means the deadline passed
    /// without a permit becoming available.
    pub fn acquire_timeout(&self, timeout: Duration) -> io::Result<bool> {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.acquire_until(Some(deadline)),
            // Deadline is not representable; treat as unbounded.
            None => self.acquire_until(None),
        }
    }

    fn acquire_until(&self, deadline: Option<Instant>) -> io::Result<bool> {
        loop {
            if self.try_acquire() {
                return Ok(true);
            }

            let timeout = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        return Ok(false);
                    }
                    Some(deadline - now)
                }
                None => None,
            };

            // Registering before the kernel re-checks `permits == 0` pairs with
            // the SeqCst increment in `release`: either we see the new permit
            // (EAGAIN) or the releaser sees us and issues a wake.
            self.sleepers.fetch_add(1, SeqCst);
            let outcome = futex_wait(&self.permits, 0, timeout);
            self.sleepers.fetch_sub(1, SeqCst);

            match outcome {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::TimedOut => {}
                Err(e) => return Err(e),
            }
        }
    }

    /// Return one permit and wake one sleeper.
    pub fn release(&self) {
        self.permits.fetch_add(1, SeqCst);
        if self.sleepers.load(SeqCst) > 0 {
            futex_wake(&self.permits, 1);
        }
    }
}
