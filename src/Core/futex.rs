use std::io;
use std::sync::atomic::AtomicU32;
use std::time::Duration;

/// Block while `atomic` still holds `expected`, for at most `timeout` if given.
///
/// Returns `Ok(())` when woken, on a spurious wakeup, or when the word no
/// longer matched on entry (`EAGAIN`). Callers must re-check their condition.
/// `TimedOut`, `Interrupted` and any other syscall failure are returned as-is.
#[cfg(target_os = "linux")]
pub fn futex_wait(atomic: &AtomicU32, expected: u32, timeout: Option<Duration>) -> io::Result<()> {
    use std::ptr;
    use std::sync::atomic::Ordering;

    // Check condition first to avoid syscall if possible
    if atomic.load(Ordering::Relaxed) != expected {
        return Ok(());
    }

    let timespec = timeout.map(|t| libc::timespec {
        tv_sec: t.as_secs().min(libc::time_t::MAX as u64) as libc::time_t,
        tv_nsec: t.subsec_nanos() as _,
    });
    let timespec_ptr = timespec
        .as_ref()
        .map_or(ptr::null(), |t| t as *const libc::timespec);

    let rc = unsafe {
        libc::syscall(
            libc::SYS_futex,
            atomic as *const AtomicU32 as *const u32,
            libc::FUTEX_WAIT | libc::FUTEX_PRIVATE_FLAG,
            expected,
            timespec_ptr,
            ptr::null::<u32>(),
            0u32,
        )
    };

    if rc == -1 {
        let err = io::Error::last_os_error();
        if err.raw_os_error() == Some(libc::EAGAIN) {
            return Ok(());
        }
        return Err(err);
    }
    Ok(())
}

/// Wake up to `count` threads blocked in [`futex_wait`] on `atomic`.
/// Returns how many were actually woken.
#[cfg(target_os = "linux")]
pub fn futex_wake(atomic: &AtomicU32, count: i32) -> usize {
    let woken = unsafe {
        libc::syscall(
            libc::SYS_futex,
            atomic as *const AtomicU32 as *const u32,
            libc::FUTEX_WAKE | libc::FUTEX_PRIVATE_FLAG,
            count,
            std::ptr::null::<libc::timespec>(),
            std::ptr::null::<u32>(),
            0u32,
        )
    };
    usize::try_from(woken).unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
pub fn futex_wait(_atomic: &AtomicU32, _expected: u32, _timeout: Option<Duration>) -> io::Result<()> {
    // Fallback for non-Linux: busy wait with yield
    std::thread::yield_now();
    Ok(())
}

#[cfg(not(target_os = "linux"))]
pub fn futex_wake(_atomic: &AtomicU32, _count: i32) -> usize {
    // No-op on non-Linux
    0
}
