use crate::trace::warn;
use crate::MPMC::Buffer::BoundedChannel;
use crate::MPMC::Structs::ChannelError;
use std::ptr;

// Status codes
pub const RINGSEM_SUCCESS: i32 = 0;
pub const RINGSEM_ERROR_NULL_POINTER: i32 = -1;
pub const RINGSEM_ERROR_INVALID_ARG: i32 = -2;
pub const RINGSEM_ERROR_ALLOCATION_FAILED: i32 = -3;
pub const RINGSEM_ERROR_FULL: i32 = -4;
pub const RINGSEM_ERROR_EMPTY: i32 = -5;
pub const RINGSEM_ERROR_WAIT_FAILED: i32 = -6;

/// Handle to a channel instance (opaque pointer)
pub struct RingsemHandle {
    inner: BoundedChannel,
}

fn error_code(err: &ChannelError) -> i32 {
    match err {
        ChannelError::ZeroCapacity | ChannelError::CapacityTooLarge { .. } => {
            RINGSEM_ERROR_INVALID_ARG
        }
        ChannelError::AllocationFailure { .. } => RINGSEM_ERROR_ALLOCATION_FAILED,
        ChannelError::WaitFailure(_) => RINGSEM_ERROR_WAIT_FAILED,
    }
}

// Resolve the handle and check the caller's byte pointer.
fn checked<'a>(handle: *mut RingsemHandle, data: *const u8) -> Result<&'a BoundedChannel, i32> {
    if handle.is_null() || data.is_null() {
        warn!("null pointer passed to ringsem");
        return Err(RINGSEM_ERROR_NULL_POINTER);
    }
    Ok(unsafe { &(*handle).inner })
}

// -----------------------------------------------------------------------------
// Lifecycle
// -----------------------------------------------------------------------------

/// Create a new channel.
///
/// # Arguments
/// * `capacity` - Number of one-byte slots; must be non-zero.
///
/// # Returns
/// * Pointer to `RingsemHandle`, or NULL on failure.
#[no_mangle]
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub extern "C" fn ringsem_create(capacity: usize) -> *mut RingsemHandle {
    match BoundedChannel::new(capacity) {
        Ok(inner) => Box::into_raw(Box::new(RingsemHandle { inner })),
        Err(e) => {
            warn!(capacity, error = %e, "ringsem_create failed");
            ptr::null_mut()
        }
    }
}

/// Destroy a channel. NULL is accepted and ignored.
///
/// No other call may be in progress on, or later made with, this handle.
#[no_mangle]
pub extern "C" fn ringsem_destroy(handle: *mut RingsemHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle); // Dropped automatically
        }
    }
}

// -----------------------------------------------------------------------------
// Transfer
// -----------------------------------------------------------------------------

/// Write `data[0]`, blocking while the channel is full.
///
/// `len` is accepted for source compatibility and ignored: every transfer
/// call moves exactly one byte.
///
/// # Returns
/// * 0 on success, negative error code otherwise.
#[no_mangle]
pub extern "C" fn ringsem_put(handle: *mut RingsemHandle, data: *const u8, _len: usize) -> i32 {
    let channel = match checked(handle, data) {
        Ok(channel) => channel,
        Err(code) => return code,
    };

    match channel.put(unsafe { *data }) {
        Ok(()) => RINGSEM_SUCCESS,
        Err(e) => error_code(&e),
    }
}

/// Read one byte into `out[0]`, blocking while the channel is empty.
#[no_mangle]
pub extern "C" fn ringsem_get(handle: *mut RingsemHandle, out: *mut u8, _len: usize) -> i32 {
    let channel = match checked(handle, out) {
        Ok(channel) => channel,
        Err(code) => return code,
    };

    match channel.get() {
        Ok(byte) => {
            unsafe { *out = byte };
            RINGSEM_SUCCESS
        }
        Err(e) => error_code(&e),
    }
}

/// Write `data[0]` without blocking.
///
/// # Returns
/// * 0 on success.
/// * RINGSEM_ERROR_FULL if the channel was full.
#[no_mangle]
pub extern "C" fn ringsem_try_put(handle: *mut RingsemHandle, data: *const u8, _len: usize) -> i32 {
    let channel = match checked(handle, data) {
        Ok(channel) => channel,
        Err(code) => return code,
    };

    if channel.try_put(unsafe { *data }) {
        RINGSEM_SUCCESS
    } else {
        RINGSEM_ERROR_FULL
    }
}

/// Read one byte into `out[0]` without blocking.
///
/// # Returns
/// * 0 on success.
/// * RINGSEM_ERROR_EMPTY if the channel was empty; `out` is left untouched.
#[no_mangle]
pub extern "C" fn ringsem_try_get(handle: *mut RingsemHandle, out: *mut u8, _len: usize) -> i32 {
    let channel = match checked(handle, out) {
        Ok(channel) => channel,
        Err(code) => return code,
    };

    match channel.try_get() {
        Some(byte) => {
            unsafe { *out = byte };
            RINGSEM_SUCCESS
        }
        None => RINGSEM_ERROR_EMPTY,
    }
}

// -----------------------------------------------------------------------------
// Introspection
// -----------------------------------------------------------------------------

/// Bytes currently stored, or RINGSEM_ERROR_NULL_POINTER.
#[no_mangle]
pub extern "C" fn ringsem_len(handle: *const RingsemHandle) -> isize {
    if handle.is_null() {
        return RINGSEM_ERROR_NULL_POINTER as isize;
    }
    let channel = unsafe { &(*handle).inner };
    isize::try_from(channel.len()).unwrap_or(isize::MAX)
}

/// Channel capacity, or RINGSEM_ERROR_NULL_POINTER.
#[no_mangle]
pub extern "C" fn ringsem_capacity(handle: *const RingsemHandle) -> isize {
    if handle.is_null() {
        return RINGSEM_ERROR_NULL_POINTER as isize;
    }
    let channel = unsafe { &(*handle).inner };
    isize::try_from(channel.capacity()).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_zero_capacity() {
        assert!(ringsem_create(0).is_null());
    }

    #[test]
    fn destroy_null_is_noop() {
        ringsem_destroy(ptr::null_mut());
    }

    #[test]
    fn null_handles_are_reported() {
        let mut byte = 0u8;
        assert_eq!(ringsem_put(ptr::null_mut(), &byte, 1), RINGSEM_ERROR_NULL_POINTER);
        assert_eq!(ringsem_try_get(ptr::null_mut(), &mut byte, 1), RINGSEM_ERROR_NULL_POINTER);
        assert_eq!(ringsem_len(ptr::null()), RINGSEM_ERROR_NULL_POINTER as isize);
    }

    #[test]
    fn round_trip_through_c_surface() {
        let handle = ringsem_create(2);
        assert!(!handle.is_null());
        assert_eq!(ringsem_capacity(handle), 2);

        assert_eq!(ringsem_try_put(handle, &b'a', 1), RINGSEM_SUCCESS);
        assert_eq!(ringsem_put(handle, &b'b', 4), RINGSEM_SUCCESS);
        assert_eq!(ringsem_try_put(handle, &b'c', 1), RINGSEM_ERROR_FULL);
        assert_eq!(ringsem_len(handle), 2);

        let mut out = 0u8;
        assert_eq!(ringsem_get(handle, &mut out, 1), RINGSEM_SUCCESS);
        assert_eq!(out, b'a');
        assert_eq!(ringsem_try_get(handle, &mut out, 1), RINGSEM_SUCCESS);
        assert_eq!(out, b'b');
        assert_eq!(ringsem_try_get(handle, &mut out, 1), RINGSEM_ERROR_EMPTY);
        assert_eq!(out, b'b');

        ringsem_destroy(handle);
    }

    #[test]
    fn length_argument_is_ignored() {
        let handle = ringsem_create(2);
        assert_eq!(ringsem_try_put(handle, &b'x', 0), RINGSEM_SUCCESS);
        assert_eq!(ringsem_put(handle, &b'y', 16), RINGSEM_SUCCESS);
        assert_eq!(ringsem_len(handle), 2);

        let mut out = 0u8;
        assert_eq!(ringsem_try_get(handle, &mut out, 0), RINGSEM_SUCCESS);
        assert_eq!(out, b'x');
        assert_eq!(ringsem_get(handle, &mut out, 99), RINGSEM_SUCCESS);
        assert_eq!(out, b'y');
        assert_eq!(ringsem_len(handle), 0);
        ringsem_destroy(handle);
    }
}
