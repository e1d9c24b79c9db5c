// Allocation tracking for BoundedChannel
//
// Note: dhat only allows one profiler per process, so everything lives in a
// single #[serial_test::serial] test.
//
// cargo test --test allocation_tracking -- --nocapture

use ringsem::MPMC::Buffer::BoundedChannel;
use ringsem::ffi::{ringsem_create, ringsem_destroy, ringsem_try_get, ringsem_try_put};

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

#[test]
#[serial_test::serial]
fn channel_lifecycle_does_not_leak() {
    let _profiler = dhat::Profiler::builder().testing().build();
    let baseline = dhat::HeapStats::get();

    // Create and destroy: storage comes and goes with the channel.
    let channel = BoundedChannel::new(1024).unwrap();
    let live = dhat::HeapStats::get();
    assert!(live.curr_bytes >= baseline.curr_bytes + 1024);

    // put/get run on pre-allocated storage.
    for i in 0..10_000u32 {
        channel.put(i as u8).unwrap();
        assert_eq!(channel.get().unwrap(), i as u8);
        assert!(channel.try_put(i as u8));
        assert_eq!(channel.try_get(), Some(i as u8));
    }
    let after_ops = dhat::HeapStats::get();
    assert_eq!(after_ops.total_blocks, live.total_blocks, "transfer allocated");

    channel.destroy();
    let after_destroy = dhat::HeapStats::get();
    assert_eq!(after_destroy.curr_bytes, baseline.curr_bytes);
    assert_eq!(after_destroy.curr_blocks, baseline.curr_blocks);

    // A rejected construction leaves nothing behind.
    assert!(BoundedChannel::new(0).is_err());
    assert_eq!(dhat::HeapStats::get().curr_bytes, baseline.curr_bytes);

    // Same through the C surface.
    let handle = ringsem_create(64);
    assert!(!handle.is_null());
    let mut out = 0u8;
    assert_eq!(ringsem_try_put(handle, &7u8, 1), 0);
    assert_eq!(ringsem_try_get(handle, &mut out, 1), 0);
    assert_eq!(out, 7);
    ringsem_destroy(handle);
    assert_eq!(dhat::HeapStats::get().curr_bytes, baseline.curr_bytes);
}
