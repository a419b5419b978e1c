//! Workspace-level integration test walking a full allocator session.

use fibbuddy_core::{AllocError, FibHeap, FreeError};

fn sizes(heap: &FibHeap) -> Vec<u64> {
    heap.list().iter().map(|d| d.size).collect()
}

#[test]
fn capacity_ten_session() {
    let mut heap = FibHeap::with_capacity(10);
    assert_eq!(sizes(&heap), vec![2, 3, 5, 8]);
    assert_eq!(heap.total_size(), 18);

    let x = heap.allocate("x", 7).expect("size-8 block is free");
    assert_eq!(x.size(), 8);
    assert_eq!(sizes(&heap), vec![2, 3, 5, 8]);

    heap.free("x").expect("x is allocated");
    assert_eq!(sizes(&heap), vec![5, 13]);

    assert_eq!(heap.allocate("y", 20), Err(AllocError::OutOfMemory));

    let y = heap.allocate("y", 12).expect("size-13 block is free");
    assert_eq!(y.size(), 13);
    assert_eq!(heap.lookup(&y).unwrap().requested_size, 12);

    assert_eq!(heap.free("z"), Err(FreeError::BlockNotFound("z".into())));
    assert_eq!(heap.total_size(), 18);
}

#[test]
fn long_session_conserves_capacity_and_identity() {
    let mut heap = FibHeap::with_capacity(1_000);
    let total = heap.total_size();

    let names = ["alpha", "beta", "gamma", "delta"];
    for (i, name) in names.iter().enumerate() {
        heap.allocate(name, (i as u64 + 1) * 17).unwrap();
        assert_eq!(heap.total_size(), total);
    }

    // Every live allocation is unique and retrievable.
    for name in names {
        let desc = heap.lookup_name(name).unwrap();
        assert_eq!(desc.name, name);
        assert!(!desc.is_free);
    }

    // Interleave frees and re-allocations.
    heap.free("beta").unwrap();
    heap.free("delta").unwrap();
    assert_eq!(heap.total_size(), total);

    heap.allocate("beta", 200).unwrap();
    assert_eq!(heap.total_size(), total);

    for name in ["alpha", "beta", "gamma"] {
        heap.free(name).unwrap();
    }
    assert_eq!(heap.total_size(), total);
    assert!(heap.list().iter().all(|d| d.is_free));

    let stats = heap.stats();
    assert_eq!(stats.allocations, 5);
    assert_eq!(stats.frees, 5);
}
