//! Unit and property tests for mouseaccel-atomic.

use mouseaccel_atomic::{CounterSnapshot, EngineCounters};
use quickcheck_macros::quickcheck;

#[test]
fn test_all_operations() {
    let counters = EngineCounters::default();

    counters.inc_cycle_ok();
    counters.inc_cycle_ok();
    counters.inc_context_unavailable();
    counters.inc_pre_validation_fault();
    counters.inc_post_validation_fault();
    counters.inc_reload_applied();
    counters.inc_reload_deferred();
    counters.inc_reload_deferred();
    counters.inc_samples_merged();

    let snapshot = counters.snapshot();
    assert_eq!(snapshot.cycles_ok, 2);
    assert_eq!(snapshot.context_unavailable, 1);
    assert_eq!(snapshot.pre_validation_faults, 1);
    assert_eq!(snapshot.post_validation_faults, 1);
    assert_eq!(snapshot.reloads_applied, 1);
    assert_eq!(snapshot.reloads_deferred, 2);
    assert_eq!(snapshot.samples_merged, 1);
    assert_eq!(snapshot.total_cycles(), 5);
    assert_eq!(snapshot.numeric_faults(), 2);
}

#[test]
fn test_reset() {
    let counters = EngineCounters::new();
    counters.inc_cycle_ok();
    counters.inc_context_unavailable();
    counters.reset();
    assert_eq!(counters.snapshot(), CounterSnapshot::default());
}

#[test]
fn test_shared_across_threads() {
    let counters = std::sync::Arc::new(EngineCounters::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let counters = std::sync::Arc::clone(&counters);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    counters.inc_cycle_ok();
                }
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().is_ok());
    }
    assert_eq!(counters.snapshot().cycles_ok, 4000);
}

#[quickcheck]
fn prop_total_cycles_is_sum(ok: u8, busy: u8, pre: u8, post: u8) -> bool {
    let counters = EngineCounters::new();
    for _ in 0..ok {
        counters.inc_cycle_ok();
    }
    for _ in 0..busy {
        counters.inc_context_unavailable();
    }
    for _ in 0..pre {
        counters.inc_pre_validation_fault();
    }
    for _ in 0..post {
        counters.inc_post_validation_fault();
    }
    let expected = u64::from(ok) + u64::from(busy) + u64::from(pre) + u64::from(post);
    counters.snapshot().total_cycles() == expected
}

#[quickcheck]
fn prop_fault_rate_in_unit_interval(ok: u32, pre: u32, post: u32) -> bool {
    let snapshot = CounterSnapshot {
        cycles_ok: u64::from(ok),
        pre_validation_faults: u64::from(pre),
        post_validation_faults: u64::from(post),
        ..CounterSnapshot::default()
    };
    (0.0..=1.0).contains(&snapshot.fault_rate())
}
