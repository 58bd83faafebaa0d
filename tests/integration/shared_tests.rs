//! SharedGovernor driven from several threads.

use std::sync::Arc;
use std::thread;

use crate::mock_ports::Counter;

use speed_governor::{Governor, GovernorConfig, SharedGovernor};

#[test]
fn concurrent_over_threshold_readings_activate_once() {
    let (actuator, feedback, log) = (Counter::default(), Counter::default(), Counter::default());
    let gov = Governor::new(
        GovernorConfig::with_threshold(100),
        actuator.clone(),
        feedback.clone(),
        log.clone(),
    )
    .unwrap();
    let shared = Arc::new(SharedGovernor::new(gov));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || {
                for _ in 0..50 {
                    shared.update_vehicle_speed(150 + i).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(actuator.get(), 1);
    assert_eq!(feedback.get(), 1);
    assert_eq!(log.get(), 1);
    assert!(shared.status().active);
}

#[test]
fn threshold_writer_and_speed_reader_interleave_safely() {
    let counter = Counter::default();
    let gov = Governor::new(
        GovernorConfig::with_threshold(100),
        counter.clone(),
        Counter::default(),
        Counter::default(),
    )
    .unwrap();
    let shared = Arc::new(SharedGovernor::new(gov));

    let writer = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for t in [120, 90, 0, 110] {
                let _ = shared.set_speed_threshold(t);
            }
        })
    };
    let reader = {
        let shared = Arc::clone(&shared);
        thread::spawn(move || {
            for s in [80, 100, 115, 95] {
                shared.update_vehicle_speed(s).unwrap();
            }
        })
    };
    writer.join().unwrap();
    reader.join().unwrap();

    let status = shared.status();
    assert_eq!(status.threshold, 110, "the rejected 0 never lands");
    assert_eq!(status.current_speed, 95);
    assert_eq!(
        u64::from(counter.get()),
        shared.with(|g| g.activations()),
        "one actuation per recorded activation"
    );
}
