//! Fuzz target: arbitrary threshold / speed operation sequences.
//!
//! Each 5-byte chunk is one operation: a tag byte choosing threshold or
//! speed, then a little-endian `i32`.  Every policy combination is driven
//! and after each accepted reading the activation flag must equal
//! `speed > threshold`.  Activations may never outnumber evaluations.
//!
//! cargo fuzz run fuzz_governor_ops

#![no_main]

use libfuzzer_sys::fuzz_target;
use speed_governor::adapters::history::ActivationHistory;
use speed_governor::adapters::log_sink::{LogActuator, LogFeedback};
use speed_governor::{Governor, GovernorConfig, ReadingPolicy, ThresholdChangePolicy};

fuzz_target!(|data: &[u8]| {
    let Some((&policy, ops)) = data.split_first() else {
        return;
    };

    let config = GovernorConfig {
        threshold_change: if policy & 1 == 0 {
            ThresholdChangePolicy::NextReading
        } else {
            ThresholdChangePolicy::Immediate
        },
        reading_policy: match (policy >> 1) % 3 {
            0 => ReadingPolicy::PassThrough,
            1 => ReadingPolicy::Reject,
            _ => ReadingPolicy::Clamp,
        },
        ..GovernorConfig::default()
    };
    let mut gov = Governor::new(
        config,
        LogActuator::new(),
        LogFeedback::new(),
        ActivationHistory::<16>::new(),
    )
    .expect("default config is valid");

    for op in ops.chunks_exact(5) {
        let value = i32::from_le_bytes([op[1], op[2], op[3], op[4]]);
        if op[0] & 1 == 0 {
            let before = gov.status().threshold;
            match gov.set_speed_threshold(value) {
                Ok(_) => assert_eq!(gov.status().threshold, value),
                Err(_) => assert_eq!(gov.status().threshold, before),
            }
        } else if gov.update_vehicle_speed(value).is_ok() {
            let s = gov.status();
            assert_eq!(s.active, s.current_speed > s.threshold);
        }

        let ctx = gov.context();
        assert!(ctx.activations <= ctx.evaluations);
        assert_eq!(gov.activation_log().total(), ctx.activations);
    }
});
