//! Fuzz target: `GovernorConfig::from_json`
//!
//! Any document that parses must also construct a governor.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use libfuzzer_sys::fuzz_target;
use speed_governor::adapters::log_sink::{LogActivationLog, LogActuator, LogFeedback};
use speed_governor::{Governor, GovernorConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = GovernorConfig::from_json(text) {
        let threshold = config.initial_threshold_kmh;
        let gov = Governor::new(config, LogActuator, LogFeedback, LogActivationLog)
            .expect("validated config must construct");
        assert_eq!(gov.status().threshold, threshold);
    }
});
