//! Governor → FSM → ports pipeline under the default policies.

use crate::mock_ports::{MockActuator, MockFeedback, MockLog, PortCall, activation_count, mock_ports};

use speed_governor::app::events::GovernorStatus;
use speed_governor::error::{ConfigError, Error, PortError};
use speed_governor::fsm::StateId;
use speed_governor::{Governor, GovernorConfig};

type MockGovernor = Governor<MockActuator, MockFeedback, MockLog>;

fn make_governor(threshold: i32) -> (crate::mock_ports::Journal, MockGovernor) {
    let (journal, a, f, l) = mock_ports();
    let gov = Governor::new(GovernorConfig::with_threshold(threshold), a, f, l).unwrap();
    (journal, gov)
}

#[test]
fn fresh_governor_reports_zero_speed_and_idle() {
    let (journal, gov) = make_governor(60);
    assert_eq!(
        gov.status(),
        GovernorStatus {
            current_speed: 0,
            threshold: 60,
            active: false
        }
    );
    assert_eq!(gov.state(), StateId::Idle);
    assert!(journal.borrow().is_empty());
}

#[test]
fn edge_trigger_fires_once_per_crossing() {
    let (journal, mut gov) = make_governor(100);

    let activated: Vec<bool> = [50, 150, 160, 90, 150]
        .into_iter()
        .map(|s| gov.update_vehicle_speed(s).unwrap().activated())
        .collect();

    assert_eq!(activated, vec![false, true, false, false, true]);
    assert_eq!(activation_count(&journal), 2);
    assert_eq!(journal.borrow().len(), 6);
    assert_eq!(gov.activations(), 2);
}

#[test]
fn activation_effects_run_in_order() {
    let (journal, mut gov) = make_governor(80);

    gov.update_vehicle_speed(80).unwrap();
    assert!(!gov.status().active, "equal to threshold is not over");
    assert!(journal.borrow().is_empty());

    gov.update_vehicle_speed(81).unwrap();
    assert!(gov.status().active);
    assert_eq!(
        *journal.borrow(),
        vec![
            PortCall::OverrideAcceleration,
            PortCall::RaiseAlert,
            PortCall::RecordActivation {
                speed: 81,
                threshold: 80
            },
        ]
    );
}

#[test]
fn repeated_over_threshold_readings_are_silent() {
    let (journal, mut gov) = make_governor(100);
    gov.update_vehicle_speed(130).unwrap();
    for _ in 0..10 {
        let report = gov.update_vehicle_speed(130).unwrap();
        assert_eq!(report.from, StateId::Active);
        assert_eq!(report.to, StateId::Active);
    }
    assert_eq!(journal.borrow().len(), 3);
}

#[test]
fn drop_below_threshold_resets_without_effects() {
    let (journal, mut gov) = make_governor(100);
    gov.update_vehicle_speed(130).unwrap();
    let report = gov.update_vehicle_speed(70).unwrap();
    assert!(report.deactivated());
    assert!(report.is_clean());
    assert_eq!(journal.borrow().len(), 3);
    assert!(!gov.status().active);
}

#[test]
fn status_reflects_last_reading() {
    let (_journal, mut gov) = make_governor(100);
    gov.update_vehicle_speed(120).unwrap();
    assert_eq!(
        gov.status(),
        GovernorStatus {
            current_speed: 120,
            threshold: 100,
            active: true
        }
    );
}

#[test]
fn invalid_threshold_is_rejected_and_previous_kept() {
    let (journal, mut gov) = make_governor(100);
    gov.update_vehicle_speed(90).unwrap();

    for bad in [0, -1, i32::MIN] {
        let err = gov.set_speed_threshold(bad).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfiguration(ConfigError::NonPositiveThreshold(bad))
        );
    }
    assert_eq!(gov.status().threshold, 100);
    assert_eq!(gov.status().current_speed, 90);
    assert!(journal.borrow().is_empty());
}

#[test]
fn lowering_threshold_waits_for_next_reading_by_default() {
    let (journal, mut gov) = make_governor(100);
    gov.update_vehicle_speed(90).unwrap();

    assert!(gov.set_speed_threshold(80).unwrap().is_none());
    assert!(!gov.status().active, "no re-evaluation until the next reading");
    assert!(journal.borrow().is_empty());

    gov.update_vehicle_speed(90).unwrap();
    assert!(gov.status().active);
    assert_eq!(activation_count(&journal), 1);
}

#[test]
fn actuator_failure_is_reported_and_others_still_run() {
    let (journal, mut a, f, l) = mock_ports();
    a.fail = true;
    let mut gov = Governor::new(GovernorConfig::with_threshold(100), a, f, l).unwrap();

    let report = gov.update_vehicle_speed(140).unwrap();
    assert!(report.activated());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].error, PortError::Rejected);
    assert_eq!(
        *journal.borrow(),
        vec![
            PortCall::RaiseAlert,
            PortCall::RecordActivation {
                speed: 140,
                threshold: 100
            },
        ]
    );
    assert!(gov.status().active, "a failed effect does not undo the transition");
}

#[test]
fn every_port_failing_still_activates_once() {
    let (journal, mut a, mut f, mut l) = mock_ports();
    a.fail = true;
    f.fail = true;
    l.fail = true;
    let mut gov = Governor::new(GovernorConfig::with_threshold(100), a, f, l).unwrap();

    assert_eq!(gov.update_vehicle_speed(140).unwrap().failures.len(), 3);
    assert!(gov.update_vehicle_speed(150).unwrap().is_clean());
    assert!(journal.borrow().is_empty());
    assert_eq!(gov.activations(), 1);
}
