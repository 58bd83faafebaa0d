//! Adapters: concrete implementations of the governor port traits.
//!
//! | Adapter      | Implements      | Connects to                     |
//! |--------------|-----------------|---------------------------------|
//! | `hardware`   | ActuatorPort    | `embedded-hal` throttle-cut pin |
//! |              | FeedbackPort    | `embedded-hal` alert lamp pin   |
//! | `history`    | ActivationLog   | Fixed-capacity in-memory ring   |
//! | `log_sink`   | ActuatorPort    | `log` facade (simulated ECU)    |
//! |              | FeedbackPort    | `log` facade                    |
//! |              | ActivationLog   | `log` facade                    |

pub mod hardware;
pub mod history;
pub mod log_sink;
