//! Concrete state handler functions and table builder.
//!
//! Each state is a row of plain `fn` pointers with no closures and no heap.
//!
//! ```text
//!  IDLE ──[speed > threshold]──▶ ACTIVE
//!    ▲                              │
//!    └──────[speed <= threshold]────┘
//! ```
//!
//! Only `active_enter` produces effects, which is what makes the governor
//! edge-triggered: staying in `Active` never re-runs it, and returning to
//! `Idle` is silent.

use super::context::{Effect, Effects, GovernorContext};
use super::{StateDescriptor, StateId};

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Idle
        StateDescriptor {
            id: StateId::Idle,
            name: "Idle",
            on_enter: None,
            on_update: idle_update,
        },
        // Index 1 — Active
        StateDescriptor {
            id: StateId::Active,
            name: "Active",
            on_enter: Some(active_enter),
            on_update: active_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE state
// ═══════════════════════════════════════════════════════════════════════════

fn idle_update(ctx: &GovernorContext) -> Option<StateId> {
    ctx.is_over_threshold().then_some(StateId::Active)
}

// ═══════════════════════════════════════════════════════════════════════════
//  ACTIVE state: throttle override in force
// ═══════════════════════════════════════════════════════════════════════════

fn active_enter(ctx: &mut GovernorContext, effects: &mut Effects) {
    ctx.activations += 1;
    // Order matters: actuation first, then driver alert, then the record.
    effects.extend([
        Effect::OverrideAcceleration,
        Effect::RaiseAlert,
        Effect::RecordActivation {
            speed: ctx.speed(),
            threshold: ctx.threshold(),
        },
    ]);
}

fn active_update(ctx: &GovernorContext) -> Option<StateId> {
    (!ctx.is_over_threshold()).then_some(StateId::Idle)
}
