//! Function-pointer finite state machine engine.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  StateTable                                  │
//! │  ┌─────────┬──────────────┬────────────────┐ │
//! │  │ StateId │ on_enter     │ on_update      │ │
//! │  ├─────────┼──────────────┼────────────────┤ │
//! │  │ Idle    │ —            │ fn(ctx)->Opt<> │ │
//! │  │ Active  │ fn(ctx, fx)  │ fn(ctx)->Opt<> │ │
//! │  └─────────┴──────────────┴────────────────┘ │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Each evaluation calls `on_update` for the state held in the
//! [`GovernorContext`].  If it returns `Some(next_id)`, the engine switches
//! the context to `next_id` and runs `on_enter` for it, collecting any
//! effects it requests.  The engine owns no mutable state: a step is a pure
//! function `(context, reading) -> (context, effects)`.

pub mod context;
pub mod states;

use context::{Effects, GovernorContext};

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all governor states.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    /// Speed at or below threshold; nothing overridden.
    Idle = 0,
    /// Speed above threshold; throttle override in force.
    Active = 1,
}

impl StateId {
    /// Number of states; sizes the table array.
    pub const COUNT: usize = 2;
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` actions.  Runs exactly once per transition
/// into the state and may append effects.
pub type StateActionFn = fn(&mut GovernorContext, &mut Effects);

/// Signature for the per-evaluation update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&GovernorContext) -> Option<StateId>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single FSM state.
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The finite state machine engine.
pub struct Fsm {
    /// Fixed-size table indexed by `StateId as usize`.
    table: [StateDescriptor; StateId::COUNT],
}

impl Default for Fsm {
    fn default() -> Self {
        Self::new(states::build_state_table())
    }
}

impl Fsm {
    pub fn new(table: [StateDescriptor; StateId::COUNT]) -> Self {
        debug_assert!(
            table.iter().enumerate().all(|(i, d)| d.id as usize == i),
            "state table out of order"
        );
        Self { table }
    }

    /// Store `speed` as the latest reading, then evaluate.
    pub fn on_reading(&self, ctx: GovernorContext, speed: i32) -> (GovernorContext, Effects) {
        self.step(ctx.with_speed(speed))
    }

    /// Evaluate the context as it stands (no new reading).
    ///
    /// 1. Call `on_update` for the current state.
    /// 2. If it returns `Some(next)`, switch state and run `on_enter(next)`.
    pub fn step(&self, mut ctx: GovernorContext) -> (GovernorContext, Effects) {
        let mut effects = Effects::new();
        ctx.evaluations += 1;

        if let Some(next) = (self.table[ctx.state as usize].on_update)(&ctx) {
            ctx.state = next;
            if let Some(enter) = self.table[next as usize].on_enter {
                enter(&mut ctx, &mut effects);
            }
        }

        (ctx, effects)
    }

    /// Human-readable name of a state.
    pub fn name(&self, state: StateId) -> &'static str {
        self.table[state as usize].name
    }
}
