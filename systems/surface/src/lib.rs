#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure floor-surface system simulating traction-surface transitions.
//!
//! A three-state machine driven externally for the lifetime of a
//! simulation session: the owning context requests a surface, the pure
//! [`transition`] function returns the next state and a report, and
//! [`SurfaceSimulator`] applies it. There is no terminal state.

use std::fmt;

use floorbot_core::CellKind;

/// Traction surface the simulator currently models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceState {
    /// Uncovered hard flooring.
    BareFloor,
    /// Carpet with a short pile.
    LowPileCarpet,
    /// Carpet with a tall pile.
    HighPileCarpet,
}

impl SurfaceState {
    /// Maps a traversable floor covering onto a machine state.
    ///
    /// Non-surface variants (walls, doors, obstacles, padding, ...) yield
    /// `None`; the machine only models surfaces a robot drives on.
    #[must_use]
    pub const fn for_cell_kind(kind: CellKind) -> Option<SurfaceState> {
        match kind {
            CellKind::BareFloor => Some(SurfaceState::BareFloor),
            CellKind::LowPileCarpet => Some(SurfaceState::LowPileCarpet),
            CellKind::HighPileCarpet => Some(SurfaceState::HighPileCarpet),
            _ => None,
        }
    }
}

impl fmt::Display for SurfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurfaceState::BareFloor => "Bare Floor",
            SurfaceState::LowPileCarpet => "Low Pile Carpet",
            SurfaceState::HighPileCarpet => "High Pile Carpet",
        };
        f.write_str(name)
    }
}

/// Outcome of applying a surface transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceReport {
    /// The machine was already on the requested surface; nothing changed.
    AlreadyActive {
        /// Surface the machine stays on.
        state: SurfaceState,
    },
    /// The machine switched to a different surface.
    Switched {
        /// Surface before the transition.
        from: SurfaceState,
        /// Surface after the transition.
        to: SurfaceState,
    },
}

impl fmt::Display for SurfaceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceReport::AlreadyActive { state } => write!(f, "Already on {state}"),
            SurfaceReport::Switched { to, .. } => write!(f, "Switch to {to}"),
        }
    }
}

/// Pure transition function: requests the target surface from the current
/// state. Requesting the current surface is a no-op; any other request
/// switches. Callable from any state.
#[must_use]
pub fn transition(current: SurfaceState, target: SurfaceState) -> (SurfaceState, SurfaceReport) {
    if current == target {
        (current, SurfaceReport::AlreadyActive { state: current })
    } else {
        (
            target,
            SurfaceReport::Switched {
                from: current,
                to: target,
            },
        )
    }
}

/// Owns the current traction state and applies transitions on behalf of
/// the simulated entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSimulator {
    current: SurfaceState,
}

impl SurfaceSimulator {
    /// Creates a simulator starting on the given surface.
    #[must_use]
    pub const fn new(initial: SurfaceState) -> Self {
        Self { current: initial }
    }

    /// Surface the simulator currently models.
    #[must_use]
    pub const fn current(&self) -> SurfaceState {
        self.current
    }

    /// Requests a switch to the given surface and applies the result.
    pub fn switch_to(&mut self, target: SurfaceState) -> SurfaceReport {
        let (next, report) = transition(self.current, target);
        self.current = next;
        report
    }

    /// Requests a switch to bare floor.
    pub fn switch_to_bare_floor(&mut self) -> SurfaceReport {
        self.switch_to(SurfaceState::BareFloor)
    }

    /// Requests a switch to low-pile carpet.
    pub fn switch_to_low_pile(&mut self) -> SurfaceReport {
        self.switch_to(SurfaceState::LowPileCarpet)
    }

    /// Requests a switch to high-pile carpet.
    pub fn switch_to_high_pile(&mut self) -> SurfaceReport {
        self.switch_to(SurfaceState::HighPileCarpet)
    }
}
