#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure power-signal system simulating a charging station's emitted
//! signal.
//!
//! A two-state machine: either the station's signal is being simulated or
//! it is not. Both states accept both operations with identical effect, so
//! the command alone determines the next state; the only observable memory
//! is which of the two output sentinels is currently latched on the
//! station context.

use std::fmt;

use floorbot_core::CellCoord;

/// Whether the station's signal simulation is currently running.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalState {
    /// The station's signal is being simulated.
    Simulating,
    /// The station's signal is not being simulated.
    NotSimulating,
}

impl SignalState {
    /// Output sentinel latched while in this state.
    #[must_use]
    pub const fn output(self) -> SignalOutput {
        match self {
            SignalState::Simulating => SignalOutput::Emitting,
            SignalState::NotSimulating => SignalOutput::Silent,
        }
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalState::Simulating => "Simulating Power Signal",
            SignalState::NotSimulating => "Not Simulating Power Signal",
        };
        f.write_str(name)
    }
}

/// Operations accepted by the signal machine, from either state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalCommand {
    /// Start simulating the station's signal.
    Simulate,
    /// Stop simulating the station's signal.
    DontSimulate,
}

/// The two fixed output sentinels, one per state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalOutput {
    /// The station is emitting its signal.
    Emitting,
    /// The station is silent.
    Silent,
}

/// Pure transition function for the signal machine.
///
/// Both states implement both operations identically, so the current state
/// does not influence the result: the command selects the next state and
/// the report. The returned report is the line the adapter prints.
#[must_use]
pub fn transition(_current: SignalState, command: SignalCommand) -> (SignalState, &'static str) {
    match command {
        SignalCommand::Simulate => (SignalState::Simulating, "Emitting Signal..."),
        SignalCommand::DontSimulate => (SignalState::NotSimulating, "Not Emitting Signal..."),
    }
}

/// Charging-station context the machine latches its output onto.
///
/// The latched output is derived from the current state, so the two can
/// never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerStation {
    station: CellCoord,
    current: SignalState,
}

impl PowerStation {
    /// Creates a station context at the given grid coordinate; simulation
    /// starts switched off.
    #[must_use]
    pub const fn new(station: CellCoord) -> Self {
        Self {
            station,
            current: SignalState::NotSimulating,
        }
    }

    /// Grid coordinate of the simulated charging station.
    #[must_use]
    pub const fn station(&self) -> CellCoord {
        self.station
    }

    /// Current machine state.
    #[must_use]
    pub const fn current_state(&self) -> SignalState {
        self.current
    }

    /// Output sentinel currently latched on the station.
    #[must_use]
    pub const fn current_output(&self) -> SignalOutput {
        self.current.output()
    }

    /// Starts simulating the signal; callable from either state.
    pub fn simulate_signal(&mut self) -> &'static str {
        self.apply(SignalCommand::Simulate)
    }

    /// Stops simulating the signal; callable from either state.
    pub fn dont_simulate_signal(&mut self) -> &'static str {
        self.apply(SignalCommand::DontSimulate)
    }

    fn apply(&mut self, command: SignalCommand) -> &'static str {
        let (next, report) = transition(self.current, command);
        self.current = next;
        report
    }
}
