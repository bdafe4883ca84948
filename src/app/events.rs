//! Outbound application events.
//!
//! The [`Controller`](super::service::Controller) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them.

use crate::fsm::signals::{InputVector, OutputPattern};
use crate::fsm::table::StateId;

/// Structured events emitted by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Ports initialised and the loop is about to begin.
    Started {
        state: StateId,
        name: &'static str,
    },

    /// A state's pattern was written to both lamp groups.
    OutputsApplied {
        state: StateId,
        output: OutputPattern,
        dwell: u32,
    },

    /// The FSM moved between states.
    StateChanged {
        from: StateId,
        to: StateId,
        from_name: &'static str,
        to_name: &'static str,
        input: InputVector,
    },

    /// A detector sample carried bits outside the table's input width.
    InputMasked { raw: u32, masked: InputVector },
}
