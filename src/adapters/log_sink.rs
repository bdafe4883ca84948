//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured controller events through
//! the `log` facade (stderr on the host, UART on a board).  A telemetry
//! adapter would implement the same trait.

use log::{debug, info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
///
/// `OutputsApplied` fires once per cycle, so it goes out at debug level;
/// everything else is info or warn.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started { state, name } => {
                info!("START | initial_state={} {}", state, name);
            }
            AppEvent::OutputsApplied {
                state,
                output,
                dwell,
            } => {
                debug!("EMIT  | {} | {} | dwell={}", state, output, dwell);
            }
            AppEvent::StateChanged {
                from_name,
                to_name,
                input,
                ..
            } => {
                info!("STATE | {} -> {} | input={}", from_name, to_name, input);
            }
            AppEvent::InputMasked { raw, masked } => {
                warn!("INPUT | raw=0x{:08X} masked={}", raw, masked);
            }
        }
    }
}
