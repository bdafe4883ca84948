//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter     | Implements   | Connects to                         |
//! |-------------|--------------|-------------------------------------|
//! | `gpio`      | SignalPort   | `embedded-hal` output pins          |
//! |             | DetectorPort | `embedded-hal` input pins           |
//! | `latch`     | DetectorPort | ISR-written atomic input register   |
//! | `delay`     | DwellTimer   | `embedded-hal` `DelayNs` provider   |
//! | `time`      | DwellTimer   | `std::thread::sleep` (host)         |
//! | `sim`       | SignalPort   | In-memory lamp state (host)         |
//! | `hardware`  | all three    | Delegates to one adapter per port   |
//! | `log_sink`  | EventSink    | `log` facade                        |

pub mod delay;
pub mod gpio;
pub mod hardware;
pub mod latch;
pub mod log_sink;
pub mod sim;
pub mod time;
