//! Intersection controller host simulation entry point.
//!
//! Runs the reference intersection against in-memory lamps, a sleeping
//! dwell timer and a detector latch fed from stdin.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  SimSignals      LatchedDetectors   SleepTimer   LogEventSink  │
//! │  (SignalPort)    (DetectorPort)     (DwellTimer) (EventSink)   │
//! │        └──────────────┴──── Board ─────┘                       │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Controller (pure logic)                   │    │
//! │  │  Fsm · StateTable                                      │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  stdin reader thread ──▶ InputLatch                            │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage: `intersection-sim [config.json]`.  Each stdin line replaces the
//! detector vector: a number (`5`, `0x5`, `0b101`) or detector names
//! (`ew`, `ns`, `ped`, space separated; empty line = no demand).

use std::io::BufRead;

use anyhow::{Context, Result};
use log::{info, warn};

use intersection::Error;
use intersection::adapters::hardware::Board;
use intersection::adapters::latch::{InputLatch, LatchedDetectors};
use intersection::adapters::log_sink::LogEventSink;
use intersection::adapters::sim::SimSignals;
use intersection::adapters::time::SleepTimer;
use intersection::app::service::Controller;
use intersection::config::SystemConfig;
use intersection::fsm::states::reference_table;
use intersection::pins;

static DETECTORS: InputLatch = InputLatch::new();

// ── Logging ───────────────────────────────────────────────────

/// Install `env_logger` at the configured level.  `RUST_LOG` still
/// refines it per module.
fn init_logging(config: &SystemConfig) -> Result<()> {
    let level = config.level_filter().map_err(Error::from)?;
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp_millis()
        .parse_default_env()
        .try_init()?;
    Ok(())
}

// ── Input parsing ─────────────────────────────────────────────

fn parse_detectors(line: &str) -> Option<u32> {
    let line = line.trim();
    if let Some(bin) = line.strip_prefix("0b") {
        return u32::from_str_radix(bin, 2).ok();
    }
    if let Some(hex) = line.strip_prefix("0x") {
        return u32::from_str_radix(hex, 16).ok();
    }
    if let Ok(n) = line.parse::<u32>() {
        return Some(n);
    }
    let mut raw = 0u32;
    for word in line.split_whitespace() {
        raw |= match word.to_ascii_lowercase().as_str() {
            "ew" => u32::from(pins::EW_CAR_BIT),
            "ns" => u32::from(pins::NS_CAR_BIT),
            "ped" => u32::from(pins::PEDESTRIAN_BIT),
            _ => return None,
        };
    }
    Some(raw)
}

fn spawn_stdin_reader() -> Result<()> {
    std::thread::Builder::new()
        .name("detectors".into())
        .spawn(|| {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                match parse_detectors(&line) {
                    Some(raw) => {
                        DETECTORS.store(raw);
                        info!("detectors <- 0x{:X}", raw);
                    }
                    None => warn!("ignoring unparseable input {:?}", line),
                }
            }
        })
        .context("spawning stdin reader")?;
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Config (file or defaults) ──────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            SystemConfig::from_json(&json).map_err(Error::from)?
        }
        None => SystemConfig::default(),
    };
    init_logging(&config)?;

    info!("Intersection simulator v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "dwell unit {} ms, time scale 1/{}, one reference dwell = {} ms",
        config.dwell_unit_ms,
        config.time_scale,
        config.scaled_wait_ms(intersection::fsm::states::REFERENCE_DWELL)
    );

    // ── 2. Engine ─────────────────────────────────────────────
    let table = reference_table().map_err(Error::from)?;
    let mut controller = Controller::new(table, &config)?;

    // ── 3. Adapters ───────────────────────────────────────────
    let mut board = Board::new(
        SimSignals::new(),
        LatchedDetectors::new(&DETECTORS),
        SleepTimer::from_config(&config),
    );
    let mut sink = LogEventSink::new();
    spawn_stdin_reader()?;

    // ── 4. Control loop ───────────────────────────────────────
    match config.max_cycles {
        Some(cycles) => {
            controller.run_cycles(cycles, &mut board, &mut sink)?;
            info!(
                "Stopped after {} cycles in {} ({} lamp writes, {} ms)",
                controller.cycle_count(),
                controller.state_name(),
                board.signals.writes(),
                board.timer.uptime_ms()
            );
            Ok(())
        }
        None => match controller.run_forever(&mut board, &mut sink)? {},
    }
}
