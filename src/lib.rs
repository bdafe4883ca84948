//! Intersection controller library.
//!
//! A table-driven Moore state machine sequencing vehicle and pedestrian
//! signals at a two-way intersection.  The engine and control loop are
//! pure logic; every register access sits behind the port traits in
//! [`app::ports`], so the whole crate is exercised on the host.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod error;
pub mod fsm;
pub mod pins;
pub mod tone;

pub use error::{Error, Result};
