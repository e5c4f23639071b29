//! # Core types and traits for the BURRO framework
//!
//! This module contains the contract every part of a vehicle implements:
//!
//! - **Part**: synchronous units of work run inline by the drive loop
//! - **ThreadedPart**: background units whose continuous work runs on a
//!   dedicated worker thread, polled non-blockingly once per cycle
//! - **Switch**: the cooperative run/stop flag shared between the drive
//!   loop, workers, and any part that wants to end the drive
//!
//! ## Part lifecycle
//!
//! 1. **Construction** - the part is created with its own configuration
//! 2. **Registration** - the part is added to a [`Vehicle`](crate::Vehicle)
//!    with its input and output channel names
//! 3. **Execution** - `run` (or `run_threaded`) is called once per cycle in
//!    registration order
//! 4. **Shutdown** - `shutdown` is called once when the drive loop exits

pub mod part;
pub mod switch;

pub use part::{Part, ThreadedPart};
pub use switch::Switch;
