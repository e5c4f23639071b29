//! # BURRO drive-loop scheduling
//!
//! Fixed-rate scheduler that runs every registered part once per cycle, in
//! registration order, moving values through shared memory between them:
//!
//! - **Vehicle**: owns the part list and the memory, drives the cycle loop
//! - **LoopProfiler**: per-part execution timing collected every cycle
//!
//! ## Usage
//!
//! ```rust,ignore
//! use burro_core::Vehicle;
//!
//! let mut vehicle = Vehicle::new();
//! vehicle.add(Box::new(camera), &[], &["image"]);
//! vehicle.add(Box::new(pilot), &["image"], &["throttle", "steering"]);
//! vehicle.add(Box::new(motors), &["throttle", "steering"], &[]);
//! vehicle.start(20.0, None)?; // Blocks until stopped
//! ```
//!
//! Registration order is execution order: within one cycle a part sees the
//! outputs every earlier-registered part wrote that same cycle.

pub mod profiler;
pub mod vehicle;

pub use profiler::{LoopProfiler, PartStats};
pub use vehicle::Vehicle;
