//! # BURRO Core
//!
//! The core runtime for the BURRO vehicle framework.
//!
//! BURRO drives a set of cooperating parts (sensors, pilots, actuators,
//! loggers) at a fixed rate, with all data flowing through a shared
//! named-value memory. This crate provides the fundamental building blocks:
//!
//! - **Parts**: Units of work with declared input/output channels
//! - **Memory**: The named-value store every part reads from and writes to
//! - **Scheduling**: The fixed-rate drive loop and background workers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use burro_core::{Part, Value, Vehicle, BurroResult};
//!
//! struct FixedThrottle;
//!
//! impl Part for FixedThrottle {
//!     fn name(&self) -> &'static str { "fixed_throttle" }
//!
//!     fn run(&mut self, _inputs: &[Value]) -> BurroResult<Vec<Value>> {
//!         Ok(vec![Value::Float(0.3)])
//!     }
//! }
//!
//! let mut vehicle = Vehicle::new();
//! vehicle.add(Box::new(FixedThrottle), &[], &["throttle"]);
//! vehicle.start(10.0, Some(100)).unwrap();
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod memory;
pub mod scheduling;

// Re-export commonly used types for easy access
pub use config::VehicleConfig;
pub use core::{Part, Switch, ThreadedPart};
pub use error::{BurroError, BurroResult};
pub use memory::{Memory, Value};
pub use scheduling::{LoopProfiler, PartStats, Vehicle};
