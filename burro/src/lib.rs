//! # BURRO - a fixed-rate drive-loop framework for small vehicles
//!
//! BURRO runs a heterogeneous set of cooperating parts at a target
//! frequency, moving data between them through a shared named-value memory.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use burro::prelude::*;
//!
//! struct Pilot;
//!
//! impl Part for Pilot {
//!     fn name(&self) -> &'static str { "pilot" }
//!
//!     fn run(&mut self, inputs: &[Value]) -> BurroResult<Vec<Value>> {
//!         let speed = inputs[0].as_float().unwrap_or(0.0);
//!         Ok(vec![Value::Float(speed * 0.5)])
//!     }
//! }
//!
//! let mut vehicle = Vehicle::new();
//! vehicle.add(Box::new(Pilot), &["speed"], &["throttle"]);
//! vehicle.start(20.0, None).unwrap();
//! ```

// Re-export core components
pub use burro_core::{self, *};

// Re-export commonly used dependencies for downstream parts
pub use anyhow;
pub use serde;
pub use thiserror;

/// The BURRO prelude - everything you need to get started
pub mod prelude {
    // Part contract
    pub use burro_core::core::{Part, Switch, ThreadedPart};

    // Memory
    pub use burro_core::memory::{Memory, Value};

    // Scheduling
    pub use burro_core::scheduling::Vehicle;

    // Configuration
    pub use burro_core::config::VehicleConfig;

    // Error types
    pub use burro_core::error::{BurroError, BurroResult};
    pub type Result<T> = BurroResult<T>;

    // Common std types
    pub use std::sync::Arc;
    pub use std::time::Duration;
}
