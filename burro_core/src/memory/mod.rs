//! # Shared memory for BURRO vehicles
//!
//! This module provides the named-value store that every part of a vehicle
//! reads from and writes to:
//!
//! - **Memory**: the channel table, safe to access from the drive loop and
//!   any number of background workers at once
//! - **Value**: the closed set of data kinds parts exchange over channels
//!
//! ## Channel semantics
//!
//! Channels spring into existence on first write. Reading a channel that has
//! never been written yields [`Value::Absent`] rather than an error, so parts
//! must tolerate absent inputs on the first cycle before their producers have
//! run.

pub mod store;

pub use store::{Memory, Value};
