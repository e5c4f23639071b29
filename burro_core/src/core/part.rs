use crate::core::switch::Switch;
use crate::error::BurroResult;
use crate::memory::Value;

/// A synchronous part, run inline by the drive loop once per cycle.
///
/// The scheduler reads the part's declared input channels, passes the values
/// here, and writes the returned values to the part's declared output
/// channels. The returned vector must match the declared output arity.
///
/// `run` executes on the drive loop's own thread: however long it blocks,
/// the whole cycle blocks with it. Parts doing slow or continuous work
/// should implement [`ThreadedPart`] instead.
///
/// Inputs arrive in declaration order and may be [`Value::Absent`] on early
/// cycles, before producer parts have written anything.
pub trait Part: Send {
    /// The part's name, used for registration logs and timing stats.
    fn name(&self) -> &'static str;

    /// Execute one cycle's worth of work.
    ///
    /// An `Err` here is fatal to the whole drive: the loop stops and the
    /// error propagates out of [`Vehicle::start`](crate::Vehicle::start).
    fn run(&mut self, inputs: &[Value]) -> BurroResult<Vec<Value>>;

    /// Release resources when the drive loop exits (optional override).
    fn shutdown(&mut self) -> BurroResult<()> {
        Ok(())
    }
}

/// A background part whose continuous work runs on a dedicated worker
/// thread, decoupled from the cycle rate.
///
/// The scheduler spawns one worker per threaded part at start-up; the worker
/// calls [`update`](ThreadedPart::update) once and expects it to loop at its
/// own pace until the switch goes off. Meanwhile the drive loop calls
/// [`run_threaded`](ThreadedPart::run_threaded) once per cycle, which must
/// return the worker's latest result without waiting for the worker.
///
/// Both methods take `&self` because the worker thread and the drive loop
/// hold the part at the same time; whatever state `update` maintains for
/// `run_threaded` to snapshot lives inside the part behind its own atomics
/// or lock, never in vehicle memory.
pub trait ThreadedPart: Send + Sync {
    /// The part's name, used for registration logs, the worker thread name,
    /// and timing stats.
    fn name(&self) -> &'static str;

    /// The worker loop. Implementations iterate while `switch.is_on()` and
    /// return promptly once it goes off so the scheduler can join the
    /// worker. A panic here kills only this worker; the drive keeps going.
    fn update(&self, switch: &Switch);

    /// Non-blocking per-cycle accessor returning the worker's most recent
    /// result. Called on the drive loop thread; must not wait on `update`.
    ///
    /// An `Err` here is fatal to the whole drive, same as [`Part::run`].
    fn run_threaded(&self, inputs: &[Value]) -> BurroResult<Vec<Value>>;

    /// Release resources when the drive loop exits (optional override).
    fn shutdown(&self) -> BurroResult<()> {
        Ok(())
    }
}
