use crate::config::VehicleConfig;
use crate::core::{Part, Switch, ThreadedPart};
use crate::error::{BurroError, BurroResult};
use crate::memory::Memory;
use crate::scheduling::profiler::LoopProfiler;
use colored::Colorize;
use log::{info, warn};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How a registered part is executed each cycle.
enum PartRunner {
    /// Run inline on the drive loop thread
    Sync(Box<dyn Part>),
    /// Polled non-blockingly; continuous work happens on a dedicated worker
    Threaded(Arc<dyn ThreadedPart>),
}

/// A part bound to its input/output channels at registration time.
/// Immutable for the lifetime of a drive; position in the part list is
/// registration order and execution order.
struct RegisteredPart {
    runner: PartRunner,
    inputs: Vec<String>,
    outputs: Vec<String>,
    name: &'static str,
}

/// Central orchestrator: owns the parts and the memory, drives the cycle
/// loop at a fixed target rate.
///
/// Each cycle runs every part in registration order: the part's declared
/// input channels are read from memory, the part is invoked, and its outputs
/// are written back. Later-registered parts therefore see the values
/// earlier-registered parts produced in the same cycle.
///
/// The loop runs until the vehicle's [`Switch`] goes off, either because a
/// part turned it off, Ctrl+C was received, or the optional cycle limit was
/// exceeded.
pub struct Vehicle {
    memory: Arc<Memory>,
    parts: Vec<RegisteredPart>,
    switch: Switch,
    loop_count: u64,
    warmup: Duration,
    profiler: LoopProfiler,
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new()
    }
}

impl Vehicle {
    /// Create an empty vehicle with its own memory.
    pub fn new() -> Self {
        Vehicle {
            memory: Arc::new(Memory::new()),
            parts: Vec::new(),
            switch: Switch::new(),
            loop_count: 0,
            warmup: Duration::from_secs(1),
            profiler: LoopProfiler::new(),
        }
    }

    /// Use an existing memory instead of a fresh one (builder pattern).
    pub fn with_memory(mut self, memory: Arc<Memory>) -> Self {
        self.memory = memory;
        self
    }

    /// Override the warm-up delay between starting background workers and
    /// entering the cycle loop (builder pattern). Defaults to one second.
    pub fn with_warmup(mut self, warmup: Duration) -> Self {
        self.warmup = warmup;
        self
    }

    /// The vehicle's shared memory.
    pub fn memory(&self) -> &Arc<Memory> {
        &self.memory
    }

    /// A clone of the run switch, for parts that need to stop the drive.
    pub fn switch(&self) -> Switch {
        self.switch.clone()
    }

    /// Whether the drive loop is (still) allowed to run.
    pub fn is_running(&self) -> bool {
        self.switch.is_on()
    }

    /// Turn the run switch off. The loop winds down at the next cycle
    /// boundary; an in-flight part call is never interrupted.
    pub fn stop(&self) {
        self.switch.turn_off();
    }

    /// Completed cycle count for the current drive.
    pub fn loop_count(&self) -> u64 {
        self.loop_count
    }

    /// Per-part timing statistics collected so far.
    pub fn profile(&self) -> &LoopProfiler {
        &self.profiler
    }

    /// Add a synchronous part to the drive loop.
    ///
    /// `inputs` are the channel names read from memory before each `run`
    /// call; `outputs` are the channels its returned values are written to.
    /// Parts run in the order they were added.
    pub fn add(&mut self, part: Box<dyn Part>, inputs: &[&str], outputs: &[&str]) -> &mut Self {
        let name = part.name();
        info!("Adding part '{}'", name);
        self.parts.push(RegisteredPart {
            runner: PartRunner::Sync(part),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            outputs: outputs.iter().map(|s| s.to_string()).collect(),
            name,
        });
        self
    }

    /// Add a background part to the drive loop.
    ///
    /// A dedicated worker thread will run the part's `update` loop from
    /// `start` until the switch goes off; each cycle the drive loop calls
    /// `run_threaded` for the latest result.
    pub fn add_threaded(
        &mut self,
        part: Arc<dyn ThreadedPart>,
        inputs: &[&str],
        outputs: &[&str],
    ) -> &mut Self {
        let name = part.name();
        info!("Adding threaded part '{}'", name);
        self.parts.push(RegisteredPart {
            runner: PartRunner::Threaded(part),
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            outputs: outputs.iter().map(|s| s.to_string()).collect(),
            name,
        });
        self
    }

    /// Start the drive loop and block until it stops.
    ///
    /// `rate_hz` is the target cycle frequency. Pacing is a fixed post-cycle
    /// sleep of `1/rate_hz`, so the achieved rate is at most the target and
    /// drops as parts take longer; cycle duration is not compensated.
    ///
    /// With `max_loop_count = Some(n)` the loop stops once the cycle count
    /// exceeds `n`, i.e. after `n + 1` cycles. The check fires only after
    /// the count has exceeded the limit; tests pin this boundary down.
    ///
    /// Background workers are started first, then the warm-up delay gives
    /// them a chance to produce an initial result before the first cycle
    /// reads it. The warm-up is a heuristic delay, not a synchronization
    /// guarantee.
    ///
    /// Returns when the switch goes off, or with the first error a part
    /// reported. Either way all workers are joined and every part's
    /// `shutdown` hook has run before this returns.
    pub fn start(&mut self, rate_hz: f64, max_loop_count: Option<u64>) -> BurroResult<()> {
        let workers = self.spawn_workers()?;
        self.install_signal_handler();

        info!("Starting vehicle at {:.1} Hz...", rate_hz);
        thread::sleep(self.warmup);

        let period = if rate_hz > 0.0 {
            Duration::from_secs_f64(1.0 / rate_hz)
        } else {
            Duration::ZERO
        };
        let result = self.drive_loop(period, max_loop_count);

        self.switch.turn_off();
        for worker in workers {
            if worker.join().is_err() {
                warn!("a background worker panicked during the drive");
            }
        }
        self.shutdown_parts();
        self.profiler.log_summary();
        info!("Vehicle stopped after {} cycles", self.loop_count);

        result
    }

    /// Start the drive loop from a [`VehicleConfig`].
    pub fn start_with_config(&mut self, config: &VehicleConfig) -> BurroResult<()> {
        self.warmup = Duration::from_millis(config.warmup_ms);
        self.start(config.rate_hz, config.max_loop_count)
    }

    /// Spawn one named worker per threaded part. On failure, already-started
    /// workers are signalled and joined before the error is returned.
    fn spawn_workers(&self) -> BurroResult<Vec<JoinHandle<()>>> {
        let mut workers = Vec::new();
        for entry in &self.parts {
            if let PartRunner::Threaded(part) = &entry.runner {
                let part = Arc::clone(part);
                let switch = self.switch.clone();
                let spawned = thread::Builder::new()
                    .name(format!("burro-{}", entry.name))
                    .spawn(move || part.update(&switch));
                match spawned {
                    Ok(handle) => workers.push(handle),
                    Err(err) => {
                        self.switch.turn_off();
                        for worker in workers {
                            let _ = worker.join();
                        }
                        return Err(BurroError::Io(err));
                    }
                }
            }
        }
        Ok(workers)
    }

    fn install_signal_handler(&self) {
        let switch = self.switch.clone();
        if let Err(err) = ctrlc::set_handler(move || {
            eprintln!("{}", "\nCtrl+C received, stopping vehicle...".red());
            switch.turn_off();
        }) {
            warn!("failed to install Ctrl+C handler: {}", err);
        }
    }

    fn drive_loop(&mut self, period: Duration, max_loop_count: Option<u64>) -> BurroResult<()> {
        while self.switch.is_on() {
            self.loop_count += 1;

            for idx in 0..self.parts.len() {
                self.run_entry(idx)?;
            }

            thread::sleep(period);

            // The limit check fires only once the count has exceeded the
            // limit, so Some(n) yields exactly n + 1 cycles.
            if let Some(max) = max_loop_count {
                if self.loop_count > max {
                    self.switch.turn_off();
                }
            }
        }
        Ok(())
    }

    fn run_entry(&mut self, idx: usize) -> BurroResult<()> {
        let inputs = self.memory.get(&self.parts[idx].inputs);
        let started = Instant::now();
        let outputs = match &mut self.parts[idx].runner {
            PartRunner::Sync(part) => part.run(&inputs)?,
            PartRunner::Threaded(part) => part.run_threaded(&inputs)?,
        };
        self.profiler.record(self.parts[idx].name, started.elapsed());
        self.memory.put(&self.parts[idx].outputs, outputs);
        Ok(())
    }

    fn shutdown_parts(&mut self) {
        for entry in self.parts.iter_mut() {
            let result = match &mut entry.runner {
                PartRunner::Sync(part) => part.shutdown(),
                PartRunner::Threaded(part) => part.shutdown(),
            };
            if let Err(err) = result {
                warn!("part '{}' failed to shut down: {}", entry.name, err);
            }
        }
    }
}
