//! The trampoline
//!
//! Runs a computation by forcing thunks in a loop:
//! 1. Holding `Bounce::Call`: force the thunk, keep what it returns
//! 2. Holding `Bounce::Done`: return the value
//!
//! There is no third state. A run cannot be cancelled; it ends with a value,
//! a propagated panic, or (only under opt-in [`DriverLimits`]) a limit error.
//! With no limits set the driver only counts steps for [`RunStats`].

pub mod guard;
pub mod stats;

use crate::thunk::Bounce;
use crate::{DriverLimits, SpringResult};
use guard::StepGuard;
use std::cell::Cell;
use tracing::{debug, warn};

pub use stats::RunStats;

/// Force thunks until the computation is done
///
/// Native stack depth is constant however many steps the computation takes.
/// A panic inside a step unwinds straight out of this function.
pub fn trampoline<T>(initial: Bounce<'_, T>) -> T {
    let mut current = initial;
    loop {
        match current {
            Bounce::Done(value) => return value,
            Bounce::Call(thunk) => current = thunk.force(),
        }
    }
}

/// Wrap a stepping function so callers see a plain call/return interface
pub fn make_trampoline<'a, A, T, F>(f: F) -> impl Fn(A) -> T + 'a
where
    F: Fn(A) -> Bounce<'a, T> + 'a,
{
    move |args| trampoline(f(args))
}

/// A trampoline with limits and statistics
///
/// Computations that resolve part of their work in a nested run (see
/// [`Driver::run_nested`]) share the step count and the limits of the run
/// they are nested in.
#[derive(Debug, Clone, Default)]
pub struct Driver {
    limits: DriverLimits,
    active: Cell<Option<StepGuard>>,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver that enforces the given limits
    pub fn with_limits(limits: DriverLimits) -> Self {
        Self {
            limits,
            active: Cell::new(None),
        }
    }

    pub fn limits(&self) -> &DriverLimits {
        &self.limits
    }

    pub fn run<T>(&self, initial: Bounce<'_, T>) -> SpringResult<T> {
        self.run_with_stats(initial).map(|(value, _)| value)
    }

    /// Run to completion and report how many thunks were forced
    ///
    /// The count includes the thunks of every nested run. Errors only when a
    /// configured limit is exceeded; the pending thunk is dropped at that
    /// point without being forced.
    pub fn run_with_stats<T>(&self, initial: Bounce<'_, T>) -> SpringResult<(T, RunStats)> {
        let enclosing = self.active.replace(Some(StepGuard::new()));
        let outcome = self.drive(initial);
        let guard = self.active.replace(enclosing).unwrap_or_default();

        let value = outcome?;
        let stats = RunStats::new(guard.steps(), guard.elapsed_micros());
        debug!(
            steps = stats.steps,
            elapsed_us = stats.elapsed_micros,
            "trampoline run finished"
        );
        Ok((value, stats))
    }

    /// Run a computation from inside a step of this driver's current run
    ///
    /// Its thunks count toward the enclosing run and its limits, so a limit
    /// tripped here is the enclosing run's limit. Outside a run this is
    /// [`Driver::run`].
    pub fn run_nested<T>(&self, initial: Bounce<'_, T>) -> SpringResult<T> {
        match self.active.get() {
            Some(_) => self.drive(initial),
            None => self.run(initial),
        }
    }

    fn drive<T>(&self, initial: Bounce<'_, T>) -> SpringResult<T> {
        let mut current = initial;
        loop {
            match current {
                Bounce::Done(value) => return Ok(value),
                Bounce::Call(thunk) => {
                    self.count_step()?;
                    current = thunk.force();
                }
            }
        }
    }

    /// The count is stored back before the thunk is forced, so nested runs
    /// started by that thunk continue from it
    fn count_step(&self) -> SpringResult<()> {
        let mut guard = self.active.get().unwrap_or_default();
        let checked = guard.step(&self.limits);
        self.active.set(Some(guard));
        if let Err(e) = &checked {
            warn!(steps = guard.steps(), "trampoline run aborted: {}", e);
        }
        checked
    }
}
