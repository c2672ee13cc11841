//! Limit checks for a driver run
//!
//! Tracks elapsed time with `std::time::Instant` and compares step counts
//! against [`DriverLimits`]. With no limits configured only the count moves.

use crate::{DriverLimits, SpringError};
use std::time::Instant;

/// Reading the clock on every step would dominate cheap steps
pub const TIMEOUT_CHECK_INTERVAL: u64 = 1024;

/// Step count and start time of one run, shared by the runs nested in it
#[derive(Debug, Clone, Copy)]
pub struct StepGuard {
    start_time: Instant,
    steps: u64,
}

impl StepGuard {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
        }
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn elapsed_micros(&self) -> u64 {
        u64::try_from(self.start_time.elapsed().as_micros()).unwrap_or(u64::MAX)
    }

    /// Count one more forced thunk and check it against `limits`
    ///
    /// Once a limit is exceeded every later step fails as well.
    pub fn step(&mut self, limits: &DriverLimits) -> Result<(), SpringError> {
        self.steps += 1;
        if limits.is_unlimited() {
            return Ok(());
        }
        self.check(limits)
    }

    fn check(&self, limits: &DriverLimits) -> Result<(), SpringError> {
        if let Some(max_steps) = limits.max_steps {
            if self.steps > max_steps {
                return Err(SpringError::ResourceLimitExceeded {
                    limit_name: "max_steps".to_string(),
                    limit_value: max_steps.to_string(),
                    actual_value: self.steps.to_string(),
                    suggestion: format!(
                        "The run needed more than {} steps. Check that every step shrinks the problem, or raise the limit.",
                        max_steps
                    ),
                });
            }
        }

        if let Some(max_ms) = limits.max_evaluation_time_ms {
            if self.steps % TIMEOUT_CHECK_INTERVAL == 0 {
                let elapsed_ms = u64::try_from(self.start_time.elapsed().as_millis())
                    .unwrap_or(u64::MAX);
                if elapsed_ms > max_ms {
                    return Err(SpringError::ResourceLimitExceeded {
                        limit_name: "max_evaluation_time_ms".to_string(),
                        limit_value: max_ms.to_string(),
                        actual_value: elapsed_ms.to_string(),
                        suggestion: format!(
                            "Evaluation took {}ms, exceeding the limit of {}ms. Use a smaller input or increase the timeout.",
                            elapsed_ms, max_ms
                        ),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for StepGuard {
    fn default() -> Self {
        Self::new()
    }
}
