/// Opt-in limits for a [`Driver`](crate::Driver) run
///
/// Both limits are off by default: a plain driver runs until the algorithm
/// produces a value, however long that takes. Setting a limit turns a rewrite
/// that never shrinks its problem into an error instead of a hang.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverLimits {
    /// Maximum number of thunks forced in one run
    pub max_steps: Option<u64>,

    /// Maximum wall-clock time of one run in milliseconds
    /// Checked every `TIMEOUT_CHECK_INTERVAL` steps, so a single slow step can overshoot it
    pub max_evaluation_time_ms: Option<u64>,
}

impl DriverLimits {
    /// Create limits with nothing enforced
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_max_evaluation_time_ms(mut self, max_evaluation_time_ms: u64) -> Self {
        self.max_evaluation_time_ms = Some(max_evaluation_time_ms);
        self
    }

    /// True when no limit is set
    pub fn is_unlimited(&self) -> bool {
        self.max_steps.is_none() && self.max_evaluation_time_ms.is_none()
    }
}
