use serde::Serialize;

/// Statistics of one driver run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Thunks forced, which is also the number of thunks allocated
    pub steps: u64,
    pub elapsed_micros: u64,
}

impl RunStats {
    pub fn new(steps: u64, elapsed_micros: u64) -> Self {
        Self {
            steps,
            elapsed_micros,
        }
    }
}
