//! Constant-throughput pacing.
//!
//! Goose's own wait time is a random pause between transactions. A fixed task
//! rate needs the pause to shrink as the task takes longer, so each task sleeps
//! for whatever is left of its slot once its requests are done.

use log::trace;
use std::time::Duration;

use goose::GooseError;

/// Target rate of task executions per simulated user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantThroughput {
    interval: Duration,
}

impl ConstantThroughput {
    /// Pace at `per_second` task executions per second. The rate must be a
    /// positive, finite number.
    pub fn new(per_second: f64) -> Result<Self, GooseError> {
        if !per_second.is_finite() || per_second <= 0.0 {
            return Err(GooseError::InvalidOption {
                option: "throughput".to_string(),
                value: per_second.to_string(),
                detail: "throughput must be a positive number of tasks per second".to_string(),
            });
        }

        Ok(ConstantThroughput {
            interval: Duration::from_secs_f64(1.0 / per_second),
        })
    }

    /// Time between the starts of two consecutive tasks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// How long to wait after a task that ran for `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.interval.saturating_sub(elapsed)
    }

    /// Sleep for the rest of the current slot.
    pub async fn wait(&self, elapsed: Duration) {
        let remaining = self.remaining(elapsed);
        trace!("pacing: task took {:?}, sleeping {:?}", elapsed, remaining);
        if !remaining.is_zero() {
            tokio::time::sleep(remaining).await;
        }
    }
}
