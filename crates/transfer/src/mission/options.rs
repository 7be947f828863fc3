//! Search window and runtime knobs.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use solar_impulsive::LAMBERT_MAX_ITERATIONS;

use super::MissionError;

/// Inclusive range of candidate flight durations in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TofWindow {
    pub min_days: u32,
    pub max_days: u32,
    pub step_days: u32,
}

impl Default for TofWindow {
    fn default() -> Self {
        Self {
            min_days: 50,
            max_days: 500,
            step_days: 15,
        }
    }
}

impl TofWindow {
    pub fn new(min_days: u32, max_days: u32, step_days: u32) -> Self {
        Self {
            min_days,
            max_days,
            step_days,
        }
    }

    pub fn validate(&self) -> Result<(), MissionError> {
        let reason = if self.min_days == 0 {
            "minimum time of flight must be positive"
        } else if self.max_days < self.min_days {
            "maximum time of flight is below the minimum"
        } else if self.step_days == 0 {
            "step must be positive"
        } else {
            return Ok(());
        };
        Err(MissionError::InvalidWindow {
            window: *self,
            reason: reason.to_string(),
        })
    }

    /// Candidate durations in ascending order. Empty when the window is invalid.
    pub fn durations(&self) -> Vec<u32> {
        if self.validate().is_err() {
            return Vec::new();
        }
        (self.min_days..=self.max_days)
            .step_by(self.step_days as usize)
            .collect()
    }
}

impl fmt::Display for TofWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..={} days step {}",
            self.min_days, self.max_days, self.step_days
        )
    }
}

/// Shared flag a caller flips to abandon a running search.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Evaluate candidates on the rayon pool.
    pub parallel: bool,
    pub cancel: Option<CancelToken>,
    pub deadline: Option<Instant>,
    /// Keep Lambert estimates that ran out of iterations instead of skipping them.
    pub accept_unconverged: bool,
    /// Iteration budget of each Lambert solve.
    pub lambert_max_iterations: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            cancel: None,
            deadline: None,
            accept_unconverged: false,
            lambert_max_iterations: LAMBERT_MAX_ITERATIONS,
        }
    }
}

impl SearchOptions {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.deadline = Some(Instant::now() + timeout);
        self
    }

    /// Keep unconverged Lambert estimates, flagged in the candidate diagnostics.
    pub fn accepting_unconverged(mut self) -> Self {
        self.accept_unconverged = true;
        self
    }

    pub fn with_lambert_budget(mut self, max_iterations: usize) -> Self {
        self.lambert_max_iterations = max_iterations;
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub(crate) fn should_stop(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
            || self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_are_inclusive_when_aligned() {
        assert_eq!(TofWindow::new(100, 160, 20).durations(), vec![100, 120, 140, 160]);
        assert_eq!(TofWindow::new(100, 150, 20).durations(), vec![100, 120, 140]);
        assert_eq!(TofWindow::new(7, 7, 1).durations(), vec![7]);
    }

    #[test]
    fn malformed_windows_are_rejected() {
        for window in [
            TofWindow::new(0, 10, 1),
            TofWindow::new(20, 10, 1),
            TofWindow::new(10, 20, 0),
        ] {
            assert!(matches!(
                window.validate(),
                Err(MissionError::InvalidWindow { .. })
            ));
            assert!(window.durations().is_empty());
        }
    }

    #[test]
    fn cancelled_token_stops_the_search() {
        let token = CancelToken::new();
        let options = SearchOptions::default().with_cancel_token(token.clone());
        assert!(!options.should_stop());
        token.cancel();
        assert!(options.should_stop());
        assert!(SearchOptions::sequential().with_timeout(Duration::ZERO).should_stop());
    }
}
