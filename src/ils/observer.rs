//! Progress hooks for the ILS driver.
//!
//! The search itself never logs. It reports to an [`IlsObserver`] at three
//! points: after the initial construction, at the end of every global
//! iteration, and once with the final result.

use super::runner::IlsResult;
use crate::model::Solution;

/// What happened to the restart candidate at the end of a global iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RestartOutcome {
    /// Cheaper than the current solution; replaced it.
    Improved,
    /// Not cheaper, but accepted by the exploration draw.
    Explored,
    /// Discarded; the current solution carries over.
    Rejected,
}

/// Snapshot reported at the end of one global iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationEvent {
    /// Zero-based global iteration index.
    pub iteration: usize,
    /// Step budget drawn for this iteration's local search.
    pub steps: usize,
    /// Cost of the working solution after local search, before restart.
    pub local_cost: f64,
    /// Cost of the freshly constructed restart candidate.
    pub candidate_cost: f64,
    /// Cost of the working solution carried into the next iteration.
    pub current_cost: f64,
    /// Best cost so far.
    pub best_cost: f64,
    /// Whether this iteration lowered the best cost.
    pub best_improved: bool,
    pub restart: RestartOutcome,
}

/// Receives progress callbacks from [`IlsRunner`](super::IlsRunner).
///
/// Every method has an empty default body.
pub trait IlsObserver {
    /// Called once the initial solution has been constructed.
    fn on_initial(&mut self, _solution: &Solution, _cost: f64) {}

    /// Called at the end of every global iteration.
    fn on_iteration(&mut self, _event: &IterationEvent, _best: &Solution) {}

    /// Called once with the final result.
    fn on_finish(&mut self, _result: &IlsResult) {}
}

/// Discards every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl IlsObserver for NoopObserver {}

/// Forwards progress to `tracing`: `info` for the start and the end of a
/// run, `debug` per global iteration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl IlsObserver for TracingObserver {
    fn on_initial(&mut self, solution: &Solution, cost: f64) {
        tracing::info!(
            open = solution.len(),
            cost,
            facilities = ?solution.indices(),
            "initial solution constructed"
        );
    }

    fn on_iteration(&mut self, event: &IterationEvent, _best: &Solution) {
        tracing::debug!(
            iteration = event.iteration,
            steps = event.steps,
            local_cost = event.local_cost,
            candidate_cost = event.candidate_cost,
            current_cost = event.current_cost,
            best_cost = event.best_cost,
            best_improved = event.best_improved,
            restart = ?event.restart,
            "global iteration finished"
        );
    }

    fn on_finish(&mut self, result: &IlsResult) {
        tracing::info!(
            best_cost = result.best_cost,
            open = result.best.len(),
            iterations = result.iterations,
            local_steps = result.local_steps,
            facilities = ?result.best.sorted(),
            "iterated local search finished"
        );
    }
}

impl<O: IlsObserver + ?Sized> IlsObserver for &mut O {
    fn on_initial(&mut self, solution: &Solution, cost: f64) {
        (**self).on_initial(solution, cost);
    }

    fn on_iteration(&mut self, event: &IterationEvent, best: &Solution) {
        (**self).on_iteration(event, best);
    }

    fn on_finish(&mut self, result: &IlsResult) {
        (**self).on_finish(result);
    }
}
