//! Iterated Local Search driver.
//!
//! # Algorithm
//!
//! 1. Construct a random feasible solution; it is both `current` and `best`
//! 2. For each global iteration:
//!    a. Draw a step budget `T` from the configured time intervals
//!    b. Run `T` steps of local search on `current`
//!    c. If `current` is cheaper than `best`, copy it into `best`
//!    d. Construct a fresh random solution `candidate`
//!    e. Replace `current` with `candidate` if cheaper, or else with the
//!    exploration probability
//! 3. Return `best`
//!
//! The loop always runs the configured number of global iterations; there
//! is no convergence test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::IlsConfig;
use super::local_search::{local_search, LocalSearchStats};
use super::observer::{IlsObserver, IterationEvent, RestartOutcome, TracingObserver};
use super::operators::construct_random;
use crate::error::{CflpError, Result};
use crate::model::{Instance, Solution};

/// Result of an ILS run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IlsResult {
    /// Cheapest feasible open set found.
    pub best: Solution,

    /// Total fixed cost of `best`.
    pub best_cost: f64,

    /// Total capacity of `best`. At least the instance demand.
    pub best_capacity: f64,

    /// Global iterations executed.
    pub iterations: usize,

    /// Local search steps executed across all iterations.
    pub local_steps: usize,

    /// Local search moves that replaced the working solution.
    pub accepted_moves: usize,

    /// Accepted moves with strictly lower cost.
    pub improving_moves: usize,

    /// Perturbations rejected because the target facility was already open.
    pub noop_moves: usize,

    /// Perturbed solutions that needed repair.
    pub repairs: usize,

    /// Restart candidates accepted because they were cheaper.
    pub restarts_accepted: usize,

    /// Restart candidates accepted by the exploration draw.
    pub restarts_explored: usize,

    /// Best cost after construction and after every global iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the Iterated Local Search.
pub struct IlsRunner;

impl IlsRunner {
    /// Runs ILS with an RNG seeded from `config.seed` (or OS entropy) and
    /// progress reported through `tracing`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_cflp::ils::{IlsConfig, IlsRunner};
    /// use u_cflp::model::Instance;
    ///
    /// let instance = Instance::from_table(
    ///     &[(10.0, 5.0), (20.0, 7.0), (15.0, 6.0)],
    ///     3,
    ///     25.0,
    /// ).unwrap();
    /// let config = IlsConfig::default().with_global_iterations(20).with_seed(42);
    ///
    /// let result = IlsRunner::run(&instance, &config).unwrap();
    /// assert_eq!(result.best_cost, 11.0);
    /// assert_eq!(result.best.sorted(), vec![0, 2]);
    /// ```
    pub fn run(instance: &Instance, config: &IlsConfig) -> Result<IlsResult> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::run_with_observer(instance, config, &mut rng, TracingObserver)
    }

    /// Runs ILS drawing from a caller-supplied RNG. `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &IlsConfig,
        rng: &mut R,
    ) -> Result<IlsResult> {
        Self::run_with_observer(instance, config, rng, TracingObserver)
    }

    /// Runs ILS with a caller-supplied RNG and progress observer.
    ///
    /// RNG draws happen in a fixed order, so a given RNG state and input
    /// always produce the same result.
    ///
    /// # Errors
    ///
    /// - [`CflpError::InvalidInput`] before any search if `instance` breaks
    ///   its invariants (possible for a deserialized or hand-edited value)
    /// - [`CflpError::InvalidConfig`] before any search if `config` is invalid
    /// - [`CflpError::InfeasibleInstance`] if the facilities cannot cover
    ///   the demand
    #[tracing::instrument(
        name = "ils",
        skip_all,
        fields(facilities = instance.len(), demand = instance.total_demand())
    )]
    pub fn run_with_observer<R: Rng, O: IlsObserver>(
        instance: &Instance,
        config: &IlsConfig,
        rng: &mut R,
        mut observer: O,
    ) -> Result<IlsResult> {
        instance.validate()?;
        config.validate()?;

        let mut current = construct_random(instance, rng)?;
        let mut current_cost = current.cost(instance);
        let mut best = current.clone();
        let mut best_cost = current_cost;
        observer.on_initial(&current, current_cost);

        let mut totals = LocalSearchStats::default();
        let mut restarts_accepted = 0usize;
        let mut restarts_explored = 0usize;

        let mut cost_history = Vec::with_capacity(config.global_iterations + 1);
        cost_history.push(best_cost);

        for iteration in 0..config.global_iterations {
            let steps = config.time_intervals[rng.random_range(0..config.time_intervals.len())];

            let (searched, stats) =
                local_search(&current, instance, steps, config.max_offset, rng)?;
            totals.absorb(&stats);
            current = searched;
            current_cost = current.cost(instance);
            let local_cost = current_cost;

            let best_improved = current_cost < best_cost;
            if best_improved {
                best = current.clone();
                best_cost = current_cost;
            }

            // Restart
            let candidate = construct_random(instance, rng)?;
            let candidate_cost = candidate.cost(instance);
            let restart = if candidate_cost < current_cost {
                RestartOutcome::Improved
            } else if rng.random_range(0.0..1.0) < config.exploration_probability {
                RestartOutcome::Explored
            } else {
                RestartOutcome::Rejected
            };
            match restart {
                RestartOutcome::Improved => restarts_accepted += 1,
                RestartOutcome::Explored => restarts_explored += 1,
                RestartOutcome::Rejected => {}
            }
            if restart != RestartOutcome::Rejected {
                current = candidate;
                current_cost = candidate_cost;
            }

            cost_history.push(best_cost);
            observer.on_iteration(
                &IterationEvent {
                    iteration,
                    steps,
                    local_cost,
                    candidate_cost,
                    current_cost,
                    best_cost,
                    best_improved,
                    restart,
                },
                &best,
            );
        }

        let result = IlsResult {
            best_capacity: best.capacity(instance),
            best,
            best_cost,
            iterations: config.global_iterations,
            local_steps: totals.steps,
            accepted_moves: totals.accepted,
            improving_moves: totals.improving,
            noop_moves: totals.noops,
            repairs: totals.repairs,
            restarts_accepted,
            restarts_explored,
            cost_history,
        };
        observer.on_finish(&result);
        Ok(result)
    }

    /// Runs `starts` independent searches and keeps the cheapest result.
    ///
    /// Start `i` is seeded with `seed + i`, where `seed` is `config.seed`
    /// or a random base. Ties go to the lowest start index, so the outcome
    /// does not depend on scheduling. With the `parallel` feature the
    /// starts run on the rayon pool.
    pub fn run_multi_start(
        instance: &Instance,
        config: &IlsConfig,
        starts: usize,
    ) -> Result<IlsResult> {
        if starts == 0 {
            return Err(CflpError::InvalidConfig(
                "multi-start needs at least one start".into(),
            ));
        }
        config.validate()?;
        let base = config.seed.unwrap_or_else(rand::random::<u64>);
        let run_start = |i: usize| {
            let seeded = config.clone().with_seed(base.wrapping_add(i as u64));
            Self::run(instance, &seeded)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<IlsResult> = {
            use rayon::prelude::*;
            (0..starts)
                .into_par_iter()
                .map(run_start)
                .collect::<Result<Vec<_>>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<IlsResult> = (0..starts).map(run_start).collect::<Result<Vec<_>>>()?;

        let mut results = results.into_iter();
        let mut best = results
            .next()
            .ok_or_else(|| CflpError::InvalidConfig("no start produced a result".into()))?;
        for result in results {
            if result.best_cost < best.best_cost {
                best = result;
            }
        }
        Ok(best)
    }
}

/// Runs ILS on `instance` and returns the best open set with its cost.
///
/// Convenience entry point for callers that only need the warm start:
/// uses the caller's RNG and reports progress through `tracing`.
pub fn run_iterated_local_search<R: Rng>(
    instance: &Instance,
    config: &IlsConfig,
    rng: &mut R,
) -> Result<(Solution, f64)> {
    let result = IlsRunner::run_with_rng(instance, config, rng)?;
    Ok((result.best, result.best_cost))
}
