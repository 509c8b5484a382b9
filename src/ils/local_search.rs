//! Inner perturb-repair-accept loop.

use rand::Rng;

use super::operators::{extend_until_feasible, tweak};
use crate::error::Result;
use crate::model::{Instance, Solution};

/// Counters collected over one local search phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalSearchStats {
    /// Steps executed. Always equals the requested budget.
    pub steps: usize,
    /// Moves that replaced the working solution (cost not worse).
    pub accepted: usize,
    /// Accepted moves with strictly lower cost.
    pub improving: usize,
    /// Perturbations rejected because the target index was already open.
    pub noops: usize,
    /// Perturbed solutions that needed repair.
    pub repairs: usize,
}

impl LocalSearchStats {
    pub(crate) fn absorb(&mut self, other: &LocalSearchStats) {
        self.steps += other.steps;
        self.accepted += other.accepted;
        self.improving += other.improving;
        self.noops += other.noops;
        self.repairs += other.repairs;
    }
}

/// Runs `steps` rounds of perturbation, repair and acceptance from `start`.
///
/// A perturbed copy replaces the working solution when its cost is less
/// than or equal to the working cost, so equal-cost plateaus are walked
/// freely. There is no early exit; all `steps` rounds run.
///
/// `start` must be feasible; the returned solution is feasible and its
/// cost is never above the cost of `start`.
pub fn local_search<R: Rng>(
    start: &Solution,
    instance: &Instance,
    steps: usize,
    max_offset: usize,
    rng: &mut R,
) -> Result<(Solution, LocalSearchStats)> {
    let mut current = start.clone();
    let mut current_cost = current.cost(instance);
    let mut stats = LocalSearchStats::default();

    for _ in 0..steps {
        stats.steps += 1;

        let Some(moved) = tweak(&current, instance, max_offset, rng) else {
            stats.noops += 1;
            continue;
        };

        let (candidate, added) = extend_until_feasible(&moved, instance, rng)?;
        if added > 0 {
            stats.repairs += 1;
        }

        let candidate_cost = candidate.cost(instance);
        if candidate_cost <= current_cost {
            if candidate_cost < current_cost {
                stats.improving += 1;
            }
            stats.accepted += 1;
            current = candidate;
            current_cost = candidate_cost;
        }
    }

    Ok((current, stats))
}
