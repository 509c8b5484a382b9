//! Construction, repair and perturbation operators.
//!
//! All three take the solution by reference and hand back a new one, so
//! the caller's copy is never modified.

use rand::Rng;

use crate::error::{CflpError, Result};
use crate::model::{Instance, Solution};

/// Builds a random feasible solution from scratch.
///
/// Unused facilities are drawn uniformly, one at a time, until the open
/// capacity covers the demand.
///
/// # Errors
///
/// [`CflpError::InfeasibleInstance`] if every facility is open and the
/// demand is still not met.
pub fn construct_random<R: Rng>(instance: &Instance, rng: &mut R) -> Result<Solution> {
    let (solution, _) = extend_until_feasible(&Solution::new(), instance, rng)?;
    Ok(solution)
}

/// Restores feasibility by opening random unused facilities.
///
/// A feasible input is returned as an equal copy. Otherwise unused
/// facilities are drawn uniformly and appended until capacity covers the
/// demand. Each facility is opened at most once, so the loop is bounded by
/// the number of unused facilities.
///
/// # Errors
///
/// [`CflpError::InfeasibleInstance`] if the unused pool runs dry first.
pub fn repair<R: Rng>(solution: &Solution, instance: &Instance, rng: &mut R) -> Result<Solution> {
    let (repaired, _) = extend_until_feasible(solution, instance, rng)?;
    Ok(repaired)
}

/// Draw-and-check attempts before falling back to scanning the unused pool.
const REJECTION_ATTEMPTS: usize = 32;

/// Shared body of [`construct_random`] and [`repair`]. Also returns how
/// many facilities were opened.
pub(crate) fn extend_until_feasible<R: Rng>(
    solution: &Solution,
    instance: &Instance,
    rng: &mut R,
) -> Result<(Solution, usize)> {
    let demand = instance.total_demand();
    let mut capacity = solution.capacity(instance);
    if capacity >= demand {
        return Ok((solution.clone(), 0));
    }

    let mut extended = solution.clone();
    let mut added = 0;
    while capacity < demand {
        let Some(facility) = draw_unused(&extended, instance.len(), rng) else {
            return Err(CflpError::InfeasibleInstance {
                total_capacity: instance.total_capacity(),
                demand,
            });
        };
        extended.push(facility);
        capacity += instance.facility(facility).capacity;
        added += 1;
    }

    Ok((extended, added))
}

/// Uniformly draws a facility index in `0..n` that is not open in
/// `solution`, or `None` when every facility is open.
///
/// Tries a few rejection draws first, which costs `O(|solution|)` each;
/// only a dense solution pays for the `O(n)` scan of the unused pool.
fn draw_unused<R: Rng>(solution: &Solution, n: usize, rng: &mut R) -> Option<usize> {
    if solution.len() >= n {
        return None;
    }

    for _ in 0..REJECTION_ATTEMPTS {
        let facility = rng.random_range(0..n);
        if !solution.contains(facility) {
            return Some(facility);
        }
    }

    let mut open = vec![false; n];
    for &i in solution.indices() {
        open[i] = true;
    }
    let unused: Vec<usize> = (0..n).filter(|&i| !open[i]).collect();
    Some(unused[rng.random_range(0..unused.len())])
}

/// Moves one open facility to a nearby index.
///
/// Picks a uniformly random position, shifts its facility index by a
/// random offset in `[-max_offset, max_offset]` and clamps the result to
/// the valid index range. Offsets wider than the facility table are
/// narrowed to its length, which reaches every index all the same. Returns `None` when the new index is already
/// open (including the unshifted index itself) or the solution is empty;
/// the input then stands unchanged.
///
/// The result may be infeasible: replacing a facility can lower capacity.
pub fn tweak<R: Rng>(
    solution: &Solution,
    instance: &Instance,
    max_offset: usize,
    rng: &mut R,
) -> Option<Solution> {
    if solution.is_empty() {
        return None;
    }

    let position = rng.random_range(0..solution.len());
    let radius = max_offset.min(instance.len()) as i64;
    let offset = rng.random_range(-radius..=radius);

    let old = solution.indices()[position] as i64;
    let upper = instance.len() as i64 - 1;
    let candidate = (old + offset).clamp(0, upper) as usize;

    if solution.contains(candidate) {
        return None;
    }

    let mut moved = solution.clone();
    moved.replace_at(position, candidate);
    Some(moved)
}
