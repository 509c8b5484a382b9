//! Open-set solution representation.

use crate::error::{CflpError, Result};
use crate::model::Instance;

/// An ordered collection of distinct facility indices (the open set).
///
/// Order carries no meaning for cost or capacity, but it is stable so that
/// positional perturbations are reproducible under a fixed seed. Operators
/// never mutate a solution they were handed; they return a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSolution"))]
pub struct Solution {
    open: Vec<usize>,
}

impl Solution {
    /// Empty open set. Only meaningful during construction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a solution from caller-supplied indices, checking that each is
    /// in range for `instance` and appears once.
    pub fn from_indices(indices: Vec<usize>, instance: &Instance) -> Result<Self> {
        let solution = Self { open: indices };
        solution.validate(instance)?;
        Ok(solution)
    }

    /// Checks that every index is in range for `instance` and appears once.
    ///
    /// A deserialized solution only has its uniqueness checked; call this
    /// before using it with a particular instance.
    pub fn validate(&self, instance: &Instance) -> Result<()> {
        let mut seen = vec![false; instance.len()];
        for &i in &self.open {
            if i >= instance.len() {
                return Err(CflpError::InvalidInput(format!(
                    "facility index {i} out of range 0..{}",
                    instance.len()
                )));
            }
            if seen[i] {
                return Err(duplicate(i));
            }
            seen[i] = true;
        }
        Ok(())
    }

    pub fn indices(&self) -> &[usize] {
        &self.open
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.open
    }

    /// Indices in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut v = self.open.clone();
        v.sort_unstable();
        v
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub(crate) fn push(&mut self, index: usize) {
        debug_assert!(!self.open.contains(&index));
        self.open.push(index);
    }

    pub(crate) fn replace_at(&mut self, position: usize, index: usize) {
        debug_assert!(!self.open.contains(&index));
        self.open[position] = index;
    }

    pub fn capacity(&self, instance: &Instance) -> f64 {
        instance.capacity_of(&self.open)
    }

    pub fn cost(&self, instance: &Instance) -> f64 {
        instance.cost_of(&self.open)
    }

    pub fn is_feasible(&self, instance: &Instance) -> bool {
        self.capacity(instance) >= instance.total_demand()
    }
}

fn duplicate(index: usize) -> CflpError {
    CflpError::InvalidInput(format!("facility index {index} appears more than once"))
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSolution {
    open: Vec<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSolution> for Solution {
    type Error = CflpError;

    fn try_from(raw: RawSolution) -> Result<Self> {
        let mut seen = std::collections::HashSet::with_capacity(raw.open.len());
        if let Some(&i) = raw.open.iter().find(|&&i| !seen.insert(i)) {
            return Err(duplicate(i));
        }
        Ok(Self { open: raw.open })
    }
}
