//! Facility table and problem instance.

use crate::error::{CflpError, Result};

/// A candidate site with a fixed capacity and a fixed opening cost.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    /// Capacity contributed when the facility is open. Positive.
    pub capacity: f64,
    /// Cost paid for opening the facility. Non-negative.
    pub fixed_cost: f64,
}

impl Facility {
    pub fn new(capacity: f64, fixed_cost: f64) -> Self {
        Self {
            capacity,
            fixed_cost,
        }
    }
}

/// A validated CFLP instance: the facility table and the total demand.
///
/// Construction checks every precondition the search relies on, so the
/// search itself never has to. Facility `i` is addressed by its position
/// in the table.
///
/// # Examples
///
/// ```
/// use u_cflp::model::{Facility, Instance};
///
/// let instance = Instance::new(
///     vec![Facility::new(10.0, 5.0), Facility::new(20.0, 7.0)],
///     25.0,
/// ).unwrap();
/// assert_eq!(instance.len(), 2);
/// assert_eq!(instance.total_capacity(), 30.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInstance"))]
pub struct Instance {
    facilities: Vec<Facility>,
    total_demand: f64,
}

impl Instance {
    /// Builds an instance, rejecting malformed data with
    /// [`CflpError::InvalidInput`].
    ///
    /// Aggregate capacity below demand is not rejected here; the search
    /// reports it as [`CflpError::InfeasibleInstance`] when construction
    /// runs out of facilities.
    pub fn new(facilities: Vec<Facility>, total_demand: f64) -> Result<Self> {
        let instance = Self {
            facilities,
            total_demand,
        };
        instance.validate()?;
        Ok(instance)
    }

    /// Checks the instance invariants: a non-empty table, positive finite
    /// demand and capacities, non-negative finite costs.
    pub fn validate(&self) -> Result<()> {
        if self.facilities.is_empty() {
            return Err(CflpError::InvalidInput("facility table is empty".into()));
        }
        let demand = self.total_demand;
        if !demand.is_finite() || demand <= 0.0 {
            return Err(CflpError::InvalidInput(format!(
                "total demand must be positive and finite, got {demand}"
            )));
        }
        for (i, f) in self.facilities.iter().enumerate() {
            if !f.capacity.is_finite() || f.capacity <= 0.0 {
                return Err(CflpError::InvalidInput(format!(
                    "facility {i}: capacity must be positive and finite, got {}",
                    f.capacity
                )));
            }
            if !f.fixed_cost.is_finite() || f.fixed_cost < 0.0 {
                return Err(CflpError::InvalidInput(format!(
                    "facility {i}: fixed cost must be non-negative and finite, got {}",
                    f.fixed_cost
                )));
            }
        }
        Ok(())
    }

    /// Builds an instance from `(capacity, fixed_cost)` rows.
    ///
    /// `facility_count` must match the number of rows.
    pub fn from_table(
        table: &[(f64, f64)],
        facility_count: usize,
        total_demand: f64,
    ) -> Result<Self> {
        if facility_count != table.len() {
            return Err(CflpError::InvalidInput(format!(
                "facility count {facility_count} does not match table length {}",
                table.len()
            )));
        }
        let facilities = table
            .iter()
            .map(|&(capacity, fixed_cost)| Facility::new(capacity, fixed_cost))
            .collect();
        Self::new(facilities, total_demand)
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Returns facility `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn facility(&self, index: usize) -> &Facility {
        &self.facilities[index]
    }

    /// Number of facilities.
    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    /// Always `false` for a constructed instance.
    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    pub fn total_demand(&self) -> f64 {
        self.total_demand
    }

    /// Capacity with every facility open.
    pub fn total_capacity(&self) -> f64 {
        self.facilities.iter().map(|f| f.capacity).sum()
    }

    /// Sum of capacities over `indices`. Zero for an empty slice.
    ///
    /// Indices must be in range; this is not checked beyond the slice
    /// bounds panic.
    pub fn capacity_of(&self, indices: &[usize]) -> f64 {
        indices.iter().map(|&i| self.facilities[i].capacity).sum()
    }

    /// Sum of fixed costs over `indices`. Zero for an empty slice.
    pub fn cost_of(&self, indices: &[usize]) -> f64 {
        indices.iter().map(|&i| self.facilities[i].fixed_cost).sum()
    }
}

/// Unchecked wire shape of [`Instance`]; deserialization goes through
/// [`Instance::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstance {
    facilities: Vec<Facility>,
    total_demand: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for Instance {
    type Error = CflpError;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Instance::new(raw.facilities, raw.total_demand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> Instance {
        Instance::from_table(&[(10.0, 5.0), (20.0, 7.0), (15.0, 6.0)], 3, 25.0).unwrap()
    }

    #[test]
    fn test_capacity_and_cost_of() {
        let inst = three();
        assert_eq!(inst.capacity_of(&[0, 2]), 25.0);
        assert_eq!(inst.cost_of(&[0, 2]), 11.0);
        assert_eq!(inst.capacity_of(&[0, 1, 2]), 45.0);
        assert_eq!(inst.cost_of(&[0, 1, 2]), 18.0);
    }

    #[test]
    fn test_empty_selection_is_zero() {
        let inst = three();
        assert_eq!(inst.capacity_of(&[]), 0.0);
        assert_eq!(inst.cost_of(&[]), 0.0);
    }

    #[test]
    fn test_evaluators_are_idempotent() {
        let inst = three();
        let sel = [2, 0];
        assert_eq!(inst.capacity_of(&sel), inst.capacity_of(&sel));
        assert_eq!(inst.cost_of(&sel), inst.cost_of(&sel));
    }

    #[test]
    fn test_total_capacity() {
        assert_eq!(three().total_capacity(), 45.0);
    }

    #[test]
    fn test_rejects_empty_table() {
        let err = Instance::new(vec![], 1.0).unwrap_err();
        assert!(matches!(err, CflpError::InvalidInput(_)));
    }

    #[test]
    fn test_rejects_bad_demand() {
        for demand in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Instance::new(vec![Facility::new(1.0, 1.0)], demand).unwrap_err();
            assert!(matches!(err, CflpError::InvalidInput(_)), "demand {demand}");
        }
    }

    #[test]
    fn test_rejects_bad_facility() {
        assert!(Instance::new(vec![Facility::new(0.0, 1.0)], 1.0).is_err());
        assert!(Instance::new(vec![Facility::new(1.0, -0.5)], 1.0).is_err());
        assert!(Instance::new(vec![Facility::new(f64::NAN, 1.0)], 1.0).is_err());
    }

    #[test]
    fn test_zero_fixed_cost_is_allowed() {
        assert!(Instance::new(vec![Facility::new(1.0, 0.0)], 1.0).is_ok());
    }

    #[test]
    fn test_from_table_count_mismatch() {
        let err = Instance::from_table(&[(1.0, 1.0)], 2, 1.0).unwrap_err();
        assert!(matches!(err, CflpError::InvalidInput(_)));
    }

    #[test]
    fn test_capacity_shortfall_is_not_a_validation_error() {
        let inst = Instance::from_table(&[(5.0, 1.0), (5.0, 1.0)], 2, 100.0);
        assert!(inst.is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let bad = r#"{"facilities":[{"capacity":10.0,"fixed_cost":5.0}],"total_demand":-1.0}"#;
        let err = serde_json::from_str::<Instance>(bad).unwrap_err();
        assert!(err.to_string().contains("total demand"), "{err}");

        let empty = r#"{"facilities":[],"total_demand":3.0}"#;
        assert!(serde_json::from_str::<Instance>(empty).is_err());

        let good = r#"{"facilities":[{"capacity":10.0,"fixed_cost":5.0}],"total_demand":4.0}"#;
        let inst: Instance = serde_json::from_str(good).unwrap();
        assert_eq!(inst.total_capacity(), 10.0);
        let back: Instance = serde_json::from_str(&serde_json::to_string(&inst).unwrap()).unwrap();
        assert_eq!(back, inst);
    }

    #[test]
    fn test_validate_catches_mutated_fields() {
        let mut inst = three();
        assert!(inst.validate().is_ok());
        inst.total_demand = f64::NAN;
        assert!(matches!(inst.validate(), Err(CflpError::InvalidInput(_))));
    }
}
