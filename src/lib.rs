//! Iterated Local Search warm starts for the Capacitated Facility Location
//! Problem (CFLP).
//!
//! Given facilities with fixed capacities and opening costs, and a total
//! customer demand, the search picks a set of facilities whose combined
//! capacity covers the demand at low total opening cost. The result is
//! meant as a starting point for an exact mixed-integer solver, which
//! also takes care of assigning customers to the opened facilities.
//!
//! - [`model`]: facility table, instance validation and solution type
//! - [`ils`]: construction, repair and perturbation operators, the local
//!   search loop and the restart driver
//! - [`orlib`]: reader for OR-Library capacitated warehouse instances
//! - [`error`]: the crate error type
//!
//! # Example
//!
//! ```
//! use u_cflp::ils::{IlsConfig, IlsRunner};
//! use u_cflp::model::Instance;
//!
//! let instance = Instance::from_table(&[(40.0, 9.0), (25.0, 4.0), (30.0, 5.0)], 3, 50.0)?;
//! let result = IlsRunner::run(&instance, &IlsConfig::default().with_seed(1))?;
//! assert!(result.best_capacity >= 50.0);
//! # Ok::<(), u_cflp::CflpError>(())
//! ```
//!
//! # Randomness
//!
//! Every randomized operation takes an explicit `rand::Rng`. A fixed seed
//! (or a cloned RNG state) reproduces a run exactly.

pub mod error;
pub mod ils;
pub mod model;
pub mod orlib;

pub use error::{CflpError, Result};
