//! Iterated Local Search (ILS) for the capacitated facility location problem.
//!
//! A single working solution is improved by a hill-climbing local search
//! that moves one open facility at a time to a nearby index, repairing
//! capacity shortfalls by opening random facilities. Between local search
//! phases the search restarts from a fresh random solution when that is
//! cheaper, and occasionally even when it is not.
//!
//! # Components
//!
//! - [`construct_random`], [`repair`], [`tweak`]: solution operators
//! - [`local_search`]: the bounded perturb-repair-accept loop
//! - [`IlsRunner`]: the restart driver, configured by [`IlsConfig`]
//! - [`IlsObserver`]: progress hook; [`TracingObserver`] logs via `tracing`
//!
//! # References
//!
//! - Lourenço, H. R., Martin, O. C. & Stützle, T. (2003). "Iterated Local
//!   Search", *Handbook of Metaheuristics*, 320-353.

mod config;
mod local_search;
mod observer;
mod operators;
mod runner;

pub use config::{IlsConfig, DEFAULT_TIME_INTERVALS};
pub use local_search::{local_search, LocalSearchStats};
pub use observer::{IlsObserver, IterationEvent, NoopObserver, RestartOutcome, TracingObserver};
pub use operators::{construct_random, repair, tweak};
pub use runner::{run_iterated_local_search, IlsResult, IlsRunner};
