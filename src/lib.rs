pub mod error;
pub mod mdp;

pub use error::{Error, Result};
pub use mdp::{
    Action, ConvergenceReport, GridConfig, GridWorld, NoiseModel, State, ValueIterationConfig,
};
