//! Grid-world Markov Decision Processes solved by synchronous value iteration.
//!
//! The agent lives on a rectangular grid with a single absorbing terminal cell
//! in the top-right corner. Moves are noisy: the intended direction succeeds
//! with probability `intended`, and the agent drifts into each perpendicular
//! direction with probability `drift`. Moves that would leave the grid keep
//! the agent in place.

pub mod action;
pub mod bellman;
pub mod grid;
pub mod render;
pub mod state;
pub mod transition;
pub mod value_iteration;

#[cfg(test)]
mod tests;

use num_traits::Float;
use std::fmt::Debug;

pub use action::Action;
pub use grid::GridWorld;
pub use state::State;
pub use transition::{NoiseModel, Successors};

/// Parameters needed to build a [`GridWorld`].
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig<T>
where
    T: Float + Debug,
{
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Reward of every cell other than the corner and terminal cells
    pub default_reward: T,
    /// Reward of cell (0, 0)
    pub corner_reward: T,
    /// Reward of the terminal cell (0, width - 1)
    pub terminal_reward: T,
    /// Discount factor, strictly between 0 and 1
    pub gamma: T,
    /// Slip probabilities of the transition model
    pub noise: NoiseModel<T>,
}

impl<T> Default for GridConfig<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            width: 3,
            height: 3,
            default_reward: -T::one(),
            corner_reward: T::zero(),
            terminal_reward: T::from(10.0).unwrap(),
            gamma: T::from(0.5).unwrap(),
            noise: NoiseModel::default(),
        }
    }
}

/// Options controlling [`GridWorld::value_iterate_with`].
#[derive(Debug, Clone, PartialEq)]
pub struct ValueIterationConfig<T>
where
    T: Float + Debug,
{
    /// Target distance from the optimal utilities
    pub epsilon: T,
    /// Upper bound on the number of sweeps, `None` for no bound
    pub max_sweeps: Option<usize>,
}

impl<T> Default for ValueIterationConfig<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            epsilon: T::from(1e-3).unwrap(),
            max_sweeps: None,
        }
    }
}

/// Summary of a completed value-iteration run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvergenceReport<T>
where
    T: Float + Debug,
{
    /// Number of sweeps performed
    pub sweeps: usize,
    /// Largest utility change observed in each sweep, in order
    pub deltas: Vec<T>,
    /// Stopping bound `epsilon * (1 - gamma) / gamma` the deltas were tested against
    pub threshold: T,
}

impl<T> ConvergenceReport<T>
where
    T: Float + Debug,
{
    pub fn final_delta(&self) -> Option<T> {
        self.deltas.last().copied()
    }
}
