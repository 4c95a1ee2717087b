//! Synchronous value iteration over a [`GridWorld`].
//!
//! Each sweep reads only the utilities left by the previous sweep and writes
//! its results into a fresh buffer, which replaces the old grid once every
//! cell has been backed up.

use log::{debug, info, warn};
use num_traits::Float;
use std::fmt::Debug;

use super::{ConvergenceReport, GridWorld, State, ValueIterationConfig};
use crate::error::{Error, Result};
use crate::mdp::grid::lossy_f64;

impl<T> GridWorld<T>
where
    T: Float + Debug,
{
    /// Largest per-sweep change that still guarantees utilities within
    /// `epsilon` of optimal: `epsilon * (1 - gamma) / gamma`.
    pub fn convergence_threshold(&self, epsilon: T) -> T {
        let gamma = self.gamma();
        epsilon * (T::one() - gamma) / gamma
    }

    /// Performs one synchronous sweep over every cell and returns the largest
    /// absolute utility change it caused.
    ///
    /// The terminal cell always takes its reward and keeps the no-op policy;
    /// it does not contribute to the returned delta.
    pub fn sweep(&mut self) -> T {
        let mut next = self.utilities.clone();
        let mut delta = T::zero();

        for row in 0..self.height() {
            for col in 0..self.width() {
                let state = State::new(row, col);
                if self.is_terminal(state) {
                    next[state.index()] = self.reward(state);
                    continue;
                }

                let (action, value) = self.best_action(state);
                next[state.index()] = value;
                self.policy[state.index()] = Some(action);
                delta = delta.max((value - self.utility(state)).abs());
            }
        }

        self.utilities = next;
        delta
    }

    /// Runs value iteration until the utilities are within `epsilon` of
    /// optimal, updating utilities and policy in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEpsilon`] if `epsilon` is not positive and
    /// finite. Nothing is modified in that case.
    pub fn value_iterate(&mut self, epsilon: T) -> Result<()> {
        self.value_iterate_with(&ValueIterationConfig {
            epsilon,
            max_sweeps: None,
        })
        .map(|_| ())
    }

    /// Runs value iteration with explicit options and reports how it went.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEpsilon`] if `config.epsilon` is not positive and
    ///   finite; no sweep is performed.
    /// - [`Error::InvalidSweepCap`] if `config.max_sweeps` is `Some(0)`; no
    ///   sweep is performed.
    /// - [`Error::NotConverged`] if `config.max_sweeps` sweeps complete
    ///   without meeting the stopping bound. The grid keeps the result of
    ///   the last sweep.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmdp::{GridWorld, ValueIterationConfig};
    ///
    /// let mut world = GridWorld::new(3, 3, -1.0, 3.0, 10.0).unwrap();
    /// let report = world
    ///     .value_iterate_with(&ValueIterationConfig::default())
    ///     .unwrap();
    ///
    /// assert_eq!(report.deltas.len(), report.sweeps);
    /// assert!(report.final_delta().unwrap() <= report.threshold);
    /// ```
    pub fn value_iterate_with(
        &mut self,
        config: &ValueIterationConfig<T>,
    ) -> Result<ConvergenceReport<T>> {
        let epsilon = config.epsilon;
        if !(epsilon > T::zero() && epsilon.is_finite()) {
            return Err(Error::InvalidEpsilon {
                epsilon: lossy_f64(epsilon),
            });
        }
        if config.max_sweeps == Some(0) {
            return Err(Error::InvalidSweepCap);
        }

        let threshold = self.convergence_threshold(epsilon);
        let mut deltas = Vec::new();

        loop {
            let delta = self.sweep();
            deltas.push(delta);
            let sweeps = deltas.len();
            debug!("sweep {}: delta {:?}", sweeps, delta);

            if delta <= threshold {
                info!(
                    "value iteration converged after {} sweeps (delta {:?} <= {:?})",
                    sweeps, delta, threshold
                );
                return Ok(ConvergenceReport {
                    sweeps,
                    deltas,
                    threshold,
                });
            }

            if config.max_sweeps.is_some_and(|max| sweeps >= max) {
                warn!(
                    "value iteration stopped after {} sweeps without converging (delta {:?})",
                    sweeps, delta
                );
                return Err(Error::NotConverged {
                    sweeps,
                    delta: lossy_f64(delta),
                });
            }
        }
    }

    /// Follows the current policy from `start`, always taking the intended
    /// outcome of each move.
    ///
    /// The returned path begins with `start` and stops at the terminal state,
    /// before revisiting a cell, or after `max_steps` moves, whichever comes
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `start` is not on the grid.
    pub fn greedy_path(&self, start: State, max_steps: usize) -> Result<Vec<State>> {
        self.ensure_contains(start)?;

        let mut path = vec![start];
        let mut current = start;
        while path.len() <= max_steps {
            let Some(action) = self.action(current) else {
                break;
            };
            let next = self.step(current, action);
            if path.contains(&next) {
                break;
            }
            path.push(next);
            current = next;
        }

        Ok(path)
    }
}
