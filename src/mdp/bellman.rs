//! One-step Bellman backups over the current utility estimate.

use log::trace;
use num_traits::Float;
use std::fmt::Debug;

use super::{Action, GridWorld, State};
use crate::error::Result;

impl<T> GridWorld<T>
where
    T: Float + Debug,
{
    /// Compute Q(s, a) = sum_{s'} P(s'|s,a) [ R(s') + gamma * U(s') ].
    ///
    /// The terminal state has no dynamics: its Q-value is its reward for
    /// every action. Reads the utilities as they were before any sweep that
    /// may be in progress.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `state` is not on the grid.
    pub fn q_value(&self, state: State, action: Action) -> Result<T> {
        self.ensure_contains(state)?;
        Ok(self.q_value_unchecked(state, action))
    }

    pub(crate) fn q_value_unchecked(&self, state: State, action: Action) -> T {
        if self.is_terminal(state) {
            return self.reward(state);
        }

        let gamma = self.gamma();
        self.successors_unchecked(state, action)
            .iter()
            .fold(T::zero(), |q, &(next, probability)| {
                q + probability * (self.reward(next) + gamma * self.utility(next))
            })
    }

    /// Greedy action and its Q-value, scanning [`Action::ALL`] in order.
    /// Only a strictly larger Q-value replaces the current best, so the
    /// earliest action wins ties.
    pub(crate) fn best_action(&self, state: State) -> (Action, T) {
        let mut best_action = Action::ALL[0];
        let mut best_value = T::neg_infinity();

        for action in Action::ALL {
            let q = self.q_value_unchecked(state, action);
            if q > best_value {
                best_value = q;
                best_action = action;
            }
        }

        trace!("best action at {} is {:?} ({:?})", state, best_action, best_value);
        (best_action, best_value)
    }
}
