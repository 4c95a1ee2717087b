use num_traits::Float;
use std::fmt::Debug;

use super::{Action, GridWorld, State};
use crate::error::{Error, Result};
use crate::mdp::grid::lossy_f64;

/// Outcomes of one noisy move: the intended outcome first, then the two
/// perpendicular drifts in [`Action::perpendicular`] order.
///
/// Entries may name the same cell (for instance when both drifts are blocked
/// by walls). They are deliberately left unmerged; the Bellman backup sums
/// over the raw list, which accumulates their mass.
pub type Successors<T> = [(State, T); 3];

/// Slip probabilities of a move.
///
/// The intended direction succeeds with probability `intended`; the agent
/// drifts into each perpendicular direction with probability `drift`. The
/// reverse direction is never taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseModel<T>
where
    T: Float + Debug,
{
    pub intended: T,
    pub drift: T,
}

impl<T> Default for NoiseModel<T>
where
    T: Float + Debug,
{
    fn default() -> Self {
        Self {
            intended: T::from(0.8).unwrap(),
            drift: T::from(0.1).unwrap(),
        }
    }
}

impl<T> NoiseModel<T>
where
    T: Float + Debug,
{
    /// # Errors
    ///
    /// Returns [`Error::InvalidNoise`] unless both terms are non-negative and
    /// `intended + 2 * drift` equals 1 to within the square root of machine
    /// epsilon.
    pub fn new(intended: T, drift: T) -> Result<Self> {
        let model = Self { intended, drift };
        model.validate()?;
        Ok(model)
    }

    /// Moves always succeed.
    pub fn deterministic() -> Self {
        Self {
            intended: T::one(),
            drift: T::zero(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let two = T::one() + T::one();
        let total = self.intended + two * self.drift;
        let tolerance = T::epsilon().sqrt();
        let valid = self.intended >= T::zero()
            && self.drift >= T::zero()
            && (total - T::one()).abs() <= tolerance;
        if valid {
            Ok(())
        } else {
            Err(Error::InvalidNoise {
                intended: lossy_f64(self.intended),
                drift: lossy_f64(self.drift),
            })
        }
    }
}

impl<T> GridWorld<T>
where
    T: Float + Debug,
{
    /// Cell reached by `action` if the move succeeds exactly; moves that
    /// would leave the grid leave the agent at `state`.
    pub fn step(&self, state: State, action: Action) -> State {
        action
            .apply(state, self.width(), self.height())
            .unwrap_or(state)
    }

    /// Possible outcomes of taking `action` in `state`, with probabilities.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `state` is not on the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmdp::{Action, GridWorld, State};
    ///
    /// let world = GridWorld::new(3, 3, -1.0, 0.0, 10.0).unwrap();
    /// let outcomes = world.successors(State::new(1, 1), Action::Up).unwrap();
    ///
    /// assert_eq!(outcomes[0], (State::new(0, 1), 0.8));
    /// assert_eq!(outcomes[1], (State::new(1, 0), 0.1));
    /// assert_eq!(outcomes[2], (State::new(1, 2), 0.1));
    /// ```
    pub fn successors(&self, state: State, action: Action) -> Result<Successors<T>> {
        self.ensure_contains(state)?;
        Ok(self.successors_unchecked(state, action))
    }

    pub(crate) fn successors_unchecked(&self, state: State, action: Action) -> Successors<T> {
        let noise = self.noise();
        let [left, right] = action.perpendicular();
        [
            (self.step(state, action), noise.intended),
            (self.step(state, left), noise.drift),
            (self.step(state, right), noise.drift),
        ]
    }
}
