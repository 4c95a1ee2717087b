use log::debug;
use ndarray::{Array2, ArrayView2};
use num_traits::Float;
use rand::Rng;
use std::fmt::Debug;

use super::{Action, GridConfig, NoiseModel, State};
use crate::error::{Error, Result};

/// A rectangular grid-world MDP together with its current value estimate.
///
/// Three parallel `height x width` grids are kept, all indexed by
/// `(row, col)`:
/// - `rewards`: fixed once the world is built
/// - `utilities`: current utility estimate, all zeros until a sweep runs
/// - `policy`: greedy action per cell; `None` marks the terminal cell, which
///   never acts
///
/// Only the value-iteration driver writes `utilities` and `policy`.
#[derive(Debug, Clone)]
pub struct GridWorld<T>
where
    T: Float + Debug,
{
    width: usize,
    height: usize,
    terminal: State,
    gamma: T,
    noise: NoiseModel<T>,
    pub(crate) rewards: Array2<T>,
    pub(crate) utilities: Array2<T>,
    pub(crate) policy: Array2<Option<Action>>,
}

impl<T> GridWorld<T>
where
    T: Float + Debug,
{
    /// Builds a world with discount 0.5 and the standard 0.8 / 0.1 / 0.1
    /// noise model.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when `width` or `height` is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridmdp::{GridWorld, State};
    ///
    /// let mut world = GridWorld::new(3, 3, -1.0, -100.0, 10.0).unwrap();
    /// world.value_iterate(0.001).unwrap();
    ///
    /// assert_eq!(world.utility(State::new(0, 2)), 10.0);
    /// assert_eq!(world.action(State::new(0, 2)), None);
    /// ```
    pub fn new(
        width: usize,
        height: usize,
        default_reward: T,
        corner_reward: T,
        terminal_reward: T,
    ) -> Result<Self> {
        Self::from_config(GridConfig {
            width,
            height,
            default_reward,
            corner_reward,
            terminal_reward,
            ..GridConfig::default()
        })
    }

    /// Builds a world from a full configuration.
    ///
    /// Every non-terminal cell starts with the policy [`Action::Up`]; use
    /// [`GridWorld::randomize_policy`] for a random starting policy.
    ///
    /// # Errors
    ///
    /// Rejects zero dimensions, a discount outside `(0, 1)` and an invalid
    /// noise model.
    pub fn from_config(config: GridConfig<T>) -> Result<Self> {
        let GridConfig {
            width,
            height,
            default_reward,
            corner_reward,
            terminal_reward,
            gamma,
            noise,
        } = config;

        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        if !(gamma > T::zero() && gamma < T::one()) {
            return Err(Error::InvalidDiscount {
                gamma: lossy_f64(gamma),
            });
        }
        noise.validate()?;

        let terminal = State::new(0, width - 1);

        let mut rewards = Array2::from_elem((height, width), default_reward);
        rewards[terminal.index()] = terminal_reward;
        // Applied last: on a single-column grid the corner is also the terminal.
        rewards[(0, 0)] = corner_reward;

        let utilities = Array2::from_elem((height, width), T::zero());
        let mut policy = Array2::from_elem((height, width), Some(Action::Up));
        policy[terminal.index()] = None;

        debug!(
            "built {}x{} grid world, terminal {}, gamma {:?}",
            width, height, terminal, gamma
        );

        Ok(Self {
            width,
            height,
            terminal,
            gamma,
            noise,
            rewards,
            utilities,
            policy,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn gamma(&self) -> T {
        self.gamma
    }

    pub fn noise(&self) -> &NoiseModel<T> {
        &self.noise
    }

    /// The single absorbing cell, `(0, width - 1)`.
    pub fn terminal(&self) -> State {
        self.terminal
    }

    pub fn is_terminal(&self, state: State) -> bool {
        state == self.terminal
    }

    pub fn contains(&self, state: State) -> bool {
        state.row < self.height && state.col < self.width
    }

    /// All cells in row-major order.
    pub fn states(&self) -> impl Iterator<Item = State> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| State::new(row, col)))
    }

    pub fn rewards(&self) -> ArrayView2<'_, T> {
        self.rewards.view()
    }

    pub fn utilities(&self) -> ArrayView2<'_, T> {
        self.utilities.view()
    }

    pub fn policy(&self) -> ArrayView2<'_, Option<Action>> {
        self.policy.view()
    }

    /// # Panics
    ///
    /// Panics if `state` lies outside the grid.
    pub fn reward(&self, state: State) -> T {
        self.rewards[state.index()]
    }

    /// # Panics
    ///
    /// Panics if `state` lies outside the grid.
    pub fn utility(&self, state: State) -> T {
        self.utilities[state.index()]
    }

    /// Current policy action, `None` for the terminal cell.
    ///
    /// # Panics
    ///
    /// Panics if `state` lies outside the grid.
    pub fn action(&self, state: State) -> Option<Action> {
        self.policy[state.index()]
    }

    /// Replaces the policy of every non-terminal cell with a uniformly random
    /// action. Has no influence on the converged result.
    pub fn randomize_policy<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let terminal = self.terminal;
        for ((row, col), cell) in self.policy.indexed_iter_mut() {
            if State::new(row, col) != terminal {
                *cell = Some(rng.gen());
            }
        }
    }

    pub(crate) fn ensure_contains(&self, state: State) -> Result<()> {
        if self.contains(state) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                row: state.row,
                col: state.col,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Converts a scalar for error reporting; unrepresentable values become NaN.
pub(crate) fn lossy_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
