use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::fmt;

use super::State;

/// One of the four compass moves available in every non-terminal cell.
///
/// The declaration order is significant: [`Action::ALL`] is the order in which
/// the solver evaluates actions, and the first action to reach the maximum
/// Q-value wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Canonical enumeration order, also used for tie-breaking.
    pub const ALL: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

    /// `(row, col)` offset produced by the action.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Action::Up => (-1, 0),
            Action::Down => (1, 0),
            Action::Left => (0, -1),
            Action::Right => (0, 1),
        }
    }

    /// The two right-angle alternatives the agent may drift into.
    pub const fn perpendicular(self) -> [Action; 2] {
        match self {
            Action::Up | Action::Down => [Action::Left, Action::Right],
            Action::Left | Action::Right => [Action::Up, Action::Down],
        }
    }

    pub const fn opposite(self) -> Action {
        match self {
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Action::Up => '↑',
            Action::Down => '↓',
            Action::Left => '←',
            Action::Right => '→',
        }
    }

    /// Applies the move to `state` on a `width` x `height` grid.
    ///
    /// Returns `None` when the move would leave the grid.
    pub fn apply(self, state: State, width: usize, height: usize) -> Option<State> {
        let (dr, dc) = self.delta();
        let row = state.row.checked_add_signed(dr)?;
        let col = state.col.checked_add_signed(dc)?;
        (row < height && col < width).then_some(State { row, col })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Distribution<Action> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Action {
        Action::ALL[rng.gen_range(0..Action::ALL.len())]
    }
}
