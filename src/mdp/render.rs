//! Plain-text views of the reward, utility and policy grids.

use ndarray::ArrayView2;
use num_traits::Float;
use std::fmt::{self, Debug, Display};

use super::{Action, GridWorld};

/// Symbol printed for the terminal cell, which has no action.
pub const NO_OP: char = '*';

fn format_grid<A>(grid: ArrayView2<'_, A>, mut cell: impl FnMut(&A) -> String) -> String {
    grid.rows()
        .into_iter()
        .map(|row| row.iter().map(&mut cell).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn reward_grid<T>(world: &GridWorld<T>) -> String
where
    T: Float + Debug + Display,
{
    format_grid(world.rewards(), |r| r.to_string())
}

/// Utilities with `precision` digits after the decimal point.
pub fn utility_grid<T>(world: &GridWorld<T>, precision: usize) -> String
where
    T: Float + Debug + Display,
{
    format_grid(world.utilities(), |u| format!("{:.*}", precision, u))
}

pub fn policy_grid<T>(world: &GridWorld<T>) -> String
where
    T: Float + Debug,
{
    format_grid(world.policy(), |a: &Option<Action>| match a {
        Some(action) => action.to_string(),
        None => NO_OP.to_string(),
    })
}

impl<T> Display for GridWorld<T>
where
    T: Float + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        writeln!(f, "Rewards")?;
        writeln!(f, "{}", reward_grid(self))?;
        writeln!(f, "Utilities")?;
        writeln!(f, "{}", utility_grid(self, precision))?;
        writeln!(f, "Policy")?;
        write!(f, "{}", policy_grid(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reward_grid_layout() {
        let world = GridWorld::new(3, 2, -1.0, -100.0, 10.0).unwrap();
        assert_eq!(reward_grid(&world), "-100 -1 10\n-1 -1 -1");
    }

    #[test]
    fn test_policy_grid_marks_terminal() {
        let world = GridWorld::new(3, 2, -1.0, 0.0, 10.0).unwrap();
        assert_eq!(policy_grid(&world), "↑ ↑ *\n↑ ↑ ↑");
    }

    #[test]
    fn test_utility_grid_precision() {
        let mut world = GridWorld::new(2, 1, -1.0, -1.0, 10.0).unwrap();
        world.sweep();
        assert_eq!(utility_grid(&world, 2), "7.80 10.00");
    }

    #[test]
    fn test_display_includes_all_grids() {
        let world = GridWorld::new(2, 1, -1.0, -1.0, 10.0).unwrap();
        let rendered = format!("{:.1}", world);
        assert_eq!(
            rendered,
            "Rewards\n-1 10\nUtilities\n0.0 0.0\nPolicy\n↑ *"
        );
    }
}
