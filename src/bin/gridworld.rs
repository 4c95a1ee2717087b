//! Solves the reference 3x3 grid world for several corner rewards and prints
//! the grids before and after value iteration.
//!
//! Usage: `gridworld [CORNER_REWARD ...]` (defaults to -100 -3 0 3).

use gridmdp::mdp::render;
use gridmdp::{GridConfig, GridWorld, ValueIterationConfig};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::error::Error;

const DEFAULT_CORNER_REWARDS: [f64; 4] = [-100.0, -3.0, 0.0, 3.0];
const POLICY_SEED: u64 = 2024;

fn main() -> Result<(), Box<dyn Error>> {
    let corner_rewards = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    let corner_rewards = if corner_rewards.is_empty() {
        DEFAULT_CORNER_REWARDS.to_vec()
    } else {
        corner_rewards
    };

    let solver = ValueIterationConfig::default();

    for (i, &corner_reward) in corner_rewards.iter().enumerate() {
        let config = GridConfig {
            corner_reward,
            ..GridConfig::default()
        };

        println!("MDP #{}", i + 1);
        println!("Default reward per state: {}", config.default_reward);
        println!("Corner reward (top left): {}", config.corner_reward);
        println!("Terminal reward: {}", config.terminal_reward);

        let mut world = GridWorld::from_config(config)?;
        let mut rng = ChaCha8Rng::seed_from_u64(POLICY_SEED + i as u64);
        world.randomize_policy(&mut rng);

        println!("Reward grid");
        println!("{}", render::reward_grid(&world));
        println!("Initial utilities");
        println!("{}", render::utility_grid(&world, 3));
        println!("Initial random policy");
        println!("{}", render::policy_grid(&world));

        let report = world.value_iterate_with(&solver)?;

        println!("After value iteration ({} sweeps)", report.sweeps);
        println!("Utilities");
        println!("{}", render::utility_grid(&world, 3));
        println!("Optimal policy");
        println!("{}", render::policy_grid(&world));
        println!("----------------------------------------");
    }

    Ok(())
}
