use crate::mdp::{Action, GridWorld, State, ValueIterationConfig};
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

const CORNER_REWARDS: [f64; 4] = [-100.0, -3.0, 0.0, 3.0];

fn solved(corner_reward: f64) -> GridWorld<f64> {
    let mut world = GridWorld::new(3, 3, -1.0, corner_reward, 10.0).unwrap();
    world.value_iterate(0.001).unwrap();
    world
}

#[test]
fn test_hazardous_corner_utilities() {
    let world = solved(-100.0);

    let expected = [
        [-6.195063, 12.671391, 10.0],
        [-1.076812, 4.756469, 12.671391],
        [-0.651696, 1.086973, 4.339893],
    ];
    for state in world.states() {
        assert_abs_diff_eq!(
            world.utility(state),
            expected[state.row][state.col],
            epsilon = 1e-5
        );
    }
}

#[test]
fn test_hazardous_corner_policy() {
    use Action::*;

    let world = solved(-100.0);
    let expected = [
        [Some(Right), Some(Right), None],
        [Some(Down), Some(Right), Some(Up)],
        [Some(Right), Some(Up), Some(Up)],
    ];
    for state in world.states() {
        assert_eq!(world.action(state), expected[state.row][state.col]);
    }
}

#[test]
fn test_terminal_is_fixed_in_every_configuration() {
    for corner in CORNER_REWARDS {
        let world = solved(corner);
        let terminal = world.terminal();
        assert_eq!(terminal, State::new(0, 2));
        assert_eq!(world.utility(terminal), 10.0);
        assert_eq!(world.action(terminal), None);
    }
}

#[test]
fn test_greedy_paths_reach_terminal() {
    let world = solved(-100.0);
    let terminal = world.terminal();

    for start in world.states() {
        let path = world.greedy_path(start, 9).unwrap();
        assert_eq!(path.last(), Some(&terminal), "no route home from {}", start);

        let steps = path.len() - 1;
        if start == State::new(1, 0) {
            // Moving up or right risks slipping into the -100 corner, so the
            // policy detours through the bottom row.
            assert_eq!(steps, 5);
        } else {
            assert!(steps <= start.manhattan_distance(terminal));
        }
    }
}

#[test]
fn test_corner_reward_sensitivity_is_monotonic() {
    let corner = State::new(0, 0);
    let utilities: Vec<f64> = CORNER_REWARDS
        .iter()
        .map(|&r| solved(r).utility(corner))
        .collect();

    for pair in utilities.windows(2) {
        assert!(pair[0] < pair[1], "utilities not increasing: {:?}", utilities);
    }
}

#[test]
fn test_rewarding_corner_becomes_absorbing() {
    // A +3 corner is worth more than walking to the terminal, so the agent
    // pushes into the wall to stay there.
    let world = solved(3.0);
    assert_eq!(world.action(State::new(0, 0)), Some(Action::Up));
    assert_eq!(
        world.greedy_path(State::new(0, 0), 9).unwrap(),
        vec![State::new(0, 0)]
    );
}

#[test]
fn test_deltas_shrink_below_threshold() {
    let mut world = GridWorld::new(3, 3, -1.0, -100.0, 10.0).unwrap();
    let report = world
        .value_iterate_with(&ValueIterationConfig::default())
        .unwrap();

    assert_eq!(report.sweeps, 11);
    assert_eq!(report.deltas.len(), report.sweeps);
    assert!(report.deltas.iter().all(|&d| d >= 0.0));
    assert!(report.deltas[..report.sweeps - 1]
        .iter()
        .all(|&d| d > report.threshold));
    assert!(report.final_delta().unwrap() <= report.threshold);
}

#[test]
fn test_converged_policy_is_a_fixed_point() {
    for corner in CORNER_REWARDS {
        let mut world = solved(corner);
        let policy = world.policy().to_owned();

        let delta = world.sweep();

        assert_eq!(world.policy(), policy.view());
        assert!(delta < 0.001);
    }
}

#[test]
fn test_initial_policy_does_not_change_result() {
    let baseline = solved(-3.0);

    for seed in [1, 2, 3] {
        let mut world = GridWorld::new(3, 3, -1.0, -3.0, 10.0).unwrap();
        world.randomize_policy(&mut StdRng::seed_from_u64(seed));
        world.value_iterate(0.001).unwrap();

        assert_eq!(world.policy(), baseline.policy());
        assert_eq!(world.utilities(), baseline.utilities());
    }
}

#[test]
fn test_larger_grid_converges() {
    let mut world = GridWorld::<f64>::new(6, 5, -0.04, -0.04, 1.0).unwrap();
    let report = world
        .value_iterate_with(&ValueIterationConfig {
            epsilon: 1e-6,
            max_sweeps: Some(1_000),
        })
        .unwrap();

    assert!(report.sweeps > 1);
    assert_eq!(world.action(world.terminal()), None);
    for state in world.states().filter(|&s| !world.is_terminal(s)) {
        assert!(world.action(state).is_some());
        assert!(world.utility(state).is_finite());
    }
}
