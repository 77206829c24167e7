use poisson::domain::*;
use poisson::init;
use poisson::solver::*;
use poisson::util::indexing::grid_index;

use float_cmp::assert_approx_eq;

/// Plain Jacobi sweep over explicit ghost cells:
/// an out of range neighbor takes the value of its mirror image.
fn ghost_cell_sweep(n: usize, delta: f32, source: &[f32], current: &[f32]) -> Vec<f32> {
    let mirror = |c: i64| -> usize {
        if c < 0 {
            1
        } else if c >= n as i64 {
            n - 2
        } else {
            c as usize
        }
    };
    let mut next = vec![0.0; n * n * n];
    for i in 0..n as i64 {
        for j in 0..n as i64 {
            for k in 0..n as i64 {
                let mut v = 0.0;
                for (di, dj, dk) in [
                    (-1, 0, 0),
                    (1, 0, 0),
                    (0, -1, 0),
                    (0, 1, 0),
                    (0, 0, -1),
                    (0, 0, 1),
                ] {
                    let l = grid_index(mirror(i + di), mirror(j + dj), mirror(k + dk), n);
                    v += current[l];
                }
                let l = grid_index(i as usize, j as usize, k as usize, n);
                v -= delta * delta * source[l];
                next[l] = v / 6.0;
            }
        }
    }
    next
}

fn compare(n: usize, iterations: usize, delta: f32, source: &OwnedDomain<3>) {
    let mut reference = vec![0.0; n * n * n];
    for _ in 0..iterations {
        reference = ghost_cell_sweep(n, delta, source.buffer(), &reference);
    }

    let config = SolverConfig::new(n)
        .with_iterations(iterations)
        .with_threads(4)
        .with_delta(delta);
    let result = JacobiSolver::new(config, source).unwrap().solve();

    for (r, e) in result.buffer().iter().zip(reference.iter()) {
        assert_approx_eq!(f32, *r, *e, epsilon = 0.0001);
    }
}

#[test]
fn point_source_compare() {
    for n in [3, 5, 7] {
        let source = init::point_source(n).unwrap();
        compare(n, 40, 1.0, &source);
    }
}

#[test]
fn random_source_compare() {
    let n = 11;
    let source = init::rand_source(n, 2024).unwrap();
    compare(n, 30, 0.5, &source);
}

#[test]
fn sweep_by_sweep_compare() {
    let n = 5;
    let source = init::rand_source(n, 99).unwrap();
    let config = SolverConfig::new(n).with_iterations(0).with_threads(2);
    let mut solver = JacobiSolver::new(config, &source).unwrap();
    let mut reference = vec![0.0; n * n * n];
    for _ in 0..10 {
        solver.sweep();
        reference = ghost_cell_sweep(n, 1.0, source.buffer(), &reference);
        for (r, e) in solver.current().buffer().iter().zip(reference.iter()) {
            assert_approx_eq!(f32, *r, *e, epsilon = 0.0001);
        }
    }
}
