//! Small problems shared by the unit tests.

use crate::problem::OptProblem;

/// Routes search events to the test output, filtered by `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Explicit directed graph: every state has a fixed value, every edge is an
/// action whose target is the successor.
#[derive(Debug, Clone)]
pub(crate) struct Chain {
    pub values: Vec<f64>,
    pub edges: Vec<Vec<usize>>,
    pub start: usize,
    /// Starts handed out by successive `random_reset` calls, cyclically.
    pub restart_points: Vec<usize>,
    pub resets: usize,
}

impl Chain {
    pub fn new(values: Vec<f64>, edges: Vec<Vec<usize>>) -> Self {
        Self {
            values,
            edges,
            start: 0,
            restart_points: Vec::new(),
            resets: 0,
        }
    }

    /// A -(+5)-> B -(+3)-> C, C -(-8)-> A.
    pub fn three_state() -> Self {
        Self::new(vec![10.0, 15.0, 18.0], vec![vec![1], vec![2], vec![0]])
    }

    /// 0 -> 1 -> 2 -> 3 -> 0 with strictly decreasing values from 0.
    pub fn four_cycle() -> Self {
        Self::new(
            vec![10.0, 9.0, 8.0, 7.0],
            vec![vec![1], vec![2], vec![3], vec![0]],
        )
    }

    /// From 0, states 1 and 2 tie for the best improvement.
    pub fn tied_star() -> Self {
        Self::new(
            vec![0.0, 5.0, 5.0, 1.0],
            vec![vec![1, 2, 3], vec![0], vec![0], vec![0]],
        )
    }
}

impl OptProblem for Chain {
    type State = usize;
    type Action = usize;

    fn init(&self) -> usize {
        self.start
    }

    fn obj_val(&self, state: &usize) -> f64 {
        self.values[*state]
    }

    fn actions(&self, state: &usize) -> Vec<usize> {
        self.edges[*state].clone()
    }

    fn result(&self, _state: &usize, action: &usize) -> usize {
        *action
    }

    fn random_reset(&mut self) {
        if !self.restart_points.is_empty() {
            self.start = self.restart_points[self.resets % self.restart_points.len()];
        }
        self.resets += 1;
    }
}

/// Maximize `-(x - 5)^2` over the integers with unit steps.
#[derive(Debug, Clone)]
pub(crate) struct Quadratic {
    pub start: i64,
}

impl OptProblem for Quadratic {
    type State = i64;
    type Action = i64;

    fn init(&self) -> i64 {
        self.start
    }

    fn obj_val(&self, &x: &i64) -> f64 {
        let d = x as f64 - 5.0;
        -(d * d)
    }

    fn actions(&self, _x: &i64) -> Vec<i64> {
        vec![-1, 1]
    }

    fn result(&self, x: &i64, step: &i64) -> i64 {
        x + step
    }

    fn random_reset(&mut self) {
        self.start = -self.start - 7;
    }
}

/// Unbounded ascent: `x + 1` always improves by one.
#[derive(Debug, Clone)]
pub(crate) struct Staircase {
    pub start: i64,
}

impl OptProblem for Staircase {
    type State = i64;
    type Action = i64;

    fn init(&self) -> i64 {
        self.start
    }

    fn obj_val(&self, &x: &i64) -> f64 {
        x as f64
    }

    fn actions(&self, _x: &i64) -> Vec<i64> {
        vec![-1, 1]
    }

    fn result(&self, x: &i64, step: &i64) -> i64 {
        x + step
    }

    fn random_reset(&mut self) {
        self.start += 1000;
    }
}

/// Sort a permutation by swaps; value is minus the number of misplaced
/// elements.
#[derive(Debug, Clone)]
pub(crate) struct PermSort {
    pub start: Vec<usize>,
}

impl PermSort {
    pub fn reversed(n: usize) -> Self {
        Self {
            start: (0..n).rev().collect(),
        }
    }
}

impl OptProblem for PermSort {
    type State = Vec<usize>;
    type Action = (usize, usize);

    fn init(&self) -> Vec<usize> {
        self.start.clone()
    }

    fn obj_val(&self, perm: &Vec<usize>) -> f64 {
        -(perm.iter().enumerate().filter(|&(i, &v)| i != v).count() as f64)
    }

    fn actions(&self, perm: &Vec<usize>) -> Vec<(usize, usize)> {
        let n = perm.len();
        (0..n)
            .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
            .collect()
    }

    fn result(&self, perm: &Vec<usize>, &(i, j): &(usize, usize)) -> Vec<usize> {
        let mut next = perm.clone();
        next.swap(i, j);
        next
    }

    fn random_reset(&mut self) {
        self.start.rotate_left(1);
    }
}

/// Symmetric Euclidean TSP with 2-opt moves; value is minus the tour length.
#[derive(Debug, Clone)]
pub(crate) struct Tsp {
    pub cities: Vec<(f64, f64)>,
    pub start: Vec<usize>,
}

impl Tsp {
    /// Cities on a jittered grid, visited in a scrambled order.
    pub fn grid(side: usize) -> Self {
        let n = side * side;
        let cities = (0..n)
            .map(|k| {
                let (r, c) = ((k / side) as f64, (k % side) as f64);
                (c * 10.0 + (k % 3) as f64, r * 10.0 + (k % 5) as f64)
            })
            .collect();
        let start = (0..n).map(|k| (k * 7) % n).collect();
        Self { cities, start }
    }

    fn dist(&self, a: usize, b: usize) -> f64 {
        let (xa, ya) = self.cities[a];
        let (xb, yb) = self.cities[b];
        ((xa - xb).powi(2) + (ya - yb).powi(2)).sqrt()
    }
}

impl OptProblem for Tsp {
    type State = Vec<usize>;
    type Action = (usize, usize);

    fn init(&self) -> Vec<usize> {
        self.start.clone()
    }

    fn obj_val(&self, tour: &Vec<usize>) -> f64 {
        let n = tour.len();
        -(0..n).map(|k| self.dist(tour[k], tour[(k + 1) % n])).sum::<f64>()
    }

    fn actions(&self, tour: &Vec<usize>) -> Vec<(usize, usize)> {
        let n = tour.len();
        (0..n.saturating_sub(2))
            .flat_map(|i| ((i + 2)..n).map(move |j| (i, j)))
            .filter(|&(i, j)| !(i == 0 && j == n - 1))
            .collect()
    }

    fn result(&self, tour: &Vec<usize>, &(i, j): &(usize, usize)) -> Vec<usize> {
        let mut next = tour.clone();
        next[i + 1..=j].reverse();
        next
    }

    fn val_diff(&self, tour: &Vec<usize>) -> Vec<((usize, usize), f64)> {
        let n = tour.len();
        self.actions(tour)
            .into_iter()
            .map(|(i, j)| {
                let (a, b) = (tour[i], tour[i + 1]);
                let (c, d) = (tour[j], tour[(j + 1) % n]);
                let gain = self.dist(a, b) + self.dist(c, d) - self.dist(a, c) - self.dist(b, d);
                ((i, j), gain)
            })
            .collect()
    }

    fn random_reset(&mut self) {
        let n = self.start.len();
        let shift = n / 3 + 1;
        self.start.rotate_left(shift % n.max(1));
        self.start.swap(0, n / 2);
    }
}
