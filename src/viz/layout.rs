//! Force-directed 2-D layout for small induced subgraphs.
//!
//! Fruchterman-Reingold style: seeded random placement, pairwise repulsion,
//! spring attraction along edges, and a cooling temperature that caps how
//! far a node may move per iteration. Coordinates are recentered and
//! rescaled to [-1, 1] at the end. Deterministic for a fixed seed.

use rand::Rng;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use std::collections::HashMap;

const ITERATIONS: usize = 50;
const INITIAL_TEMPERATURE: f64 = 0.1;

/// A planar coordinate assigned to a node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Lay out `nodes` in the plane, one point per node in input order.
///
/// `edges` refer to the same node indices as `nodes`; self-loops exert no
/// force. The subgraphs served here are small (top-N plus neighbors), so
/// repulsion is computed over all pairs.
pub fn force_directed(nodes: &[u32], edges: &[(u32, u32)], seed: u64) -> Vec<Point> {
    let n = nodes.len();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![Point { x: 0.0, y: 0.0 }];
    }

    let local: HashMap<u32, usize> = nodes.iter().enumerate().map(|(i, &v)| (v, i)).collect();

    let mut rng = XorShiftRng::seed_from_u64(seed);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.gen::<f64>(), rng.gen::<f64>()))
        .collect();

    // Optimal pairwise distance for a unit-area canvas
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = INITIAL_TEMPERATURE;
    let cooling = temperature / (ITERATIONS as f64 + 1.0);

    for _ in 0..ITERATIONS {
        let mut disp = vec![(0.0_f64, 0.0_f64); n];

        // Repulsion between every pair
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / dist;
                let fx = dx / dist * force;
                let fy = dy / dist * force;
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        // Attraction along edges
        for &(u, v) in edges {
            if u == v {
                continue;
            }
            let (i, j) = (local[&u], local[&v]);
            let dx = pos[i].0 - pos[j].0;
            let dy = pos[i].1 - pos[j].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = dist * dist / k;
            let fx = dx / dist * force;
            let fy = dy / dist * force;
            disp[i].0 -= fx;
            disp[i].1 -= fy;
            disp[j].0 += fx;
            disp[j].1 += fy;
        }

        // Apply displacements, capped by the current temperature
        for i in 0..n {
            let (dx, dy) = disp[i];
            let len = (dx * dx + dy * dy).sqrt().max(1e-9);
            let step = len.min(temperature);
            pos[i].0 += dx / len * step;
            pos[i].1 += dy / len * step;
        }

        temperature -= cooling;
    }

    rescale(&mut pos);
    pos.into_iter().map(|(x, y)| Point { x, y }).collect()
}

/// Recenter on the origin and scale the largest coordinate to 1.
fn rescale(pos: &mut [(f64, f64)]) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;

    let mut max_abs = 0.0_f64;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        max_abs = max_abs.max(p.0.abs()).max(p.1.abs());
    }

    if max_abs > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= max_abs;
            p.1 /= max_abs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_per_node() {
        let nodes = [0, 1, 2, 3];
        let edges = [(0, 1), (1, 2), (2, 3)];
        let points = force_directed(&nodes, &edges, 42);

        assert_eq!(points.len(), nodes.len());
    }

    #[test]
    fn coordinates_are_bounded() {
        let nodes = [0, 1, 2, 3, 4];
        let edges = [(0, 1), (0, 2), (0, 3), (0, 4)];
        let points = force_directed(&nodes, &edges, 42);

        for p in &points {
            assert!(p.x.abs() <= 1.0 + 1e-9);
            assert!(p.y.abs() <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let nodes = [0, 1, 2];
        let edges = [(0, 1), (1, 2)];
        let first = force_directed(&nodes, &edges, 42);
        let second = force_directed(&nodes, &edges, 42);

        assert_eq!(first, second);
    }

    #[test]
    fn connected_nodes_sit_closer_than_strangers() {
        // Two pairs far apart in the graph
        let nodes = [0, 1, 2, 3];
        let edges = [(0, 1), (2, 3)];
        let points = force_directed(&nodes, &edges, 42);

        let d = |a: &Point, b: &Point| ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
        let linked = d(&points[0], &points[1]);
        let unlinked = d(&points[0], &points[2]).min(d(&points[0], &points[3]));
        assert!(linked < unlinked, "linked={linked}, unlinked={unlinked}");
    }

    #[test]
    fn handles_self_loops_and_singletons() {
        assert!(force_directed(&[], &[], 42).is_empty());
        assert_eq!(force_directed(&[7], &[(7, 7)], 42), vec![Point { x: 0.0, y: 0.0 }]);
    }
}
