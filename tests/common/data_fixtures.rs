//! 测试图生成模块
//!
//! 提供各种测试图的生成函数

use planarity_filter::core::{Graph, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 环 1-2-...-n-1
pub fn cycle(n: usize) -> Graph {
    let mut edges: Vec<(NodeId, NodeId)> = (1..n).map(|a| (a, a + 1)).collect();
    edges.push((n, 1));
    Graph::from_edges(edges)
}

/// 节点为 1..=n 的完全图
pub fn complete(n: usize) -> Graph {
    let mut edges = Vec::new();
    for a in 1..=n {
        for b in (a + 1)..=n {
            edges.push((a, b));
        }
    }
    Graph::from_edges(edges)
}

/// 两个互不相连的三角形 {1, 2, 3} 和 {4, 5, 6}
pub fn two_triangles() -> Graph {
    Graph::from_edges([(1, 2), (2, 3), (3, 1), (4, 5), (5, 6), (6, 4)])
}

/// width x height 的网格，每个格子加一条对角线（三角网格）
pub fn triangulated_grid(width: usize, height: usize) -> Graph {
    let mut edges = Vec::new();
    for row in 0..height {
        for col in 0..width {
            let node = row * width + col;
            if col + 1 < width {
                edges.push((node, node + 1));
            }
            if row + 1 < height {
                edges.push((node, node + width));
            }
            if col + 1 < width && row + 1 < height {
                edges.push((node, node + width + 1));
            }
        }
    }
    Graph::from_edges(edges)
}

/// 固定种子的 G(n, p) 随机图
pub fn random_graph(n: usize, p: f64, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_nodes(0..n);
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(p) {
                graph.add_edge(a, b);
            }
        }
    }
    graph.dedup();
    graph
}

/// 固定种子的连通随机图：随机生成树加随机边
pub fn random_connected_graph(n: usize, extra_edges: usize, seed: u64) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(n + extra_edges);
    for node in 1..n {
        edges.push((node, rng.gen_range(0..node)));
    }
    for _ in 0..extra_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        edges.push((a, b));
    }
    Graph::from_edges(edges)
}
