//! 平面性判定模块
//!
//! 核心算法本身从不调用平面性判定；它只在驱动流程运行前（已经是平面图则跳过）
//! 和运行后（验证启发式结果）由外层调用。

use std::collections::HashMap;

use rustworkx_core::petgraph::graph::{NodeIndex, UnGraph};
use rustworkx_core::planar::is_planar;

use crate::core::{Graph, NodeId};

/// 平面性判定接口
pub trait PlanarityOracle {
    fn is_planar(&self, graph: &Graph) -> bool;
}

/// 基于 left-right 平面性测试的判定器
#[derive(Debug, Default, Clone, Copy)]
pub struct LrPlanarityOracle;

impl LrPlanarityOracle {
    pub fn new() -> Self {
        Self
    }

    /// 欧拉公式给出的必要条件：简单平面图满足 e <= 3n - 6（n >= 3）
    fn exceeds_euler_bound(nodes: usize, edges: usize) -> bool {
        nodes >= 3 && edges > 3 * nodes - 6
    }

    fn to_petgraph(graph: &Graph) -> UnGraph<NodeId, ()> {
        let edges = graph.edges();
        let mut converted = UnGraph::with_capacity(graph.node_count(), edges.len());
        let mut index: HashMap<NodeId, NodeIndex> = HashMap::with_capacity(graph.node_count());

        for node in graph.nodes() {
            index.insert(node, converted.add_node(node));
        }
        for (a, b) in edges {
            if let (Some(&ia), Some(&ib)) = (index.get(&a), index.get(&b)) {
                converted.add_edge(ia, ib, ());
            }
        }
        converted
    }
}

impl PlanarityOracle for LrPlanarityOracle {
    fn is_planar(&self, graph: &Graph) -> bool {
        let edges = graph.edges();
        if Self::exceeds_euler_bound(graph.node_count(), edges.len()) {
            return false;
        }
        is_planar(&Self::to_petgraph(graph))
    }
}
