//! 连通分量算法模块
//!
//! 基于广度优先搜索的连通分量发现，供驱动流程和分量修复共用

use std::collections::{HashSet, VecDeque};

use crate::core::{Graph, NodeId, PlanarResult};

/// 连通分量算法结构体
pub struct Connectivity;

impl Connectivity {
    /// 从 start 出发做 BFS，返回可达节点（按发现顺序）
    pub fn find_component(start: NodeId, graph: &Graph) -> PlanarResult<Vec<NodeId>> {
        let mut component = Vec::new();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut queue: VecDeque<NodeId> = VecDeque::new();

        // 起点不存在时直接报错
        graph.neighbors(start)?;

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            component.push(current);
            for &adj in graph.neighbors(current)? {
                if visited.insert(adj) {
                    queue.push_back(adj);
                }
            }
        }

        Ok(component)
    }

    /// 查找图中的所有连通分量
    ///
    /// 按节点升序挑选尚未归属的节点作为起点，保证发现顺序确定
    pub fn all_components(graph: &Graph) -> PlanarResult<Vec<Vec<NodeId>>> {
        let mut components = Vec::new();
        let mut assigned: HashSet<NodeId> = HashSet::with_capacity(graph.node_count());

        for node in graph.nodes() {
            if assigned.contains(&node) {
                continue;
            }
            let component = Self::find_component(node, graph)?;
            assigned.extend(component.iter().copied());
            components.push(component);
        }

        Ok(components)
    }

    /// 检查图是否连通（空图视为连通）
    pub fn is_connected(graph: &Graph) -> PlanarResult<bool> {
        match graph.nodes().next() {
            Some(start) => Ok(Self::find_component(start, graph)?.len() == graph.node_count()),
            None => Ok(true),
        }
    }
}
