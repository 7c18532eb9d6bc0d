//! 图模型模块
//!
//! 邻接表表示的无向简单图，供分区、传播、连通分量和修复模块共享。
//!
//! 迭代顺序是确定的：节点按 NodeId 升序，邻居按插入顺序。
//! 所有启发式选择（最大度节点、重启节点、种子抽样）都依赖这一点保证可复现。

use std::collections::{BTreeMap, BTreeSet};

use crate::core::error::{PlanarError, PlanarResult};

/// 节点标识
pub type NodeId = usize;

/// 邻接表图
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    /// 创建空图
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建只包含给定孤立节点的图
    pub fn with_nodes<I: IntoIterator<Item = NodeId>>(nodes: I) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// 从边列表构建图，忽略自环并去重
    pub fn from_edges<I: IntoIterator<Item = (NodeId, NodeId)>>(edges: I) -> Self {
        let mut graph = Self::new();
        for (a, b) in edges {
            if a != b {
                graph.add_edge(a, b);
            }
        }
        graph.dedup();
        graph
    }

    /// 添加节点
    ///
    /// 节点已存在时不会清空它的邻居列表
    pub fn add_node(&mut self, node: NodeId) {
        self.adjacency.entry(node).or_default();
    }

    /// 添加无向边，端点不存在时自动插入
    ///
    /// 不做去重，调用方需要自行调用 [`Graph::dedup`]
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        self.adjacency.entry(a).or_default().push(b);
        self.adjacency.entry(b).or_default().push(a);
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// 获取节点的邻居列表
    pub fn neighbors(&self, node: NodeId) -> PlanarResult<&[NodeId]> {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .ok_or(PlanarError::UnknownNode(node))
    }

    /// 节点的度数（邻居列表长度）
    pub fn degree(&self, node: NodeId) -> PlanarResult<usize> {
        self.neighbors(node).map(<[NodeId]>::len)
    }

    /// 检查 a 的邻居列表中是否包含 b
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency
            .get(&a)
            .map(|adjs| adjs.contains(&b))
            .unwrap_or(false)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// 边数：所有邻居列表长度之和除以二
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// 按升序遍历所有节点
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// 按节点升序遍历 (节点, 邻居列表)
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[NodeId])> + '_ {
        self.adjacency
            .iter()
            .map(|(node, adjs)| (*node, adjs.as_slice()))
    }

    /// 每条无向边只输出一次，较小的端点在前
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut ledger = BTreeSet::new();
        for (node, adjs) in self.iter() {
            for &adj in adjs {
                ledger.insert((node.min(adj), node.max(adj)));
            }
        }
        ledger.into_iter().collect()
    }

    /// 对每个邻居列表排序并去重
    pub fn dedup(&mut self) {
        for adjs in self.adjacency.values_mut() {
            adjs.sort_unstable();
            adjs.dedup();
        }
    }

    /// 返回第一个（按升序）度数严格最大的节点，空图返回 None
    pub fn max_degree_node(&self) -> Option<NodeId> {
        let mut best: Option<(NodeId, usize)> = None;
        for (node, adjs) in self.iter() {
            match best {
                Some((_, max_deg)) if adjs.len() <= max_deg => {}
                _ => best = Some((node, adjs.len())),
            }
        }
        best.map(|(node, _)| node)
    }

    /// 检查当前图的每条边是否都存在于 other 中
    pub fn is_subgraph_of(&self, other: &Graph) -> bool {
        self.iter().all(|(node, adjs)| {
            other.contains_node(node) && adjs.iter().all(|&adj| other.has_edge(node, adj))
        })
    }
}
