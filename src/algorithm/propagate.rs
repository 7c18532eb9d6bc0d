//! 图元传播模块
//!
//! 从起始节点出发，以深度优先的方式在分区内贪心匹配图元，
//! 输出被保留的边。每条输出边都来自传入的分区。

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use crate::algorithm::gadget::{GadgetKind, GadgetMatch, GADGETS};
use crate::core::{Graph, NodeId, PlanarError, PlanarResult};

/// 扁平存储的边缓冲区，相邻两个元素构成一条无向边
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeBuffer {
    endpoints: Vec<NodeId>,
}

impl EdgeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, a: NodeId, b: NodeId) {
        self.endpoints.push(a);
        self.endpoints.push(b);
    }

    pub fn len(&self) -> usize {
        self.endpoints.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.endpoints.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

/// 传播状态：未使用节点集合、待扩展栈、已保留的边
#[derive(Debug)]
struct PropagationState {
    unused: BTreeSet<NodeId>,
    /// 作为栈使用：从前端压入、从前端弹出
    frontier: VecDeque<NodeId>,
    edges: EdgeBuffer,
    matched: BTreeMap<GadgetKind, usize>,
}

impl PropagationState {
    /// 原子地应用一次匹配：记录边，移出未使用集合，压入待扩展栈
    fn apply(&mut self, found: &GadgetMatch) {
        for (a, b) in found.edges() {
            self.edges.push(a, b);
        }
        for &node in found.participants() {
            self.unused.remove(&node);
            self.frontier.push_front(node);
        }
        *self.matched.entry(found.kind()).or_insert(0) += 1;
    }
}

/// 图元传播器
pub struct Propagator<'a> {
    partition: &'a Graph,
}

impl<'a> Propagator<'a> {
    pub fn new(partition: &'a Graph) -> Self {
        Self { partition }
    }

    /// 选择分区中度数最大的节点作为起点
    pub fn default_start(&self, partition_index: usize) -> PlanarResult<NodeId> {
        self.partition
            .max_degree_node()
            .ok_or(PlanarError::EmptyPartition(partition_index))
    }

    /// 从 start 出发传播图元，直到分区内所有节点都被使用
    ///
    /// 当待扩展栈为空而仍有未使用节点时（分区内部不连通），
    /// 取编号最小的未使用节点重新开始。
    pub fn propagate_from(&self, start: NodeId) -> PlanarResult<EdgeBuffer> {
        if !self.partition.contains_node(start) {
            return Err(PlanarError::UnknownNode(start));
        }

        let mut unused: BTreeSet<NodeId> = self.partition.nodes().collect();
        unused.remove(&start);

        let mut state = PropagationState {
            unused,
            frontier: VecDeque::from([start]),
            edges: EdgeBuffer::new(),
            matched: BTreeMap::new(),
        };

        while !state.unused.is_empty() {
            let x = match state.frontier.pop_front() {
                Some(x) => x,
                None => match state.unused.pop_first() {
                    Some(restart) => restart,
                    None => break,
                },
            };
            self.expand(x, &mut state)?;
        }

        debug!(
            "传播完成: 起点 {}, {} 个节点, 保留 {} 条边, 图元统计 {:?}",
            start,
            self.partition.node_count(),
            state.edges.len(),
            state.matched
        );

        Ok(state.edges)
    }

    /// 依优先级对 x 运行全部五个图元匹配器
    fn expand(&self, x: NodeId, state: &mut PropagationState) -> PlanarResult<()> {
        let adjs = self.partition.neighbors(x)?;
        for gadget in GADGETS.iter() {
            for &y in adjs {
                if !state.unused.contains(&y) {
                    continue;
                }
                if let Some(found) = gadget.find_match(self.partition, x, y, &state.unused)? {
                    state.apply(&found);
                }
            }
        }
        Ok(())
    }
}
