//! 图分区算法模块
//!
//! 将节点集合划分为 k 个大致均衡、以内部连接为主的子图，以便并行传播。
//!
//! 流程：
//! 1. 使用固定种子的随机数生成器无放回地抽取 k 个种子节点，每个种子独占一个分区
//! 2. 每个分区吸收种子尚未分配的直接邻居
//! 3. 每个分区从当前成员出发按层 BFS 扩展，直到吸收约 `剩余节点数 / k` 个节点或无路可走
//! 4. 剩余节点按轮询方式分配
//!
//! 节点加入分区时，会补上它与分区内已有节点之间的全部原图边，
//! 因此每个分区都是原图的节点诱导子图。分区之间的边会丢失，由分量修复阶段弥补。

use std::collections::{BTreeSet, HashSet, VecDeque};

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{Graph, NodeId, PlanarError, PlanarResult};

/// 默认随机种子，保证分区结果可复现
pub const DEFAULT_PARTITION_SEED: u64 = 42;

/// 图分区器
#[derive(Debug, Clone)]
pub struct Partitioner {
    seed: u64,
}

impl Default for Partitioner {
    fn default() -> Self {
        Self::new()
    }
}

impl Partitioner {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_PARTITION_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// 将图划分为 k 个分区
    ///
    /// # 参数
    /// - `graph`: 原始图
    /// - `k`: 分区数量，必须满足 `1 <= k <= 节点数`
    ///
    /// # 返回
    /// k 个节点互不相交、并集为全部节点的诱导子图
    pub fn partition(&self, graph: &Graph, k: usize) -> PlanarResult<Vec<Graph>> {
        if k == 0 || k > graph.node_count() {
            return Err(PlanarError::InvalidPartitionCount {
                requested: k,
                available: graph.node_count(),
            });
        }

        if k == 1 {
            return Ok(vec![graph.clone()]);
        }

        let mut unassigned: BTreeSet<NodeId> = graph.nodes().collect();
        let (mut partitions, seeds) = self.draw_seeds(graph, k, &mut unassigned);

        // 先加入种子的直接邻居
        for (partition, &seed) in partitions.iter_mut().zip(&seeds) {
            for &adj in graph.neighbors(seed)? {
                if unassigned.remove(&adj) {
                    Self::absorb(graph, partition, adj)?;
                }
            }
        }

        // 配额在扩展开始前只计算一次
        let quota = unassigned.len() / k;
        for partition in partitions.iter_mut() {
            Self::grow(graph, partition, &mut unassigned, quota)?;
        }

        // BFS 无法到达的节点（例如原图不连通）按轮询方式分配
        let leftovers: Vec<NodeId> = unassigned.into_iter().collect();
        if !leftovers.is_empty() {
            debug!("{} 个节点未被 BFS 覆盖，按轮询方式分配", leftovers.len());
        }
        for (idx, node) in leftovers.into_iter().enumerate() {
            Self::absorb(graph, &mut partitions[idx % k], node)?;
        }

        for (idx, partition) in partitions.iter().enumerate() {
            debug!(
                "分区 {}: {} 个节点, {} 条边",
                idx,
                partition.node_count(),
                partition.edge_count()
            );
        }

        Ok(partitions)
    }

    /// 无放回地均匀抽取 k 个种子节点，每个种子单独成为一个分区
    fn draw_seeds(
        &self,
        graph: &Graph,
        k: usize,
        unassigned: &mut BTreeSet<NodeId>,
    ) -> (Vec<Graph>, Vec<NodeId>) {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let nodes: Vec<NodeId> = graph.nodes().collect();

        let seeds: Vec<NodeId> = rand::seq::index::sample(&mut rng, nodes.len(), k)
            .into_iter()
            .map(|idx| nodes[idx])
            .collect();

        let partitions = seeds
            .iter()
            .map(|&seed| {
                unassigned.remove(&seed);
                Graph::with_nodes([seed])
            })
            .collect();

        (partitions, seeds)
    }

    /// 按层 BFS 扩展分区，直到吸收 quota 个节点或没有可扩展的节点
    ///
    /// 配额只在层与层之间检查，因此一个分区可能略微超出配额
    fn grow(
        graph: &Graph,
        partition: &mut Graph,
        unassigned: &mut BTreeSet<NodeId>,
        quota: usize,
    ) -> PlanarResult<()> {
        let mut queue: VecDeque<NodeId> = partition.nodes().collect();
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut added = 0;

        while !queue.is_empty() && added < quota {
            let layer_len = queue.len();
            for _ in 0..layer_len {
                let Some(current) = queue.pop_front() else {
                    break;
                };
                if !visited.insert(current) {
                    continue;
                }

                for &adj in graph.neighbors(current)? {
                    if unassigned.remove(&adj) {
                        Self::absorb(graph, partition, adj)?;
                        added += 1;
                        if !visited.contains(&adj) {
                            queue.push_back(adj);
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// 将节点加入分区，并补上它与分区内已有节点之间的原图边
    fn absorb(graph: &Graph, partition: &mut Graph, node: NodeId) -> PlanarResult<()> {
        partition.add_node(node);
        for &adj in graph.neighbors(node)? {
            if adj != node && partition.contains_node(adj) {
                partition.add_edge(node, adj);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: usize, height: usize) -> Graph {
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
            }
        }
        Graph::from_edges(edges)
    }

    fn assert_coverage(graph: &Graph, partitions: &[Graph]) {
        let mut seen = HashSet::new();
        for partition in partitions {
            for node in partition.nodes() {
                assert!(seen.insert(node), "节点 {} 出现在多个分区中", node);
            }
        }
        let all: HashSet<NodeId> = graph.nodes().collect();
        assert_eq!(seen, all);
    }

    #[test]
    fn test_single_partition_is_whole_graph() {
        let graph = grid(4, 4);
        let partitions = Partitioner::new().partition(&graph, 1).expect("k = 1");
        assert_eq!(partitions.len(), 1);
        assert_eq!(partitions[0], graph);
    }

    #[test]
    fn test_invalid_partition_count() {
        let graph = Graph::from_edges([(1, 2), (2, 3)]);
        assert_eq!(
            Partitioner::new().partition(&graph, 10),
            Err(PlanarError::InvalidPartitionCount {
                requested: 10,
                available: 3
            })
        );
        assert!(matches!(
            Partitioner::new().partition(&graph, 0),
            Err(PlanarError::InvalidPartitionCount { .. })
        ));
    }

    #[test]
    fn test_partitions_cover_all_nodes() {
        let graph = grid(6, 5);
        for k in 1..=graph.node_count() {
            let partitions = Partitioner::new().partition(&graph, k).expect("valid k");
            assert_eq!(partitions.len(), k);
            assert_coverage(&graph, &partitions);
        }
    }

    #[test]
    fn test_partitions_are_induced_subgraphs() {
        let graph = grid(5, 5);
        let mut partitions = Partitioner::new().partition(&graph, 4).expect("k = 4");
        for partition in partitions.iter_mut() {
            // 诱导子图中不会重复添加同一条边
            let raw_edges = partition.edge_count();
            partition.dedup();
            assert_eq!(raw_edges, partition.edge_count());
            assert!(partition.is_subgraph_of(&graph));
            for (a, b) in graph.edges() {
                if partition.contains_node(a) && partition.contains_node(b) {
                    assert!(partition.has_edge(a, b), "分区缺少诱导边 ({}, {})", a, b);
                }
            }
        }
    }

    #[test]
    fn test_disconnected_graph_uses_round_robin() {
        let mut graph = Graph::from_edges([(1, 2), (3, 4)]);
        for node in 10..20 {
            graph.add_node(node);
        }
        let partitions = Partitioner::new().partition(&graph, 3).expect("k = 3");
        assert_eq!(partitions.len(), 3);
        assert_coverage(&graph, &partitions);
    }

    #[test]
    fn test_same_seed_same_partitions() {
        let graph = grid(7, 7);
        let first = Partitioner::with_seed(7).partition(&graph, 5).expect("k = 5");
        let second = Partitioner::with_seed(7).partition(&graph, 5).expect("k = 5");
        assert_eq!(first, second);
    }

    #[test]
    fn test_one_partition_per_node() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1)]);
        let partitions = Partitioner::new().partition(&graph, 3).expect("k = n");
        assert!(partitions.iter().all(|p| p.node_count() == 1));
        assert!(partitions.iter().all(|p| p.edge_count() == 0));
    }
}
