//! 分量连接模块
//!
//! 分区会丢弃分区之间的边，合并后的结果可能被拆成多个连通分量。
//! 本模块把分量视为超级节点，在"分量图"上做 BFS，用原图中存在的边把它们重新连起来。
//! 原图本身不连通的部分保持不连通，不会凭空添加边。

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::core::{Graph, NodeId, PlanarError, PlanarResult};

/// 分量在遍历中的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    Queued,
    Visited,
}

/// 分量连接器
pub struct ComponentConnector<'a> {
    original: &'a Graph,
}

impl<'a> ComponentConnector<'a> {
    pub fn new(original: &'a Graph) -> Self {
        Self { original }
    }

    /// 用原图中的边连接 output 的各个连通分量
    ///
    /// # 参数
    /// - `output`: 合并后的结果图，会被原地修改
    /// - `components`: output 的连通分量
    ///
    /// # 返回
    /// 新添加的边
    ///
    /// 发现跨分量边 (node0, node1) 时，还会在 node1 的结果图邻居中寻找与 node0
    /// 在原图中相邻的 node2，并添加 (node0, node2) 形成三角形。只检查这一个方向。
    /// node2 因此总在 node1 的分量内，每个新分量只挂在一个节点上，平面性得以保持。
    pub fn connect(
        &self,
        output: &mut Graph,
        components: &[Vec<NodeId>],
    ) -> PlanarResult<Vec<(NodeId, NodeId)>> {
        let mut edges = Vec::new();
        if components.is_empty() {
            return Ok(edges);
        }

        let mut node_to_comp: HashMap<NodeId, usize> = HashMap::new();
        for (idx, component) in components.iter().enumerate() {
            for &node in component {
                node_to_comp.insert(node, idx);
            }
        }
        let comp_of = |node: NodeId| -> PlanarResult<usize> {
            node_to_comp
                .get(&node)
                .copied()
                .ok_or(PlanarError::UnknownNode(node))
        };

        let mut state = vec![VisitState::Unvisited; components.len()];
        let mut queue: VecDeque<usize> = VecDeque::from([0]);
        // 重新开始时从这里往后查找未访问的分量
        let mut restart_cursor = 1;

        while let Some(current) = queue.pop_front() {
            if state[current] != VisitState::Visited {
                state[current] = VisitState::Visited;

                for &node0 in &components[current] {
                    let adjs = self.original.neighbors(node0)?;
                    for &node1 in adjs {
                        let other = comp_of(node1)?;
                        if other == current || state[other] != VisitState::Unvisited {
                            continue;
                        }

                        state[other] = VisitState::Queued;
                        edges.push((node0, node1));

                        let closing = output
                            .neighbors(node1)?
                            .iter()
                            .find(|&&node2| adjs.contains(&node2));
                        if let Some(&node2) = closing {
                            edges.push((node0, node2));
                        }

                        queue.push_back(other);
                    }
                }
            }

            if queue.is_empty() {
                // 原图在这些分量之间不连通，直接从下一个未访问分量继续，不添加边
                while restart_cursor < state.len() {
                    let candidate = restart_cursor;
                    restart_cursor += 1;
                    if state[candidate] == VisitState::Unvisited {
                        queue.push_back(candidate);
                        break;
                    }
                }
            }
        }

        for &(a, b) in &edges {
            output.add_edge(a, b);
        }

        debug!(
            "连接 {} 个分量，添加 {} 条边",
            components.len(),
            edges.len()
        );

        Ok(edges)
    }
}
