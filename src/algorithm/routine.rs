//! 平面子图提取主流程
//!
//! 分区 -> 并行传播图元 -> 合并 -> 计算连通分量 -> 连接分量。
//! 每条输出边都来自某个分区，因此都存在于输入图中。

use std::fmt;
use std::time::{Duration, Instant};

use log::{debug, info};
use parking_lot::Mutex;
use rayon::prelude::*;

use crate::algorithm::connectivity::Connectivity;
use crate::algorithm::connector::ComponentConnector;
use crate::algorithm::partition::{Partitioner, DEFAULT_PARTITION_SEED};
use crate::algorithm::propagate::Propagator;
use crate::core::{Graph, PlanarError, PlanarResult};

/// 主流程参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineOptions {
    /// 工作线程数
    pub threads: usize,
    /// 分区数量
    pub partitions: usize,
    /// 分区随机种子
    pub seed: u64,
}

impl Default for RoutineOptions {
    fn default() -> Self {
        Self {
            threads: 1,
            partitions: 1,
            seed: DEFAULT_PARTITION_SEED,
        }
    }
}

impl RoutineOptions {
    /// 分区数与线程数相同
    pub fn with_threads(threads: usize) -> Self {
        Self {
            threads,
            partitions: threads,
            ..Self::default()
        }
    }

    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// 在启动任何并行工作之前校验参数
    pub fn validate(&self, graph: &Graph) -> PlanarResult<()> {
        if self.threads == 0 {
            return Err(PlanarError::InvalidThreadCount(self.threads));
        }
        if self.partitions == 0 || self.partitions > graph.node_count() {
            return Err(PlanarError::InvalidPartitionCount {
                requested: self.partitions,
                available: graph.node_count(),
            });
        }
        Ok(())
    }
}

/// 提取近似最大的平面子图
///
/// # 参数
/// - `graph`: 去重后的简单输入图
/// - `options`: 线程数、分区数和随机种子
///
/// # 返回
/// 包含全部输入节点、邻居列表已去重排序的结果图
pub fn extract_planar_subgraph(graph: &Graph, options: &RoutineOptions) -> PlanarResult<Graph> {
    options.validate(graph)?;
    let output = Graph::with_nodes(graph.nodes());

    let partitions = Partitioner::with_seed(options.seed).partition(graph, options.partitions)?;
    debug!("生成 {} 个分区", partitions.len());

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.threads)
        .build()?;

    let output = Mutex::new(output);
    pool.install(|| {
        partitions
            .par_iter()
            .enumerate()
            .try_for_each(|(idx, partition)| -> PlanarResult<()> {
                let propagator = Propagator::new(partition);
                let start = propagator.default_start(idx)?;
                let edges = propagator.propagate_from(start)?;

                let mut guard = output.lock();
                for (a, b) in edges.iter() {
                    guard.add_edge(a, b);
                }
                Ok(())
            })
    })?;

    let mut output = output.into_inner();
    output.dedup();

    let components = Connectivity::all_components(&output)?;
    debug!("合并后共有 {} 个连通分量", components.len());
    if components.len() > 1 {
        ComponentConnector::new(graph).connect(&mut output, &components)?;
        output.dedup();
    }

    Ok(output)
}

/// 一次运行的统计信息
#[derive(Debug, Clone, PartialEq)]
pub struct RoutineReport {
    pub input_nodes: usize,
    pub input_edges: usize,
    pub result_nodes: usize,
    pub result_edges: usize,
    pub elapsed: Duration,
}

impl RoutineReport {
    /// 保留边的百分比，输入没有边时为 100
    pub fn retained_percent(&self) -> f64 {
        if self.input_edges == 0 {
            return 100.0;
        }
        self.result_edges as f64 / self.input_edges as f64 * 100.0
    }
}

impl fmt::Display for RoutineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "耗时 {:.3}s, 输入图 {} 个节点 {} 条边, 结果图 {} 个节点 {} 条边, 保留 {:.2}% 的边",
            self.elapsed.as_secs_f64(),
            self.input_nodes,
            self.input_edges,
            self.result_nodes,
            self.result_edges,
            self.retained_percent()
        )
    }
}

/// 运行主流程并记录统计信息
pub fn run_routine(graph: &Graph, options: &RoutineOptions) -> PlanarResult<(Graph, RoutineReport)> {
    info!(
        "开始提取平面子图: {} 个节点, {} 条边, {} 个线程, {} 个分区",
        graph.node_count(),
        graph.edge_count(),
        options.threads,
        options.partitions
    );

    let started = Instant::now();
    let result = extract_planar_subgraph(graph, options)?;
    let report = RoutineReport {
        input_nodes: graph.node_count(),
        input_edges: graph.edge_count(),
        result_nodes: result.node_count(),
        result_edges: result.edge_count(),
        elapsed: started.elapsed(),
    };

    info!("{}", report);
    Ok((result, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_validation() {
        let graph = Graph::from_edges([(1, 2), (2, 3)]);
        assert!(RoutineOptions::default().validate(&graph).is_ok());
        assert_eq!(
            RoutineOptions::with_threads(0).validate(&graph),
            Err(PlanarError::InvalidThreadCount(0))
        );
        assert_eq!(
            RoutineOptions::with_threads(4).validate(&graph),
            Err(PlanarError::InvalidPartitionCount {
                requested: 4,
                available: 3
            })
        );
        assert!(RoutineOptions::with_threads(4)
            .with_partitions(2)
            .validate(&graph)
            .is_ok());
    }

    #[test]
    fn test_empty_graph_is_rejected() {
        assert_eq!(
            extract_planar_subgraph(&Graph::new(), &RoutineOptions::default()),
            Err(PlanarError::InvalidPartitionCount {
                requested: 1,
                available: 0
            })
        );
        assert_eq!(
            extract_planar_subgraph(&Graph::new(), &RoutineOptions::with_threads(0)),
            Err(PlanarError::InvalidThreadCount(0))
        );
    }

    #[test]
    fn test_isolated_nodes_survive() {
        let mut graph = Graph::from_edges([(1, 2), (2, 3), (3, 1)]);
        graph.add_node(10);
        graph.add_node(11);

        let result = extract_planar_subgraph(&graph, &RoutineOptions::with_threads(2))
            .expect("routine");
        assert_eq!(result.nodes().collect::<Vec<_>>(), vec![1, 2, 3, 10, 11]);
        assert!(result.is_subgraph_of(&graph));
    }

    #[test]
    fn test_report_percentage() {
        let report = RoutineReport {
            input_nodes: 5,
            input_edges: 10,
            result_nodes: 5,
            result_edges: 7,
            elapsed: Duration::from_millis(5),
        };
        assert!((report.retained_percent() - 70.0).abs() < 1e-9);
        assert!(report.to_string().contains("70.00%"));

        let empty = RoutineReport {
            input_edges: 0,
            result_edges: 0,
            ..report
        };
        assert!((empty.retained_percent() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_routine_reports_counts() {
        let graph = Graph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]);
        let (result, report) = run_routine(&graph, &RoutineOptions::default()).expect("routine");
        assert_eq!(report.input_nodes, 4);
        assert_eq!(report.input_edges, 4);
        assert_eq!(report.result_edges, result.edge_count());
    }
}
