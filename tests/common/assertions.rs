//! 自定义断言辅助模块
//!
//! 提供结果图与输入图之间关系的常用断言

use planarity_filter::core::Graph;

/// 断言结果图的每条边都存在于输入图中
pub fn assert_subgraph(result: &Graph, input: &Graph) {
    for (a, b) in result.edges() {
        assert!(input.has_edge(a, b), "结果边 ({}, {}) 不在输入图中", a, b);
    }
}

/// 断言结果图与输入图节点集合相同
pub fn assert_same_nodes(result: &Graph, input: &Graph) {
    assert_eq!(
        result.nodes().collect::<Vec<_>>(),
        input.nodes().collect::<Vec<_>>(),
        "结果图节点集合与输入图不一致"
    );
}

/// 断言邻居列表对称且无重复
pub fn assert_simple_symmetric(graph: &Graph) {
    for (node, adjs) in graph.iter() {
        let mut sorted = adjs.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), adjs.len(), "节点 {} 的邻居列表有重复", node);
        for &adj in adjs {
            assert_ne!(adj, node, "节点 {} 有自环", node);
            assert!(graph.has_edge(adj, node), "边 ({}, {}) 不对称", node, adj);
        }
    }
}
