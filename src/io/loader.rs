//! 图加载模块
//!
//! 支持两种输入格式：
//! - 带标签的边列表：每行前两个以空白分隔的字段是节点标签，标签按首次出现顺序编号
//! - 大图模式：每行前两个字段直接是无符号整数节点编号
//!
//! 字段少于两个的行会被忽略，自环会被丢弃，结果图已去重。

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::core::{Graph, NodeId, PlanarError, PlanarResult};

/// 节点标签与编号之间的双向映射
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeLabels {
    by_label: HashMap<String, NodeId>,
    by_id: Vec<String>,
}

impl NodeLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取标签对应的编号，不存在时分配下一个编号
    pub fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.by_label.get(label) {
            return id;
        }
        let id = self.by_id.len();
        self.by_label.insert(label.to_string(), id);
        self.by_id.push(label.to_string());
        id
    }

    pub fn id(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.by_id.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// 带标签输入的加载结果
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    pub graph: Graph,
    pub labels: NodeLabels,
}

/// 提取一行中的前两个字段
fn leading_pair(line: &str) -> Option<(&str, &str)> {
    let mut fields = line.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(a), Some(b)) => Some((a, b)),
        _ => None,
    }
}

/// 图加载器
pub struct GraphLoader;

impl GraphLoader {
    /// 从文件加载带标签的边列表
    pub fn load_labeled<P: AsRef<Path>>(path: P) -> PlanarResult<LabeledGraph> {
        let file = File::open(path.as_ref())?;
        let loaded = Self::read_labeled(BufReader::new(file))?;
        debug!(
            "从 {} 加载 {} 个节点, {} 条边",
            path.as_ref().display(),
            loaded.graph.node_count(),
            loaded.graph.edge_count()
        );
        Ok(loaded)
    }

    /// 从任意读取器解析带标签的边列表
    pub fn read_labeled<R: BufRead>(reader: R) -> PlanarResult<LabeledGraph> {
        let mut labels = NodeLabels::new();
        let mut edges = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if let Some((a, b)) = leading_pair(&line) {
                let a = labels.intern(a);
                let b = labels.intern(b);
                edges.push((a, b));
            }
        }

        Ok(LabeledGraph {
            graph: Graph::from_edges(edges),
            labels,
        })
    }

    /// 从文件加载节点编号形式的边列表（大图模式）
    pub fn load_indexed<P: AsRef<Path>>(path: P) -> PlanarResult<Graph> {
        let file = File::open(path.as_ref())?;
        let graph = Self::read_indexed(BufReader::new(file))?;
        debug!(
            "从 {} 加载 {} 个节点, {} 条边",
            path.as_ref().display(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// 从任意读取器解析节点编号形式的边列表
    pub fn read_indexed<R: BufRead>(reader: R) -> PlanarResult<Graph> {
        let mut graph = Graph::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let Some((a, b)) = leading_pair(&line) else {
                continue;
            };
            let a = Self::parse_id(a, idx + 1)?;
            let b = Self::parse_id(b, idx + 1)?;
            if a != b {
                graph.add_edge(a, b);
            }
        }

        graph.dedup();
        Ok(graph)
    }

    fn parse_id(field: &str, line: usize) -> PlanarResult<NodeId> {
        field.parse::<NodeId>().map_err(|e| PlanarError::Parse {
            line,
            message: format!("无法解析节点编号 '{}': {}", field, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_labeled() {
        let input = "a b\nb  c\n\nc\ta extra\nlonely\n";
        let loaded = GraphLoader::read_labeled(Cursor::new(input)).expect("parse");

        assert_eq!(loaded.labels.len(), 3);
        assert_eq!(loaded.labels.id("a"), Some(0));
        assert_eq!(loaded.labels.id("c"), Some(2));
        assert_eq!(loaded.labels.label(1), Some("b"));
        assert_eq!(loaded.graph.edge_count(), 3);
        assert!(loaded.graph.has_edge(2, 0));
    }

    #[test]
    fn test_read_labeled_dedups_and_drops_self_loops() {
        let input = "x y\ny x\nx x\n";
        let loaded = GraphLoader::read_labeled(Cursor::new(input)).expect("parse");
        assert_eq!(loaded.graph.edge_count(), 1);
        assert_eq!(loaded.graph.neighbors(0).expect("x"), &[1]);
    }

    #[test]
    fn test_read_indexed() {
        let input = "1 2\n2 3\n3 1\n3 3\n2 1\n";
        let graph = GraphLoader::read_indexed(Cursor::new(input)).expect("parse");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_read_indexed_reports_line() {
        let input = "1 2\n2 three\n";
        let err = GraphLoader::read_indexed(Cursor::new(input)).expect_err("bad id");
        assert!(matches!(err, PlanarError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_load_labeled_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temporary file");
        writeln!(file, "alpha beta").expect("write");
        writeln!(file, "beta gamma").expect("write");

        let loaded = GraphLoader::load_labeled(file.path()).expect("load");
        assert_eq!(loaded.graph.node_count(), 3);
        assert_eq!(loaded.graph.edge_count(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = GraphLoader::load_indexed("/definitely/not/here.txt").expect_err("missing");
        assert!(matches!(err, PlanarError::Io(_)));
    }
}
