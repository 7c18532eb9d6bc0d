//! 统一错误处理 for planarity-filter
//!
//! ## 设计理念
//!
//! 1. **核心错误**：分区数量非法、空分区、未知节点，结构化保留上下文
//! 2. **外部错误**：IO、TOML、日志初始化等使用自定义 `From` 实现转换为字符串，降低模块耦合
//! 3. **统一接口**：`PlanarResult<T>` 提供统一的返回类型，简化错误传播
//!
//! 所有输入都是确定性的内存数据，因此没有任何错误是可重试的。

use thiserror::Error;

use crate::core::graph::NodeId;

/// 统一的结果类型
pub type PlanarResult<T> = Result<T, PlanarError>;

/// 平面子图提取错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanarError {
    #[error("分区数量非法: 请求 {requested} 个分区，但图中只有 {available} 个节点")]
    InvalidPartitionCount { requested: usize, available: usize },

    #[error("线程数量非法: {0}")]
    InvalidThreadCount(usize),

    #[error("分区 {0} 不包含任何节点")]
    EmptyPartition(usize),

    #[error("未知节点: {0}")]
    UnknownNode(NodeId),

    #[error("线程池错误: {0}")]
    ThreadPool(String),

    #[error("解析错误 (第 {line} 行): {message}")]
    Parse { line: usize, message: String },

    #[error("IO错误: {0}")]
    Io(String),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("日志错误: {0}")]
    Logging(String),

    #[error("结果图不是平面图: {nodes} 个节点, {edges} 条边")]
    NotPlanar { nodes: usize, edges: usize },
}

impl PlanarError {
    /// 是否为内部不变式被破坏（逻辑缺陷，而非配置或输入问题）
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            PlanarError::EmptyPartition(_) | PlanarError::UnknownNode(_)
        )
    }
}

// ==================== 外部错误转换 ====================

impl From<std::io::Error> for PlanarError {
    fn from(err: std::io::Error) -> Self {
        PlanarError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for PlanarError {
    fn from(err: toml::de::Error) -> Self {
        PlanarError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for PlanarError {
    fn from(err: toml::ser::Error) -> Self {
        PlanarError::Config(err.to_string())
    }
}

impl From<flexi_logger::FlexiLoggerError> for PlanarError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        PlanarError::Logging(err.to_string())
    }
}

impl From<rayon::ThreadPoolBuildError> for PlanarError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        PlanarError::ThreadPool(err.to_string())
    }
}
