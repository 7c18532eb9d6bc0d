//! 输入输出模块
//!
//! 边列表的加载与写出，不属于核心算法

pub mod loader;
pub mod writer;

pub use loader::{GraphLoader, LabeledGraph, NodeLabels};
pub use writer::GraphWriter;
