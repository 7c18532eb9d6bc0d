//! 核心模块
//!
//! 图模型与错误类型，被所有算法模块共享

pub mod error;
pub mod graph;

pub use error::{PlanarError, PlanarResult};
pub use graph::{Graph, NodeId};
