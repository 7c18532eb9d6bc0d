//! planarity-filter - 从任意图中提取近似最大的平面子图
//!
//! 核心流程：图分区 -> 并行图元传播 -> 合并 -> 连通分量修复。
//! 结果中的每条边都存在于输入图中；平面性由外部判定器验证。

pub mod algorithm;
pub mod config;
pub mod core;
pub mod io;
pub mod utils;
