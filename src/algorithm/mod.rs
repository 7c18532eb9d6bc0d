//! 算法模块
//!
//! 包含平面子图提取相关算法实现：分区、图元传播、连通分量、分量连接和平面性判定

pub mod connectivity;
pub mod connector;
pub mod gadget;
pub mod partition;
pub mod planarity;
pub mod propagate;
pub mod routine;

// 重新导出常用算法结构体
pub use connectivity::Connectivity;
pub use connector::ComponentConnector;
pub use gadget::{Gadget, GadgetKind, GadgetMatch, GADGETS};
pub use partition::{Partitioner, DEFAULT_PARTITION_SEED};
pub use planarity::{LrPlanarityOracle, PlanarityOracle};
pub use propagate::{EdgeBuffer, Propagator};
pub use routine::{extract_planar_subgraph, run_routine, RoutineOptions, RoutineReport};
