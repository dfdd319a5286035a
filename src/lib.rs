//! weighted-digraph - 可变有向带权图
//!
//! 提供统一的图接口与两种可互换的内部表示：
//! - 边列表：顶点集合 + 边记录列表
//! - 邻接映射：每个顶点记录自己的出边
//!
//! 两种表示在任意操作序列下对外行为一致；所有查询返回独立副本。

pub mod config;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use config::GraphOptions;
pub use error::{Error, Result};
pub use graph::{AdjacencyGraph, AnyGraph, Edge, EdgeListGraph, SharedGraph, Vertex, WeightedGraph};
pub use types::{Label, Representation, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
