//! 通用类型定义

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// 边权重
///
/// 存储的权重恒大于 0；0 只在 `set_edge_weight` 中表示"无边"。
pub type Weight = i64;

/// 顶点标签
///
/// 不透明的顶点标识，要求可比较、可哈希；`Display` 用于调试输出。
pub trait Label: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display {}

/// 图的内部表示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// 顶点集合 + 边记录列表
    #[default]
    EdgeList,
    /// 每个顶点记录自己的出边映射
    AdjacencyMap,
}

impl Representation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::EdgeList => "edge_list",
            Representation::AdjacencyMap => "adjacency_map",
        }
    }

    pub fn all() -> [Representation; 2] {
        [Representation::EdgeList, Representation::AdjacencyMap]
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "edge_list" | "edges" => Ok(Representation::EdgeList),
            "adjacency_map" | "adjacency" | "vertices" => Ok(Representation::AdjacencyMap),
            other => Err(Error::InvalidConfig(format!("未知的图表示方式: {}", other))),
        }
    }
}
