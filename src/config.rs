//! 图配置
//!
//! 选择内部表示方式，以及是否在每次修改后校验表示不变式

use crate::error::Result;
use crate::types::Representation;
use serde::{Deserialize, Serialize};

/// 图选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// 内部表示方式
    pub representation: Representation,
    /// 每次修改后运行不变式检查（违反时 panic）
    pub check_invariants: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            representation: Representation::default(),
            check_invariants: cfg!(debug_assertions),
        }
    }
}

impl GraphOptions {
    pub fn new(representation: Representation) -> Self {
        Self {
            representation,
            ..Self::default()
        }
    }

    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    /// 从 JSON 解析选项，缺省字段取默认值
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
