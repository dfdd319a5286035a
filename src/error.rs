//! 错误类型定义

use crate::types::Weight;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("边权重不能为负: {src}->{dst} ({weight})")]
    NegativeWeight {
        src: String,
        dst: String,
        weight: Weight,
    },

    #[error("边权重必须大于 0, 实际为 {0}")]
    NonPositiveEdgeWeight(Weight),

    #[error("无效的配置: {0}")]
    InvalidConfig(String),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// 是否属于调用方传参错误（InvalidArgument 类）
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::NegativeWeight { .. } | Error::NonPositiveEdgeWeight(_)
        )
    }
}
