//! 错误类型定义

use crate::types::{EdgeId, GraphId, VertexId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点已存在: {0}")]
    VertexAlreadyExists(VertexId),

    #[error("顶点不存在: {0}")]
    VertexNotFound(VertexId),

    #[error("边不存在: {0}")]
    EdgeNotFound(EdgeId),

    #[error("不能跨图连接顶点: 期望图 {expected}, 实际顶点属于图 {actual}")]
    CrossGraphEdge { expected: GraphId, actual: GraphId },

    #[error("导出错误: {0}")]
    ExportError(String),

    #[error("配置错误: {0}")]
    ConfigError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(#[from] serde_json::Error),
}
