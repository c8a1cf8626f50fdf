//! mixgraph - 内存混合多重图模型
//!
//! 面向上层图算法的数据结构层，支持：
//! - 有向边与无向边混合、平行边
//! - 整数与字符串等价的顶点 ID
//! - 顶点余额、分组属性
//! - 图的完整克隆与无边克隆
//! - 可替换的导出器（DOT 文本、图片、表格、JSON）

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod types;

// 重导出常用类型
pub use config::GraphvizConfig;
pub use error::{Error, Result};
pub use export::{Exporter, GraphvizExporter, ImageExporter, JsonExporter, TableExporter};
pub use graph::{Edge, EdgeRef, Graph, Vertex, VertexHandle, VertexMut, VertexRef};
pub use types::{EdgeId, EdgeKind, GraphId, VertexId, VertexIndex};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
