//! 图导出模块
//!
//! 导出器只通过图的只读接口（顶点、边的枚举与属性）工作，不修改图

mod graphviz;
mod image;
mod json;
mod table;

pub use graphviz::GraphvizExporter;
pub use image::ImageExporter;
pub use json::{EdgeSnapshot, GraphSnapshot, JsonExporter, VertexSnapshot};
pub use table::TableExporter;

use crate::error::Result;
use crate::graph::Graph;
use std::fmt;

/// 导出器
pub trait Exporter: fmt::Debug + Send + Sync {
    /// 导出器名称
    fn name(&self) -> &'static str;

    /// 导出图
    fn export(&self, graph: &Graph) -> Result<String>;
}
