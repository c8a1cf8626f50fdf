//! 表格导出
//!
//! 顶点表与边表

use super::Exporter;
use crate::error::Result;
use crate::graph::Graph;
use prettytable::{format, row, Table};

/// 表格导出器
#[derive(Debug, Clone, Copy, Default)]
pub struct TableExporter;

impl TableExporter {
    /// 顶点表
    pub fn vertex_table(&self, graph: &Graph) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Vertex", "Balance", "Group", "Degree"]);

        for vertex in graph.vertices() {
            table.add_row(row![
                vertex.id().to_string(),
                vertex.balance().to_string(),
                vertex.group().to_string(),
                vertex.degree().to_string()
            ]);
        }
        table
    }

    /// 边表
    pub fn edge_table(&self, graph: &Graph) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Edge", "From", "To", "Kind", "Weight"]);

        for edge in graph.edges() {
            let (from, to) = edge.vertices();
            table.add_row(row![
                edge.id().to_string(),
                from.id().to_string(),
                to.id().to_string(),
                edge.kind().to_string(),
                edge.weight().map_or_else(|| "-".to_string(), |w| w.to_string())
            ]);
        }
        table
    }
}

impl Exporter for TableExporter {
    fn name(&self) -> &'static str {
        "table"
    }

    fn export(&self, graph: &Graph) -> Result<String> {
        Ok(format!(
            "{}{}{} vertex(es), {} edge(s)\n",
            self.vertex_table(graph),
            self.edge_table(graph),
            graph.number_of_vertices(),
            graph.number_of_edges()
        ))
    }
}
