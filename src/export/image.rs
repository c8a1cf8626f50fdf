//! 图片导出
//!
//! 把 DOT 文本交给 GraphViz 可执行文件渲染成图片文件

use super::{Exporter, GraphvizExporter};
use crate::config::GraphvizConfig;
use crate::error::{Error, Result};
use crate::graph::Graph;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;
use tracing::{debug, warn};

/// 图片导出器，导出结果为生成的图片路径
#[derive(Debug, Clone, Default)]
pub struct ImageExporter {
    dot: GraphvizExporter,
}

impl ImageExporter {
    pub fn new(config: GraphvizConfig) -> Self {
        Self {
            dot: GraphvizExporter::new(config),
        }
    }

    pub fn config(&self) -> &GraphvizConfig {
        self.dot.config()
    }

    /// 图片输出路径
    pub fn output_path(&self, graph: &Graph) -> PathBuf {
        let config = self.config();
        config.output_dir().join(format!(
            "{}_{}.{}",
            file_stem(&config.graph_name),
            graph.id().as_u64(),
            config.format
        ))
    }

    /// 渲染图片并返回文件路径
    pub fn render(&self, graph: &Graph) -> Result<PathBuf> {
        let config = self.config();
        config.validate()?;

        let path = self.output_path(graph);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        debug!(executable = %config.executable, path = %path.display(), "render image");

        let mut child = Command::new(&config.executable)
            .arg(format!("-T{}", config.format))
            .arg("-o")
            .arg(&path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::ExportError(format!("无法启动 {}: {}", config.executable, e)))?;

        // 子进程可能提前退出，写入放到单独线程，stderr 由 wait_with_output 读取
        let dot = self.dot.to_dot(graph);
        let writer = child
            .stdin
            .take()
            .map(|mut stdin| thread::spawn(move || stdin.write_all(dot.as_bytes())));

        let output = child.wait_with_output()?;
        let written = match writer {
            Some(handle) => handle
                .join()
                .unwrap_or_else(|_| Err(io::Error::new(io::ErrorKind::Other, "写入 DOT 的线程异常退出"))),
            None => Ok(()),
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(executable = %config.executable, status = %output.status, "graphviz failed");
            return Err(Error::ExportError(format!(
                "{} 执行失败 ({}): {}",
                config.executable, output.status, stderr
            )));
        }
        written?;

        Ok(path)
    }
}

impl Exporter for ImageExporter {
    fn name(&self) -> &'static str {
        "image"
    }

    fn export(&self, graph: &Graph) -> Result<String> {
        self.render(graph).map(|p| p.display().to_string())
    }
}

fn file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
