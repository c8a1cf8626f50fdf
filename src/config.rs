//! 导出配置
//!
//! GraphViz 导出器的配置项，可从 JSON 加载，缺省字段使用默认值

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_GRAPH_NAME: &str = "G";
const DEFAULT_EXECUTABLE: &str = "dot";
const DEFAULT_FORMAT: &str = "png";

/// GraphViz 导出配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphvizConfig {
    /// DOT 中的图名
    pub graph_name: String,
    /// GraphViz 可执行文件
    pub executable: String,
    /// 图片格式（传给 `-T`）
    pub format: String,
    /// 图片输出目录，未设置时使用系统临时目录
    pub output_dir: Option<PathBuf>,
    /// 图级属性，例如 `rankdir = "LR"`
    pub graph_attributes: IndexMap<String, String>,
    /// 在顶点标签中显示非零余额
    pub show_balance: bool,
    /// 把边权重作为边标签
    pub show_weight: bool,
}

impl Default for GraphvizConfig {
    fn default() -> Self {
        Self {
            graph_name: DEFAULT_GRAPH_NAME.to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            output_dir: None,
            graph_attributes: IndexMap::new(),
            show_balance: true,
            show_weight: true,
        }
    }
}

impl GraphvizConfig {
    /// 从 JSON 字符串加载
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::ConfigError(format!("解析配置失败: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// 从 JSON 文件加载
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("读取配置文件 {:?} 失败: {}", path, e)))?;
        Self::from_json_str(&data)
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> Result<()> {
        if self.graph_name.is_empty() {
            return Err(Error::ConfigError("graph_name 不能为空".to_string()));
        }
        if self.executable.trim().is_empty() {
            return Err(Error::ConfigError("executable 不能为空".to_string()));
        }
        if self.format.is_empty() || !self.format.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::ConfigError(format!("无效的图片格式: {:?}", self.format)));
        }
        Ok(())
    }

    /// 实际使用的输出目录
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(std::env::temp_dir)
    }
}
