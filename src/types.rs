//! 通用类型定义
//!
//! 顶点 ID、边 ID、图 ID 以及边的方向类型

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// 顶点 ID
///
/// 保留调用方传入的原始类型（整数或字符串），但相等性与哈希都基于规范字符串形式：
/// `VertexId::Int(1)` 与 `VertexId::Str("1")` 视为同一个 ID。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VertexId {
    Int(i64),
    Str(String),
}

impl VertexId {
    /// 规范字符串形式
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            VertexId::Int(v) => Cow::Owned(v.to_string()),
            VertexId::Str(s) => Cow::Borrowed(s.as_str()),
        }
    }

    /// 整数形式（字符串 ID 可解析为整数时同样返回）
    pub fn as_int(&self) -> Option<i64> {
        match self {
            VertexId::Int(v) => Some(*v),
            VertexId::Str(s) => s.parse().ok().filter(|v: &i64| v.to_string() == *s),
        }
    }
}

impl PartialEq for VertexId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (VertexId::Int(a), VertexId::Int(b)) => a == b,
            (VertexId::Str(a), VertexId::Str(b)) => a == b,
            _ => self.canonical() == other.canonical(),
        }
    }
}

impl Eq for VertexId {}

impl Hash for VertexId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VertexId::Int(v) => write!(f, "{}", v),
            VertexId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for VertexId {
    fn from(v: i64) -> Self {
        VertexId::Int(v)
    }
}

impl From<i32> for VertexId {
    fn from(v: i32) -> Self {
        VertexId::Int(v as i64)
    }
}

impl From<u32> for VertexId {
    fn from(v: u32) -> Self {
        VertexId::Int(v as i64)
    }
}

impl From<String> for VertexId {
    fn from(v: String) -> Self {
        VertexId::Str(v)
    }
}

impl From<&str> for VertexId {
    fn from(v: &str) -> Self {
        VertexId::Str(v.to_string())
    }
}

impl From<&VertexId> for VertexId {
    fn from(v: &VertexId) -> Self {
        v.clone()
    }
}

/// 边 ID（图内唯一，按创建顺序递增）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// 顶点在所属图中的位置（插入顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexIndex(pub(crate) usize);

impl VertexIndex {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// 图实例 ID（进程内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    /// 分配新的图 ID
    pub(crate) fn next() -> Self {
        Self(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 边的方向类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// 有向边：只能从 from 走到 to
    Directed,
    /// 无向边：双向可达
    Undirected,
}

impl EdgeKind {
    pub fn as_str(&self) -> &str {
        match self {
            EdgeKind::Directed => "directed",
            EdgeKind::Undirected => "undirected",
        }
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(id: &VertexId) -> u64 {
        let mut h = DefaultHasher::new();
        id.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_vertex_id_canonical_equality() {
        let a = VertexId::from(1);
        let b = VertexId::from("1");

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(VertexId::from("01"), a);
        assert_ne!(VertexId::from("string"), VertexId::from("String"));
    }

    #[test]
    fn test_vertex_id_keeps_original_type() {
        assert!(matches!(VertexId::from("1"), VertexId::Str(_)));
        assert_eq!(VertexId::from("1").as_int(), Some(1));
        assert_eq!(VertexId::from("01").as_int(), None);
        assert_eq!(VertexId::from(-7).to_string(), "-7");
    }

    #[test]
    fn test_vertex_id_serde_untagged() {
        let json = serde_json::to_string(&vec![VertexId::from(3), VertexId::from("x")]).unwrap();
        assert_eq!(json, r#"[3,"x"]"#);

        let ids: Vec<VertexId> = serde_json::from_str(&json).unwrap();
        assert_eq!(ids, vec![VertexId::from(3), VertexId::from("x")]);
    }

    #[test]
    fn test_graph_ids_are_unique() {
        assert_ne!(GraphId::next(), GraphId::next());
    }
}
