//! 测量记录数据结构
//!
//! 一个测量块（measurement block）解析后由两部分组成：
//! - [`Metadata`]：按文件顺序保存的键值注释
//! - [`DataTable`]：位置 + 剂量的数值表

use crate::table::DataTable;

/// 测量编号所使用的元数据键
pub const MEASUREMENT_NUMBER_KEY: &str = "measurement_number";

/// 单个元数据条目的值
///
/// 原始格式中同一个映射里会同时出现字符串、空值和数值向量，
/// 后处理阶段依赖这三者的区别，因此用一个带标签的枚举表示。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetadataValue {
    /// `%KEY\tvalue` 形式的原始字符串（已去除首尾空白）
    Text(String),
    /// `%KEY` 形式（没有制表符）的显式空值，不是空字符串
    Absent,
    /// 整数值，目前只用于 `measurement_number`
    Integer(i64),
    /// 解码后的数值向量（FSZ / STS / EDS）
    Vector(Vec<f64>),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            MetadataValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, MetadataValue::Absent)
    }
}

/// 一个测量块的元数据
///
/// 保持键的插入顺序。键按源文件原样保存，包括尾随空格
/// （例如 `"STS "` 与 `"EDS "`），后续查找依赖精确的键文本。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个条目
    ///
    /// 键已存在时原地覆盖（保留原位置），后出现的值为准。
    /// 返回被覆盖的旧值。
    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) -> Option<MetadataValue> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按文件顺序遍历所有条目
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// 测量编号（来自 `# Measurement number` 边界行）
    ///
    /// 位于第一个边界行之前的文件头记录没有测量编号。
    pub fn measurement_number(&self) -> Option<i64> {
        self.get(MEASUREMENT_NUMBER_KEY)
            .and_then(MetadataValue::as_integer)
    }

    /// 获取字符串值
    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetadataValue::as_text)
    }

    /// 获取解码后的数值向量
    pub fn vector(&self, key: &str) -> Option<&[f64]> {
        self.get(key).and_then(MetadataValue::as_vector)
    }
}

/// 一次物理测量：元数据 + 采样数据
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementRecord {
    pub metadata: Metadata,
    pub samples: DataTable,
}

impl MeasurementRecord {
    pub fn new(metadata: Metadata, samples: DataTable) -> Self {
        Self { metadata, samples }
    }

    pub fn measurement_number(&self) -> Option<i64> {
        self.metadata.measurement_number()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut meta = Metadata::new();
        meta.insert("A", MetadataValue::Text("1".into()));
        meta.insert("B", MetadataValue::Absent);
        let old = meta.insert("A", MetadataValue::Text("2".into()));

        assert_eq!(old, Some(MetadataValue::Text("1".into())));
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(meta.text("A"), Some("2"));
    }

    #[test]
    fn test_keys_are_exact() {
        let mut meta = Metadata::new();
        meta.insert("STS ", MetadataValue::Text("1\t2\t3".into()));

        assert!(meta.contains_key("STS "));
        assert!(!meta.contains_key("STS"));
    }

    #[test]
    fn test_typed_accessors() {
        let mut meta = Metadata::new();
        meta.insert(MEASUREMENT_NUMBER_KEY, MetadataValue::Integer(3));
        meta.insert("FSZ", MetadataValue::Vector(vec![100.0, 100.0]));
        meta.insert("VNR 1.0", MetadataValue::Absent);

        assert_eq!(meta.measurement_number(), Some(3));
        assert_eq!(meta.vector("FSZ"), Some(&[100.0, 100.0][..]));
        assert!(meta.get("VNR 1.0").unwrap().is_absent());
        assert_eq!(meta.text("FSZ"), None);
        assert_eq!(meta.vector("missing"), None);
    }
}
