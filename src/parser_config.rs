//! Parser 配置模块
//!
//! 提供行前缀与向量字段的定义，使得 Accept ASCII 格式的细节变化时只需更新配置，
//! 而不需要修改核心解析逻辑。

use once_cell::sync::Lazy;

use crate::parser::constants::{
    BOUNDARY_MARKER, COMMENT_PREFIXES, DATA_PREFIX, EDS_KEY, EDS_RAW_KEY, FSZ_KEY,
    INLINE_COMMENT, METADATA_PREFIX, STS_KEY, STS_RAW_KEY,
};

/// 向量字段定义
///
/// 描述后处理阶段如何把一个制表符分隔的元数据值解码为数值向量。
#[derive(Debug, Clone, PartialEq)]
pub struct VectorFieldDef {
    /// 源键（按原样匹配，可能带尾随空格），如 `"STS "`
    pub source_key: &'static str,

    /// 目标键；与源键相同时原地替换，否则新增条目并保留源条目
    pub target_key: &'static str,

    /// 最多取前几个字段
    pub max_fields: usize,

    /// 是否先截掉 `#` 之后的行内注释并去除首尾空白
    pub strip_comment: bool,
}

impl VectorFieldDef {
    /// 是否原地替换源条目
    pub fn replaces_source(&self) -> bool {
        self.source_key == self.target_key
    }
}

/// Parser 配置
///
/// 定义行分类所用的前缀以及需要解码的向量字段。
#[derive(Debug, Clone, PartialEq)]
pub struct ParserConfig {
    /// 测量边界行的前缀（优先于注释前缀匹配）
    pub boundary_marker: &'static str,

    /// 元数据行前缀
    pub metadata_prefix: char,

    /// 数据行前缀
    pub data_prefix: char,

    /// 被忽略的注释/分隔行前缀
    pub comment_prefixes: Vec<char>,

    /// 行内注释分隔符（用于 `strip_comment` 的向量字段）
    pub inline_comment: char,

    /// 向量字段定义列表（按顺序处理）
    pub vector_fields: Vec<VectorFieldDef>,
}

impl ParserConfig {
    /// myQA Accept ASCII 的默认配置
    pub fn accept_default() -> Self {
        Self {
            boundary_marker: BOUNDARY_MARKER,
            metadata_prefix: METADATA_PREFIX,
            data_prefix: DATA_PREFIX,
            comment_prefixes: COMMENT_PREFIXES.to_vec(),
            inline_comment: INLINE_COMMENT,
            vector_fields: vec![
                VectorFieldDef {
                    source_key: FSZ_KEY,
                    target_key: FSZ_KEY,
                    max_fields: 2,
                    strip_comment: false,
                },
                VectorFieldDef {
                    source_key: STS_RAW_KEY,
                    target_key: STS_KEY,
                    max_fields: 3,
                    strip_comment: true,
                },
                VectorFieldDef {
                    source_key: EDS_RAW_KEY,
                    target_key: EDS_KEY,
                    max_fields: 3,
                    strip_comment: true,
                },
            ],
        }
    }

    /// 查找源键对应的向量字段定义
    pub fn vector_field(&self, source_key: &str) -> Option<&VectorFieldDef> {
        self.vector_fields
            .iter()
            .find(|def| def.source_key == source_key)
    }

    /// 是否为注释前缀
    pub fn is_comment_prefix(&self, c: char) -> bool {
        self.comment_prefixes.contains(&c)
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::accept_default()
    }
}

/// 共享的默认配置，避免每次解析都重新构建
pub(crate) static DEFAULT_CONFIG: Lazy<ParserConfig> = Lazy::new(ParserConfig::accept_default);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.boundary_marker, "# Measurement number");
        assert_eq!(config.vector_fields.len(), 3);
        assert!(config.is_comment_prefix(':'));
        assert!(config.is_comment_prefix('#'));
        assert!(!config.is_comment_prefix('%'));
        assert_eq!(config.inline_comment, '#');
    }

    #[test]
    fn test_vector_field_lookup() {
        let config = ParserConfig::default();

        let fsz = config.vector_field("FSZ").unwrap();
        assert!(fsz.replaces_source());
        assert_eq!(fsz.max_fields, 2);
        assert!(!fsz.strip_comment);

        let sts = config.vector_field("STS ").unwrap();
        assert_eq!(sts.target_key, "STS");
        assert!(!sts.replaces_source());
        assert!(sts.strip_comment);

        // 没有尾随空格的键不是源键
        assert!(config.vector_field("STS").is_none());
    }
}
