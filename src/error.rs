//! 错误类型定义
//!
//! 定义了解析 Accept ASCII 测量文件过程中可能出现的所有错误类型。
//! 所有错误都是致命的：任何一个错误都会中止整个文件的解析。

use thiserror::Error;

/// 解析错误类型
///
/// 注意：无法解析为浮点数的数据行不会产生错误，而是被静默丢弃。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// 文件扩展名不是 `.asc`（在任何文件 I/O 之前检查）
    #[error("invalid file extension: {path} (must be .asc)")]
    InvalidExtension {
        /// 传入的路径
        path: String,
    },

    /// 文件未找到或无法访问
    #[error("file not found or inaccessible: {path}")]
    FileNotFound {
        /// 文件路径及底层错误描述
        path: String,
    },

    /// 读取过程中的 I/O 错误
    #[error("I/O error: {0}")]
    IoError(String),

    /// 测量边界行末尾的测量编号无法解析为整数
    #[error("invalid measurement number in boundary line: '{raw}'")]
    InvalidMeasurementNumber {
        /// 原始边界行
        raw: String,
    },

    /// 向量字段（FSZ / STS / EDS）中存在非数值字段
    #[error("malformed value for metadata key '{key}': '{value}'")]
    MalformedMetadataValue {
        /// 元数据键
        key: String,
        /// 无法转换的原始值
        value: String,
    },

    /// 向量字段存在但没有值（元数据行中没有制表符）
    #[error("metadata key '{key}' has no value to decode")]
    MissingMetadataValue {
        /// 元数据键
        key: String,
    },

    /// 数值行宽度与所在表的宽度不一致
    #[error("ragged data row: table has {expected} columns, row has {found}")]
    RaggedDataRow {
        /// 表的列数（由第一行决定）
        expected: usize,
        /// 该行的列数
        found: usize,
    },

    /// 数据表的列数不足以提供所需列
    #[error("column {column} out of range: table has {n_cols} columns")]
    MissingColumn {
        /// 请求的列索引（从 0 开始）
        column: usize,
        /// 表的实际列数
        n_cols: usize,
    },
}

/// 本库统一的 Result 别名
pub type Result<T> = std::result::Result<T, ParseError>;

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        ParseError::IoError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ParseError::InvalidExtension {
            path: "scan.txt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid file extension: scan.txt (must be .asc)"
        );

        let err = ParseError::MalformedMetadataValue {
            key: "STS ".to_string(),
            value: "abc".to_string(),
        };
        assert!(err.to_string().contains("'STS '"));
        assert!(err.to_string().contains("'abc'"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: ParseError = io.into();
        assert!(matches!(err, ParseError::IoError(ref msg) if msg.contains("eof")));
    }
}
