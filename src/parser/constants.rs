//! 解析器使用的常量定义
//!
//! 定义了行分类前缀、元数据键名、分隔符等常量。

// 行前缀常量

/// 测量边界行前缀（必须先于 `#` 注释前缀判断）
pub const BOUNDARY_MARKER: &str = "# Measurement number";

/// 元数据行前缀
pub const METADATA_PREFIX: char = '%';

/// 数据行前缀
pub const DATA_PREFIX: char = '=';

/// 注释/分隔行前缀
pub const COMMENT_PREFIXES: [char; 2] = [':', '#'];

// 分隔符

/// 字段分隔符
pub const FIELD_SEPARATOR: u8 = b'\t';

/// 行内注释分隔符（STS / EDS 值中使用）
pub const INLINE_COMMENT: char = '#';

// 向量字段键名
//
// 源格式中 STS 与 EDS 的键带有一个尾随空格，解码结果存入不带空格的新键。

/// 射野大小
pub const FSZ_KEY: &str = "FSZ";

/// 扫描起点（原始键，带尾随空格）
pub const STS_RAW_KEY: &str = "STS ";

/// 扫描起点（解码后）
pub const STS_KEY: &str = "STS";

/// 扫描终点（原始键，带尾随空格）
pub const EDS_RAW_KEY: &str = "EDS ";

/// 扫描终点（解码后）
pub const EDS_KEY: &str = "EDS";

/// 要求的文件扩展名（不含点）
pub const ASCII_EXTENSION: &str = "asc";
