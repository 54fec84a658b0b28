//! AcceptFile - 单个测量文件的便捷包装
//!
//! 在 [`ParseResult`] 的基础上提供按列投影的访问器（剂量、位置）。

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::measurement::Metadata;
use crate::parser::{ParseResult, parse_file, parse_reader};
use crate::table::DataTable;

/// 已解析的 myQA Accept ASCII 测量文件
///
/// # 示例
///
/// ```no_run
/// use myqa_accept_parser::AcceptFile;
///
/// let accept = AcceptFile::open("profiles.asc")?;
/// for (i, dose) in accept.dose_data()?.iter().enumerate() {
///     let max = dose.iter().cloned().fold(f64::MIN, f64::max);
///     println!("测量 {}: 最大剂量 {}", i, max);
/// }
/// # Ok::<(), myqa_accept_parser::ParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptFile {
    result: ParseResult,
}

impl AcceptFile {
    /// 打开并解析文件
    ///
    /// 扩展名不是 `.asc` 时在读取文件之前返回 [`ParseError::InvalidExtension`](crate::ParseError::InvalidExtension)。
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            result: parse_file(path)?,
        })
    }

    /// 从任意 Reader 解析（不检查扩展名）
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(Self {
            result: parse_reader(reader)?,
        })
    }

    /// 每个测量块的元数据
    pub fn metadata(&self) -> &[Metadata] {
        &self.result.metadata_list
    }

    /// 每个测量块的数值表
    pub fn data(&self) -> &[DataTable] {
        &self.result.data_list
    }

    /// 按文件顺序遍历 (元数据, 数值表) 对
    pub fn records(&self) -> impl Iterator<Item = (&Metadata, &DataTable)> {
        self.result.records()
    }

    pub fn len(&self) -> usize {
        self.result.len()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    /// 每个测量块的剂量列（第 3 列）
    ///
    /// 任一非空表少于 4 列时返回 [`ParseError::MissingColumn`](crate::ParseError::MissingColumn)。
    pub fn dose_data(&self) -> Result<Vec<Vec<f64>>> {
        self.result.data_list.iter().map(DataTable::dose).collect()
    }

    /// 每个测量块的位置列（第 0-2 列）
    pub fn position_data(&self) -> Result<Vec<DataTable>> {
        self.result.data_list.iter().map(DataTable::positions).collect()
    }

    pub fn into_result(self) -> ParseResult {
        self.result
    }
}

impl From<ParseResult> for AcceptFile {
    fn from(result: ParseResult) -> Self {
        Self { result }
    }
}
