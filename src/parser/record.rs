//! ParseResult 结构定义和相关方法
//!
//! ParseResult 是一次解析的完整输出：两个按文件顺序一一对应的序列。

use crate::measurement::{MeasurementRecord, Metadata};
use crate::table::DataTable;

/// 一个文件的解析结果
///
/// `metadata_list[i]` 与 `data_list[i]` 属于同一个测量块，两者长度始终相等。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// 每个测量块的元数据
    pub metadata_list: Vec<Metadata>,

    /// 每个测量块的数值表
    pub data_list: Vec<DataTable>,
}

impl ParseResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个测量块，保持两个序列对齐
    pub fn push(&mut self, record: MeasurementRecord) {
        self.metadata_list.push(record.metadata);
        self.data_list.push(record.samples);
    }

    /// 测量块数量
    pub fn len(&self) -> usize {
        self.metadata_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metadata_list.is_empty()
    }

    /// 按文件顺序遍历 (元数据, 数值表) 对
    pub fn records(&self) -> impl Iterator<Item = (&Metadata, &DataTable)> {
        self.metadata_list.iter().zip(self.data_list.iter())
    }

    /// 转换为独立的测量记录
    pub fn into_records(self) -> Vec<MeasurementRecord> {
        self.metadata_list
            .into_iter()
            .zip(self.data_list)
            .map(|(metadata, samples)| MeasurementRecord::new(metadata, samples))
            .collect()
    }
}

impl FromIterator<MeasurementRecord> for ParseResult {
    fn from_iter<I: IntoIterator<Item = MeasurementRecord>>(iter: I) -> Self {
        let mut result = ParseResult::new();
        for record in iter {
            result.push(record);
        }
        result
    }
}
