//! RecordBuilder - 逐行组装测量记录的状态机
//!
//! 每一行先被分类，再按类别更新当前记录。遇到新的边界行或输入结束时，
//! 当前记录被整体移出（而不是在外部引用后继续原地修改），然后重新开始累积。

use std::mem;

use log::{debug, trace};

use crate::error::Result;
use crate::measurement::{MEASUREMENT_NUMBER_KEY, MeasurementRecord, Metadata, MetadataValue};
use crate::parser::parse_functions::{parse_data_fields, parse_measurement_number, parse_metadata_entry};
use crate::parser_config::ParserConfig;
use crate::table::DataTable;
use crate::tools::{LineKind, classify_line};

/// 测量记录组装器
///
/// # 示例
///
/// ```
/// use myqa_accept_parser::{ParserConfig, RecordBuilder};
///
/// let config = ParserConfig::default();
/// let mut builder = RecordBuilder::new(&config);
///
/// assert!(builder.feed_line("# Measurement number\t1").unwrap().is_none());
/// builder.feed_line("%FSZ\t100\t100").unwrap();
/// builder.feed_line("=\t0.0\t0.0\t100.0\t98.7").unwrap();
///
/// let record = builder.finish().unwrap();
/// assert_eq!(record.measurement_number(), Some(1));
/// assert_eq!(record.samples.n_rows(), 1);
/// ```
#[derive(Debug)]
pub struct RecordBuilder<'a> {
    config: &'a ParserConfig,
    metadata: Metadata,
    data: DataTable,
    dropped_rows: usize,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(config: &'a ParserConfig) -> Self {
        Self {
            config,
            metadata: Metadata::new(),
            data: DataTable::new(),
            dropped_rows: 0,
        }
    }

    /// 处理一行输入
    ///
    /// 行首尾空白会先被去除。若该行是边界行且当前已有打开的记录，
    /// 返回被关闭的记录。
    ///
    /// 返回错误时状态不变：已累积的元数据与数据行都保留。
    pub fn feed_line(&mut self, line: &str) -> Result<Option<MeasurementRecord>> {
        let line = line.trim();

        match classify_line(line, self.config) {
            LineKind::Boundary => {
                let number = parse_measurement_number(line)?;
                let closed = self.flush();
                self.metadata
                    .insert(MEASUREMENT_NUMBER_KEY, MetadataValue::Integer(number));
                return Ok(closed);
            }
            LineKind::Metadata => {
                let body = &line[self.config.metadata_prefix.len_utf8()..];
                let (key, value) = parse_metadata_entry(body);
                self.metadata.insert(key, value);
            }
            LineKind::Data => {
                let body = &line[self.config.data_prefix.len_utf8()..];
                self.push_data_line(body)?;
            }
            LineKind::Comment | LineKind::Other => {}
        }

        Ok(None)
    }

    /// 输入结束：关闭最后一个打开的记录
    pub fn finish(mut self) -> Option<MeasurementRecord> {
        if self.dropped_rows > 0 {
            debug!("{} malformed data rows dropped", self.dropped_rows);
        }
        self.flush()
    }

    /// 当前是否有打开的记录（元数据非空）
    pub fn has_open_record(&self) -> bool {
        !self.metadata.is_empty()
    }

    /// 含非数值字段的行被丢弃；数值行与表宽不一致时报错
    fn push_data_line(&mut self, body: &str) -> Result<()> {
        match parse_data_fields(body) {
            Some(row) if !row.is_empty() => self.data.push_row(&row),
            _ => {
                self.dropped_rows += 1;
                debug!("dropping data row: {body:?}");
                Ok(())
            }
        }
    }

    /// 元数据为空时不产生记录，也不清空已累积的数据行
    fn flush(&mut self) -> Option<MeasurementRecord> {
        if self.metadata.is_empty() {
            return None;
        }

        let metadata = mem::take(&mut self.metadata);
        let samples = mem::take(&mut self.data);
        trace!(
            "closing measurement {:?} with {} rows",
            metadata.measurement_number(),
            samples.n_rows()
        );
        Some(MeasurementRecord::new(metadata, samples))
    }
}
