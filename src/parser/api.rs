//! 便捷 API 函数
//!
//! 提供了一组方便使用的高层 API，用于解析 Accept ASCII 测量文件。
//! 所有函数都先把完整输入读入内存，再运行一个全新的状态机。

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::debug;
use rayon::prelude::*;

use crate::error::{ParseError, Result};
use crate::parser::parse_functions::decode_vector_fields;
use crate::parser::record::ParseResult;
use crate::parser::record_builder::RecordBuilder;
use crate::parser_config::{DEFAULT_CONFIG, ParserConfig};
use crate::tools::{has_ascii_extension, split_lines};

/// 使用指定配置解析一组行
///
/// 先完成整轮逐行扫描，再对每条记录的元数据做向量字段后处理。
/// 任何致命错误都会中止整个解析，不返回部分结果。
pub fn parse_lines_with_config<'l, I>(lines: I, config: &ParserConfig) -> Result<ParseResult>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut builder = RecordBuilder::new(config);
    let mut result = ParseResult::new();

    for line in lines {
        if let Some(record) = builder.feed_line(line)? {
            result.push(record);
        }
    }
    if let Some(record) = builder.finish() {
        result.push(record);
    }

    for metadata in result.metadata_list.iter_mut() {
        decode_vector_fields(metadata, config)?;
    }

    Ok(result)
}

/// 使用默认配置解析一组行
pub fn parse_lines<'l, I>(lines: I) -> Result<ParseResult>
where
    I: IntoIterator<Item = &'l str>,
{
    parse_lines_with_config(lines, &DEFAULT_CONFIG)
}

/// 从字符串解析
///
/// # 示例
///
/// ```
/// use myqa_accept_parser::parse_str;
///
/// let text = "# Measurement number\t1\n%STS \t-50.0\t0.0\t100.0 # start\n=\t-50.0\t0.0\t100.0\t12.5\n";
/// let result = parse_str(text)?;
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.metadata_list[0].vector("STS"), Some(&[-50.0, 0.0, 100.0][..]));
/// assert_eq!(result.data_list[0].dose()?, vec![12.5]);
/// # Ok::<(), myqa_accept_parser::ParseError>(())
/// ```
pub fn parse_str(text: &str) -> Result<ParseResult> {
    parse_str_with_config(text, &DEFAULT_CONFIG)
}

/// 使用指定配置从字符串解析
pub fn parse_str_with_config(text: &str, config: &ParserConfig) -> Result<ParseResult> {
    parse_lines_with_config(split_lines(text), config)
}

/// 从任意 Reader 解析
///
/// 先读取全部内容；非 UTF-8 字节以替换字符处理。
pub fn parse_reader<R: Read>(reader: R) -> Result<ParseResult> {
    parse_reader_with_config(reader, &DEFAULT_CONFIG)
}

/// 使用指定配置从任意 Reader 解析
pub fn parse_reader_with_config<R: Read>(mut reader: R, config: &ParserConfig) -> Result<ParseResult> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_str_with_config(&text, config)
}

/// 从文件解析
///
/// 扩展名必须为 `.asc`，检查在打开文件之前进行。
///
/// # 示例
///
/// ```no_run
/// use myqa_accept_parser::parse_file;
///
/// let result = parse_file("profiles.asc")?;
/// for (metadata, table) in result.records() {
///     println!("测量 {:?}: {} 行", metadata.measurement_number(), table.n_rows());
/// }
/// # Ok::<(), myqa_accept_parser::ParseError>(())
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseResult> {
    parse_file_with_config(path, &DEFAULT_CONFIG)
}

/// 使用指定配置从文件解析
pub fn parse_file_with_config<P: AsRef<Path>>(path: P, config: &ParserConfig) -> Result<ParseResult> {
    let path_ref = path.as_ref();
    if !has_ascii_extension(path_ref) {
        return Err(ParseError::InvalidExtension {
            path: path_ref.display().to_string(),
        });
    }

    let file = File::open(path_ref).map_err(|e| ParseError::FileNotFound {
        path: format!("{}: {}", path_ref.display(), e),
    })?;
    let result = parse_reader_with_config(file, config)?;

    debug!(
        "parsed {}: {} measurements",
        path_ref.display(),
        result.len()
    );
    Ok(result)
}

/// 并行解析多个文件
///
/// 每个文件使用独立的状态机，结果按输入顺序返回；
/// 单个文件的失败不影响其他文件。
pub fn parse_files<P>(paths: &[P]) -> Vec<Result<ParseResult>>
where
    P: AsRef<Path> + Sync,
{
    paths.par_iter().map(|path| parse_file(path)).collect()
}
