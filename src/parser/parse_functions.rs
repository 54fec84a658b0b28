//! 核心解析函数
//!
//! 包含单行解析（边界行、元数据行、数据行）以及元数据向量字段的后处理。

use memchr::{memchr, memrchr};

use crate::error::{ParseError, Result};
use crate::measurement::{Metadata, MetadataValue};
use crate::parser::constants::FIELD_SEPARATOR;
use crate::parser_config::{ParserConfig, VectorFieldDef};

/// 解析边界行中的测量编号
///
/// 取最后一个制表符之后的内容（没有制表符时取整行）并解析为整数。
///
/// 编号按 `i64` 解析：允许前导 `+`/`-`，但带下划线分隔的数字（如 `1_0`）
/// 以及超出 `i64` 范围的值都会返回 [`ParseError::InvalidMeasurementNumber`]。
///
/// # 示例
///
/// ```
/// use myqa_accept_parser::parser::parse_measurement_number;
///
/// assert_eq!(parse_measurement_number("# Measurement number\t7").unwrap(), 7);
/// assert!(parse_measurement_number("# Measurement number").is_err());
/// assert!(parse_measurement_number("# Measurement number\t1_0").is_err());
/// ```
pub fn parse_measurement_number(line: &str) -> Result<i64> {
    let field = match memrchr(FIELD_SEPARATOR, line.as_bytes()) {
        Some(idx) => &line[idx + 1..],
        None => line,
    };

    field
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidMeasurementNumber {
            raw: line.to_string(),
        })
}

/// 解析元数据行（不含前缀 `%`）
///
/// 按第一个制表符切分：键按原样保留（包括尾随空格），值去除首尾空白。
/// 没有制表符时整段作为键，值为 [`MetadataValue::Absent`]。
///
/// # 示例
///
/// ```
/// use myqa_accept_parser::MetadataValue;
/// use myqa_accept_parser::parser::parse_metadata_entry;
///
/// let (key, value) = parse_metadata_entry("STS \t1.0\t2.0\t3.0 # start");
/// assert_eq!(key, "STS ");
/// assert_eq!(value, MetadataValue::Text("1.0\t2.0\t3.0 # start".to_string()));
///
/// let (key, value) = parse_metadata_entry("VNR 1.0");
/// assert_eq!(key, "VNR 1.0");
/// assert_eq!(value, MetadataValue::Absent);
/// ```
pub fn parse_metadata_entry(body: &str) -> (&str, MetadataValue) {
    match memchr(FIELD_SEPARATOR, body.as_bytes()) {
        Some(idx) => (
            &body[..idx],
            MetadataValue::Text(body[idx + 1..].trim().to_string()),
        ),
        None => (body, MetadataValue::Absent),
    }
}

/// 解析数据行（不含前缀 `=`）
///
/// 按制表符切分，丢弃第一个字段（索引/标签列），其余字段全部解析为浮点数。
/// 任何一个字段解析失败则返回 `None`，整行丢弃。
///
/// # 示例
///
/// ```
/// use myqa_accept_parser::parser::parse_data_fields;
///
/// assert_eq!(
///     parse_data_fields("\t-150.0\t0.0\t100.0\t10.5"),
///     Some(vec![-150.0, 0.0, 100.0, 10.5])
/// );
/// assert_eq!(parse_data_fields("\t-150.0\tn/a\t100.0"), None);
/// ```
pub fn parse_data_fields(body: &str) -> Option<Vec<f64>> {
    body.split(FIELD_SEPARATOR as char)
        .skip(1)
        .map(parse_float)
        .collect()
}

/// 解析单个数值字段，允许首尾空白
#[inline]
pub(crate) fn parse_float(field: &str) -> Option<f64> {
    field.trim().parse::<f64>().ok()
}

/// 按定义解码一个向量字段
pub(crate) fn decode_vector_field(def: &VectorFieldDef, value: &MetadataValue, inline_comment: char) -> Result<Vec<f64>> {
    let raw = match value {
        MetadataValue::Text(s) => s.as_str(),
        MetadataValue::Absent => {
            return Err(ParseError::MissingMetadataValue {
                key: def.source_key.to_string(),
            });
        }
        other => {
            return Err(ParseError::MalformedMetadataValue {
                key: def.source_key.to_string(),
                value: format!("{other:?}"),
            });
        }
    };

    let payload = if def.strip_comment {
        // split 至少产生一段
        raw.split(inline_comment).next().unwrap_or_default().trim()
    } else {
        raw
    };

    payload
        .split(FIELD_SEPARATOR as char)
        .take(def.max_fields)
        .map(|field| {
            parse_float(field).ok_or_else(|| ParseError::MalformedMetadataValue {
                key: def.source_key.to_string(),
                value: field.to_string(),
            })
        })
        .collect()
}

/// 对一条记录的元数据执行向量字段后处理
///
/// 源键不存在时跳过；值无法转换时返回错误。
pub fn decode_vector_fields(metadata: &mut Metadata, config: &ParserConfig) -> Result<()> {
    for def in &config.vector_fields {
        let decoded = match metadata.get(def.source_key) {
            Some(value) => decode_vector_field(def, value, config.inline_comment)?,
            None => continue,
        };
        metadata.insert(def.target_key, MetadataValue::Vector(decoded));
    }
    Ok(())
}
